/// Round a monetary amount to two decimal places.
///
/// Halves are rounded away from zero on the binary value, so `0.125` becomes
/// `0.13` while `2.675` (stored as `2.67499...`) becomes `2.67`.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
