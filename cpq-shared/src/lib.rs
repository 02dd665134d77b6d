pub mod money;
pub mod pii;

pub use money::round_to_cents;
pub use pii::Masked;
