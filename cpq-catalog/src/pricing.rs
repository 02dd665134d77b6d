use serde::{Deserialize, Serialize};

use cpq_shared::round_to_cents;

use crate::catalog::Catalog;
use crate::customer::{Customer, CustomerTier};
use crate::product::Product;

/// Contract length used when the caller does not specify one
pub const DEFAULT_TERM_MONTHS: u32 = 12;

/// Input to a pricing calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    pub sku_id: String,

    /// Number of users
    pub quantity: u32,

    /// Contract length; unit prices are per user per month
    pub term_months: u32,

    /// Customer asking for the price, for tier discounts
    pub customer_id: Option<String>,
}

impl PricingRequest {
    pub fn new(sku_id: &str, quantity: u32) -> Self {
        Self {
            sku_id: sku_id.to_string(),
            quantity,
            term_months: DEFAULT_TERM_MONTHS,
            customer_id: None,
        }
    }

    pub fn with_term(mut self, term_months: u32) -> Self {
        self.term_months = term_months;
        self
    }

    pub fn with_customer(mut self, customer_id: &str) -> Self {
        self.customer_id = Some(customer_id.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Volume,
    MultiYear,
    CustomerTier,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub description: String,
    pub percentage: f64,
    pub amount: f64,
}

/// Outcome of a pricing calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    pub sku_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub term_months: u32,

    /// Resolved per-user monthly price
    pub base_price: f64,
    pub subtotal: f64,
    pub discounts: Vec<AppliedDiscount>,
    pub total_discount: f64,
    pub final_price: f64,
    pub annual_price: f64,
    pub monthly_price: f64,
}

/// Volume discount keyed on annual contract value (unit price x quantity x 12)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRule {
    pub min_annual_value: f64,
    pub percentage: f64,
}

impl VolumeRule {
    fn description(&self) -> String {
        format!(
            "Volume discount: {}% off for ${}K+ annual value",
            self.percentage,
            self.min_annual_value / 1000.0
        )
    }
}

/// Multi-year discount keyed on contract length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermRule {
    pub min_term_months: u32,
    pub percentage: f64,
}

impl TermRule {
    fn description(&self) -> String {
        format!(
            "Multi-year discount: {}% off for {}+ year terms",
            self.percentage,
            self.min_term_months / 12
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerTierRule {
    pub tier: CustomerTier,
    pub percentage: f64,
}

impl CustomerTierRule {
    fn description(&self) -> String {
        format!("{} discount: {}% off", self.tier.display_name(), self.percentage)
    }
}

/// Discount schedule.
///
/// Within each family only the best matching rule applies. Families stack
/// additively, each computed off the undiscounted subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub volume_rules: Vec<VolumeRule>,
    pub multi_year_rules: Vec<TermRule>,
    pub customer_tier_rules: Vec<CustomerTierRule>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            volume_rules: vec![
                VolumeRule {
                    min_annual_value: 100_000.0,
                    percentage: 30.0,
                },
                VolumeRule {
                    min_annual_value: 50_000.0,
                    percentage: 20.0,
                },
            ],
            multi_year_rules: vec![
                TermRule {
                    min_term_months: 36,
                    percentage: 25.0,
                },
                TermRule {
                    min_term_months: 24,
                    percentage: 15.0,
                },
            ],
            customer_tier_rules: vec![CustomerTierRule {
                tier: CustomerTier::Startup,
                percentage: 10.0,
            }],
        }
    }
}

impl PricingConfig {
    /// Highest volume rule whose threshold `annual_value` reaches
    pub fn volume_discount(&self, annual_value: f64) -> Option<&VolumeRule> {
        self.volume_rules
            .iter()
            .filter(|rule| annual_value >= rule.min_annual_value)
            .max_by(|a, b| a.min_annual_value.total_cmp(&b.min_annual_value))
    }

    /// Longest-term rule that `term_months` qualifies for
    pub fn multi_year_discount(&self, term_months: u32) -> Option<&TermRule> {
        self.multi_year_rules
            .iter()
            .filter(|rule| term_months >= rule.min_term_months)
            .max_by_key(|rule| rule.min_term_months)
    }

    pub fn customer_tier_discount(&self, tier: CustomerTier) -> Option<&CustomerTierRule> {
        self.customer_tier_rules.iter().find(|rule| rule.tier == tier)
    }
}

/// Tiered pricing with stacked percentage discounts
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a SKU for a quantity, term and optional customer.
    ///
    /// An unknown customer id is ignored; an unknown SKU is an error.
    pub fn calculate(
        &self,
        catalog: &Catalog,
        request: &PricingRequest,
    ) -> Result<PricingResult, PricingError> {
        if request.quantity == 0 {
            return Err(PricingError::InvalidQuantity);
        }
        if request.term_months == 0 {
            return Err(PricingError::InvalidTerm);
        }

        let product = catalog
            .find_product(&request.sku_id)
            .ok_or_else(|| PricingError::ProductNotFound(request.sku_id.clone()))?;

        let customer = request
            .customer_id
            .as_deref()
            .and_then(|id| catalog.find_customer(id));

        Ok(self.price(product, request.quantity, request.term_months, customer))
    }

    fn price(
        &self,
        product: &Product,
        quantity: u32,
        term_months: u32,
        customer: Option<&Customer>,
    ) -> PricingResult {
        let unit_price = product.unit_price(quantity);
        let quantity_f = f64::from(quantity);
        let term_f = f64::from(term_months);

        let subtotal = unit_price * quantity_f * term_f;
        let annual_value = unit_price * quantity_f * 12.0;

        let mut discounts = Vec::new();
        let mut apply = |kind: DiscountKind, description: String, percentage: f64| {
            discounts.push(AppliedDiscount {
                kind,
                description,
                percentage,
                amount: subtotal * percentage / 100.0,
            });
        };

        if let Some(rule) = self.config.volume_discount(annual_value) {
            apply(DiscountKind::Volume, rule.description(), rule.percentage);
        }

        if let Some(rule) = self.config.multi_year_discount(term_months) {
            apply(DiscountKind::MultiYear, rule.description(), rule.percentage);
        }

        if let Some(rule) = customer.and_then(|c| self.config.customer_tier_discount(c.tier)) {
            apply(DiscountKind::CustomerTier, rule.description(), rule.percentage);
        }

        let total_discount: f64 = discounts.iter().map(|d| d.amount).sum();
        let final_price = subtotal - total_discount;
        let monthly_price = final_price / term_f;
        let annual_price = monthly_price * 12.0;

        tracing::debug!(
            sku_id = %product.id,
            quantity,
            term_months,
            unit_price,
            subtotal,
            total_discount,
            "Priced product"
        );

        PricingResult {
            sku_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            term_months,
            base_price: unit_price,
            subtotal,
            discounts,
            total_discount,
            final_price: round_to_cents(final_price),
            annual_price: round_to_cents(annual_price),
            monthly_price: round_to_cents(monthly_price),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Quantity must be positive")]
    InvalidQuantity,

    #[error("Term must be at least one month")]
    InvalidTerm,
}
