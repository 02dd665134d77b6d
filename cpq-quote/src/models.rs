use chrono::{DateTime, Duration, Utc};
use cpq_catalog::PricingResult;
use serde::{Deserialize, Serialize};

/// Quote status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
}

/// A saved, customer-attributed pricing snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub customer_id: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub items: Vec<QuoteItem>,
    pub subtotal: f64,
    pub total_discount: f64,
    pub total: f64,
}

/// A priced line, copied out of the pricing result so later catalog
/// changes never touch existing quotes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteItem {
    pub sku_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub term_months: u32,
    pub unit_price: f64,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

impl QuoteItem {
    pub fn from_pricing(pricing: &PricingResult) -> Self {
        Self {
            sku_id: pricing.sku_id.clone(),
            product_name: pricing.product_name.clone(),
            quantity: pricing.quantity,
            term_months: pricing.term_months,
            unit_price: pricing.base_price,
            subtotal: pricing.subtotal,
            discount: pricing.total_discount,
            total: pricing.final_price,
        }
    }
}

/// A quote that has not been assigned an id yet
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub customer_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub items: Vec<QuoteItem>,
}

impl NewQuote {
    pub fn new(customer_id: String, created_at: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            customer_id,
            created_at,
            expires_at: created_at + validity,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: QuoteItem) {
        self.items.push(item);
    }

    /// Finalize as a draft quote, totalling the items
    pub fn into_quote(self, id: String) -> Quote {
        let subtotal = self.items.iter().map(|i| i.subtotal).sum();
        let total_discount = self.items.iter().map(|i| i.discount).sum();
        let total = self.items.iter().map(|i| i.total).sum();

        Quote {
            id,
            customer_id: self.customer_id,
            status: QuoteStatus::Draft,
            created_at: self.created_at,
            expires_at: self.expires_at,
            items: self.items,
            subtotal,
            total_discount,
            total,
        }
    }
}
