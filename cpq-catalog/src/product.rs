use serde::{Deserialize, Serialize};

/// Product lines in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    EnterpriseLicense,
    AiAddon,
}

/// How the per-unit price of a product is resolved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingType {
    /// Unit price depends on the quantity tier the order falls into
    ConcurrentUsers,
    /// Flat price per user, quantity only scales the subtotal
    PerUser,
}

/// A quantity range mapped to a per-user monthly price.
///
/// `max_quantity` of `None` means the range is open-ended; on the wire this is
/// the sentinel `-1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tier {
    pub name: String,
    pub min_quantity: u32,
    #[serde(with = "unbounded")]
    pub max_quantity: Option<u32>,
    pub price: f64,
}

impl Tier {
    pub fn new(name: &str, min_quantity: u32, max_quantity: Option<u32>, price: f64) -> Self {
        Self {
            name: name.to_string(),
            min_quantity,
            max_quantity,
            price,
        }
    }

    pub fn contains(&self, quantity: u32) -> bool {
        quantity >= self.min_quantity && self.upper_bound() >= quantity
    }

    pub fn overlaps(&self, other: &Tier) -> bool {
        self.min_quantity <= other.upper_bound() && other.min_quantity <= self.upper_bound()
    }

    fn upper_bound(&self) -> u32 {
        self.max_quantity.unwrap_or(u32::MAX)
    }
}

/// Catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub base_price: f64,
    pub pricing_type: PricingType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<Tier>,
}

impl Product {
    /// First tier (in declaration order) containing `quantity`.
    /// Only tiered products consult their tiers.
    pub fn tier_for(&self, quantity: u32) -> Option<&Tier> {
        if self.pricing_type != PricingType::ConcurrentUsers {
            return None;
        }
        self.tiers.iter().find(|tier| tier.contains(quantity))
    }

    /// Per-user monthly price for `quantity`, falling back to the base price
    pub fn unit_price(&self, quantity: u32) -> f64 {
        self.tier_for(quantity)
            .map(|tier| tier.price)
            .unwrap_or(self.base_price)
    }
}

mod unbounded {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const SENTINEL: i64 = -1;

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(max) => serializer.serialize_i64(i64::from(*max)),
            None => serializer.serialize_i64(SENTINEL),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        if raw == SENTINEL {
            return Ok(None);
        }
        u32::try_from(raw)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid max_quantity: {}", raw)))
    }
}
