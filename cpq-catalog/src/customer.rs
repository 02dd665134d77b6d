use cpq_shared::Masked;
use serde::{Deserialize, Serialize};

/// Commercial tier of a customer, used for discount eligibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    Enterprise,
    Startup,
}

impl CustomerTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerTier::Enterprise => "Enterprise",
            CustomerTier::Startup => "Startup",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: Masked<String>,
    pub company: String,
    pub tier: CustomerTier,
}

impl Customer {
    pub fn new(id: &str, name: &str, email: &str, company: &str, tier: CustomerTier) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: Masked::from(email),
            company: company.to_string(),
            tier,
        }
    }
}
