use std::collections::HashSet;

use crate::customer::Customer;
use crate::product::Product;
use crate::seed;

/// Read-only product and customer store, seeded once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl Catalog {
    /// Build a catalog, checking ids are unique and tiers never overlap.
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Result<Self, CatalogError> {
        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            validate_tiers(product)?;
        }

        let mut customer_ids = HashSet::new();
        for customer in &customers {
            if !customer_ids.insert(customer.id.as_str()) {
                return Err(CatalogError::DuplicateCustomer(customer.id.clone()));
            }
        }

        Ok(Self { products, customers })
    }

    /// Enterprise licenses, AI add-ons and the two demo customers
    pub fn demo() -> Result<Self, CatalogError> {
        Self::new(seed::products(), seed::customers())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find_product(&self, sku_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == sku_id)
    }

    pub fn find_customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }
}

fn validate_tiers(product: &Product) -> Result<(), CatalogError> {
    for (i, tier) in product.tiers.iter().enumerate() {
        if let Some(max) = tier.max_quantity {
            if max < tier.min_quantity {
                return Err(CatalogError::InvalidTier {
                    sku_id: product.id.clone(),
                    tier: tier.name.clone(),
                });
            }
        }

        if let Some(other) = product.tiers[i + 1..].iter().find(|t| t.overlaps(tier)) {
            return Err(CatalogError::OverlappingTiers {
                sku_id: product.id.clone(),
                first: tier.name.clone(),
                second: other.name.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Duplicate customer id: {0}")]
    DuplicateCustomer(String),

    #[error("Tier {tier} of {sku_id} has max_quantity below min_quantity")]
    InvalidTier {
        sku_id: String,
        tier: String,
    },

    #[error("Tiers {first} and {second} of {sku_id} overlap")]
    OverlappingTiers {
        sku_id: String,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerTier;
    use crate::product::{PricingType, ProductCategory, Tier};

    fn product(id: &str, tiers: Vec<Tier>) -> Product {
        Product {
            id: id.to_string(),
            sku: id.to_uppercase(),
            name: id.to_string(),
            description: String::new(),
            category: ProductCategory::EnterpriseLicense,
            base_price: 10.0,
            pricing_type: PricingType::ConcurrentUsers,
            tiers,
        }
    }

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo().unwrap();

        assert_eq!(catalog.products().len(), 7);
        assert_eq!(catalog.customers().len(), 2);

        let scale = catalog.find_product("sku-3").unwrap();
        assert_eq!(scale.sku, "ENT-SCALE");
        assert_eq!(scale.base_price, 30.0);

        let unlimited = catalog.find_product("sku-4").unwrap();
        assert_eq!(unlimited.tiers[0].max_quantity, None);

        assert_eq!(
            catalog.find_customer("cust-2").unwrap().tier,
            CustomerTier::Startup
        );
        assert!(catalog.find_product("sku-999").is_none());
        assert!(catalog.find_customer("cust-999").is_none());
    }

    #[test]
    fn test_rejects_overlapping_tiers() {
        let result = Catalog::new(
            vec![product(
                "sku-x",
                vec![
                    Tier::new("low", 1, Some(10), 5.0),
                    Tier::new("high", 10, None, 4.0),
                ],
            )],
            vec![],
        );

        assert!(matches!(
            result,
            Err(CatalogError::OverlappingTiers { ref first, ref second, .. })
                if first == "low" && second == "high"
        ));
    }

    #[test]
    fn test_rejects_inverted_tier() {
        let result = Catalog::new(
            vec![product("sku-x", vec![Tier::new("bad", 10, Some(5), 5.0)])],
            vec![],
        );
        assert!(matches!(result, Err(CatalogError::InvalidTier { .. })));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![product("sku-x", vec![]), product("sku-x", vec![])], vec![]);
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(id)) if id == "sku-x"));

        let customer =
            Customer::new("cust-1", "A", "a@example.com", "A Inc", CustomerTier::Enterprise);
        let result = Catalog::new(vec![], vec![customer.clone(), customer]);
        assert!(matches!(result, Err(CatalogError::DuplicateCustomer(_))));
    }
}
