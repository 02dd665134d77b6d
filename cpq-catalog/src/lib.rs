pub mod catalog;
pub mod customer;
pub mod pricing;
pub mod product;
mod seed;

pub use catalog::{Catalog, CatalogError};
pub use customer::{Customer, CustomerTier};
pub use pricing::{
    AppliedDiscount, DiscountKind, PricingConfig, PricingEngine, PricingError, PricingRequest,
    PricingResult, DEFAULT_TERM_MONTHS,
};
pub use product::{PricingType, Product, ProductCategory, Tier};
