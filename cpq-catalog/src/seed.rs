use crate::customer::{Customer, CustomerTier};
use crate::product::{PricingType, Product, ProductCategory, Tier};

fn license(id: &str, sku: &str, name: &str, description: &str, price: f64, tier: Tier) -> Product {
    Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: ProductCategory::EnterpriseLicense,
        base_price: price,
        pricing_type: PricingType::ConcurrentUsers,
        tiers: vec![tier],
    }
}

fn addon(id: &str, sku: &str, name: &str, description: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: ProductCategory::AiAddon,
        base_price: price,
        pricing_type: PricingType::PerUser,
        tiers: Vec::new(),
    }
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        // Enterprise licenses
        license(
            "sku-1",
            "ENT-STARTER",
            "Enterprise Starter",
            "Perfect for small teams (10 users)",
            50.0,
            Tier::new("10 Users", 1, Some(10), 50.0),
        ),
        license(
            "sku-2",
            "ENT-GROWTH",
            "Enterprise Growth",
            "Scalable solution (50 users)",
            40.0,
            Tier::new("50 Users", 11, Some(50), 40.0),
        ),
        license(
            "sku-3",
            "ENT-SCALE",
            "Enterprise Scale",
            "Large organizations (200 users)",
            30.0,
            Tier::new("200 Users", 51, Some(200), 30.0),
        ),
        license(
            "sku-4",
            "ENT-UNLIMITED",
            "Enterprise Unlimited",
            "Unlimited users with premium support",
            25.0,
            Tier::new("Unlimited", 201, None, 25.0),
        ),
        // AI add-ons
        addon(
            "sku-ai-1",
            "AI-ASSISTANT",
            "AI Assistant",
            "Intelligent code completion and suggestions",
            15.0,
        ),
        addon(
            "sku-ai-2",
            "AI-ANALYTICS",
            "AI Analytics",
            "Advanced analytics and insights",
            25.0,
        ),
        addon(
            "sku-ai-3",
            "AI-SECURITY",
            "AI Security",
            "AI-powered security scanning",
            35.0,
        ),
    ]
}

pub(crate) fn customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "cust-1",
            "John Doe",
            "john@acme.com",
            "Acme Corp",
            CustomerTier::Enterprise,
        ),
        Customer::new(
            "cust-2",
            "Jane Smith",
            "jane@startup.io",
            "Startup Inc",
            CustomerTier::Startup,
        ),
    ]
}
