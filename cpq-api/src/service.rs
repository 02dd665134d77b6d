use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use cpq_catalog::{Catalog, PricingConfig, ProductCategory};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}

/// GET /
/// Service metadata and a map of the demo endpoints
pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "CPQ Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "features": {
            "enterprise_licenses":
                product_lines(&state.catalog, ProductCategory::EnterpriseLicense),
            "ai_addons": product_lines(&state.catalog, ProductCategory::AiAddon),
            "discounts": discount_summary(state.pricing.config()),
        },
        "endpoints": {
            "products": "/api/v1/demo/products",
            "pricing": "/api/v1/demo/pricing?sku_id=sku-3&quantity=1&term_months=36",
            "quote": "/api/v1/demo/quote (POST)",
            "quotes": "/api/v1/demo/quotes",
        },
    }))
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Product names of a category, with the first tier's name when tiered
pub fn product_lines(catalog: &Catalog, category: ProductCategory) -> Vec<String> {
    catalog
        .products()
        .iter()
        .filter(|p| p.category == category)
        .map(|p| match p.tiers.first() {
            Some(tier) => format!("{} ({})", p.name, tier.name),
            None => p.name.clone(),
        })
        .collect()
}

pub fn discount_summary(config: &PricingConfig) -> Value {
    let mut volume: Vec<_> = config.volume_rules.iter().collect();
    volume.sort_by(|a, b| a.min_annual_value.total_cmp(&b.min_annual_value));
    let volume = volume
        .iter()
        .map(|r| format!("{}% at ${}K", r.percentage, r.min_annual_value / 1000.0))
        .collect::<Vec<_>>()
        .join(", ");

    let mut multi_year: Vec<_> = config.multi_year_rules.iter().collect();
    multi_year.sort_by_key(|r| r.min_term_months);
    let multi_year = multi_year
        .iter()
        .map(|r| format!("{}% for {}+ years", r.percentage, r.min_term_months / 12))
        .collect::<Vec<_>>()
        .join(", ");

    let customer_tier = config
        .customer_tier_rules
        .iter()
        .map(|r| format!("{}% for {} customers", r.percentage, r.tier.display_name()))
        .collect::<Vec<_>>()
        .join(", ");

    json!({
        "volume": format!("{} annual value", volume),
        "multi_year": multi_year,
        "customer_tier": customer_tier,
    })
}
