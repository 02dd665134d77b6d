use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use cpq_catalog::{Customer, PricingRequest, PricingResult, Product, DEFAULT_TERM_MONTHS};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub success: bool,
}

/// Raw query parameters; numbers are parsed by hand so the error names the field
#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    pub sku_id: Option<String>,
    pub quantity: Option<String>,
    pub term_months: Option<String>,
    pub customer_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/pricing", get(calculate_pricing))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/demo/products
/// Full catalog plus the demo customers
pub async fn list_products(State(state): State<AppState>) -> Json<ProductsResponse> {
    Json(ProductsResponse {
        products: state.catalog.products().to_vec(),
        customers: state.catalog.customers().to_vec(),
        success: true,
    })
}

/// GET /api/v1/demo/pricing?sku_id=..&quantity=..[&term_months=..][&customer_id=..]
pub async fn calculate_pricing(
    State(state): State<AppState>,
    Query(query): Query<PricingQuery>,
) -> Result<Json<PricingResult>, AppError> {
    let (Some(sku_id), Some(quantity)) = (present(query.sku_id), present(query.quantity)) else {
        return Err(AppError::Validation(
            "sku_id and quantity are required".to_string(),
        ));
    };

    let quantity = parse_positive(&quantity, "quantity")?;
    let term_months = match present(query.term_months) {
        Some(raw) => parse_positive(&raw, "term_months")?,
        None => DEFAULT_TERM_MONTHS,
    };

    let mut request = PricingRequest::new(&sku_id, quantity).with_term(term_months);
    if let Some(customer_id) = present(query.customer_id) {
        request = request.with_customer(&customer_id);
    }

    let result = state.pricing.calculate(&state.catalog, &request).map_err(|e| {
        tracing::warn!(sku_id = %request.sku_id, "Pricing failed: {}", e);
        e
    })?;

    Ok(Json(result))
}

/// Empty query values count as missing
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_positive(raw: &str, field: &str) -> Result<u32, AppError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid {}", field)))?;

    if value <= 0 {
        return Err(AppError::Validation(format!("{} must be positive", field)));
    }

    u32::try_from(value).map_err(|_| AppError::Validation(format!("Invalid {}", field)))
}
