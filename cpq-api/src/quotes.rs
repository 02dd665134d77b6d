use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use cpq_quote::{CreatedQuote, Quote, QuoteRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateQuoteResponse {
    #[serde(flatten)]
    pub created: CreatedQuote,
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListQuotesQuery {
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuoteListResponse {
    pub quotes: Vec<Quote>,
    pub success: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: Quote,
    pub success: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quote", post(create_quote))
        .route("/quotes", get(list_quotes))
        .route("/quotes/{quote_id}", get(get_quote))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/demo/quote
/// Price a SKU for a customer and save it as a draft quote
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<CreateQuoteResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Rejected quote body: {}", rejection);
        AppError::Validation("Invalid request body".to_string())
    })?;

    let created = state.quotes.create_quote(req).await.map_err(|e| {
        tracing::warn!("Quote creation failed: {}", e);
        e
    })?;

    Ok(Json(CreateQuoteResponse {
        created,
        success: true,
    }))
}

/// GET /api/v1/demo/quotes[?customer_id=..]
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(query): Query<ListQuotesQuery>,
) -> Result<Json<QuoteListResponse>, AppError> {
    let customer_id = query.customer_id.as_deref().filter(|id| !id.is_empty());
    let quotes = state.quotes.list_quotes(customer_id).await?;

    Ok(Json(QuoteListResponse {
        count: quotes.len(),
        quotes,
        success: true,
    }))
}

/// GET /api/v1/demo/quotes/:quote_id
pub async fn get_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<String>,
) -> Result<Json<QuoteResponse>, AppError> {
    let quote = state.quotes.get_quote(&quote_id).await?;
    Ok(Json(QuoteResponse {
        quote,
        success: true,
    }))
}
