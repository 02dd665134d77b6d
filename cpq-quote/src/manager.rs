use std::sync::Arc;

use chrono::{Duration, Utc};
use cpq_catalog::{
    Catalog, Customer, PricingEngine, PricingError, PricingRequest, PricingResult,
    DEFAULT_TERM_MONTHS,
};
use serde::{Deserialize, Serialize};

use crate::models::{NewQuote, Quote, QuoteItem};
use crate::repository::QuoteRepository;

/// Body of a quote creation request.
///
/// Fields default when absent so that a missing field is reported as a
/// validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub sku_id: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub term_months: Option<i64>,
}

/// A stored quote together with the pricing breakdown it was built from
#[derive(Debug, Clone, Serialize)]
pub struct CreatedQuote {
    pub quote: Quote,
    pub pricing: PricingResult,
    pub customer: Customer,
}

/// Creates and looks up quotes against the catalog
pub struct QuoteManager {
    catalog: Arc<Catalog>,
    pricing: Arc<PricingEngine>,
    repository: Arc<dyn QuoteRepository>,
    validity: Duration,
}

impl QuoteManager {
    pub fn new(
        catalog: Arc<Catalog>,
        pricing: Arc<PricingEngine>,
        repository: Arc<dyn QuoteRepository>,
        validity_days: u32,
    ) -> Self {
        Self {
            catalog,
            pricing,
            repository,
            validity: Duration::days(i64::from(validity_days)),
        }
    }

    /// Validate, price and store a single-item draft quote.
    ///
    /// Nothing is stored, and no id is consumed, unless every check passes.
    pub async fn create_quote(&self, request: QuoteRequest) -> Result<CreatedQuote, QuoteError> {
        if request.customer_id.is_empty() || request.sku_id.is_empty() || request.quantity <= 0 {
            return Err(QuoteError::InvalidRequest(
                "customer_id, sku_id, and quantity are required".to_string(),
            ));
        }
        let quantity = u32::try_from(request.quantity)
            .map_err(|_| QuoteError::InvalidRequest("quantity is too large".to_string()))?;

        let term_months = match request.term_months {
            None => DEFAULT_TERM_MONTHS,
            Some(term) if term > 0 => u32::try_from(term)
                .map_err(|_| QuoteError::InvalidRequest("term_months is too large".to_string()))?,
            Some(_) => {
                return Err(QuoteError::InvalidRequest(
                    "term_months must be positive".to_string(),
                ))
            }
        };

        let customer = self
            .catalog
            .find_customer(&request.customer_id)
            .ok_or_else(|| QuoteError::CustomerNotFound(request.customer_id.clone()))?
            .clone();

        let pricing_request = PricingRequest::new(&request.sku_id, quantity)
            .with_term(term_months)
            .with_customer(&customer.id);
        let pricing = self.pricing.calculate(&self.catalog, &pricing_request)?;

        let mut draft = NewQuote::new(customer.id.clone(), Utc::now(), self.validity);
        draft.add_item(QuoteItem::from_pricing(&pricing));

        let quote = self.repository.insert(draft).await?;

        tracing::info!(
            quote_id = %quote.id,
            customer_id = %quote.customer_id,
            sku_id = %pricing.sku_id,
            total = quote.total,
            "Quote created"
        );

        Ok(CreatedQuote {
            quote,
            pricing,
            customer,
        })
    }

    pub async fn list_quotes(&self, customer_id: Option<&str>) -> Result<Vec<Quote>, QuoteError> {
        self.repository.list(customer_id).await
    }

    pub async fn get_quote(&self, id: &str) -> Result<Quote, QuoteError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| QuoteError::NotFound(id.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Quote not found: {0}")]
    NotFound(String),

    /// Backend failure of a `QuoteRepository`; the in-memory store never fails
    #[error("Quote storage failed: {0}")]
    Storage(String),
}

impl From<PricingError> for QuoteError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::ProductNotFound(sku_id) => QuoteError::ProductNotFound(sku_id),
            other => QuoteError::InvalidRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteStatus;
    use crate::repository::InMemoryQuoteRepository;

    fn manager() -> QuoteManager {
        QuoteManager::new(
            Arc::new(Catalog::demo().unwrap()),
            Arc::new(PricingEngine::default()),
            Arc::new(InMemoryQuoteRepository::new()),
            30,
        )
    }

    fn request(customer_id: &str, sku_id: &str, quantity: i64) -> QuoteRequest {
        QuoteRequest {
            customer_id: customer_id.to_string(),
            sku_id: sku_id.to_string(),
            quantity,
            term_months: None,
        }
    }

    #[tokio::test]
    async fn test_create_quote_snapshot() {
        let manager = manager();
        let mut req = request("cust-2", "sku-3", 100);
        req.term_months = Some(24);

        let created = manager.create_quote(req).await.unwrap();
        let quote = &created.quote;

        assert_eq!(quote.id, "quote-1");
        assert_eq!(quote.customer_id, "cust-2");
        assert_eq!(quote.status, QuoteStatus::Draft);
        assert_eq!(quote.expires_at - quote.created_at, Duration::days(30));
        assert_eq!(quote.items.len(), 1);

        // 30 x 100 x 24 = 72,000; 36,000 annual -> no volume; 15% + 10% startup
        let item = &quote.items[0];
        assert_eq!(item.sku_id, "sku-3");
        assert_eq!(item.unit_price, 30.0);
        assert_eq!(item.term_months, 24);
        assert_eq!(created.pricing.discounts.len(), 2);
        assert_eq!(quote.subtotal, created.pricing.subtotal);
        assert_eq!(quote.total_discount, created.pricing.total_discount);
        assert_eq!(quote.total, 54_000.0);
        assert_eq!(created.customer.company, "Startup Inc");
    }

    #[tokio::test]
    async fn test_default_term_is_twelve_months() {
        let created = manager().create_quote(request("cust-1", "sku-1", 5)).await.unwrap();
        assert_eq!(created.quote.items[0].term_months, 12);
        assert_eq!(created.pricing.term_months, 12);
    }

    #[tokio::test]
    async fn test_validation_failures() {
        let manager = manager();

        for req in [
            request("", "sku-1", 1),
            request("cust-1", "", 1),
            request("cust-1", "sku-1", 0),
            request("cust-1", "sku-1", -4),
            request("cust-1", "sku-1", i64::from(u32::MAX) + 1),
        ] {
            let result = manager.create_quote(req).await;
            assert!(matches!(result, Err(QuoteError::InvalidRequest(_))));
        }

        let mut req = request("cust-1", "sku-1", 1);
        req.term_months = Some(0);
        assert!(matches!(
            manager.create_quote(req).await,
            Err(QuoteError::InvalidRequest(msg)) if msg == "term_months must be positive"
        ));
    }

    #[tokio::test]
    async fn test_failed_creation_does_not_consume_ids() {
        let manager = manager();

        let missing_customer = manager.create_quote(request("cust-404", "sku-1", 1)).await;
        assert!(matches!(missing_customer, Err(QuoteError::CustomerNotFound(_))));

        let missing_sku = manager.create_quote(request("cust-1", "sku-999", 1)).await;
        assert!(matches!(missing_sku, Err(QuoteError::ProductNotFound(id)) if id == "sku-999"));

        let invalid = manager.create_quote(request("cust-1", "sku-1", 0)).await;
        assert!(invalid.is_err());

        assert!(manager.list_quotes(None).await.unwrap().is_empty());

        let created = manager.create_quote(request("cust-1", "sku-1", 1)).await.unwrap();
        assert_eq!(created.quote.id, "quote-1");

        let next = manager.create_quote(request("cust-2", "sku-2", 20)).await.unwrap();
        assert_eq!(next.quote.id, "quote-2");
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let manager = manager();
        manager.create_quote(request("cust-1", "sku-1", 1)).await.unwrap();
        manager.create_quote(request("cust-2", "sku-ai-1", 3)).await.unwrap();
        manager.create_quote(request("cust-1", "sku-2", 20)).await.unwrap();

        assert_eq!(manager.list_quotes(None).await.unwrap().len(), 3);

        let ids: Vec<_> = manager
            .list_quotes(Some("cust-1"))
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec!["quote-1", "quote-3"]);

        let quote = manager.get_quote("quote-2").await.unwrap();
        assert_eq!(quote.items[0].sku_id, "sku-ai-1");

        assert!(matches!(
            manager.get_quote("quote-9").await,
            Err(QuoteError::NotFound(_))
        ));
    }
}
