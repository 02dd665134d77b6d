use std::sync::Arc;

use cpq_catalog::{Catalog, PricingEngine};
use cpq_quote::{InMemoryQuoteRepository, QuoteManager};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub pricing: Arc<PricingEngine>,
    pub quotes: Arc<QuoteManager>,
}

impl AppState {
    /// Wire the catalog to the default pricing schedule and an in-memory quote store
    pub fn new(catalog: Catalog, quote_validity_days: u32) -> Self {
        let catalog = Arc::new(catalog);
        let pricing = Arc::new(PricingEngine::default());
        let quotes = Arc::new(QuoteManager::new(
            catalog.clone(),
            pricing.clone(),
            Arc::new(InMemoryQuoteRepository::new()),
            quote_validity_days,
        ));

        Self {
            catalog,
            pricing,
            quotes,
        }
    }
}
