pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{CreatedQuote, QuoteError, QuoteManager, QuoteRequest};
pub use models::{NewQuote, Quote, QuoteItem, QuoteStatus};
pub use repository::{InMemoryQuoteRepository, QuoteRepository};
