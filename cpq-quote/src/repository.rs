use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::manager::QuoteError;
use crate::models::{NewQuote, Quote};

/// Storage for quotes
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Assign the next sequential id to `quote` and store it
    async fn insert(&self, quote: NewQuote) -> Result<Quote, QuoteError>;

    async fn get(&self, id: &str) -> Result<Option<Quote>, QuoteError>;

    /// All quotes in creation order, optionally only those of one customer
    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Quote>, QuoteError>;
}

/// Process-lifetime quote store.
///
/// The id counter and the quote map sit behind one lock, so concurrent
/// inserts never share or skip an id.
pub struct InMemoryQuoteRepository {
    book: Mutex<QuoteBook>,
}

struct QuoteBook {
    next_seq: u64,
    quotes: BTreeMap<u64, Quote>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self {
            book: Mutex::new(QuoteBook {
                next_seq: 1,
                quotes: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn format_id(seq: u64) -> String {
    format!("quote-{}", seq)
}

/// Only the exact form `format_id` produces is accepted, so `quote-01` or
/// `quote-+1` never alias `quote-1`
fn parse_id(id: &str) -> Option<u64> {
    let seq = id.strip_prefix("quote-")?.parse().ok()?;
    (format_id(seq) == id).then_some(seq)
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn insert(&self, quote: NewQuote) -> Result<Quote, QuoteError> {
        let mut book = self.book.lock().await;

        let seq = book.next_seq;
        book.next_seq += 1;

        let quote = quote.into_quote(format_id(seq));
        book.quotes.insert(seq, quote.clone());
        Ok(quote)
    }

    async fn get(&self, id: &str) -> Result<Option<Quote>, QuoteError> {
        let Some(seq) = parse_id(id) else {
            return Ok(None);
        };
        let book = self.book.lock().await;
        Ok(book.quotes.get(&seq).cloned())
    }

    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Quote>, QuoteError> {
        let book = self.book.lock().await;
        Ok(book
            .quotes
            .values()
            .filter(|q| customer_id.map_or(true, |id| q.customer_id == id))
            .cloned()
            .collect())
    }
}
