//! livemarket-rs: live market data scraped from public quote pages.
//!
//! Fetches near-real-time prices, news headlines, and financial statement
//! tables for stocks, cryptocurrencies, and commodity futures by downloading
//! the sources' public pages and extracting structured values from the
//! markup. Independent lookups fan out concurrently, and partial failures
//! are reported per item, so one bad identifier never sinks a batch.
//!
//! # Example
//!
//! ```no_run
//! use livemarket_rs::{AssetClass, MarketClient, PricesBuilder, Security};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), livemarket_rs::MarketError> {
//! let client = MarketClient::default();
//!
//! // one security
//! let apple = Security::new(&client, AssetClass::Stock, "aapl");
//! println!("AAPL: {}", apple.price().await?);
//!
//! // a concurrent batch
//! let prices = PricesBuilder::new(&client, AssetClass::Stock)
//!     .symbols(["aapl", "msft", "tsla"])
//!     .fetch()
//!     .await;
//! println!("fetched {} tickers", prices.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod core;
pub mod financials;
pub mod news;
pub mod price;
mod scrape;
mod security;

pub use batch::{run_batch, BatchResult};
pub use self::core::{AssetClass, MarketClient, MarketClientBuilder, MarketError};
pub use financials::{
    FinancialStatements, FinancialTable, FinancialsBuilder, StatementKind, TimePeriod,
};
pub use news::{AttributedNewsItem, NewsItem, NewsResult, SourceNews};
pub use price::PricesBuilder;
pub use security::Security;
