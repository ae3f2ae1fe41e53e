//! Live price retrieval: single securities and concurrent batches.

mod api;

pub(crate) use api::{fetch_price, page_url};

use crate::batch::{self, BatchResult};
use crate::core::{AssetClass, MarketClient};

/// A builder for fetching the prices of multiple securities of one asset
/// class concurrently.
///
/// Each identifier gets its own fetch; the batch completes only once every
/// fetch has finished, and a failed identifier is reported as an error value
/// under its key without disturbing the others.
///
/// # Example
///
/// ```no_run
/// # use livemarket_rs::{AssetClass, MarketClient, PricesBuilder};
/// # #[tokio::main]
/// # async fn main() {
/// let client = MarketClient::default();
/// let prices = PricesBuilder::new(&client, AssetClass::Crypto)
///     .symbols(["bitcoin", "ethereum", "monero"])
///     .fetch()
///     .await;
/// for (name, result) in &prices {
///     match result {
///         Ok(price) => println!("{name}: {price}"),
///         Err(e) => println!("{name}: failed: {e}"),
///     }
/// }
/// # }
/// ```
pub struct PricesBuilder {
    client: MarketClient,
    asset_class: AssetClass,
    symbols: Vec<String>,
    concurrency: Option<usize>,
}

impl PricesBuilder {
    /// Creates a new `PricesBuilder` for one asset class.
    ///
    /// The concurrency cap starts from the client's default and can be
    /// overridden per batch.
    #[must_use]
    pub fn new(client: &MarketClient, asset_class: AssetClass) -> Self {
        Self {
            client: client.clone(),
            asset_class,
            symbols: Vec::new(),
            concurrency: client.concurrency(),
        }
    }

    /// Replaces the current list of identifiers with a new list.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single identifier to the batch.
    #[must_use]
    pub fn add_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Caps the number of in-flight fetches for this batch.
    #[must_use]
    pub const fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit);
        self
    }

    /// Fetches every identifier concurrently and returns one entry per
    /// identifier, success or failure. An empty batch returns an empty
    /// mapping without touching the network.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(asset_class = %self.asset_class, symbols = self.symbols.len()))
    )]
    pub async fn fetch(self) -> BatchResult<f64> {
        let client = self.client;
        let asset_class = self.asset_class;
        batch::run_batch(self.symbols, self.concurrency, move |symbol| {
            let client = client.clone();
            async move { api::fetch_price(&client, asset_class, &symbol).await }
        })
        .await
    }
}
