use crate::core::{AssetClass, MarketClient, MarketError};
use crate::financials::FinancialsBuilder;
use crate::news::{self, NewsResult};
use crate::price;

/// A high-level interface for a single security.
///
/// A `Security` pairs a [`MarketClient`] with one identifier — a stock
/// ticker, a cryptocurrency's full name, or a commodity name — and exposes
/// the data the source sites publish for it. Every call fetches the source
/// page fresh and returns an owned result; nothing is cached or mutated
/// between calls, so the same lookup against an unchanged page yields the
/// same value.
///
/// # Example
///
/// ```no_run
/// use livemarket_rs::{AssetClass, MarketClient, Security};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), livemarket_rs::MarketError> {
/// let client = MarketClient::default();
///
/// let tesla = Security::new(&client, AssetClass::Stock, "tsla");
/// println!("TSLA: {}", tesla.price().await?);
///
/// let bitcoin = Security::new(&client, AssetClass::Crypto, "bitcoin");
/// for (source, headlines) in bitcoin.news().await?.sources() {
///     println!("{source}: {} headlines", headlines.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Security {
    client: MarketClient,
    asset_class: AssetClass,
    identifier: String,
}

impl Security {
    /// Creates a new `Security` for one identifier.
    pub fn new(
        client: &MarketClient,
        asset_class: AssetClass,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            asset_class,
            identifier: identifier.into(),
        }
    }

    /// The asset class this security belongs to.
    #[must_use]
    pub const fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// The identifier used against the source site.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Fetches the current price from the asset class's source page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(asset_class = %self.asset_class, identifier = %self.identifier))
    )]
    pub async fn price(&self) -> Result<f64, MarketError> {
        price::fetch_price(&self.client, self.asset_class, &self.identifier).await
    }

    /// Fetches the current news headlines, keyed by source site.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(asset_class = %self.asset_class, identifier = %self.identifier))
    )]
    pub async fn news(&self) -> Result<NewsResult, MarketError> {
        news::fetch_news(&self.client, self.asset_class, &self.identifier).await
    }

    /// Starts a financial statements request for this identifier.
    ///
    /// The source publishes statements for stocks; for other asset classes
    /// the statements pages do not exist and the fetch reports the failure
    /// per statement.
    #[must_use]
    pub fn financials(&self) -> FinancialsBuilder {
        FinancialsBuilder::new(&self.client, self.identifier.as_str())
    }
}
