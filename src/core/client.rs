//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::MarketError;

/// Default desktop UA to avoid trivial bot blocking.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// MarketWatch stock quote base (ticker is appended).
const DEFAULT_BASE_STOCK: &str = "https://www.marketwatch.com/investing/stock/";

/// CoinMarketCap currency base (the crypto's full name is appended).
const DEFAULT_BASE_CRYPTO: &str = "https://coinmarketcap.com/currencies/";

/// MarketWatch futures base (the commodity name is appended).
const DEFAULT_BASE_COMMODITY: &str = "https://www.marketwatch.com/investing/future/";

/// Overall request timeout applied when the builder does not set one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client plus the base URLs of the source sites.
///
/// Cheap to clone; clones share the underlying connection pool. Every
/// retriever in this crate borrows a `MarketClient`, so one client can serve
/// any number of concurrent lookups.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: Client,
    base_stock: Url,
    base_crypto: Url,
    base_commodity: Url,
    concurrency: Option<usize>,
}

impl Default for MarketClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MarketClient {
    /// Create a new builder.
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_stock(&self) -> &Url {
        &self.base_stock
    }
    pub(crate) fn base_crypto(&self) -> &Url {
        &self.base_crypto
    }
    pub(crate) fn base_commodity(&self) -> &Url {
        &self.base_commodity
    }

    /// The default cap on concurrent in-flight fetches for batch calls made
    /// with this client. `None` means unbounded.
    #[must_use]
    pub fn concurrency(&self) -> Option<usize> {
        self.concurrency
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MarketClientBuilder {
    user_agent: Option<String>,
    base_stock: Option<Url>,
    base_crypto: Option<Url>,
    base_commodity: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    concurrency: Option<usize>,
}

impl MarketClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the stock quote base (e.g., `https://www.marketwatch.com/investing/stock/`).
    #[must_use]
    pub fn base_stock(mut self, url: Url) -> Self {
        self.base_stock = Some(url);
        self
    }

    /// Override the crypto currency base (e.g., `https://coinmarketcap.com/currencies/`).
    #[must_use]
    pub fn base_crypto(mut self, url: Url) -> Self {
        self.base_crypto = Some(url);
        self
    }

    /// Override the commodity futures base (e.g., `https://www.marketwatch.com/investing/future/`).
    #[must_use]
    pub fn base_commodity(mut self, url: Url) -> Self {
        self.base_commodity = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 10 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Cap the number of concurrent in-flight fetches in batch calls.
    ///
    /// Unset means one fetch per identifier with no limit, which mirrors the
    /// sources' tolerance for small batches but can overwhelm a single host
    /// for large ones. Individual batch builders can override this.
    #[must_use]
    pub const fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit);
        self
    }

    pub fn build(self) -> Result<MarketClient, MarketError> {
        let base_stock = match self.base_stock {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_STOCK)?,
        };
        let base_crypto = match self.base_crypto {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CRYPTO)?,
        };
        let base_commodity = match self.base_commodity {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_COMMODITY)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MarketClient {
            http,
            base_stock,
            base_crypto,
            base_commodity,
            concurrency: self.concurrency,
        })
    }
}
