//! Financial statement tables scraped from the statements pages.

mod api;
mod model;

pub use model::{FinancialStatements, FinancialTable, StatementKind, TimePeriod};

use crate::core::MarketClient;

/// A builder for fetching the income statement, balance sheet, and cash flow
/// tables of one ticker.
///
/// The three statement pages are fetched concurrently; each statement that
/// fails carries its own error in the returned set instead of aborting the
/// others.
///
/// # Example
///
/// ```no_run
/// # use livemarket_rs::{FinancialsBuilder, MarketClient, TimePeriod};
/// # #[tokio::main]
/// # async fn main() {
/// let client = MarketClient::default();
/// let statements = FinancialsBuilder::new(&client, "aapl")
///     .time_period(TimePeriod::Annual)
///     .fetch()
///     .await;
/// if let Ok(income) = &statements.income_statement {
///     println!("revenue by year: {:?}", income.get("Revenue"));
/// }
/// # }
/// ```
pub struct FinancialsBuilder {
    client: MarketClient,
    ticker: String,
    key_data_only: bool,
    time_period: TimePeriod,
}

impl FinancialsBuilder {
    /// Creates a new `FinancialsBuilder` for a stock ticker.
    #[must_use]
    pub fn new(client: &MarketClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            key_data_only: false,
            time_period: TimePeriod::default(),
        }
    }

    /// Restricts every table to the rows the source highlights as key data.
    #[must_use]
    pub const fn key_data_only(mut self, yes: bool) -> Self {
        self.key_data_only = yes;
        self
    }

    /// Selects the reporting cadence. (Default: quarterly.)
    #[must_use]
    pub const fn time_period(mut self, period: TimePeriod) -> Self {
        self.time_period = period;
        self
    }

    /// Fetches all three statements concurrently.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(ticker = %self.ticker))
    )]
    pub async fn fetch(self) -> FinancialStatements {
        api::fetch_statements(
            &self.client,
            &self.ticker,
            self.key_data_only,
            self.time_period,
        )
        .await
    }
}
