//! Concurrent batch aggregation.
//!
//! One unit of work per identifier, joined with wait-all semantics. Results
//! are collected only after every unit has finished, so no shared mapping is
//! written while units are in flight, and one unit's failure is captured as
//! a value under its key rather than aborting its siblings.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::core::MarketError;

/// Per-identifier results of a concurrent batch.
///
/// Exactly one entry per distinct identifier that was submitted; an
/// identifier whose retrieval failed maps to the error instead of being
/// omitted.
pub type BatchResult<T> = HashMap<String, Result<T, MarketError>>;

/// Run one retrieval per identifier concurrently and collect every outcome.
///
/// `retrieve` is called once per identifier to build its unit of work; all
/// units run concurrently and the call returns only after the last one has
/// finished. `concurrency` caps the number of units in flight at once
/// (`None` leaves the fan-out unbounded). An empty identifier list returns
/// an empty mapping without building any unit.
///
/// Identifiers are the result keys, so submitting the same identifier twice
/// yields a single entry.
///
/// # Example
///
/// ```no_run
/// # use livemarket_rs::{AssetClass, MarketClient, run_batch, Security};
/// # #[tokio::main]
/// # async fn main() {
/// let client = MarketClient::default();
/// let tickers = vec!["aapl".to_string(), "msft".to_string()];
/// let prices = run_batch(tickers, Some(8), |ticker| {
///     let client = client.clone();
///     async move { Security::new(&client, AssetClass::Stock, ticker).price().await }
/// })
/// .await;
/// # let _ = prices;
/// # }
/// ```
pub async fn run_batch<F, Fut, T>(
    identifiers: Vec<String>,
    concurrency: Option<usize>,
    retrieve: F,
) -> BatchResult<T>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, MarketError>>,
{
    if identifiers.is_empty() {
        return HashMap::new();
    }

    let limiter = concurrency.map(|n| Arc::new(Semaphore::new(n.max(1))));

    let units = identifiers.into_iter().map(|id| {
        let limiter = limiter.clone();
        let unit = retrieve(id.clone());
        async move {
            let _permit = match &limiter {
                Some(sem) => Some(sem.acquire().await.expect("semaphore is never closed")),
                None => None,
            };
            (id, unit.await)
        }
    });

    join_all(units).await.into_iter().collect()
}
