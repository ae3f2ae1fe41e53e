use url::Url;

use crate::core::{MarketClient, MarketError};

/// Fetch a page and return its body as text.
///
/// One outbound GET per call, redirects followed. A non-2xx status is
/// surfaced as [`MarketError::Status`]; there are no retries in this layer,
/// so a caller that wants retry-on-transient wraps this (the fetch has no
/// side effects beyond the read, so a retry is idempotent).
pub(crate) async fn get_html(client: &MarketClient, url: Url) -> Result<String, MarketError> {
    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(MarketError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.text().await?)
}
