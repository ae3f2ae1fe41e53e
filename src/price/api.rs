use scraper::Html;
use url::Url;

use crate::core::{net, AssetClass, MarketClient, MarketError};
use crate::scrape::{self, normalize};

pub(crate) async fn fetch_price(
    client: &MarketClient,
    asset_class: AssetClass,
    identifier: &str,
) -> Result<f64, MarketError> {
    let url = page_url(client, asset_class, identifier)?;
    let body = net::get_html(client, url).await?;
    match asset_class {
        AssetClass::Stock | AssetClass::Commodity => price_from_quote_page(&body),
        AssetClass::Crypto => price_from_currency_page(&body),
    }
}

pub(crate) fn page_url(
    client: &MarketClient,
    asset_class: AssetClass,
    identifier: &str,
) -> Result<Url, MarketError> {
    let base = match asset_class {
        AssetClass::Stock => client.base_stock(),
        AssetClass::Crypto => client.base_crypto(),
        AssetClass::Commodity => client.base_commodity(),
    };
    Ok(base.join(identifier)?)
}

/// MarketWatch quote pages (stocks and futures share the markup) put the
/// live price in the first `h2` of the intraday block.
fn price_from_quote_page(body: &str) -> Result<f64, MarketError> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();
    let container = scrape::select_nth(root, "div", "intraday__data", 0)?;
    let h2 = scrape::nth_tag(container, "h2", 0)?;
    normalize::normalize_price(&scrape::flat_text(h2))
}

/// CoinMarketCap currency pages put the live price in the first `span` of
/// the price value block.
fn price_from_currency_page(body: &str) -> Result<f64, MarketError> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();
    let container = scrape::select_nth(root, "div", "priceValue", 0)?;
    let span = scrape::nth_tag(container, "span", 0)?;
    normalize::normalize_price(&scrape::flat_text(span))
}
