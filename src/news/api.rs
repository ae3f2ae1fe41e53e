use scraper::Html;

use crate::core::{net, AssetClass, MarketClient, MarketError};
use crate::scrape;

use super::model::{NewsResult, SourceNews};

pub(crate) const SOURCE_MARKETWATCH: &str = "marketwatch";
pub(crate) const SOURCE_COINMARKETCAP: &str = "coinmarketcap";

pub(crate) async fn fetch_news(
    client: &MarketClient,
    asset_class: AssetClass,
    identifier: &str,
) -> Result<NewsResult, MarketError> {
    let url = crate::price::page_url(client, asset_class, identifier)?;
    let body = net::get_html(client, url).await?;

    let mut combined = NewsResult::default();
    match asset_class {
        AssetClass::Stock | AssetClass::Commodity => {
            combined.insert_source(SOURCE_MARKETWATCH, marketwatch_headlines(&body)?);
        }
        AssetClass::Crypto => {
            combined.insert_source(SOURCE_COINMARKETCAP, coinmarketcap_headlines(&body)?);
        }
    }
    Ok(combined)
}

/// MarketWatch lists headlines as `h3 > a` inside the collection block.
/// Headline slots without an anchor, or with blank text, are skipped.
fn marketwatch_headlines(body: &str) -> Result<SourceNews, MarketError> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();
    let container = scrape::select_nth(root, "div", "collection__elements", 0)?;

    let mut news = SourceNews::default();
    for h3 in scrape::all_tag(container, "h3") {
        let Some(anchor) = scrape::all_tag(h3, "a").into_iter().next() else {
            continue;
        };
        let Some(link) = scrape::attr(anchor, "href") else {
            continue;
        };
        let headline = scrape::flat_text(anchor).trim().to_owned();
        if headline.is_empty() {
            continue;
        }
        news.insert(headline, link);
    }
    Ok(news)
}

/// CoinMarketCap renders the news block with a generated class name; every
/// anchor inside it is a headline.
fn coinmarketcap_headlines(body: &str) -> Result<SourceNews, MarketError> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();
    let container = scrape::select_nth(root, "div", "sc-101ku0o-2 exKUGw", 0)?;

    let mut news = SourceNews::default();
    for anchor in scrape::all_tag(container, "a") {
        let Some(link) = scrape::attr(anchor, "href") else {
            continue;
        };
        let headline = scrape::flat_text(anchor).trim().to_owned();
        if headline.is_empty() {
            continue;
        }
        news.insert(headline, link);
    }
    Ok(news)
}
