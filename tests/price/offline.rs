use httpmock::Method::GET;
use httpmock::MockServer;
use livemarket_rs::{AssetClass, MarketError, PricesBuilder, Security};

use crate::common;

#[tokio::test]
async fn stock_price_parses_from_quote_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/investing/stock/aapl");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::quote_page("$1,234.56"));
    });

    let client = common::client_for(&server);
    let price = Security::new(&client, AssetClass::Stock, "aapl")
        .price()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(price, 1234.56);
}

#[tokio::test]
async fn crypto_price_parses_from_currency_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/currencies/bitcoin");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::currency_page("$67,891.01"));
    });

    let client = common::client_for(&server);
    let price = Security::new(&client, AssetClass::Crypto, "bitcoin")
        .price()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(price, 67891.01);
}

#[tokio::test]
async fn commodity_price_uses_the_futures_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/investing/future/gold");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::quote_page("1,905.30"));
    });

    let client = common::client_for(&server);
    let price = Security::new(&client, AssetClass::Commodity, "gold")
        .price()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(price, 1905.30);
}

#[tokio::test]
async fn missing_price_block_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/investing/stock/aapl");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body><p>layout changed</p></body></html>");
    });

    let client = common::client_for(&server);
    let err = Security::new(&client, AssetClass::Stock, "aapl")
        .price()
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::NotFound(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unparseable_price_text_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/investing/stock/aapl");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::quote_page("N/A"));
    });

    let client = common::client_for(&server);
    let err = Security::new(&client, AssetClass::Stock, "aapl")
        .price()
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::Parse(_)));
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/investing/stock/nosuchticker");
        then.status(404).body("not found");
    });

    let client = common::client_for(&server);
    let err = Security::new(&client, AssetClass::Stock, "nosuchticker")
        .price()
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::Status { status: 404, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn server_errors_are_retryable_client_errors_are_not() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/investing/stock/flaky");
        then.status(503).body("maintenance");
    });

    let client = common::client_for(&server);
    let err = Security::new(&client, AssetClass::Stock, "flaky")
        .price()
        .await
        .unwrap_err();

    assert!(matches!(err, MarketError::Status { status: 503, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn repeated_lookup_of_an_unchanged_page_is_identical() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/investing/stock/aapl");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::quote_page("$191.24"));
    });

    let client = common::client_for(&server);
    let security = Security::new(&client, AssetClass::Stock, "aapl");
    let first = security.price().await.unwrap();
    let second = security.price().await.unwrap();

    // each call fetches fresh; nothing is cached between them
    mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn batch_reports_every_symbol_even_when_one_fails() {
    let server = MockServer::start();
    let aapl = server.mock(|when, then| {
        when.method(GET).path("/investing/stock/aapl");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::quote_page("$191.24"));
    });
    let msft = server.mock(|when, then| {
        when.method(GET).path("/investing/stock/msft");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::quote_page("$415.10"));
    });
    let bad = server.mock(|when, then| {
        when.method(GET).path("/investing/stock/bogus");
        then.status(404).body("not found");
    });

    let client = common::client_for(&server);
    let prices = PricesBuilder::new(&client, AssetClass::Stock)
        .symbols(["aapl", "msft", "bogus"])
        .fetch()
        .await;

    aapl.assert();
    msft.assert();
    bad.assert();

    assert_eq!(prices.len(), 3);
    assert_eq!(*prices["aapl"].as_ref().unwrap(), 191.24);
    assert_eq!(*prices["msft"].as_ref().unwrap(), 415.10);
    assert!(matches!(
        prices["bogus"],
        Err(MarketError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn empty_batch_returns_an_empty_mapping_without_fetching() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("");
    });

    let client = common::client_for(&server);
    let prices = PricesBuilder::new(&client, AssetClass::Stock).fetch().await;

    assert!(prices.is_empty());
    any.assert_hits(0);
}

#[tokio::test]
async fn capped_batch_still_completes_every_symbol() {
    let server = MockServer::start();
    for name in ["bitcoin", "ethereum", "monero", "dogecoin"] {
        server.mock(|when, then| {
            when.method(GET).path(format!("/currencies/{name}"));
            then.status(200)
                .header("content-type", "text/html")
                .body(common::currency_page("42.00"));
        });
    }

    let client = common::client_for(&server);
    let prices = PricesBuilder::new(&client, AssetClass::Crypto)
        .symbols(["bitcoin", "ethereum"])
        .add_symbol("monero")
        .add_symbol("dogecoin")
        .concurrency(2)
        .fetch()
        .await;

    assert_eq!(prices.len(), 4);
    assert!(prices.values().all(Result::is_ok));
}
