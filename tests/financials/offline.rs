use httpmock::Method::GET;
use httpmock::MockServer;
use livemarket_rs::{FinancialsBuilder, MarketError, StatementKind, TimePeriod};

use crate::common;

fn income_rows() -> Vec<(&'static str, &'static [&'static str], bool)> {
    vec![
        ("Revenue", &["100", "200"] as &[&str], false),
        ("Gross Income", &["60", "130"], true),
        ("Net Income", &["(5)", "N/A"], true),
    ]
}

#[tokio::test]
async fn statements_default_to_the_quarterly_pages() {
    let server = MockServer::start();
    let income = server.mock(|when, then| {
        when.method(GET)
            .path("/investing/stock/aapl/financials/income/quarter");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::statement_page(&income_rows()));
    });
    let balance = server.mock(|when, then| {
        when.method(GET)
            .path("/investing/stock/aapl/financials/balance-sheet/quarter");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::statement_page(&[(
                "Total Assets",
                &["900", "950"] as &[&str],
                false,
            )]));
    });
    let cash = server.mock(|when, then| {
        when.method(GET)
            .path("/investing/stock/aapl/financials/cash-flow/quarter");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::statement_page(&[(
                "Free Cash Flow",
                &["25", "30"] as &[&str],
                true,
            )]));
    });

    let client = common::client_for(&server);
    let statements = FinancialsBuilder::new(&client, "aapl").fetch().await;

    income.assert();
    balance.assert();
    cash.assert();

    // plain rows only: highlighted rows carry a different class attribute
    let income_table = statements.income_statement.as_ref().unwrap();
    assert_eq!(income_table.len(), 1);
    assert_eq!(income_table.get("Revenue").unwrap(), ["100", "200"]);

    let balance_table = statements.balance_sheet.as_ref().unwrap();
    assert_eq!(balance_table.get("Total Assets").unwrap(), ["900", "950"]);

    let cash_table = statements.get(StatementKind::CashFlow).as_ref().unwrap();
    assert_eq!(cash_table.get("Free Cash Flow").unwrap(), ["25", "30"]);
}

#[tokio::test]
async fn annual_time_period_drops_the_quarter_suffix() {
    let server = MockServer::start();
    for segment in ["income", "balance-sheet", "cash-flow"] {
        server.mock(|when, then| {
            when.method(GET)
                .path(format!("/investing/stock/aapl/financials/{segment}"));
            then.status(200)
                .header("content-type", "text/html")
                .body(common::statement_page(&[(
                    "Revenue",
                    &["400"] as &[&str],
                    false,
                )]));
        });
    }

    let client = common::client_for(&server);
    let statements = FinancialsBuilder::new(&client, "aapl")
        .time_period(TimePeriod::Annual)
        .fetch()
        .await;

    for kind in StatementKind::ALL {
        let table = statements.get(kind).as_ref().unwrap();
        assert_eq!(table.get("Revenue").unwrap(), ["400"]);
    }
}

#[tokio::test]
async fn key_data_only_reads_highlighted_rows() {
    let server = MockServer::start();
    for segment in ["income", "balance-sheet", "cash-flow"] {
        server.mock(|when, then| {
            when.method(GET)
                .path(format!("/investing/stock/aapl/financials/{segment}/quarter"));
            then.status(200)
                .header("content-type", "text/html")
                .body(common::statement_page(&income_rows()));
        });
    }

    let client = common::client_for(&server);
    let statements = FinancialsBuilder::new(&client, "aapl")
        .key_data_only(true)
        .fetch()
        .await;

    let income_table = statements.income_statement.as_ref().unwrap();
    assert_eq!(income_table.len(), 2);
    assert!(income_table.get("Revenue").is_none());
    assert_eq!(income_table.get("Gross Income").unwrap(), ["60", "130"]);
    assert_eq!(income_table.get("Net Income").unwrap(), ["(5)", "N/A"]);
}

#[tokio::test]
async fn one_failing_statement_leaves_the_others_intact() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/investing/stock/aapl/financials/income/quarter");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::statement_page(&income_rows()));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/investing/stock/aapl/financials/balance-sheet/quarter");
        then.status(500).body("upstream error");
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/investing/stock/aapl/financials/cash-flow/quarter");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::statement_page(&[(
                "Free Cash Flow",
                &["25"] as &[&str],
                false,
            )]));
    });

    let client = common::client_for(&server);
    let statements = FinancialsBuilder::new(&client, "aapl").fetch().await;

    assert!(statements.income_statement.is_ok());
    assert!(statements.cash_flow.is_ok());
    assert!(matches!(
        statements.balance_sheet,
        Err(MarketError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn unpaired_trailing_row_is_dropped() {
    let server = MockServer::start();
    for segment in ["income", "balance-sheet", "cash-flow"] {
        server.mock(|when, then| {
            when.method(GET)
                .path(format!("/investing/stock/aapl/financials/{segment}/quarter"));
            then.status(200)
                .header("content-type", "text/html")
                .body(common::statement_page(&[
                    ("Revenue", &["100", "200"] as &[&str], false),
                    ("Dangling Label", &[] as &[&str], false),
                ]));
        });
    }

    let client = common::client_for(&server);
    let statements = FinancialsBuilder::new(&client, "aapl").fetch().await;

    let table = statements.income_statement.as_ref().unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.get("Dangling Label").is_none());
}
