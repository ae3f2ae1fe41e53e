use scraper::Html;
use url::Url;

use crate::core::{net, MarketClient, MarketError};
use crate::scrape::{self, normalize};

use super::model::{FinancialStatements, FinancialTable, StatementKind, TimePeriod};

pub(crate) async fn fetch_statements(
    client: &MarketClient,
    ticker: &str,
    key_data_only: bool,
    time_period: TimePeriod,
) -> FinancialStatements {
    let (income_statement, balance_sheet, cash_flow) = futures::join!(
        fetch_statement(
            client,
            ticker,
            StatementKind::IncomeStatement,
            key_data_only,
            time_period
        ),
        fetch_statement(
            client,
            ticker,
            StatementKind::BalanceSheet,
            key_data_only,
            time_period
        ),
        fetch_statement(
            client,
            ticker,
            StatementKind::CashFlow,
            key_data_only,
            time_period
        ),
    );

    FinancialStatements {
        income_statement,
        balance_sheet,
        cash_flow,
    }
}

async fn fetch_statement(
    client: &MarketClient,
    ticker: &str,
    kind: StatementKind,
    key_data_only: bool,
    time_period: TimePeriod,
) -> Result<FinancialTable, MarketError> {
    let url = statement_url(client, ticker, kind, time_period)?;
    let body = net::get_html(client, url).await?;
    parse_statement(&body, key_data_only)
}

fn statement_url(
    client: &MarketClient,
    ticker: &str,
    kind: StatementKind,
    time_period: TimePeriod,
) -> Result<Url, MarketError> {
    let mut path = format!("{ticker}/financials/{}", kind.path_segment());
    if time_period == TimePeriod::Quarter {
        path.push_str("/quarter");
    }
    Ok(client.base_stock().join(&path)?)
}

/// Statement rows live in `element__body` containers; the rows the source
/// highlights as key data carry the `is-highlighted` class instead of
/// `table__row`.
fn parse_statement(body: &str, key_data_only: bool) -> Result<FinancialTable, MarketError> {
    let doc = Html::parse_document(body);
    let root = doc.root_element();

    let containers = scrape::select_all(root, "div", "element__body");
    if containers.is_empty() {
        return Err(MarketError::NotFound("<div class=\"element__body\">".into()));
    }

    let row_class = if key_data_only {
        "is-highlighted"
    } else {
        "table__row"
    };

    let mut groups = Vec::new();
    for container in containers {
        for row in scrape::select_all(container, "tr", row_class) {
            groups.extend(normalize::row_token_groups(&scrape::flat_text(row)));
        }
    }

    Ok(FinancialTable::from_rows(normalize::pair_rows(&groups)))
}
