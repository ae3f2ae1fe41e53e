use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::core::MarketError;

/// One financial statement table: metric label → the values of each reported
/// period, left as printed (parenthesized negatives, `N/A`, unit suffixes).
/// Numeric coercion is a caller concern. Labels are unique within a table;
/// when the source repeats one, the later row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinancialTable {
    rows: HashMap<String, Vec<String>>,
}

impl FinancialTable {
    pub(crate) fn from_rows(rows: HashMap<String, Vec<String>>) -> Self {
        Self { rows }
    }

    /// The period values for a metric label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.rows.get(label).map(Vec::as_slice)
    }

    /// Every metric label in the table.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// The full label → values mapping.
    #[must_use]
    pub fn rows(&self) -> &HashMap<String, Vec<String>> {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which of the three statements a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatementKind {
    IncomeStatement,
    BalanceSheet,
    CashFlow,
}

impl StatementKind {
    /// All three kinds, in the order the source lists them.
    pub const ALL: [Self; 3] = [Self::IncomeStatement, Self::BalanceSheet, Self::CashFlow];

    /// Display name used as the key in combined statement sets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow",
        }
    }

    /// Path segment of the statement's page under `/financials/`.
    pub(crate) const fn path_segment(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income",
            Self::BalanceSheet => "balance-sheet",
            Self::CashFlow => "cash-flow",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting cadence of the statement pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TimePeriod {
    /// The quarterly tables. (Default)
    #[default]
    Quarter,
    /// The annual tables.
    Annual,
}

/// The three statements for one ticker.
///
/// A statement that could not be fetched or parsed carries its error in
/// place; one statement failing never discards the other two.
#[derive(Debug)]
pub struct FinancialStatements {
    /// The "Income Statement" table.
    pub income_statement: Result<FinancialTable, MarketError>,
    /// The "Balance Sheet" table.
    pub balance_sheet: Result<FinancialTable, MarketError>,
    /// The "Cash Flow" table.
    pub cash_flow: Result<FinancialTable, MarketError>,
}

impl FinancialStatements {
    /// Access a statement by kind.
    #[must_use]
    pub fn get(&self, kind: StatementKind) -> &Result<FinancialTable, MarketError> {
        match kind {
            StatementKind::IncomeStatement => &self.income_statement,
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }
}
