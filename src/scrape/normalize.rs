//! Text-to-value normalization for scraped fields.

use std::collections::HashMap;

use crate::core::MarketError;

/// Normalize a scraped price string into a non-negative float.
///
/// Keeps ASCII digits and `.` in their original order and drops everything
/// else: currency symbols, thousands separators, letters, whitespace,
/// wherever they appear. The source sites embed these inconsistently, so
/// stripping beats locale-aware parsing here. Text with no digits at all, or
/// with more than one decimal point, fails with [`MarketError::Parse`].
pub(crate) fn normalize_price(raw: &str) -> Result<f64, MarketError> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if !kept.chars().any(|c| c.is_ascii_digit()) {
        return Err(MarketError::Parse(format!("no digits in price text {raw:?}")));
    }
    if kept.matches('.').count() > 1 {
        return Err(MarketError::Parse(format!(
            "more than one decimal point in price text {raw:?}"
        )));
    }

    kept.parse::<f64>()
        .map_err(|e| MarketError::Parse(format!("bad price text {raw:?}: {e}")))
}

/// Split the flattened text of a table row into cell token groups.
///
/// Cell boundaries arrive as blank lines in the flattened text and tokens as
/// single newlines. Tokens that are empty or whitespace-only are dropped,
/// and groups left empty after that are dropped too.
pub(crate) fn row_token_groups(row_text: &str) -> Vec<Vec<String>> {
    row_text
        .split("\n\n")
        .map(|cell| {
            cell.split('\n')
                .filter(|tok| !tok.trim().is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Pair token groups into a label → values mapping.
///
/// Groups are consumed in strict adjacent pairs: the group at an even
/// position contributes its first token as the metric label, and the group
/// immediately after it is that label's value list. A repeated label
/// overwrites the earlier entry. A trailing unpaired group is dropped, as
/// the source tables interleave label and value rows and an odd count means
/// the table was cut short.
pub(crate) fn pair_rows(groups: &[Vec<String>]) -> HashMap<String, Vec<String>> {
    let mut table = HashMap::new();
    for pair in groups.chunks_exact(2) {
        if let Some(label) = pair[0].first() {
            table.insert(label.clone(), pair[1].clone());
        }
    }
    table
}
