//! Screen-scraping of the calculator's HTML response.
//!
//! The response renders one bond as a table row plus a totals row. Neither
//! section carries ids or classes worth anchoring on, so extraction scans for
//! two literal header texts and captures a fixed number of table cells after
//! each. A layout change upstream that keeps the markers and cell counts
//! intact would silently change field meaning; only missing markers and
//! short cell counts are detectable, and both fail the whole extraction.

use thiserror::Error;

use crate::models::record::RedemptionRecord;

/// Header cell that precedes the bond row.
const SERIAL_MARKER: &str = "Serial #";
/// Header cell that precedes the totals row.
const TOTALS_MARKER: &str = "Total Price";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("marker {marker:?} not found in calculator response")]
    MarkerNotFound { marker: &'static str },

    #[error("expected {expected} table cells after {marker:?}, found {found}")]
    TooFewCells {
        marker: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Parses one bond record out of the calculator's HTML response.
///
/// The totals row carries price, value, total interest, and YTD interest;
/// the bond row carries serial, series, denomination, issue date, next
/// accrual, final maturity, issue price, interest, and interest rate. Issue
/// price and interest duplicate the totals row and are dropped.
pub fn extract_record(html: &str) -> Result<RedemptionRecord, ExtractError> {
    let [initial_price, total_value, total_interest, ytd_interest] =
        cells_after(html, TOTALS_MARKER)?;
    let [
        serial_number,
        series,
        denomination,
        issue_date,
        next_accrual_date,
        final_maturity_date,
        _issue_price,
        _interest,
        interest_rate,
    ] = cells_after(html, SERIAL_MARKER)?;

    Ok(RedemptionRecord {
        initial_price,
        total_value,
        total_interest,
        ytd_interest,
        serial_number,
        series,
        denomination,
        issue_date,
        next_accrual_date,
        final_maturity_date,
        interest_rate,
    })
}

/// Captures the first token of each of the next `N` table cells after the
/// first occurrence of `marker`.
///
/// The marker match is case-sensitive; `<td` detection is not. Cell text is
/// taken up to the closing `</td`.
fn cells_after<const N: usize>(
    html: &str,
    marker: &'static str,
) -> Result<[String; N], ExtractError> {
    let start = html
        .find(marker)
        .ok_or(ExtractError::MarkerNotFound { marker })?
        + marker.len();
    let lower = html.to_ascii_lowercase();

    let mut cells = Vec::with_capacity(N);
    let mut pos = start;
    while cells.len() < N {
        let Some(open) = lower[pos..].find("<td") else {
            break;
        };
        let cell_start = pos + open;
        let Some(gt) = lower[cell_start..].find('>') else {
            break;
        };
        let text_start = cell_start + gt + 1;
        let text_end = lower[text_start..]
            .find("</td")
            .map(|i| text_start + i)
            .unwrap_or(html.len());
        cells.push(first_token(&html[text_start..text_end]));
        pos = text_end;
    }

    let found = cells.len();
    cells.try_into().map_err(|_| ExtractError::TooFewCells {
        marker,
        expected: N,
        found,
    })
}

/// Strips embedded markup and carriage returns, then keeps only the first
/// whitespace-delimited token. Cells carry trailing annotations (footnote
/// links and the like) that the record drops.
fn first_token(cell: &str) -> String {
    let mut text = String::with_capacity(cell.len());
    let mut in_tag = false;
    for c in cell.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            '\r' => {}
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
