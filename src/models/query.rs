use serde::{Deserialize, Serialize};

use crate::models::month::MonthDate;

/// The input for one calculator call: value one bond as of one redemption
/// month.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RedemptionQuery {
    pub series: String,
    pub serial_number: String,
    /// Face value normalized for the calculator form, see
    /// [`normalize_denomination`].
    pub denomination: String,
    pub issue_date: MonthDate,
    pub redemption_date: MonthDate,
}

/// Strips currency formatting from a face value.
///
/// The calculator rejects formatted amounts: no `$`, no thousands
/// separators, and whole-dollar denominations must not carry a `.00` suffix.
pub fn normalize_denomination(face: &str) -> String {
    let bare: String = face
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    match bare.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => bare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_currency_symbol_and_suffix() {
        assert_eq!(normalize_denomination("$100.00"), "100");
        assert_eq!(normalize_denomination("100.00"), "100");
        assert_eq!(normalize_denomination("$5,000.00"), "5000");
    }

    #[test]
    fn test_bare_amounts_pass_through() {
        assert_eq!(normalize_denomination("100"), "100");
        assert_eq!(normalize_denomination("  50 "), "50");
    }

    #[test]
    fn test_fractional_amounts_keep_their_cents() {
        assert_eq!(normalize_denomination("37.50"), "37.50");
    }
}
