use serde::{Deserialize, Serialize};

/// One parsed calculator response.
///
/// All fields are kept as the strings the calculator rendered; no numeric or
/// date parsing happens at extraction time. The record feeds exactly one
/// output row, and its echoed serial/series/denomination/issue date seed the
/// next query in a history walk.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RedemptionRecord {
    /// Purchase price of the bond ("Total Price" on the calculator).
    pub initial_price: String,
    pub total_value: String,
    pub total_interest: String,
    pub ytd_interest: String,
    pub serial_number: String,
    pub series: String,
    /// Face value as echoed by the calculator (e.g. `$100`).
    pub denomination: String,
    /// Issue month, `mm/yyyy`.
    pub issue_date: String,
    /// Month the bond's value next step-changes, `mm/yyyy`.
    pub next_accrual_date: String,
    /// Month the bond stops accruing interest, `mm/yyyy`.
    pub final_maturity_date: String,
    /// Interest rate column, e.g. `4.00%`.
    pub interest_rate: String,
}
