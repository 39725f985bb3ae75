//! The monthly accrual walker.
//!
//! Walks one bond from its issue month (or the current month) to the present
//! in accrual-sized steps, querying the calculator once per step and emitting
//! one output row per query.

use tracing::warn;

use crate::errors::Error;
use crate::models::{
    holding::Holding,
    month::MonthDate,
    query::{RedemptionQuery, normalize_denomination},
    record::RedemptionRecord,
};
use crate::providers::BondCalculator;

/// How much of a bond's history to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// One query for the current calendar month.
    CurrentMonthOnly,
    /// One query per accrual step from the issue month (clamped to
    /// [`MonthDate::EARLIEST`]) through the current month.
    FullHistory,
}

/// One output line: a redemption month paired with that month's record.
#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub redemption_date: MonthDate,
    pub series: String,
    pub serial_number: String,
    pub issue_date: String,
    pub final_maturity_date: String,
    pub interest_rate: String,
    pub face_value: String,
    pub initial_price: String,
    pub total_interest: String,
    pub total_value: String,
}

impl HistoryRow {
    fn new(redemption_date: MonthDate, record: &RedemptionRecord) -> Self {
        Self {
            redemption_date,
            series: record.series.clone(),
            serial_number: record.serial_number.clone(),
            issue_date: record.issue_date.clone(),
            final_maturity_date: record.final_maturity_date.clone(),
            interest_rate: record.interest_rate.clone(),
            face_value: record.denomination.clone(),
            initial_price: record.initial_price.clone(),
            total_interest: record.total_interest.clone(),
            total_value: record.total_value.clone(),
        }
    }

    /// Renders the row as one comma-delimited output line.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.redemption_date,
            self.series,
            self.serial_number,
            self.issue_date,
            self.final_maturity_date,
            self.interest_rate,
            self.face_value,
            self.initial_price,
            self.total_interest,
            self.total_value,
        )
    }
}

/// Per-holding working state.
///
/// Every iteration overwrites these fields from the record's echoed values:
/// the calculator canonicalizes serial, series, denomination, and issue date
/// formatting, and its echo is authoritative over the local copy.
struct WorkingBond {
    series: String,
    serial_number: String,
    denomination: String,
    issue_date: MonthDate,
}

impl WorkingBond {
    fn seed(holding: &Holding) -> Self {
        Self {
            series: holding.series.clone(),
            serial_number: holding.serial_number.clone(),
            denomination: normalize_denomination(&holding.face_value),
            issue_date: holding.issue_date,
        }
    }

    fn absorb(&mut self, record: &RedemptionRecord) {
        self.series = record.series.clone();
        self.serial_number = record.serial_number.clone();
        self.denomination = normalize_denomination(&record.denomination);
        if let Ok(month) = MonthDate::parse_mm_yyyy(&record.issue_date) {
            self.issue_date = month;
        }
    }

    fn query(&self, redemption_date: MonthDate) -> RedemptionQuery {
        RedemptionQuery {
            series: self.series.clone(),
            serial_number: self.serial_number.clone(),
            denomination: self.denomination.clone(),
            issue_date: self.issue_date,
            redemption_date,
        }
    }
}

/// Walks one holding step by step, emitting one row per calculator query.
///
/// Returns the number of rows emitted. A fetch failure, or an I/O failure
/// from the `emit` sink, aborts the walk for this holding and propagates;
/// the caller decides whether other holdings continue.
pub async fn walk_history(
    calculator: &dyn BondCalculator,
    holding: &Holding,
    mode: HistoryMode,
    emit: impl FnMut(HistoryRow) -> std::io::Result<()>,
) -> Result<usize, Error> {
    walk_history_as_of(calculator, holding, mode, MonthDate::current(), emit).await
}

/// Walks as of a fixed `today` month. [`walk_history`] passes the current
/// calendar month.
pub async fn walk_history_as_of(
    calculator: &dyn BondCalculator,
    holding: &Holding,
    mode: HistoryMode,
    today: MonthDate,
    mut emit: impl FnMut(HistoryRow) -> std::io::Result<()>,
) -> Result<usize, Error> {
    let mut cursor = match mode {
        HistoryMode::CurrentMonthOnly => today,
        HistoryMode::FullHistory => holding.issue_date.max(MonthDate::EARLIEST),
    };
    let mut stop = today;
    let mut bond = WorkingBond::seed(holding);
    let mut rows = 0;

    while cursor <= stop {
        let record = calculator.redemption_value(&bond.query(cursor)).await?;
        emit(HistoryRow::new(cursor, &record))?;
        rows += 1;

        bond.absorb(&record);

        if let Ok(final_month) = MonthDate::parse_mm_yyyy(&record.final_maturity_date) {
            if final_month < stop {
                warn!(%final_month, "bond stops accruing early, shortening walk");
                stop = final_month;
            }
        }

        // The calculator's next accrual date drives the step size. If the
        // field is absent or does not advance, step one month so the walk
        // cannot stall.
        cursor = match MonthDate::parse_mm_yyyy(&record.next_accrual_date) {
            Ok(next) if next > cursor => next,
            _ => {
                warn!(%cursor, "no usable next accrual date, advancing one month");
                cursor.succ()
            }
        };
    }

    Ok(rows)
}
