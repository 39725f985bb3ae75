//! Calculator abstraction for bond redemption values.
//!
//! This module defines the [`BondCalculator`] trait, the seam between the
//! history walker and whatever actually prices a bond. The production
//! implementation is [`treasury_calc::TreasuryCalculator`], which queries the
//! TreasuryDirect web calculator; tests substitute stubs through the same
//! trait.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn BondCalculator`).

pub mod errors;
pub mod treasury_calc;

use async_trait::async_trait;

pub use errors::{ProviderError, ProviderInitError};

use crate::models::{query::RedemptionQuery, record::RedemptionRecord};

#[async_trait]
pub trait BondCalculator {
    /// Values one bond as of one redemption month.
    ///
    /// One outbound call per invocation; no retries. Failures surface as
    /// [`ProviderError`], never as an empty record.
    async fn redemption_value(
        &self,
        query: &RedemptionQuery,
    ) -> Result<RedemptionRecord, ProviderError>;
}
