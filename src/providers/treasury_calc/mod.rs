//! The TreasuryDirect savings bond calculator provider.

pub mod extract;
pub mod params;
pub mod provider;

pub use extract::{ExtractError, extract_record};
pub use provider::{DEFAULT_ENDPOINT, TreasuryCalculator};
