use thiserror::Error;

use crate::providers::treasury_calc::extract::ExtractError;

/// Errors that can occur within a `BondCalculator` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A transport-level failure talking to the calculator.
    #[error("calculator request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The calculator answered with a non-success HTTP status.
    #[error("calculator error: {0}")]
    Api(String),

    /// The response body did not contain a readable bond record.
    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

/// Errors that can occur while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
