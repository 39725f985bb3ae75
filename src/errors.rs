use thiserror::Error;

use crate::providers::ProviderError;

/// The unified error type for the `savings_bond_history` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A calculator query failed (network, HTTP status, or extraction).
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A holdings line could not be parsed.
    #[error("holdings line {line}: {message}")]
    Holdings { line: usize, message: String },

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
