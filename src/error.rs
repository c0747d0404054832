//! Error types for wallet metadata operations

use thiserror::Error;

use crate::key::MetaKey;

/// Errors produced by metadata accessors and resolvers.
///
/// `InvalidCoinType` is recoverable user input. `MalformedField` means a
/// stored value no longer parses into its semantic type; values only ever
/// enter the record through the typed setters or a validated load path, so
/// this indicates corruption or a bypassed validation step upstream and must
/// not be masked with a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("Invalid coin type: {0}")]
    InvalidCoinType(String),

    #[error("Malformed {key} field: {value:?}")]
    MalformedField { key: MetaKey, value: String },

    #[error("Unknown metadata key: {0}")]
    UnknownKey(String),

    #[error("Unknown crypto type: {0}")]
    UnknownCryptoType(String),
}
