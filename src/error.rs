//! Error types for validated chain construction.
//!
//! The core cost computation is total and never fails; these errors only
//! surface through the opt-in validating constructors.

use thiserror::Error;

/// Canonical result for validated chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error(transparent)]
    InvalidChain(#[from] InvalidChainError),
}

/// Adjacent descriptors whose inner dimensions do not agree.
///
/// `index` is the position of the left-hand descriptor: the product
/// `chain[index] * chain[index + 1]` is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix {index} has {cols} columns but matrix {} has {next_rows} rows", .index + 1)]
pub struct InvalidChainError {
    pub index: usize,
    pub cols: u64,
    pub next_rows: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_both_matrices() {
        let err = InvalidChainError {
            index: 2,
            cols: 5,
            next_rows: 7,
        };
        assert_eq!(
            err.to_string(),
            "matrix 2 has 5 columns but matrix 3 has 7 rows"
        );
    }

    #[test]
    fn chain_error_is_transparent() {
        let inner = InvalidChainError {
            index: 0,
            cols: 1,
            next_rows: 2,
        };
        let err: ChainError = inner.into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, ChainError::InvalidChain(inner));
    }
}
