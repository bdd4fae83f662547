//! Error type for truth-table construction and application.

use thiserror::Error;

/// Errors reported by [`TruthTable`][crate::table::TruthTable] operations.
///
/// All failures are synchronous and leave no partial state behind: an
/// operation either succeeds or returns one of these variants.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TableError {
    /// The output column length is neither zero nor a power of two.
    #[error("number of outputs must be zero or a power of two, got {0}")]
    InvalidLength(usize),

    /// A value in the output column or an input vector is not 0 or 1.
    #[error("expected a value that is 0 or 1, got {0}")]
    InvalidValue(u8),

    /// The number of inputs does not match the function's arity.
    #[error("expected {expected} inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// The empty table has no output to produce.
    #[error("no defined output")]
    Undefined,
}
