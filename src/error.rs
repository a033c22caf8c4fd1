//! Error types returned by this crate.

use thiserror::Error;

/// Errors detected at the boundary of an operation.
/// All of them are per-call and recoverable by the caller.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The operation received a sample with zero rows.
    #[error("The sample has no rows")]
    EmptySample,

    /// The class column is required but was never designated.
    #[error("The class column is not set. Use `Sample::set_target`")]
    TargetNotSet,

    /// The designated class column does not exist in the schema.
    #[error("The class column `{0}` does not exist")]
    MissingClassColumn(String),

    /// A feature required by the operation does not exist in the schema.
    #[error("The feature `{0}` does not exist")]
    MissingFeature(String),

    /// An I/O failure while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
