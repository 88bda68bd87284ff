//! Error types for the VIGIL engine

use thiserror::Error;

/// Engine errors
///
/// The engine performs no fallible I/O of its own; the only error that
/// can surface is a failure of the report delivery collaborator, which
/// propagates unchanged to the host event loop.
#[derive(Error, Debug)]
pub enum VigilError {
    #[error("report delivery failed: {0}")]
    ReportDelivery(String),
}

/// Result type for VIGIL operations
pub type VigilResult<T> = Result<T, VigilError>;
