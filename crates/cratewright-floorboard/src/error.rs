//! Error types for the floor engine.

use thiserror::Error;

/// Errors that can occur while tiling a crate width with floorboards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Every decomposition of the requested width strands a remainder
    /// too narrow to manufacture.
    #[error("Remaining width {0} is less than minimum 2 for narrow board")]
    UnusableRemainder(f64),
}

/// Result type for floor engine operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
