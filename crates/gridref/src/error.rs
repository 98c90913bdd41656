//! Error types for gridref

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or manipulating range addresses
#[derive(Debug, Error)]
pub enum Error {
    /// Address text that does not match the `[workbook]sheet!cell[:cell]` grammar
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Empty input or an otherwise unusable argument value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-positive dimensions passed to a sizing operation
    #[error("Size out of range: {0}")]
    SizeOutOfRange(String),
}
