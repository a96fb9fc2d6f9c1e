//! Error types for block content decoding.

use thiserror::Error;

/// Failure to read typed content out of a block.
#[derive(Debug, Error)]
pub enum BlockContentError {
    /// The block is not the component the caller expected.
    #[error("unexpected block component")]
    UnexpectedBlock {
        /// Component name the caller asked for.
        expected: &'static str,
        /// Component name found on the block.
        found: String,
    },
    /// Content JSON did not match the component's content shape.
    #[error("invalid block content")]
    InvalidContent {
        /// Uuid of the offending block.
        uuid: String,
        /// Decoder error.
        source: serde_json::Error,
    },
}
