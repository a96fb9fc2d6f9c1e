//! Error types for runtime configuration and document head access.

use thiserror::Error;

/// Runtime configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Embedded configuration payload was not valid JSON for [`crate::RuntimeConfig`].
    #[error("invalid runtime configuration payload")]
    InvalidPayload {
        /// Decoder error.
        source: serde_json::Error,
    },
    /// The page carries no runtime configuration element.
    #[error("runtime configuration element missing")]
    PayloadMissing {
        /// Element id that was looked up.
        element_id: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The document head could not be read or written.
#[derive(Debug, Error)]
pub enum HeadWriteError {
    /// No window/document is reachable from the current context.
    #[error("document unavailable")]
    DocumentUnavailable,
    /// The document has no `<head>` element.
    #[error("document head missing")]
    HeadMissing,
    /// A DOM call raised an exception.
    #[error("DOM operation failed")]
    Dom {
        /// DOM call that failed.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
}
