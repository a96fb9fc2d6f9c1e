//! Runtime configuration exposed to the editor.
//!
//! # Design
//! - Mirrors the public runtime config the storefront ships to the browser.
//! - Read once when the site configuration is created; never reloaded.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable carrying the shop's display font.
pub const PUBLIC_FONT_ENV: &str = "VITRINE_PUBLIC_FONT";
/// Id of the `<script type="application/json">` element holding the payload.
pub const RUNTIME_CONFIG_ELEMENT_ID: &str = "vitrine-runtime-config";

/// Runtime configuration root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Values that are safe to expose to the browser.
    #[serde(default)]
    pub public: PublicRuntimeConfig,
}

/// Browser-visible runtime settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRuntimeConfig {
    /// Display font configured for the shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl RuntimeConfig {
    /// Configuration with a display font set.
    #[must_use]
    pub fn with_font(font: impl Into<String>) -> Self {
        Self {
            public: PublicRuntimeConfig {
                font: Some(font.into()),
            },
        }
    }

    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_font_value(std::env::var(PUBLIC_FONT_ENV).ok())
    }

    /// Parse an embedded JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPayload`] when the payload does not decode.
    pub fn from_json(payload: &str) -> ConfigResult<Self> {
        serde_json::from_str(payload).map_err(|source| ConfigError::InvalidPayload { source })
    }

    fn from_font_value(value: Option<String>) -> Self {
        Self {
            public: PublicRuntimeConfig {
                font: value.filter(|font| !font.is_empty()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_value_is_unset() {
        assert_eq!(RuntimeConfig::from_font_value(Some(String::new())), RuntimeConfig::default());
        assert_eq!(
            RuntimeConfig::from_font_value(Some("Lato".into())).public.font.as_deref(),
            Some("Lato")
        );
    }

    #[test]
    fn json_payload_reads_public_font() {
        let config = RuntimeConfig::from_json(r#"{"public":{"font":"Jersey 10"}}"#)
            .expect("valid payload");
        assert_eq!(config, RuntimeConfig::with_font("Jersey 10"));
    }

    #[test]
    fn json_payload_tolerates_missing_sections() {
        let config = RuntimeConfig::from_json("{}").expect("empty object");
        assert!(config.public.font.is_none());
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err = RuntimeConfig::from_json("{\"public\":").expect_err("truncated payload");
        assert!(matches!(err, ConfigError::InvalidPayload { .. }));
    }
}
