//! Browser bootstrap: read the embedded runtime config and bind the DOM head.

use gloo::console;

use crate::config::{RUNTIME_CONFIG_ELEMENT_ID, RuntimeConfig};
use crate::error::{ConfigError, ConfigResult, HeadWriteError};
use crate::head::DomHeadWriter;
use crate::site_configuration::SiteConfiguration;

/// Read the runtime config embedded in the page.
///
/// # Errors
///
/// Returns [`ConfigError::PayloadMissing`] when the element is absent and
/// [`ConfigError::InvalidPayload`] when its text is not valid JSON.
pub fn read_runtime_config(head: &DomHeadWriter) -> ConfigResult<RuntimeConfig> {
    let payload = head
        .document()
        .get_element_by_id(RUNTIME_CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .ok_or(ConfigError::PayloadMissing {
            element_id: RUNTIME_CONFIG_ELEMENT_ID,
        })?;
    RuntimeConfig::from_json(&payload)
}

/// Create the session's site configuration bound to the live document.
///
/// A missing or malformed runtime config falls back to defaults.
///
/// # Errors
///
/// Returns [`HeadWriteError::DocumentUnavailable`] outside a browsing context.
pub fn mount_site_configuration() -> Result<SiteConfiguration<DomHeadWriter>, HeadWriteError> {
    console_error_panic_hook::set_once();
    let head = DomHeadWriter::from_window()?;
    let runtime = read_runtime_config(&head).unwrap_or_else(|err| {
        console::warn!("runtime config unavailable, using defaults", err.to_string());
        RuntimeConfig::default()
    });
    Ok(SiteConfiguration::new(head, &runtime))
}
