#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Vitrine editor UI state.
//!
//! Layout: `site_configuration/` (session state, drawer transitions, font
//! loading), `head/` (document head capability and its implementations),
//! `config.rs` (runtime configuration), `error.rs`.

pub mod config;
pub mod error;
pub mod head;
pub mod site_configuration;

pub use config::{PublicRuntimeConfig, RuntimeConfig};
pub use error::{ConfigError, ConfigResult, HeadWriteError};
pub use head::{DocumentHeadWriter, MemoryHeadWriter, NoopHeadWriter, StylesheetOutcome};
pub use site_configuration::state::{
    DrawerState, DrawerView, Placement, SettingsType, SiteConfigurationState,
};
pub use site_configuration::{SiteConfiguration, SubscriptionId};

#[cfg(target_arch = "wasm32")]
pub use head::DomHeadWriter;

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{mount_site_configuration, read_runtime_config};
