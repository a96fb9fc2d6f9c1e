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
//! Block models and per-block configuration surfaces for the Vitrine editor.
//!
//! Layout: `block.rs` (shop API shapes consumed by the editor), `error.rs`,
//! `shipping_countdown_timer/` (defaults, content types and timezone options
//! for the shipping countdown block).

pub mod block;
pub mod error;
pub mod shipping_countdown_timer;

pub use block::{Block, BlockMeta, CategoryTreeItem};
pub use error::BlockContentError;
pub use shipping_countdown_timer::{
    DEFAULT_CUTOFF_TIME, DEFAULT_ICON_URL, DEFAULT_TIMEZONE, DEFAULT_WORKDAYS,
    PartialWorkdays, ResolvedShippingCountdownTimer, ShippingCountdownTimerContent,
    ShippingCountdownTimerFormProps, ShippingCountdownTimerProps, ShippingCountdownTimerWorkdays,
    TIMEZONE_OPTIONS, TimezoneOption, timezone_label,
};
