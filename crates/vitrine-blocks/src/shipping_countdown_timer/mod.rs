//! Shipping countdown timer block: editable content shape and defaults.
//!
//! The block shows how long customers have left to order for same-day
//! shipping. This module only carries its configuration surface; the
//! countdown itself is computed by the renderer.

mod defaults;
mod types;

pub use defaults::{
    DEFAULT_CUTOFF_TIME, DEFAULT_ICON_URL, DEFAULT_TIMEZONE, DEFAULT_WORKDAYS, TIMEZONE_OPTIONS,
    timezone_label,
};
pub use types::{
    COMPONENT_NAME, PartialWorkdays, ResolvedShippingCountdownTimer, ShippingCountdownTimerContent,
    ShippingCountdownTimerFormProps, ShippingCountdownTimerProps, ShippingCountdownTimerWorkdays,
    TimezoneOption,
};
