//! Default content values and the editor's timezone choices.

use super::types::{ShippingCountdownTimerWorkdays, TimezoneOption};

/// Order cutoff time applied when the block content leaves it unset.
pub const DEFAULT_CUTOFF_TIME: &str = "13:00";
/// Timezone the cutoff time is interpreted in by default.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";
/// Shipping icon shown next to the countdown.
pub const DEFAULT_ICON_URL: &str =
    "https://cdn02.plentymarkets.com/nteqnk1xxnkn/frontend/shipping_9288277.svg";

/// Monday to Friday ship, weekends do not.
pub const DEFAULT_WORKDAYS: ShippingCountdownTimerWorkdays = ShippingCountdownTimerWorkdays {
    monday: true,
    tuesday: true,
    wednesday: true,
    thursday: true,
    friday: true,
    saturday: false,
    sunday: false,
};

const fn option(label: &'static str, value: &'static str) -> TimezoneOption {
    TimezoneOption { label, value }
}

/// Timezones offered in the block editor, in display order.
pub const TIMEZONE_OPTIONS: [TimezoneOption; 34] = [
    option("UTC", "UTC"),
    option("London", "Europe/London"),
    option("Dublin", "Europe/Dublin"),
    option("Lisbon", "Europe/Lisbon"),
    option("Berlin", "Europe/Berlin"),
    option("Amsterdam", "Europe/Amsterdam"),
    option("Brussels", "Europe/Brussels"),
    option("Paris", "Europe/Paris"),
    option("Madrid", "Europe/Madrid"),
    option("Rome", "Europe/Rome"),
    option("Vienna", "Europe/Vienna"),
    option("Zurich", "Europe/Zurich"),
    option("Copenhagen", "Europe/Copenhagen"),
    option("Stockholm", "Europe/Stockholm"),
    option("Oslo", "Europe/Oslo"),
    option("Warsaw", "Europe/Warsaw"),
    option("Prague", "Europe/Prague"),
    option("Budapest", "Europe/Budapest"),
    option("Bucharest", "Europe/Bucharest"),
    option("Athens", "Europe/Athens"),
    option("Helsinki", "Europe/Helsinki"),
    option("Istanbul", "Europe/Istanbul"),
    option("Kyiv", "Europe/Kyiv"),
    option("Moscow", "Europe/Moscow"),
    option("New York", "America/New_York"),
    option("Chicago", "America/Chicago"),
    option("Denver", "America/Denver"),
    option("Los Angeles", "America/Los_Angeles"),
    option("São Paulo", "America/Sao_Paulo"),
    option("Dubai", "Asia/Dubai"),
    option("Kolkata", "Asia/Kolkata"),
    option("Shanghai", "Asia/Shanghai"),
    option("Tokyo", "Asia/Tokyo"),
    option("Sydney", "Australia/Sydney"),
];

/// Display label for a timezone id, if the editor offers it.
#[must_use]
pub fn timezone_label(value: &str) -> Option<&'static str> {
    TIMEZONE_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}
