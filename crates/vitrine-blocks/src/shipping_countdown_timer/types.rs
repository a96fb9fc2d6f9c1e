//! Content and prop shapes of the shipping countdown timer block.
//!
//! # Design
//! - Stored content is sparse: every field may be missing, including single
//!   weekdays. Defaults are applied only when resolving.
//! - Values pass through verbatim; nothing here validates times, zones or URLs.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::defaults::{DEFAULT_CUTOFF_TIME, DEFAULT_ICON_URL, DEFAULT_TIMEZONE, DEFAULT_WORKDAYS};
use crate::block::{Block, BlockMeta};
use crate::error::BlockContentError;

/// Component name the shop uses for this block.
pub const COMPONENT_NAME: &str = "ShippingCountdownTimer";

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Fully specified set of shipping days.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCountdownTimerWorkdays {
    /// Ships on Monday.
    pub monday: bool,
    /// Ships on Tuesday.
    pub tuesday: bool,
    /// Ships on Wednesday.
    pub wednesday: bool,
    /// Ships on Thursday.
    pub thursday: bool,
    /// Ships on Friday.
    pub friday: bool,
    /// Ships on Saturday.
    pub saturday: bool,
    /// Ships on Sunday.
    pub sunday: bool,
}

impl Default for ShippingCountdownTimerWorkdays {
    fn default() -> Self {
        DEFAULT_WORKDAYS
    }
}

impl ShippingCountdownTimerWorkdays {
    /// Whether orders ship on the given weekday.
    #[must_use]
    pub const fn is_workday(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Shipping days in week order, starting Monday.
    pub fn active_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(move |day| self.is_workday(*day))
    }
}

/// Workdays as stored in block content, where any day may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialWorkdays {
    /// Monday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<bool>,
    /// Tuesday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<bool>,
    /// Wednesday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<bool>,
    /// Thursday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<bool>,
    /// Friday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<bool>,
    /// Saturday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<bool>,
    /// Sunday override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<bool>,
}

impl PartialWorkdays {
    /// Fill missing days from [`DEFAULT_WORKDAYS`].
    #[must_use]
    pub fn resolve(&self) -> ShippingCountdownTimerWorkdays {
        let base = DEFAULT_WORKDAYS;
        ShippingCountdownTimerWorkdays {
            monday: self.monday.unwrap_or(base.monday),
            tuesday: self.tuesday.unwrap_or(base.tuesday),
            wednesday: self.wednesday.unwrap_or(base.wednesday),
            thursday: self.thursday.unwrap_or(base.thursday),
            friday: self.friday.unwrap_or(base.friday),
            saturday: self.saturday.unwrap_or(base.saturday),
            sunday: self.sunday.unwrap_or(base.sunday),
        }
    }
}

impl From<ShippingCountdownTimerWorkdays> for PartialWorkdays {
    fn from(days: ShippingCountdownTimerWorkdays) -> Self {
        Self {
            monday: Some(days.monday),
            tuesday: Some(days.tuesday),
            wednesday: Some(days.wednesday),
            thursday: Some(days.thursday),
            friday: Some(days.friday),
            saturday: Some(days.saturday),
            sunday: Some(days.sunday),
        }
    }
}

/// Editable content of the block as persisted by the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCountdownTimerContent {
    /// Order cutoff, expected as `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_time: Option<String>,
    /// IANA zone the cutoff is evaluated in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Icon shown beside the countdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Shipping days, possibly partial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdays: Option<PartialWorkdays>,
}

impl ShippingCountdownTimerContent {
    /// Decode the content of a shipping countdown timer block.
    ///
    /// # Errors
    ///
    /// Returns [`BlockContentError::UnexpectedBlock`] for other components and
    /// [`BlockContentError::InvalidContent`] when the JSON does not fit.
    pub fn from_block(block: &Block) -> Result<Self, BlockContentError> {
        if block.name != COMPONENT_NAME {
            return Err(BlockContentError::UnexpectedBlock {
                expected: COMPONENT_NAME,
                found: block.name.clone(),
            });
        }
        if block.content.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(&block.content).map_err(|source| BlockContentError::InvalidContent {
            uuid: block.meta.uuid.clone(),
            source,
        })
    }

    /// Apply defaults to every unset field.
    #[must_use]
    pub fn resolve(&self) -> ResolvedShippingCountdownTimer {
        ResolvedShippingCountdownTimer {
            cutoff_time: or_default(self.cutoff_time.as_deref(), DEFAULT_CUTOFF_TIME),
            timezone: or_default(self.timezone.as_deref(), DEFAULT_TIMEZONE),
            icon_url: or_default(self.icon_url.as_deref(), DEFAULT_ICON_URL),
            workdays: self
                .workdays
                .as_ref()
                .map_or(DEFAULT_WORKDAYS, PartialWorkdays::resolve),
        }
    }
}

// Empty strings count as unset, matching how the editor clears a field.
fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Block content with every default applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedShippingCountdownTimer {
    /// Order cutoff.
    pub cutoff_time: String,
    /// Timezone of the cutoff.
    pub timezone: String,
    /// Icon URL.
    pub icon_url: String,
    /// Shipping days.
    pub workdays: ShippingCountdownTimerWorkdays,
}

/// A selectable timezone in the block editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimezoneOption {
    /// Text shown to the editor.
    pub label: &'static str,
    /// IANA zone identifier.
    pub value: &'static str,
}

/// Props handed to the block component when rendering a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCountdownTimerProps {
    /// Component name.
    pub name: String,
    /// Block type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Decoded content.
    pub content: ShippingCountdownTimerContent,
    /// Layout configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    /// Position of the block on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Identity metadata.
    pub meta: BlockMeta,
}

impl ShippingCountdownTimerProps {
    /// Build props for a block at `index`.
    ///
    /// # Errors
    ///
    /// Propagates [`ShippingCountdownTimerContent::from_block`] failures.
    pub fn from_block(block: &Block, index: Option<usize>) -> Result<Self, BlockContentError> {
        Ok(Self {
            name: block.name.clone(),
            kind: block.kind.clone(),
            content: ShippingCountdownTimerContent::from_block(block)?,
            configuration: block.configuration.clone(),
            index,
            meta: block.meta.clone(),
        })
    }
}

/// Props of the settings form that edits one timer block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCountdownTimerFormProps {
    /// Uuid of the block being edited; the form falls back to the active block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}
