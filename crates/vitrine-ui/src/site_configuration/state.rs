//! Editor UI state shared by the whole page session.
//!
//! # Design
//! - Plain data: every transition lives on the `SiteConfiguration` handle.
//! - Empty strings mean "unset" for the textual selection fields.

use serde::{Deserialize, Serialize};
use vitrine_blocks::{Block, CategoryTreeItem};

/// Side of the viewport the drawer slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Left edge.
    #[default]
    Left,
    /// Right edge.
    Right,
}

impl Placement {
    /// Wire name of the placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Panels the editor drawer can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawerView {
    /// Catalogue of blocks that can be added to the page.
    BlocksList,
    /// Settings form of the selected block.
    BlocksSettings,
    /// Page-level settings.
    PageSettings,
    /// Shop-wide settings.
    SiteSettings,
}

impl DrawerView {
    /// Every view in menu order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::BlocksList,
            Self::BlocksSettings,
            Self::PageSettings,
            Self::SiteSettings,
        ]
    }

    /// Identifier used by the editor UI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlocksList => "blocksList",
            Self::BlocksSettings => "blocksSettings",
            Self::PageSettings => "pageSettings",
            Self::SiteSettings => "siteSettings",
        }
    }

    /// Look up a view by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|view| view.as_str() == id)
    }

    /// Only block settings open on the right.
    #[must_use]
    pub const fn placement(self) -> Placement {
        match self {
            Self::BlocksSettings => Placement::Right,
            Self::BlocksList | Self::PageSettings | Self::SiteSettings => Placement::Left,
        }
    }
}

/// Kind of category settings being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsType {
    /// Name, visibility and basic properties.
    General,
    /// Search engine metadata.
    Seo,
}

/// Observable drawer visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerState {
    /// Drawer hidden.
    Closed,
    /// Drawer showing a view.
    OpenWithView(DrawerView),
    /// Drawer showing a site setting group.
    OpenWithSetting(String),
}

/// Snapshot of the editor UI state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfigurationState {
    /// Blocks of the page being edited.
    pub data: Vec<Block>,
    /// Whether the drawer is visible.
    pub drawer_open: bool,
    /// Whether the page modal is visible.
    pub page_modal_open: bool,
    /// Category whose settings are being edited.
    pub settings_category: Option<CategoryTreeItem>,
    /// Which settings of that category are shown.
    pub settings_type: Option<SettingsType>,
    /// Whether editor data is loading.
    pub loading: bool,
    /// Drawer side.
    pub placement: Placement,
    /// Insert position for the next added block.
    pub new_block_position: i64,
    /// CSS `font-family` declaration for the preview, possibly empty.
    pub current_font: String,
    /// View shown in the drawer.
    pub drawer_view: Option<DrawerView>,
    /// Active site setting group.
    pub active_setting: String,
    /// Active sub category inside the setting group.
    pub active_sub_category: String,
    /// Component name of the block being edited.
    pub block_type: String,
    /// Uuid of the block being edited.
    pub block_uuid: String,
}

impl Default for SiteConfigurationState {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            drawer_open: false,
            page_modal_open: false,
            settings_category: None,
            settings_type: None,
            loading: false,
            placement: Placement::Left,
            new_block_position: 0,
            current_font: String::new(),
            drawer_view: None,
            active_setting: String::new(),
            active_sub_category: String::new(),
            block_type: String::new(),
            block_uuid: String::new(),
        }
    }
}

impl SiteConfigurationState {
    /// Derive the drawer visibility state.
    #[must_use]
    pub fn drawer_state(&self) -> DrawerState {
        if !self.drawer_open {
            return DrawerState::Closed;
        }
        self.drawer_view.map_or_else(
            || DrawerState::OpenWithSetting(self.active_setting.clone()),
            DrawerState::OpenWithView,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_block_settings_open_on_the_right() {
        for view in DrawerView::all() {
            let expected = if view == DrawerView::BlocksSettings {
                Placement::Right
            } else {
                Placement::Left
            };
            assert_eq!(view.placement(), expected, "{}", view.as_str());
        }
    }

    #[test]
    fn view_ids_round_trip() {
        for view in DrawerView::all() {
            assert_eq!(DrawerView::from_id(view.as_str()), Some(view));
        }
        assert_eq!(DrawerView::from_id("unknown"), None);
    }

    #[test]
    fn view_serializes_as_editor_id() {
        let encoded = serde_json::to_value(DrawerView::BlocksSettings).expect("encode");
        assert_eq!(encoded, "blocksSettings");
    }

    #[test]
    fn default_state_is_closed_on_the_left() {
        let state = SiteConfigurationState::default();
        assert_eq!(state.drawer_state(), DrawerState::Closed);
        assert_eq!(state.placement, Placement::Left);
        assert!(state.current_font.is_empty());
    }
}
