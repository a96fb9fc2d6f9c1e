//! Session-scoped editor state and its transitions.
//!
//! # Design
//! - One explicitly constructed [`SiteConfiguration`] per page session, passed
//!   by reference to whatever owns the editor UI. No global lookup.
//! - Stylesheet loading goes through an injected [`DocumentHeadWriter`];
//!   headless contexts inject the no-op writer.
//! - Listeners run synchronously after a transition that changed the state.
//! - `set_active_setting` clears the sub category, `set_active_sub_category`
//!   leaves the active setting alone.

pub mod fonts;
mod listeners;
pub mod state;

use tracing::{debug, warn};
use vitrine_blocks::{Block, CategoryTreeItem};

use crate::config::RuntimeConfig;
use crate::head::DocumentHeadWriter;
use fonts::{INDUSTRY_STYLESHEET_URL, font_style, is_industry, resolve_font};
use listeners::Listeners;
pub use listeners::SubscriptionId;
use state::{DrawerState, DrawerView, Placement, SettingsType, SiteConfigurationState};

/// Editor UI state plus the capability used to load fonts into the page.
#[derive(Debug)]
pub struct SiteConfiguration<W: DocumentHeadWriter> {
    state: SiteConfigurationState,
    head: W,
    listeners: Listeners,
}

impl<W: DocumentHeadWriter> SiteConfiguration<W> {
    /// Create the session state, seeding the preview font from runtime config.
    #[must_use]
    pub fn new(head: W, runtime: &RuntimeConfig) -> Self {
        let runtime_font = runtime.public.font.as_deref();
        let state = SiteConfigurationState {
            current_font: font_style(runtime_font),
            ..SiteConfigurationState::default()
        };
        let configuration = Self {
            state,
            head,
            listeners: Listeners::default(),
        };
        // Only the Adobe kit is loaded eagerly; Google fonts are already in the shop layout.
        if runtime_font.is_some_and(is_industry) {
            configuration.ensure_stylesheet(INDUSTRY_STYLESHEET_URL);
        }
        configuration
    }

    /// Borrow the current state.
    #[must_use]
    pub const fn state(&self) -> &SiteConfigurationState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SiteConfigurationState {
        self.state.clone()
    }

    /// Injected head writer.
    #[must_use]
    pub const fn head(&self) -> &W {
        &self.head
    }

    /// Blocks of the page being edited.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.state.data
    }

    /// Whether the drawer is visible.
    #[must_use]
    pub const fn drawer_open(&self) -> bool {
        self.state.drawer_open
    }

    /// Whether the page modal is visible.
    #[must_use]
    pub const fn page_modal_open(&self) -> bool {
        self.state.page_modal_open
    }

    /// Category whose settings are being edited.
    #[must_use]
    pub const fn settings_category(&self) -> Option<&CategoryTreeItem> {
        self.state.settings_category.as_ref()
    }

    /// Which settings of the category are shown.
    #[must_use]
    pub const fn settings_type(&self) -> Option<SettingsType> {
        self.state.settings_type
    }

    /// Whether editor data is loading.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.state.loading
    }

    /// Drawer side.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.state.placement
    }

    /// Insert position for the next added block.
    #[must_use]
    pub const fn new_block_position(&self) -> i64 {
        self.state.new_block_position
    }

    /// CSS declaration of the preview font.
    #[must_use]
    pub fn current_font(&self) -> &str {
        &self.state.current_font
    }

    /// View shown in the drawer.
    #[must_use]
    pub const fn drawer_view(&self) -> Option<DrawerView> {
        self.state.drawer_view
    }

    /// Active site setting group, empty when unset.
    #[must_use]
    pub fn active_setting(&self) -> &str {
        &self.state.active_setting
    }

    /// Active sub category, empty when unset.
    #[must_use]
    pub fn active_sub_category(&self) -> &str {
        &self.state.active_sub_category
    }

    /// Component name of the block being edited, empty when unset.
    #[must_use]
    pub fn block_type(&self) -> &str {
        &self.state.block_type
    }

    /// Uuid of the block being edited, empty when unset.
    #[must_use]
    pub fn block_uuid(&self) -> &str {
        &self.state.block_uuid
    }

    /// Drawer visibility derived from the state.
    #[must_use]
    pub fn drawer_state(&self) -> DrawerState {
        self.state.drawer_state()
    }

    /// Register a listener called after every state change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&SiteConfigurationState) + 'static,
    ) -> SubscriptionId {
        self.listeners.add(Box::new(listener))
    }

    /// Drop a listener; returns `false` when the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Load a display font into the page and use it for the preview.
    ///
    /// Blank names are ignored. Head write failures are logged and the
    /// preview font is updated regardless.
    pub fn load_font(&mut self, font_name: &str) {
        let Some(font) = resolve_font(font_name) else {
            return;
        };
        self.ensure_stylesheet(&font.stylesheet_url);
        let declaration = font.css_declaration();
        self.update("load_font", |state| state.current_font = declaration);
    }

    /// Open the drawer on `view`, remembering `block` as the block being edited.
    pub fn open_drawer_with_view(&mut self, view: DrawerView, block: Option<&Block>) {
        self.update("open_drawer_with_view", |state| {
            if let Some(block) = block {
                state.block_type.clone_from(&block.name);
                state.block_uuid.clone_from(&block.meta.uuid);
            }
            state.drawer_view = Some(view);
            state.drawer_open = true;
            state.active_setting.clear();
            state.placement = view.placement();
        });
    }

    /// Hide the drawer. The edited block and placement are kept.
    pub fn close_drawer(&mut self) {
        self.update("close_drawer", |state| {
            state.drawer_open = false;
            state.drawer_view = None;
            state.active_setting.clear();
        });
    }

    /// Store the insert position for the next block; not bounds checked.
    pub fn update_new_block_position(&mut self, position: i64) {
        self.update("update_new_block_position", |state| {
            state.new_block_position = position;
        });
    }

    /// Show or hide the page modal.
    pub fn toggle_page_modal(&mut self, value: bool) {
        self.update("toggle_page_modal", |state| state.page_modal_open = value);
    }

    /// Select the category and settings type to edit.
    pub fn set_settings_category(
        &mut self,
        category: Option<CategoryTreeItem>,
        settings_type: Option<SettingsType>,
    ) {
        self.update("set_settings_category", |state| {
            state.settings_type = settings_type;
            state.settings_category = category;
        });
    }

    /// Select a sub category inside the active setting group.
    pub fn set_active_sub_category(&mut self, sub_category: &str) {
        self.update("set_active_sub_category", |state| {
            state.active_sub_category = sub_category.to_string();
        });
    }

    /// Open the drawer on a site setting group.
    pub fn set_active_setting(&mut self, setting: &str) {
        self.update("set_active_setting", |state| {
            state.active_sub_category.clear();
            state.active_setting = setting.to_string();
            state.drawer_open = true;
            state.placement = Placement::Left;
            state.drawer_view = None;
        });
    }

    /// Replace the blocks of the page being edited.
    pub fn set_blocks(&mut self, blocks: Vec<Block>) {
        self.update("set_blocks", |state| state.data = blocks);
    }

    /// Flag editor data as loading.
    pub fn set_loading(&mut self, loading: bool) {
        self.update("set_loading", |state| state.loading = loading);
    }

    fn update(&mut self, action: &'static str, mutate: impl FnOnce(&mut SiteConfigurationState)) {
        let previous = self.state.clone();
        mutate(&mut self.state);
        if self.state == previous {
            return;
        }
        debug!(
            action,
            drawer_open = self.state.drawer_open,
            placement = self.state.placement.as_str(),
            "site configuration changed"
        );
        self.listeners.notify(&self.state);
    }

    fn ensure_stylesheet(&self, href: &str) {
        match self.head.ensure_stylesheet(href) {
            Ok(outcome) => debug!(href, ?outcome, "stylesheet requested"),
            Err(err) => warn!(href, error = %err, "failed to append stylesheet"),
        }
    }
}
