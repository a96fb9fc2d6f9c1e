//! Test fixtures for editor state tests.

use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt};
use vitrine_blocks::shipping_countdown_timer::COMPONENT_NAME;
use vitrine_blocks::{Block, CategoryTreeItem};

/// Install a test-friendly tracing subscriber; repeated calls are ignored.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Shipping countdown timer block with a Saturday override.
#[must_use]
pub fn shipping_timer_block(uuid: &str) -> Block {
    Block::new(COMPONENT_NAME, "content", uuid).with_content(json!({
        "cutoffTime": "14:00",
        "timezone": "Europe/Berlin",
        "workdays": { "saturday": true }
    }))
}

/// Plain text block.
#[must_use]
pub fn text_block(uuid: &str) -> Block {
    Block::new("TextCard", "content", uuid).with_content(json!({ "text": "Hello" }))
}

/// Leaf item category.
#[must_use]
pub fn category(id: u32) -> CategoryTreeItem {
    CategoryTreeItem {
        id,
        parent_category_id: None,
        level: Some(1),
        kind: "item".to_string(),
        item_count: Some(0),
        children: Vec::new(),
    }
}
