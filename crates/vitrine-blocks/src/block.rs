//! Shop API shapes the editor consumes but does not own.
//!
//! # Design
//! - Keep only the fields the editor reads; everything else rides along in
//!   `content`/`configuration` as raw JSON.
//! - Serde keys follow the shop API (camelCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A placeable content unit on a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Display name of the block component (e.g. `ShippingCountdownTimer`).
    pub name: String,
    /// Block type discriminator used by the page renderer.
    #[serde(rename = "type")]
    pub kind: String,
    /// Editable block content, shape depends on `name`.
    #[serde(default)]
    pub content: Value,
    /// Optional layout configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    /// Identity metadata.
    pub meta: BlockMeta,
}

impl Block {
    /// Build a block with empty content.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            content: Value::Null,
            configuration: None,
            meta: BlockMeta {
                uuid: uuid.into(),
                is_global_template: None,
            },
        }
    }

    /// Attach content to the block.
    #[must_use]
    pub fn with_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }
}

/// Identity metadata carried by every block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMeta {
    /// Unique identifier of the block instance.
    pub uuid: String,
    /// Set when the block comes from a shared template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_global_template: Option<bool>,
}

/// Node of the shop category tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTreeItem {
    /// Category identifier.
    pub id: u32,
    /// Parent category, absent for root nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<u32>,
    /// Depth in the tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Category type (`item`, `content`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Number of items linked to the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u64>,
    /// Child categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_reads_shop_api_payload() {
        let payload = json!({
            "name": "ShippingCountdownTimer",
            "type": "content",
            "content": { "cutoffTime": "14:30" },
            "meta": { "uuid": "a1b2" }
        });
        let block: Block = serde_json::from_value(payload).expect("block payload");
        assert_eq!(block.name, "ShippingCountdownTimer");
        assert_eq!(block.kind, "content");
        assert_eq!(block.meta.uuid, "a1b2");
        assert!(block.configuration.is_none());
        assert_eq!(block.content["cutoffTime"], "14:30");
    }

    #[test]
    fn nested_categories_decode_recursively() {
        let category: CategoryTreeItem = serde_json::from_value(json!({
            "id": 1,
            "type": "item",
            "children": [{ "id": 2, "parentCategoryId": 1, "type": "item" }]
        }))
        .expect("category tree");
        assert_eq!(category.children.len(), 1);
        assert_eq!(category.children[0].parent_category_id, Some(1));
    }

    #[test]
    fn blocks_compare_by_value() {
        let block = Block::new("Banner", "content", "b-1").with_content(json!({ "text": "Sale" }));
        let copy = block.clone();
        assert_eq!(block, copy);
        assert_ne!(block, copy.with_content(json!({ "text": "Soon" })));
    }

    #[test]
    fn category_children_default_to_empty() {
        let category: CategoryTreeItem =
            serde_json::from_value(json!({ "id": 16, "type": "item" })).expect("category");
        assert_eq!(category.id, 16);
        assert!(category.children.is_empty());
        let encoded = serde_json::to_value(&category).expect("encode");
        assert!(encoded.get("children").is_none());
    }
}
