use rust_decimal::Decimal;
use serde::Deserialize;

use crate::data::decode_json;
use crate::error::ChartResult;

/// Nested video-game sales tree: platforms under the root, titles as leaves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalesNode {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub children: Vec<SalesNode>,
}

impl SalesNode {
    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        decode_json(raw, "sales tree dataset")
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(SalesNode::leaf_count).sum()
        }
    }
}
