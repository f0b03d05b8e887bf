//! Budget line-item model.

use crate::model::new_id;
use serde::{Deserialize, Serialize};

/// One budget envelope with an allocation and the amount spent against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    pub name: String,
    /// Allocated amount.
    pub value: f64,
    /// Actual spend so far.
    pub cost: f64,
    /// Display color (hex string); no semantics in core.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BudgetItem {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            value,
            cost: 0.0,
            color: color.into(),
            category: None,
        }
    }
}

/// Shallow-merge patch for [`BudgetItem`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetItemPatch {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub cost: Option<f64>,
    pub color: Option<String>,
    pub category: Option<Option<String>>,
}

impl BudgetItemPatch {
    pub fn apply(self, item: &mut BudgetItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(value) = self.value {
            item.value = value;
        }
        if let Some(cost) = self.cost {
            item.cost = cost;
        }
        if let Some(color) = self.color {
            item.color = color;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
    }
}
