use serde::{Deserialize, Serialize};

use super::InventoryPart;

/// Status of a purchase order the backend sent without one.
pub const PENDING: &str = "PENDING";

/// Purchase order as the backend sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub inventory_part_id: i64,

    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub order_date: String,

    #[serde(default)]
    pub received_date: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Request to restock one inventory part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: Option<i64>,
    pub inventory_part_id: i64,
    pub quantity: u32,
    pub price: f64,
    pub order_date: String,
    pub received_date: Option<String>,
    pub status: String,
    pub user_id: Option<i64>,
    /// Filled in by a single-order read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_part: Option<InventoryPart>,
}

impl PurchaseOrder {
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
