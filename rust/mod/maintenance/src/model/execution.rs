use serde::{Deserialize, Serialize};

/// Spare part consumed while executing a work order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_part_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
}

/// Record of a work order carried out on site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedWorkOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub annotations: String,

    /// RFC 3339 timestamp.
    #[serde(default)]
    pub execution_date: String,

    #[serde(default)]
    pub production_line_id: i64,

    #[serde(default)]
    pub intervened_machine_ids: Vec<i64>,

    #[serde(default)]
    pub assigned_technician_ids: Vec<i64>,

    #[serde(default)]
    pub executed_tasks: Vec<String>,

    #[serde(default)]
    pub used_products: Vec<UsedProduct>,

    /// Image URLs from the image storage.
    #[serde(default)]
    pub files: Vec<String>,

    #[serde(default)]
    pub work_order_id: i64,
}

/// What the technician reports when closing a work order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub production_line_id: i64,
    #[serde(default)]
    pub machine_ids: Vec<i64>,
    #[serde(default)]
    pub technician_ids: Vec<i64>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub products: Vec<UsedProduct>,
    #[serde(default)]
    pub images: Vec<String>,
}
