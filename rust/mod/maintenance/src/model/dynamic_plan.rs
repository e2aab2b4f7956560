use serde::{Deserialize, Serialize};

use super::number_or_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanTaskResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Dynamic plan as the backend sends it.
///
/// Read and write share this shape; `amount` is text on the wire but
/// older records carry a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPlanResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub metric_id: i64,

    #[serde(default, deserialize_with = "number_or_string")]
    pub amount: String,

    #[serde(default)]
    pub machine_ids: Vec<i64>,

    #[serde(default)]
    pub tasks: Vec<PlanTaskResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanTask {
    /// 1-based position inside the plan.
    pub task_id: u32,
    pub task_name: String,
    pub task_description: String,
    pub machine_ids: Vec<i64>,
}

/// Maintenance triggered when a machine metric reaches `amount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPlan {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub plan_name: String,
    /// Metric id from the machine metric catalog.
    #[serde(default)]
    pub parameter: i64,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub machine_ids: Vec<i64>,
    #[serde(default)]
    pub tasks: Vec<PlanTask>,
}
