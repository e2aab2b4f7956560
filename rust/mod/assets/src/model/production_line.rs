use serde::{Deserialize, Serialize};

/// Production line as the backend sends it.
///
/// The wire name for throughput is `maxUnitsPerHour`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLineResource {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub max_units_per_hour: u32,

    #[serde(default)]
    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub plant_id: i64,
}

/// A line inside a plant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLine {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub capacity_units_per_hour: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub plant_id: i64,
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}
