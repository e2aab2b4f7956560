use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Machine as the backend sends it.
///
/// Only the fields the client reasons about are typed; the rest of the
/// record is carried in `extra` so an update does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub serial_number: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_line_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A piece of equipment, optionally assigned to a production line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub production_line_id: Option<i64>,
    #[serde(default)]
    pub plant_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

/// A metric the backend knows how to track for a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub id: i64,
    pub name: String,
    pub unit: String,
}

/// Latest value of one metric on a machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineMetric {
    #[serde(default)]
    pub metric_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_at: Option<String>,
}

/// Body of `POST /machines/{id}/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReading {
    pub metric_id: i64,
    pub value: f64,
    pub measured_at: DateTime<Utc>,
}

impl MetricReading {
    /// A reading taken now.
    pub fn now(metric_id: i64, value: f64) -> Self {
        Self {
            metric_id,
            value,
            measured_at: Utc::now(),
        }
    }
}

/// Metrics every machine can be configured with.
pub fn metric_catalog() -> Vec<MetricDefinition> {
    [
        (1, "Kilometraje", "km"),
        (2, "Horas de uso", "h"),
        (3, "Ciclos de trabajo", "ciclos"),
        (4, "Horas de motor", "h"),
        (5, "Temperatura", "°C"),
        (6, "Presión", "bar"),
        (7, "Vibración", "mm/s"),
    ]
    .into_iter()
    .map(|(id, name, unit)| MetricDefinition {
        id,
        name: name.to_string(),
        unit: unit.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_machine_fields_survive() {
        let r: MachineResource = serde_json::from_value(json!({
            "id": 4,
            "serialNumber": "SN-1",
            "name": "Press",
            "powerConsumption": 12.5,
        }))
        .unwrap();
        assert_eq!(r.extra["powerConsumption"], 12.5);
        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["powerConsumption"], 12.5);
        assert_eq!(back["serialNumber"], "SN-1");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = metric_catalog();
        assert_eq!(catalog.len(), 7);
        let mut ids: Vec<i64> = catalog.iter().map(|m| m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn reading_wire_shape() {
        let v = serde_json::to_value(MetricReading::now(2, 130.0)).unwrap();
        assert_eq!(v["metricId"], 2);
        assert_eq!(v["value"], 130.0);
        assert!(v["measuredAt"].is_string());
    }
}
