use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{Machine, MachineMetric, MachineResource};

pub fn to_entity(resource: MachineResource) -> Machine {
    Machine {
        id: resource.id,
        serial_number: resource.serial_number,
        name: resource.name,
        manufacturer: resource.manufacturer,
        model: resource.model,
        status: resource.status,
        production_line_id: resource.production_line_id,
        plant_id: resource.plant_id,
        attributes: resource.extra,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<Machine, AssembleError> {
    assemble::single::<MachineResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<Machine> {
    assemble::list::<MachineResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(entity: &Machine) -> MachineResource {
    MachineResource {
        id: entity.id,
        serial_number: entity.serial_number.clone(),
        name: entity.name.clone(),
        manufacturer: entity.manufacturer.clone(),
        model: entity.model.clone(),
        status: entity.status.clone(),
        production_line_id: entity.production_line_id,
        plant_id: entity.plant_id,
        extra: entity.attributes.clone(),
    }
}

pub fn to_metric_list(response: &ApiResponse) -> Vec<MachineMetric> {
    assemble::list(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn attributes_round_trip_through_resource() {
        let machine = to_entity_from_value(&json!({
            "id": 11,
            "serialNumber": "CNC-0042",
            "name": "Lathe",
            "productionLineId": 7,
            "powerConsumption": 4.2,
        }))
        .unwrap();
        assert_eq!(machine.production_line_id, Some(7));
        assert_eq!(machine.attributes["powerConsumption"], 4.2);

        let back = to_resource(&machine);
        assert_eq!(back.extra["powerConsumption"], 4.2);
        assert_eq!(back.id, Some(11));
    }

    #[test]
    fn metric_list_keeps_order() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "data": [
                {"metricId": 1, "value": 1500.0, "unit": "km"},
                {"metricId": 2, "value": 320.5},
            ]
        }))
        .unwrap();
        let metrics = to_metric_list(&resp);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].metric_id, 1);
        assert_eq!(metrics[1].value, 320.5);
    }
}
