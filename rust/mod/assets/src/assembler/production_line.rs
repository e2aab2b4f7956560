use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{ProductionLine, ProductionLineResource};

pub fn to_entity(resource: ProductionLineResource) -> ProductionLine {
    ProductionLine {
        id: resource.id,
        name: resource.name,
        code: resource.code,
        capacity_units_per_hour: resource.max_units_per_hour,
        unit: resource.unit,
        status: resource.status,
        plant_id: resource.plant_id,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<ProductionLine, AssembleError> {
    assemble::single::<ProductionLineResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<ProductionLine> {
    assemble::list::<ProductionLineResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

/// Resource for create and update; `id` is omitted when unset.
pub fn to_resource(entity: &ProductionLine) -> ProductionLineResource {
    ProductionLineResource {
        id: entity.id,
        name: entity.name.clone(),
        code: entity.code.clone(),
        max_units_per_hour: entity.capacity_units_per_hour,
        unit: entity.unit.clone(),
        status: entity.status.clone(),
        plant_id: entity.plant_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capacity_is_renamed() {
        let line = to_entity_from_value(&json!({
            "id": 7,
            "name": "Envasado",
            "code": "PL-7",
            "maxUnitsPerHour": 1200,
            "unit": "bottles",
            "plantId": 3,
        }))
        .unwrap();
        assert_eq!(line.capacity_units_per_hour, 1200);
        assert_eq!(line.plant_id, 3);

        let wire = serde_json::to_value(to_resource(&line)).unwrap();
        assert_eq!(wire["maxUnitsPerHour"], 1200);
        assert!(wire.get("capacityUnitsPerHour").is_none());
    }

    #[test]
    fn new_line_has_no_id_on_the_wire() {
        let wire = serde_json::to_value(to_resource(&ProductionLine::default())).unwrap();
        assert!(wire.get("id").is_none());
    }
}
