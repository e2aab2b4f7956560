use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{
    CreateInventoryPartResource, InventoryPart, InventoryPartResource, StockStatus,
    UpdateInventoryPartResource,
};

/// Missing stock levels and price read as zero.
pub fn to_entity(resource: InventoryPartResource) -> InventoryPart {
    let current_stock = resource.current_stock.unwrap_or_default();
    let min_stock = resource.min_stock.unwrap_or_default();
    InventoryPart {
        id: resource.id,
        code: resource.code,
        name: resource.name,
        description: resource.description.unwrap_or_default(),
        current_stock,
        min_stock,
        unit_price: resource.unit_price.unwrap_or_default(),
        plant_id: resource.plant_id,
        stock_status: StockStatus::from_levels(current_stock, min_stock),
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<InventoryPart, AssembleError> {
    assemble::single::<InventoryPartResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<InventoryPart> {
    assemble::list::<InventoryPartResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(entity: &InventoryPart) -> InventoryPartResource {
    InventoryPartResource {
        id: entity.id,
        code: entity.code.clone(),
        name: entity.name.clone(),
        description: Some(entity.description.clone()),
        current_stock: Some(entity.current_stock),
        min_stock: Some(entity.min_stock),
        unit_price: Some(entity.unit_price),
        plant_id: entity.plant_id,
    }
}

/// Callers check `plant_id` first; an absent one is sent as zero.
pub fn to_create_resource(entity: &InventoryPart) -> CreateInventoryPartResource {
    CreateInventoryPartResource {
        code: entity.code.trim().to_string(),
        name: entity.name.trim().to_string(),
        description: entity.description.clone(),
        current_stock: entity.current_stock,
        min_stock: entity.min_stock,
        unit_price: entity.unit_price,
        plant_id: entity.plant_id.unwrap_or_default(),
    }
}

pub fn to_update_resource(entity: &InventoryPart) -> UpdateInventoryPartResource {
    UpdateInventoryPartResource {
        description: entity.description.clone(),
        current_stock: entity.current_stock,
        min_stock: entity.min_stock,
        unit_price: entity.unit_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_stock_is_out_of_stock() {
        let part =
            to_entity_from_value(&json!({"id": 1, "code": "F-01", "name": "Filtro"})).unwrap();
        assert_eq!(part.current_stock, 0);
        assert_eq!(part.stock_status, StockStatus::OutOfStock);
        assert_eq!(part.description, "");
    }

    #[test]
    fn status_follows_levels() {
        let part = to_entity_from_value(&json!({
            "id": 2, "code": "A-1", "name": "Aceite",
            "currentStock": 4, "minStock": 4, "unitPrice": 12.5,
        }))
        .unwrap();
        assert_eq!(part.stock_status, StockStatus::Medium);
        assert_eq!(part.unit_price, 12.5);
    }

    #[test]
    fn update_sends_only_mutable_fields() {
        let part = InventoryPart {
            id: 2,
            code: "A-1".into(),
            name: "Aceite".into(),
            current_stock: 9,
            plant_id: Some(3),
            ..Default::default()
        };
        let wire = serde_json::to_value(to_update_resource(&part)).unwrap();
        let keys: Vec<&str> = wire.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        assert!(wire.get("code").is_none());
        assert_eq!(wire["currentStock"], 9);
    }
}
