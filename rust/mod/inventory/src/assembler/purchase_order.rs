use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{PurchaseOrder, PurchaseOrderResource, PENDING};

pub fn to_entity(resource: PurchaseOrderResource) -> PurchaseOrder {
    PurchaseOrder {
        id: resource.id,
        inventory_part_id: resource.inventory_part_id,
        quantity: resource.quantity,
        price: resource.price,
        order_date: resource.order_date,
        received_date: resource.received_date,
        status: resource
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| PENDING.to_string()),
        user_id: resource.user_id,
        inventory_part: None,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<PurchaseOrder, AssembleError> {
    assemble::single::<PurchaseOrderResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<PurchaseOrder> {
    assemble::list::<PurchaseOrderResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(entity: &PurchaseOrder) -> PurchaseOrderResource {
    PurchaseOrderResource {
        id: entity.id,
        inventory_part_id: entity.inventory_part_id,
        quantity: entity.quantity,
        price: entity.price,
        order_date: entity.order_date.clone(),
        received_date: entity.received_date.clone(),
        status: Some(entity.status.clone()).filter(|s| !s.is_empty()),
        user_id: entity.user_id,
    }
}
