use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError};
use tracing::info;

use crate::assembler::purchase_order as assembler;
use crate::model::PurchaseOrder;
use crate::service::InventoryPartService;

const ENDPOINT: &str = "/purchase-orders";

/// Purchase orders for inventory parts.
pub struct PurchaseOrderService {
    client: Arc<ApiClient>,
    parts: InventoryPartService,
}

impl PurchaseOrderService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            parts: InventoryPartService::new(client.clone()),
            client,
        }
    }

    pub async fn list(&self) -> Result<Vec<PurchaseOrder>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    /// One order joined with the inventory part it restocks.
    pub async fn get(&self, id: i64) -> Result<PurchaseOrder, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        let mut order = assembler::to_entity_from_value(&resp.data)?;
        order.inventory_part = Some(self.parts.get(order.inventory_part_id).await?);
        Ok(order)
    }

    pub async fn create(&self, order: &PurchaseOrder) -> Result<PurchaseOrder, ApiError> {
        validate(order)?;
        let body = assembler::to_resource(&PurchaseOrder { id: None, ..order.clone() });
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(
            id = ?created.id,
            part = created.inventory_part_id,
            quantity = created.quantity,
            "purchase order created"
        );
        Ok(created)
    }

    pub async fn update(&self, id: i64, order: &PurchaseOrder) -> Result<PurchaseOrder, ApiError> {
        validate(order)?;
        let body = assembler::to_resource(&PurchaseOrder { id: Some(id), ..order.clone() });
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }
}

fn validate(order: &PurchaseOrder) -> Result<(), ApiError> {
    require_fields(
        "purchase order",
        &[
            ("inventory part", order.inventory_part_id > 0),
            ("quantity", order.quantity > 0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockStatus;
    use crate::service::testing::{client, offline_client, serve};
    use axum::extract::Path;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn create_requires_part_and_quantity() {
        let err = PurchaseOrderService::new(offline_client())
            .create(&PurchaseOrder::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Invalid(ref m) if m.contains("inventory part") && m.contains("quantity")
        ));
    }

    #[tokio::test]
    async fn get_joins_inventory_part() {
        let router = Router::new()
            .route(
                "/purchase-orders/{id}",
                get(|Path(id): Path<i64>| async move {
                    Json(json!({"id": id, "inventoryPartId": 8, "quantity": 2, "price": 3.5}))
                }),
            )
            .route(
                "/inventory-parts/{id}",
                get(|Path(id): Path<i64>| async move {
                    Json(json!({"id": id, "code": "F", "name": "Filtro", "currentStock": 0}))
                }),
            );
        let base = serve(router).await;
        let order = PurchaseOrderService::new(client(&base)).get(1).await.unwrap();
        let part = order.inventory_part.unwrap();
        assert_eq!(part.id, 8);
        assert_eq!(part.stock_status, StockStatus::OutOfStock);
        assert_eq!(order.status, "PENDING");
    }
}
