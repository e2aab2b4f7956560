use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError, RequestOptions};
use tracing::info;

use crate::assembler::inventory_part as assembler;
use crate::model::InventoryPart;

const ENDPOINT: &str = "/inventory-parts";

/// Spare parts per plant.
pub struct InventoryPartService {
    client: Arc<ApiClient>,
}

impl InventoryPartService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_by_plant(&self, plant_id: i64) -> Result<Vec<InventoryPart>, ApiError> {
        let resp = self
            .client
            .get_with(ENDPOINT, RequestOptions::new().query("plantId", plant_id))
            .await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<InventoryPart, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn create(&self, part: &InventoryPart) -> Result<InventoryPart, ApiError> {
        require_fields(
            "inventory part",
            &[
                ("code", !part.code.trim().is_empty()),
                ("name", !part.name.trim().is_empty()),
                ("plant", part.plant_id.is_some_and(|p| p > 0)),
            ],
        )?;
        let body = assembler::to_create_resource(part);
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = created.id, code = %created.code, "inventory part created");
        Ok(created)
    }

    /// Description, stock levels and price; other fields are not sent.
    pub async fn update(&self, id: i64, part: &InventoryPart) -> Result<InventoryPart, ApiError> {
        let body = assembler::to_update_resource(part);
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }
}
