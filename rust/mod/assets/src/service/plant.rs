use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError};
use tracing::info;

use crate::assembler::plant as assembler;
use crate::model::Plant;

const ENDPOINT: &str = "/plants";

/// CRUD over `/plants`.
pub struct PlantService {
    client: Arc<ApiClient>,
}

impl PlantService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Plant>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<Plant, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    /// Name, address and contact email are required; a plant missing any
    /// of them is rejected without a request.
    pub async fn create(&self, plant: &Plant) -> Result<Plant, ApiError> {
        validate(plant)?;
        let body = assembler::to_create_resource(plant);
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = created.id, name = %created.name, "plant created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, plant: &Plant) -> Result<Plant, ApiError> {
        let body = assembler::to_resource(plant);
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        info!(id, "plant deleted");
        Ok(())
    }
}

fn validate(plant: &Plant) -> Result<(), ApiError> {
    require_fields(
        "plant",
        &[
            ("name", !plant.name.trim().is_empty()),
            ("address", !plant.address.trim().is_empty()),
            (
                "email",
                plant.email.as_deref().is_some_and(|e| !e.trim().is_empty()),
            ),
        ],
    )
}
