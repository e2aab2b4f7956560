use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError};
use tracing::info;

use crate::assembler;
use crate::model::{NewPersonnel, Personnel};

const ENDPOINT: &str = "/users";

/// Staff management over `/users`.
pub struct PersonnelService {
    client: Arc<ApiClient>,
}

impl PersonnelService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Personnel>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<Personnel, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn create(&self, input: &NewPersonnel) -> Result<Personnel, ApiError> {
        require_fields(
            "personnel",
            &[
                ("username", !input.code.trim().is_empty()),
                ("first name", !input.first_name.trim().is_empty()),
                ("last name", !input.last_name.trim().is_empty()),
                ("email", !input.email.trim().is_empty()),
                ("password", !input.password.is_empty()),
            ],
        )?;
        let body = assembler::to_create_resource(input);
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = created.id, username = %created.code, "personnel created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, person: &Personnel) -> Result<Personnel, ApiError> {
        let body = assembler::to_update_resource(person);
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }
}
