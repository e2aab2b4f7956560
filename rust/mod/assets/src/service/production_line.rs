use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError, RequestOptions};
use tracing::info;

use crate::assembler::production_line as assembler;
use crate::model::ProductionLine;

const ENDPOINT: &str = "/production-lines";

/// CRUD over `/production-lines`.
pub struct ProductionLineService {
    client: Arc<ApiClient>,
}

impl ProductionLineService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All lines, or those of one plant via the `plantId` query.
    pub async fn list(&self, plant_id: Option<i64>) -> Result<Vec<ProductionLine>, ApiError> {
        let mut opts = RequestOptions::new();
        if let Some(plant_id) = plant_id {
            opts = opts.query("plantId", plant_id);
        }
        let resp = self.client.get_with(ENDPOINT, opts).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    /// Lines of one plant through the dedicated route.
    pub async fn list_by_plant(&self, plant_id: i64) -> Result<Vec<ProductionLine>, ApiError> {
        let resp = self
            .client
            .get(&format!("{}/plant/{}", ENDPOINT, plant_id))
            .await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<ProductionLine, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn create(&self, line: &ProductionLine) -> Result<ProductionLine, ApiError> {
        validate(line)?;
        let body = assembler::to_resource(&ProductionLine { id: 0, ..line.clone() });
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = created.id, code = %created.code, "production line created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, line: &ProductionLine) -> Result<ProductionLine, ApiError> {
        validate(line)?;
        let body = assembler::to_resource(line);
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }
}

fn validate(line: &ProductionLine) -> Result<(), ApiError> {
    require_fields(
        "production line",
        &[
            ("name", !line.name.trim().is_empty()),
            ("code", !line.code.trim().is_empty()),
            ("capacity units per hour", line.capacity_units_per_hour > 0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{client, offline_client, serve};
    use axum::extract::{Path, Query};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[tokio::test]
    async fn zero_capacity_is_rejected() {
        let service = ProductionLineService::new(offline_client());
        let line = ProductionLine {
            name: "Envasado".into(),
            code: "PL-1".into(),
            ..Default::default()
        };
        let err = service.create(&line).await.unwrap_err();
        assert!(matches!(err, ApiError::Invalid(ref m) if m.contains("capacity")));
    }

    #[tokio::test]
    async fn list_filters_by_plant() {
        let router = Router::new()
            .route(
                "/production-lines",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    let plant: i64 = q.get("plantId").and_then(|p| p.parse().ok()).unwrap_or(0);
                    Json(json!([{
                        "id": 1,
                        "name": "A",
                        "code": "A",
                        "maxUnitsPerHour": 10,
                        "plantId": plant,
                    }]))
                }),
            )
            .route(
                "/production-lines/plant/{id}",
                get(|Path(id): Path<i64>| async move {
                    Json(json!({"data": [{
                        "id": 2,
                        "name": "B",
                        "code": "B",
                        "maxUnitsPerHour": 5,
                        "plantId": id,
                    }]}))
                }),
            );
        let base = serve(router).await;
        let service = ProductionLineService::new(client(&base));

        let lines = service.list(Some(3)).await.unwrap();
        assert_eq!(lines[0].plant_id, 3);
        assert_eq!(lines[0].capacity_units_per_hour, 10);

        let lines = service.list_by_plant(4).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plant_id, 4);
    }

    #[tokio::test]
    async fn get_null_body_is_an_error() {
        let router = Router::new().route(
            "/production-lines/{id}",
            get(|| async { Json(Value::Null) }),
        );
        let base = serve(router).await;
        let service = ProductionLineService::new(client(&base));
        let err = service.get(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Assemble(_)));
    }
}
