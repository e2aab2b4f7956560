use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError};
use serde_json::json;
use tracing::{info, warn};

use crate::assembler::machine as assembler;
use crate::model::{metric_catalog, Machine, MachineMetric, MetricDefinition, MetricReading};

const ENDPOINT: &str = "/machines";

/// Machines, their line assignment and their metrics.
pub struct MachineService {
    client: Arc<ApiClient>,
}

impl MachineService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Machine>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn by_production_line(&self, line_id: i64) -> Result<Vec<Machine>, ApiError> {
        let resp = self
            .client
            .get(&format!("{}/production-line/{}", ENDPOINT, line_id))
            .await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn by_plant(&self, plant_id: i64) -> Result<Vec<Machine>, ApiError> {
        let resp = self
            .client
            .get(&format!("{}/plant/{}", ENDPOINT, plant_id))
            .await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<Machine, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    /// Create a machine.
    ///
    /// Some backends answer 201 with an empty body and a `Location`
    /// header; the id is then taken from the header and the submitted
    /// machine is returned with it.
    pub async fn create(&self, machine: &Machine) -> Result<Machine, ApiError> {
        require_fields(
            "machine",
            &[
                ("name", !machine.name.trim().is_empty()),
                ("serial number", !machine.serial_number.trim().is_empty()),
            ],
        )?;
        let body = assembler::to_resource(&Machine { id: None, ..machine.clone() });
        let resp = self.client.post(ENDPOINT, &body).await?;

        if !resp.is_empty() {
            return Ok(assembler::to_entity_from_value(&resp.data)?);
        }
        let id = resp.location_id().and_then(|id| id.parse::<i64>().ok());
        if id.is_none() {
            warn!(location = ?resp.location, "machine created without a usable id");
        }
        info!(?id, serial = %machine.serial_number, "machine created");
        Ok(Machine { id, ..machine.clone() })
    }

    /// Move a machine onto a production line.
    pub async fn assign(&self, id: i64, line_id: i64) -> Result<(), ApiError> {
        self.client
            .put(
                &format!("{}/{}/assign", ENDPOINT, id),
                &json!({ "productionLineId": line_id }),
            )
            .await?;
        info!(id, line_id, "machine assigned");
        Ok(())
    }

    /// Replace a machine. An empty answer echoes the submitted record.
    pub async fn update(&self, id: i64, machine: &Machine) -> Result<Machine, ApiError> {
        let body = assembler::to_resource(machine);
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        if resp.is_empty() {
            return Ok(Machine { id: Some(id), ..machine.clone() });
        }
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }

    pub async fn metrics(&self, id: i64) -> Result<Vec<MachineMetric>, ApiError> {
        let resp = self.client.get(&format!("{}/{}/metrics", ENDPOINT, id)).await?;
        Ok(assembler::to_metric_list(&resp))
    }

    pub async fn record_metric(&self, id: i64, reading: &MetricReading) -> Result<(), ApiError> {
        if !reading.value.is_finite() {
            return Err(ApiError::Invalid("metric value must be a number".into()));
        }
        self.client
            .post(&format!("{}/{}/metrics", ENDPOINT, id), reading)
            .await?;
        Ok(())
    }

    /// Predefined metrics. Static; no request.
    pub fn catalog(&self) -> Vec<MetricDefinition> {
        metric_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{client, serve};
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use serde_json::Value;

    fn press() -> Machine {
        Machine {
            serial_number: "SN-77".into(),
            name: "Press".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_takes_id_from_location() {
        let router = Router::new().route(
            "/machines",
            post(|| async {
                (StatusCode::CREATED, [(header::LOCATION, "/api/v1/machines/42")])
            }),
        );
        let base = serve(router).await;
        let created = MachineService::new(client(&base)).create(&press()).await.unwrap();
        assert_eq!(created.id, Some(42));
        assert_eq!(created.serial_number, "SN-77");
    }

    #[tokio::test]
    async fn create_prefers_body() {
        let router = Router::new().route(
            "/machines",
            post(|Json(body): Json<Value>| async move {
                let mut body = body;
                body["id"] = 9.into();
                (StatusCode::CREATED, Json(body))
            }),
        );
        let base = serve(router).await;
        let created = MachineService::new(client(&base)).create(&press()).await.unwrap();
        assert_eq!(created.id, Some(9));
    }

    #[tokio::test]
    async fn assign_and_metrics() {
        let router = Router::new()
            .route(
                "/machines/{id}/assign",
                put(|Json(body): Json<Value>| async move {
                    if body["productionLineId"] == 5 {
                        StatusCode::NO_CONTENT.into_response()
                    } else {
                        StatusCode::BAD_REQUEST.into_response()
                    }
                }),
            )
            .route(
                "/machines/{id}/metrics",
                get(|| async { Json(json!([{"metricId": 1, "value": 10.5, "unit": "km"}])) })
                    .post(|Json(body): Json<Value>| async move {
                        if body["metricId"] == 1 && body["measuredAt"].is_string() {
                            StatusCode::CREATED
                        } else {
                            StatusCode::BAD_REQUEST
                        }
                    }),
            );
        let base = serve(router).await;
        let service = MachineService::new(client(&base));

        service.assign(1, 5).await.unwrap();
        assert_eq!(service.assign(1, 6).await.unwrap_err().status(), Some(400));

        let metrics = service.metrics(1).await.unwrap();
        assert_eq!(metrics[0].value, 10.5);
        service.record_metric(1, &MetricReading::now(1, 11.0)).await.unwrap();
    }

    #[tokio::test]
    async fn by_production_line_propagates_failures() {
        let router = Router::new().route(
            "/machines/production-line/{id}",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;
        let err = MachineService::new(client(&base))
            .by_production_line(1)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
