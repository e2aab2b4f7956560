use std::sync::Arc;

use mecanaut_client::assemble;
use mecanaut_client::{require_fields, ApiClient, ApiError};
use tracing::{info, warn};

use crate::assembler::work_order as assembler;
use crate::model::{NewWorkOrder, Technician, WorkOrder, ROLE_TECHNICAL};

const ENDPOINT: &str = "/work-orders";

/// Work orders and technician assignment.
pub struct WorkOrderService {
    client: Arc<ApiClient>,
}

impl WorkOrderService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All work orders, or those of one production line.
    pub async fn list(&self, production_line_id: Option<i64>) -> Result<Vec<WorkOrder>, ApiError> {
        let endpoint = match production_line_id {
            Some(line) => format!("{}/by-production-line/{}", ENDPOINT, line),
            None => ENDPOINT.to_string(),
        };
        let resp = self.client.get(&endpoint).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<WorkOrder, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn create(&self, order: &NewWorkOrder) -> Result<WorkOrder, ApiError> {
        require_fields(
            "work order",
            &[
                ("code", !order.code.trim().is_empty()),
                ("production line", order.production_line_id > 0),
            ],
        )?;
        let body = assembler::to_create_resource(order);
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = created.id, code = %created.code, "work order created");
        Ok(created)
    }

    /// Replace the technicians of a work order. The body is the bare id array.
    pub async fn assign_technicians(
        &self,
        id: i64,
        technician_ids: &[i64],
    ) -> Result<(), ApiError> {
        if technician_ids.is_empty() {
            return Err(ApiError::Invalid("at least one technician is required".into()));
        }
        self.client
            .put(&format!("{}/{}/technicians", ENDPOINT, id), technician_ids)
            .await?;
        info!(id, count = technician_ids.len(), "technicians assigned");
        Ok(())
    }

    /// Only technicians can change after creation: assign them (when any
    /// are given) and return the order as the server now has it.
    pub async fn update(&self, id: i64, technician_ids: &[i64]) -> Result<WorkOrder, ApiError> {
        if !technician_ids.is_empty() {
            self.assign_technicians(id, technician_ids).await?;
        }
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }

    /// Users carrying the technical role. Feeds a picker, so a failure
    /// yields an empty list.
    pub async fn technicians(&self) -> Vec<Technician> {
        match self.client.get("/users").await {
            Ok(resp) => assemble::list::<Technician>(&resp)
                .into_iter()
                .filter(|u| u.roles.iter().any(|r| r == ROLE_TECHNICAL))
                .collect(),
            Err(e) => {
                warn!(error = %e, "could not load technicians");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{client, offline_client, serve};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use parking_lot::Mutex;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn create_requires_code_and_line() {
        let service = WorkOrderService::new(offline_client());
        let err = service.create(&NewWorkOrder::default()).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Invalid(ref m) if m.contains("code") && m.contains("production line")
        ));
    }

    #[tokio::test]
    async fn technicians_filters_role_and_degrades() {
        let router = Router::new().route(
            "/users",
            get(|| async {
                Json(json!([
                    {"id": 1, "username": "ana", "roles": ["RoleTechnical"]},
                    {"id": 2, "username": "root", "roles": ["RoleAdmin"]},
                    {"id": 3, "username": "leo"},
                ]))
            }),
        );
        let base = serve(router).await;
        let techs = WorkOrderService::new(client(&base)).technicians().await;
        assert_eq!(techs.len(), 1);
        assert_eq!(techs[0].username, "ana");

        assert!(WorkOrderService::new(offline_client()).technicians().await.is_empty());
    }

    #[tokio::test]
    async fn update_assigns_then_refetches() {
        let assigned: Arc<Mutex<Vec<i64>>> = Arc::default();
        let seen = assigned.clone();
        let read = assigned.clone();
        let router = Router::new()
            .route(
                "/work-orders/{id}/technicians",
                put(move |Json(ids): Json<Vec<i64>>| {
                    let seen = seen.clone();
                    async move {
                        *seen.lock() = ids;
                        StatusCode::NO_CONTENT
                    }
                }),
            )
            .route(
                "/work-orders/{id}",
                get(move |Path(id): Path<i64>| {
                    let techs: Vec<Value> = read.lock().iter().map(|t| json!({"id": t})).collect();
                    async move {
                        Json(json!({
                            "id": id,
                            "code": "OT-1",
                            "status": "in_progress",
                            "technicians": techs,
                        }))
                    }
                }),
            );
        let base = serve(router).await;
        let service = WorkOrderService::new(client(&base));

        let order = service.update(6, &[4, 5]).await.unwrap();
        assert_eq!(*assigned.lock(), vec![4, 5]);
        assert_eq!(order.id, 6);
        assert_eq!(order.technicians.len(), 2);
        assert_eq!(order.status, "in_progress");
    }

    #[tokio::test]
    async fn list_by_line_uses_dedicated_route() {
        let router = Router::new()
            .route("/work-orders", get(|| async { Json(json!([])) }))
            .route(
                "/work-orders/by-production-line/{id}",
                get(|Path(id): Path<i64>| async move {
                    Json(json!([{"id": 1, "code": "OT-1", "productionLineId": id}]))
                }),
            );
        let base = serve(router).await;
        let service = WorkOrderService::new(client(&base));
        assert!(service.list(None).await.unwrap().is_empty());
        let orders = service.list(Some(2)).await.unwrap();
        assert_eq!(orders[0].production_line_id, Some(2));
    }
}
