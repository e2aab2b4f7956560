use std::sync::Arc;

use chrono::Utc;
use mecanaut_assets::{Machine, MachineService};
use mecanaut_client::{ApiClient, ApiError};
use tracing::{info, warn};

use crate::assembler::execution as assembler;
use crate::model::{Completion, ExecutedWorkOrder};
use crate::service::WorkOrderService;

const ENDPOINT: &str = "/executed-work-orders";

/// Closing work orders on site.
pub struct ExecutionService {
    client: Arc<ApiClient>,
    work_orders: WorkOrderService,
    machines: MachineService,
}

impl ExecutionService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            work_orders: WorkOrderService::new(client.clone()),
            machines: MachineService::new(client.clone()),
            client,
        }
    }

    /// Record the execution of a work order.
    ///
    /// The order is read first; an order already completed is rejected
    /// without posting anything.
    pub async fn complete(
        &self,
        work_order_id: i64,
        completion: &Completion,
    ) -> Result<ExecutedWorkOrder, ApiError> {
        let order = self.work_orders.get(work_order_id).await?;
        if order.is_completed() {
            return Err(ApiError::Invalid(format!(
                "work order {} is already completed",
                work_order_id
            )));
        }

        let record = assembler::to_executed(work_order_id, completion, Utc::now());
        let resp = self.client.post(ENDPOINT, &record).await?;
        info!(work_order_id, tasks = record.executed_tasks.len(), "work order executed");
        if resp.is_empty() {
            return Ok(record);
        }
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn get(&self, id: i64) -> Result<ExecutedWorkOrder, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn by_production_line(
        &self,
        line_id: i64,
    ) -> Result<Vec<ExecutedWorkOrder>, ApiError> {
        let resp = self
            .client
            .get(&format!("{}/by-production-line/{}", ENDPOINT, line_id))
            .await?;
        Ok(assembler::to_entity_list(&resp))
    }

    /// Take `quantity` units of a spare part out of stock. The body is the
    /// bare number.
    pub async fn decrease_inventory(&self, part_id: i64, quantity: u32) -> Result<(), ApiError> {
        if quantity == 0 {
            return Err(ApiError::Invalid("quantity must be positive".into()));
        }
        self.client
            .put(&format!("/inventory-parts/{}/decrease", part_id), &quantity)
            .await?;
        info!(part_id, quantity, "inventory decreased");
        Ok(())
    }

    /// Machines named by a work order. Machines that cannot be read are
    /// skipped.
    pub async fn machines_for_work_order(
        &self,
        work_order_id: i64,
    ) -> Result<Vec<Machine>, ApiError> {
        let order = self.work_orders.get(work_order_id).await?;
        let mut machines = Vec::with_capacity(order.machine_ids.len());
        for id in order.machine_ids {
            match self.machines.get(id).await {
                Ok(m) => machines.push(m),
                Err(e) => warn!(machine_id = id, error = %e, "skipping unreadable machine"),
            }
        }
        Ok(machines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{client, serve};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn backend() -> Router {
        Router::new()
            .route(
                "/work-orders/{id}",
                get(|Path(id): Path<i64>| async move {
                    let status = if id == 1 { "completed" } else { "pending" };
                    Json(json!({"id": id, "code": "OT", "status": status, "machineIds": [10, 404]}))
                }),
            )
            .route(
                "/machines/{id}",
                get(|Path(id): Path<i64>| async move {
                    if id == 404 {
                        StatusCode::NOT_FOUND.into_response()
                    } else {
                        let machine = json!({"id": id, "serialNumber": "SN", "name": "Press"});
                        Json(machine).into_response()
                    }
                }),
            )
            .route(
                "/executed-work-orders",
                post(|Json(mut body): Json<Value>| async move {
                    body["id"] = 50.into();
                    (StatusCode::CREATED, Json(body))
                }),
            )
            .route(
                "/inventory-parts/{id}/decrease",
                put(|Json(qty): Json<u32>| async move {
                    if qty == 2 { StatusCode::OK } else { StatusCode::BAD_REQUEST }
                }),
            )
    }

    #[tokio::test]
    async fn completed_order_is_rejected() {
        let base = serve(backend()).await;
        let service = ExecutionService::new(client(&base));
        let err = service.complete(1, &Completion::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Invalid(ref m) if m.contains("already completed")));
    }

    #[tokio::test]
    async fn pending_order_is_recorded() {
        let base = serve(backend()).await;
        let service = ExecutionService::new(client(&base));
        let completion = Completion {
            code: "EX-2".into(),
            tasks: vec!["Engrase".into()],
            ..Default::default()
        };
        let record = service.complete(2, &completion).await.unwrap();
        assert_eq!(record.id, Some(50));
        assert_eq!(record.work_order_id, 2);
        assert_eq!(record.executed_tasks, vec!["Engrase".to_string()]);
    }

    #[tokio::test]
    async fn decrease_sends_bare_quantity() {
        let base = serve(backend()).await;
        let service = ExecutionService::new(client(&base));
        service.decrease_inventory(3, 2).await.unwrap();
        assert!(service.decrease_inventory(3, 5).await.is_err());
        assert!(matches!(service.decrease_inventory(3, 0).await, Err(ApiError::Invalid(_))));
    }

    #[tokio::test]
    async fn unreadable_machines_are_skipped() {
        let base = serve(backend()).await;
        let machines = ExecutionService::new(client(&base))
            .machines_for_work_order(2)
            .await
            .unwrap();
        assert_eq!(machines.len(), 1);
        assert_eq!(machines[0].id, Some(10));
    }
}
