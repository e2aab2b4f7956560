use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError};
use tracing::info;

use crate::assembler::dynamic_plan as assembler;
use crate::model::DynamicPlan;

const ENDPOINT: &str = "/dynamic-maintenance-plans";

/// Metric-triggered maintenance plans.
pub struct DynamicPlanService {
    client: Arc<ApiClient>,
}

impl DynamicPlanService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<DynamicPlan>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<DynamicPlan, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    /// Ids are assigned by the server; any id on `plan` is ignored.
    pub async fn create(&self, plan: &DynamicPlan) -> Result<DynamicPlan, ApiError> {
        validate(plan)?;
        let body = assembler::to_resource(&DynamicPlan { id: None, ..plan.clone() });
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = ?created.id, name = %created.plan_name, "dynamic plan created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, plan: &DynamicPlan) -> Result<DynamicPlan, ApiError> {
        validate(plan)?;
        let body = assembler::to_resource(&DynamicPlan { id: Some(id), ..plan.clone() });
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }
}

fn validate(plan: &DynamicPlan) -> Result<(), ApiError> {
    let amount_ok = plan
        .amount
        .trim()
        .parse::<f64>()
        .is_ok_and(|a| a.is_finite() && a > 0.0);
    require_fields(
        "dynamic plan",
        &[
            ("name", !plan.plan_name.trim().is_empty()),
            ("metric", plan.parameter > 0),
            ("amount", amount_ok),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{client, offline_client, serve};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;

    #[tokio::test]
    async fn amount_must_be_positive_number() {
        let service = DynamicPlanService::new(offline_client());
        let plan = DynamicPlan {
            plan_name: "Aceite".into(),
            parameter: 1,
            amount: "mucho".into(),
            ..Default::default()
        };
        let err = service.create(&plan).await.unwrap_err();
        assert!(matches!(err, ApiError::Invalid(ref m) if m.contains("amount")));
    }

    #[tokio::test]
    async fn create_echoes_server_record() {
        let router = Router::new().route(
            "/dynamic-maintenance-plans",
            post(|Json(mut body): Json<Value>| async move {
                assert!(body.get("id").is_none());
                body["id"] = 12.into();
                Json(body)
            }),
        );
        let base = serve(router).await;
        let plan = DynamicPlan {
            id: Some(99),
            plan_name: "Aceite".into(),
            parameter: 1,
            amount: "5000".into(),
            machine_ids: vec![3],
            ..Default::default()
        };
        let created = DynamicPlanService::new(client(&base)).create(&plan).await.unwrap();
        assert_eq!(created.id, Some(12));
        assert_eq!(created.amount, "5000");
        assert_eq!(created.machine_ids, vec![3]);
    }
}
