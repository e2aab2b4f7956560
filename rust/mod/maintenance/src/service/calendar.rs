use std::sync::Arc;

use mecanaut_client::{require_fields, ApiClient, ApiError};
use tracing::info;

use crate::assembler::calendar as assembler;
use crate::model::MaintenanceCalendar;

const ENDPOINT: &str = "/maintenance-plans";

/// Day-based (static) maintenance plans.
pub struct CalendarService {
    client: Arc<ApiClient>,
}

impl CalendarService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceCalendar>, ApiError> {
        let resp = self.client.get(ENDPOINT).await?;
        Ok(assembler::to_entity_list(&resp))
    }

    pub async fn get(&self, id: i64) -> Result<MaintenanceCalendar, ApiError> {
        let resp = self.client.get(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn create(
        &self,
        plan: &MaintenanceCalendar,
    ) -> Result<MaintenanceCalendar, ApiError> {
        validate(plan)?;
        let mut body = assembler::to_resource(plan);
        body.plan_id = None;
        let resp = self.client.post(ENDPOINT, &body).await?;
        let created = assembler::to_entity_from_value(&resp.data)?;
        info!(id = ?created.plan_id, name = %created.plan_name, "calendar plan created");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i64,
        plan: &MaintenanceCalendar,
    ) -> Result<MaintenanceCalendar, ApiError> {
        validate(plan)?;
        let mut body = assembler::to_resource(plan);
        body.plan_id = Some(id);
        let resp = self.client.put(&format!("{}/{}", ENDPOINT, id), &body).await?;
        if resp.is_empty() {
            return Ok(body);
        }
        Ok(assembler::to_entity_from_value(&resp.data)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ENDPOINT, id)).await?;
        Ok(())
    }
}

/// Every scheduled day must fall inside `1..=duration_days`.
fn validate(plan: &MaintenanceCalendar) -> Result<(), ApiError> {
    require_fields(
        "calendar plan",
        &[
            ("name", !plan.plan_name.trim().is_empty()),
            ("production line", plan.production_line_id > 0),
            ("start date", !plan.start_date.trim().is_empty()),
            ("duration", plan.duration_days > 0),
        ],
    )?;
    if let Some(day) = plan
        .items
        .iter()
        .map(|d| d.day_number)
        .find(|&d| d == 0 || d > plan.duration_days)
    {
        return Err(ApiError::Invalid(format!(
            "calendar plan: day {} is outside 1..={}",
            day, plan.duration_days
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CalendarDay, CalendarTask};
    use crate::service::testing::{client, offline_client, serve};
    use axum::http::StatusCode;
    use axum::routing::put;
    use axum::Router;

    fn weekly() -> MaintenanceCalendar {
        MaintenanceCalendar {
            plan_name: "Semanal".into(),
            production_line_id: 2,
            start_date: "2025-06-01".into(),
            duration_days: 7,
            items: vec![CalendarDay {
                day_number: 1,
                tasks: vec![CalendarTask {
                    task_name: "Engrase".into(),
                    ..Default::default()
                }],
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn day_outside_duration_is_rejected() {
        let mut plan = weekly();
        plan.items[0].day_number = 8;
        let err = CalendarService::new(offline_client()).create(&plan).await.unwrap_err();
        assert!(matches!(err, ApiError::Invalid(ref m) if m.contains("day 8")));
    }

    #[tokio::test]
    async fn empty_update_answer_returns_sent_plan() {
        let router = Router::new().route(
            "/maintenance-plans/{id}",
            put(|| async { StatusCode::NO_CONTENT }),
        );
        let base = serve(router).await;
        let updated = CalendarService::new(client(&base)).update(4, &weekly()).await.unwrap();
        assert_eq!(updated.plan_id, Some(4));
        assert_eq!(updated.tasks_on(1).len(), 1);
    }
}
