use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::MaintenanceCalendar;

pub fn to_entity_from_value(value: &Value) -> Result<MaintenanceCalendar, AssembleError> {
    assemble::single(value)
}

/// Accepts the `{info, data}` envelope the calendar backend answers with.
pub fn to_entity_list(response: &ApiResponse) -> Vec<MaintenanceCalendar> {
    assemble::list(response)
}

/// Days are sent in ascending order; empty days are dropped.
pub fn to_resource(plan: &MaintenanceCalendar) -> MaintenanceCalendar {
    let mut out = plan.clone();
    out.plan_name = out.plan_name.trim().to_string();
    out.items.retain(|d| !d.tasks.is_empty());
    out.items.sort_by_key(|d| d.day_number);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CalendarDay, CalendarTask};
    use serde_json::json;

    #[test]
    fn envelope_with_info() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "data": {
                "info": [{"registers": 1}],
                "data": [{
                    "planId": 1,
                    "planName": "Semanal",
                    "productionLineId": 2,
                    "startDate": "2025-06-01",
                    "durationDays": 7,
                    "items": [{
                        "dayNumber": 2,
                        "tasks": [{"taskId": 4, "taskName": "Engrase", "machineIds": [8]}],
                    }],
                }],
            }
        }))
        .unwrap();
        let plans = to_entity_list(&resp);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].duration_days, 7);
        assert_eq!(plans[0].tasks_on(2)[0].task_name, "Engrase");
        assert!(plans[0].tasks_on(3).is_empty());
    }

    #[test]
    fn resource_orders_days() {
        let task = CalendarTask {
            task_name: "t".into(),
            ..Default::default()
        };
        let plan = MaintenanceCalendar {
            items: vec![
                CalendarDay { day_number: 3, tasks: vec![task.clone()] },
                CalendarDay { day_number: 2, tasks: vec![] },
                CalendarDay { day_number: 1, tasks: vec![task] },
            ],
            ..Default::default()
        };
        let days: Vec<u32> = to_resource(&plan).items.iter().map(|d| d.day_number).collect();
        assert_eq!(days, vec![1, 3]);
    }
}
