use chrono::{DateTime, SecondsFormat, Utc};
use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{Completion, ExecutedWorkOrder};

/// Record for `POST /executed-work-orders`.
pub fn to_executed(
    work_order_id: i64,
    completion: &Completion,
    at: DateTime<Utc>,
) -> ExecutedWorkOrder {
    ExecutedWorkOrder {
        id: None,
        code: completion.code.clone(),
        annotations: completion.observations.clone(),
        execution_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        production_line_id: completion.production_line_id,
        intervened_machine_ids: completion.machine_ids.clone(),
        assigned_technician_ids: completion.technician_ids.clone(),
        executed_tasks: completion.tasks.clone(),
        used_products: completion.products.clone(),
        files: completion.images.clone(),
        work_order_id,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<ExecutedWorkOrder, AssembleError> {
    assemble::single(value)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<ExecutedWorkOrder> {
    assemble::list(response)
}
