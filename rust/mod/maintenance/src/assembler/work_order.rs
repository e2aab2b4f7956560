use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{
    CreateWorkOrderResource, NewWorkOrder, TechnicianAssignment, TechnicianAssignmentResource,
    WorkOrder, WorkOrderResource, CORRECTIVE,
};

const DEFAULT_STATUS: &str = "pending";
const DEFAULT_PRIORITY: &str = "medium";

pub fn to_entity(resource: WorkOrderResource) -> WorkOrder {
    WorkOrder {
        id: resource.id,
        code: resource.code,
        date: resource.date,
        production_line_id: resource.production_line_id,
        kind: resource.kind,
        status: non_empty_or(resource.status, DEFAULT_STATUS),
        description: resource.description,
        priority: non_empty_or(resource.priority, DEFAULT_PRIORITY),
        technicians: resource
            .technicians
            .into_iter()
            .map(|t| TechnicianAssignment {
                id: t.id,
                name: t.name.unwrap_or_default(),
                email: t.email,
                machines: t.machines,
                assigned_at: t.assigned_at,
            })
            .collect(),
        machine_ids: resource.machine_ids,
        tasks: resource.tasks,
        created_at: resource.created_at,
        updated_at: resource.updated_at,
        created_by: resource.created_by,
        updated_by: resource.updated_by,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<WorkOrder, AssembleError> {
    assemble::single::<WorkOrderResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<WorkOrder> {
    assemble::list::<WorkOrderResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(entity: &WorkOrder) -> WorkOrderResource {
    WorkOrderResource {
        id: entity.id,
        code: entity.code.clone(),
        date: entity.date.clone(),
        production_line_id: entity.production_line_id,
        kind: entity.kind.clone(),
        status: Some(entity.status.clone()),
        description: entity.description.clone(),
        priority: Some(entity.priority.clone()),
        technicians: entity
            .technicians
            .iter()
            .map(|t| TechnicianAssignmentResource {
                id: t.id,
                name: Some(t.name.clone()),
                email: t.email.clone(),
                machines: t.machines.clone(),
                assigned_at: t.assigned_at.clone(),
            })
            .collect(),
        machine_ids: entity.machine_ids.clone(),
        tasks: entity.tasks.clone(),
        created_at: entity.created_at.clone(),
        updated_at: entity.updated_at.clone(),
        created_by: entity.created_by,
        updated_by: entity.updated_by,
    }
}

/// Create payload. The type is always corrective.
pub fn to_create_resource(order: &NewWorkOrder) -> CreateWorkOrderResource {
    CreateWorkOrderResource {
        code: order.code.trim().to_string(),
        date: order.date.clone(),
        production_line_id: order.production_line_id,
        kind: CORRECTIVE.to_string(),
        machine_ids: order.machine_ids.clone(),
        tasks: order.tasks.clone(),
        technician_ids: order.technician_ids.clone(),
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
