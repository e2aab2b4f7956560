use mecanaut_client::assemble;
use mecanaut_client::{ApiResponse, AssembleError};
use serde_json::Value;

use crate::model::{DynamicPlan, DynamicPlanResource, PlanTask, PlanTaskResource};

/// Tasks are numbered from 1 in wire order and inherit the plan's machines.
pub fn to_entity(resource: DynamicPlanResource) -> DynamicPlan {
    let machine_ids = resource.machine_ids;
    let tasks = resource
        .tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| {
            let task_id = i as u32 + 1;
            PlanTask {
                task_id,
                task_name: if task.name.is_empty() {
                    format!("Task {}", task_id)
                } else {
                    task.name
                },
                task_description: task.description,
                machine_ids: machine_ids.clone(),
            }
        })
        .collect();

    DynamicPlan {
        id: resource.id,
        plan_name: resource.name,
        parameter: resource.metric_id,
        amount: resource.amount,
        machine_ids,
        tasks,
    }
}

pub fn to_entity_from_value(value: &Value) -> Result<DynamicPlan, AssembleError> {
    assemble::single::<DynamicPlanResource>(value).map(to_entity)
}

pub fn to_entity_list(response: &ApiResponse) -> Vec<DynamicPlan> {
    assemble::list::<DynamicPlanResource>(response)
        .into_iter()
        .map(to_entity)
        .collect()
}

pub fn to_resource(plan: &DynamicPlan) -> DynamicPlanResource {
    DynamicPlanResource {
        id: plan.id,
        name: plan.plan_name.trim().to_string(),
        metric_id: plan.parameter,
        amount: plan.amount.trim().to_string(),
        machine_ids: plan.machine_ids.clone(),
        tasks: plan
            .tasks
            .iter()
            .map(|t| PlanTaskResource {
                name: t.task_name.clone(),
                description: t.task_description.clone(),
            })
            .collect(),
    }
}
