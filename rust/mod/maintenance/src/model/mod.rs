mod calendar;
mod dynamic_plan;
mod execution;
mod work_order;

pub use calendar::{CalendarDay, CalendarTask, MaintenanceCalendar};
pub use dynamic_plan::{DynamicPlan, DynamicPlanResource, PlanTask, PlanTaskResource};
pub use execution::{Completion, ExecutedWorkOrder, UsedProduct};
pub use work_order::{
    CreateWorkOrderResource, NewWorkOrder, Technician, TechnicianAssignment,
    TechnicianAssignmentResource, WorkOrder, WorkOrderResource, CORRECTIVE, ROLE_TECHNICAL,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `"12.5"`, `12.5` or `null` and yields the text form.
pub(crate) fn number_or_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
