mod calendar;
mod dynamic_plan;
mod execution;
mod work_order;

pub use calendar::CalendarService;
pub use dynamic_plan::DynamicPlanService;
pub use execution::ExecutionService;
pub use work_order::WorkOrderService;
