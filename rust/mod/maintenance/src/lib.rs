//! Maintenance: work orders, dynamic (metric-triggered) plans, calendar
//! plans, and the execution of work orders.

pub mod assembler;
pub mod model;
pub mod service;

pub use model::{
    CalendarDay, CalendarTask, Completion, DynamicPlan, ExecutedWorkOrder, MaintenanceCalendar,
    NewWorkOrder, PlanTask, Technician, TechnicianAssignment, UsedProduct, WorkOrder,
};
pub use service::{
    CalendarService, DynamicPlanService, ExecutionService, WorkOrderService,
};
