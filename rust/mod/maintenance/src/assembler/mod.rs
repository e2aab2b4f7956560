pub mod calendar;
pub mod dynamic_plan;
pub mod execution;
pub mod work_order;
