use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub machine_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// 1-based day inside the plan.
    #[serde(default)]
    pub day_number: u32,
    #[serde(default)]
    pub tasks: Vec<CalendarTask>,
}

/// A static, day-based maintenance plan for one production line.
///
/// The wire resource and the entity have the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCalendar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,

    #[serde(default)]
    pub plan_name: String,

    #[serde(default)]
    pub production_line_id: i64,

    /// ISO-8601 date.
    #[serde(default)]
    pub start_date: String,

    #[serde(default = "one_day")]
    pub duration_days: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_creator: Option<i64>,

    #[serde(default)]
    pub items: Vec<CalendarDay>,
}

impl Default for MaintenanceCalendar {
    fn default() -> Self {
        Self {
            plan_id: None,
            plan_name: String::new(),
            production_line_id: 0,
            start_date: String::new(),
            duration_days: one_day(),
            user_creator: None,
            items: Vec::new(),
        }
    }
}

impl MaintenanceCalendar {
    /// Tasks scheduled on `day`, empty when the day has none.
    pub fn tasks_on(&self, day: u32) -> &[CalendarTask] {
        self.items
            .iter()
            .find(|d| d.day_number == day)
            .map(|d| d.tasks.as_slice())
            .unwrap_or_default()
    }
}

fn one_day() -> u32 {
    1
}
