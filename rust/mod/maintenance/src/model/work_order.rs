use serde::{Deserialize, Serialize};

/// Work order type sent on every create.
pub const CORRECTIVE: &str = "Corrective";

/// Role a user must carry to be offered as a technician.
pub const ROLE_TECHNICAL: &str = "RoleTechnical";

/// A technician attached to a work order, as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianAssignmentResource {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub machines: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
}

/// Work order as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderResource {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_line_id: Option<i64>,

    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default)]
    pub technicians: Vec<TechnicianAssignmentResource>,

    #[serde(default)]
    pub machine_ids: Vec<i64>,

    #[serde(default)]
    pub tasks: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<i64>,
}

/// Body of `POST /work-orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkOrderResource {
    pub code: String,
    pub date: String,
    pub production_line_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub machine_ids: Vec<i64>,
    pub tasks: Vec<String>,
    pub technician_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechnicianAssignment {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub machines: Vec<i64>,
    pub assigned_at: Option<String>,
}

/// A corrective maintenance job on one production line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: i64,
    pub code: String,
    pub date: String,
    pub production_line_id: Option<i64>,
    pub kind: String,
    /// `pending` when the backend sends none.
    pub status: String,
    pub description: String,
    /// `medium` when the backend sends none.
    pub priority: String,
    pub technicians: Vec<TechnicianAssignment>,
    pub machine_ids: Vec<i64>,
    pub tasks: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

impl WorkOrder {
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }
}

/// Input for creating a work order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkOrder {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub production_line_id: i64,
    #[serde(default)]
    pub machine_ids: Vec<i64>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub technician_ids: Vec<i64>,
}

/// A user that may be assigned to work orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}
