//! Generic resource commands.
//!
//! `mecanaut get machines --line 4`, `mecanaut create plants -f plant.json`.
//! Resource names map onto the domain services, so validation and
//! wire mapping are the same as for any other caller.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use mecanaut_assets::{
    Machine, MachineService, Plant, PlantService, ProductionLine, ProductionLineService,
};
use mecanaut_client::{ApiClient, AuthService, ImageStorage};
use mecanaut_demo::{Character, CharacterService};
use mecanaut_inventory::{InventoryPart, InventoryPartService, PurchaseOrder, PurchaseOrderService};
use mecanaut_maintenance::model::{Completion, DynamicPlan, MaintenanceCalendar, NewWorkOrder};
use mecanaut_maintenance::{CalendarService, DynamicPlanService, ExecutionService, WorkOrderService};
use mecanaut_personnel::{NewPersonnel, Personnel, PersonnelService};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{api_error, connect, connect_authenticated, Output};

/// Resources reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Plants,
    ProductionLines,
    Machines,
    WorkOrders,
    DynamicPlans,
    Calendar,
    ExecutedWorkOrders,
    InventoryParts,
    PurchaseOrders,
    Personnel,
    Characters,
}

impl Resource {
    /// Accepts singular and plural spellings.
    pub fn parse(name: &str) -> Result<Self> {
        let resource = match name.to_lowercase().as_str() {
            "plant" | "plants" => Resource::Plants,
            "production-line" | "production-lines" | "line" | "lines" => Resource::ProductionLines,
            "machine" | "machines" => Resource::Machines,
            "work-order" | "work-orders" | "workorder" | "workorders" => Resource::WorkOrders,
            "dynamic-plan" | "dynamic-plans" => Resource::DynamicPlans,
            "calendar" | "calendar-plan" | "calendar-plans" | "maintenance-plans" => {
                Resource::Calendar
            }
            "executed-work-order" | "executed-work-orders" | "execution" | "executions" => {
                Resource::ExecutedWorkOrders
            }
            "inventory-part" | "inventory-parts" | "part" | "parts" => Resource::InventoryParts,
            "purchase-order" | "purchase-orders" => Resource::PurchaseOrders,
            "personnel" | "user" | "users" => Resource::Personnel,
            "character" | "characters" => Resource::Characters,
            _ => anyhow::bail!("Unknown resource type: {}", name),
        };
        Ok(resource)
    }

    pub fn singular(self) -> &'static str {
        match self {
            Resource::Plants => "plant",
            Resource::ProductionLines => "production line",
            Resource::Machines => "machine",
            Resource::WorkOrders => "work order",
            Resource::DynamicPlans => "dynamic plan",
            Resource::Calendar => "calendar plan",
            Resource::ExecutedWorkOrders => "executed work order",
            Resource::InventoryParts => "inventory part",
            Resource::PurchaseOrders => "purchase order",
            Resource::Personnel => "user",
            Resource::Characters => "character",
        }
    }

    /// Columns shown by `--output table`.
    fn columns(self) -> &'static [&'static str] {
        match self {
            Resource::Plants => &["id", "name", "city", "country", "active"],
            Resource::ProductionLines => &["id", "name", "code", "status", "plantId"],
            Resource::Machines => &["id", "serialNumber", "name", "status", "productionLineId"],
            Resource::WorkOrders => &["id", "code", "status", "priority", "productionLineId"],
            Resource::DynamicPlans => &["id", "planName", "parameter", "amount"],
            Resource::Calendar => {
                &["planId", "planName", "productionLineId", "startDate", "durationDays"]
            }
            Resource::ExecutedWorkOrders => {
                &["id", "code", "workOrderId", "productionLineId", "executionDate"]
            }
            Resource::InventoryParts => {
                &["id", "code", "name", "currentStock", "minStock", "stockStatus"]
            }
            Resource::PurchaseOrders => &["id", "inventoryPartId", "quantity", "price", "status"],
            Resource::Personnel => &["id", "code", "firstName", "lastName", "email", "role"],
            Resource::Characters => &["id", "name", "createdAt"],
        }
    }
}

/// Filters for list calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filters {
    pub plant: Option<i64>,
    pub line: Option<i64>,
}

/// `completeWorkOrder` input: which order, plus the report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompleteRequest {
    work_order_id: i64,
    #[serde(flatten)]
    completion: Completion,
}

/// Technician reassignment: either `[1, 2]` or `{"technicianIds": [1, 2]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TechnicianIds {
    Bare(Vec<i64>),
    #[serde(rename_all = "camelCase")]
    Wrapped { technician_ids: Vec<i64> },
}

impl TechnicianIds {
    fn into_vec(self) -> Vec<i64> {
        match self {
            TechnicianIds::Bare(ids) | TechnicianIds::Wrapped { technician_ids: ids } => ids,
        }
    }
}

/// GET a resource (list or single).
pub async fn get(
    resource: &str,
    id: Option<i64>,
    filters: Filters,
    output: Output,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let (_, client) = connect_authenticated(client_config_path)?;
    let value = fetch(resource, id, filters, client).await?;
    render(resource, &value, output)
}

async fn fetch(
    resource: Resource,
    id: Option<i64>,
    filters: Filters,
    client: Arc<ApiClient>,
) -> Result<Value> {
    let value = match (resource, id) {
        (Resource::Plants, Some(id)) => to_json(PlantService::new(client).get(id).await)?,
        (Resource::Plants, None) => to_json(PlantService::new(client).list().await)?,
        (Resource::ProductionLines, Some(id)) => {
            to_json(ProductionLineService::new(client).get(id).await)?
        }
        (Resource::ProductionLines, None) => {
            to_json(ProductionLineService::new(client).list(filters.plant).await)?
        }
        (Resource::Machines, Some(id)) => to_json(MachineService::new(client).get(id).await)?,
        (Resource::Machines, None) => {
            let service = MachineService::new(client);
            match (filters.line, filters.plant) {
                (Some(line), _) => to_json(service.by_production_line(line).await)?,
                (None, Some(plant)) => to_json(service.by_plant(plant).await)?,
                (None, None) => to_json(service.list().await)?,
            }
        }
        (Resource::WorkOrders, Some(id)) => to_json(WorkOrderService::new(client).get(id).await)?,
        (Resource::WorkOrders, None) => {
            to_json(WorkOrderService::new(client).list(filters.line).await)?
        }
        (Resource::DynamicPlans, Some(id)) => {
            to_json(DynamicPlanService::new(client).get(id).await)?
        }
        (Resource::DynamicPlans, None) => to_json(DynamicPlanService::new(client).list().await)?,
        (Resource::Calendar, Some(id)) => to_json(CalendarService::new(client).get(id).await)?,
        (Resource::Calendar, None) => to_json(CalendarService::new(client).list().await)?,
        (Resource::ExecutedWorkOrders, Some(id)) => {
            to_json(ExecutionService::new(client).get(id).await)?
        }
        (Resource::ExecutedWorkOrders, None) => {
            let line = filters
                .line
                .ok_or_else(|| anyhow::anyhow!("Listing executed work orders needs --line <id>."))?;
            to_json(ExecutionService::new(client).by_production_line(line).await)?
        }
        (Resource::InventoryParts, Some(id)) => {
            to_json(InventoryPartService::new(client).get(id).await)?
        }
        (Resource::InventoryParts, None) => {
            let plant = filters
                .plant
                .ok_or_else(|| anyhow::anyhow!("Listing inventory parts needs --plant <id>."))?;
            to_json(InventoryPartService::new(client).list_by_plant(plant).await)?
        }
        (Resource::PurchaseOrders, Some(id)) => {
            to_json(PurchaseOrderService::new(client).get(id).await)?
        }
        (Resource::PurchaseOrders, None) => {
            to_json(PurchaseOrderService::new(client).list().await)?
        }
        (Resource::Personnel, Some(id)) => to_json(PersonnelService::new(client).get(id).await)?,
        (Resource::Personnel, None) => to_json(PersonnelService::new(client).list().await)?,
        (Resource::Characters, Some(id)) => to_json(CharacterService::new(client).get(id).await)?,
        (Resource::Characters, None) => to_json(CharacterService::new(client).list().await)?,
    };
    Ok(value)
}

/// CREATE a resource from a JSON document.
pub async fn create(
    resource: &str,
    json_body: &str,
    output: Output,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let (_, client) = connect_authenticated(client_config_path)?;

    let created = match resource {
        Resource::Plants => {
            to_json(PlantService::new(client).create(&parse::<Plant>(json_body)?).await)?
        }
        Resource::ProductionLines => to_json(
            ProductionLineService::new(client)
                .create(&parse::<ProductionLine>(json_body)?)
                .await,
        )?,
        Resource::Machines => {
            to_json(MachineService::new(client).create(&parse::<Machine>(json_body)?).await)?
        }
        Resource::WorkOrders => to_json(
            WorkOrderService::new(client)
                .create(&parse::<NewWorkOrder>(json_body)?)
                .await,
        )?,
        Resource::DynamicPlans => to_json(
            DynamicPlanService::new(client)
                .create(&parse::<DynamicPlan>(json_body)?)
                .await,
        )?,
        Resource::Calendar => to_json(
            CalendarService::new(client)
                .create(&parse::<MaintenanceCalendar>(json_body)?)
                .await,
        )?,
        Resource::ExecutedWorkOrders => {
            let request = parse::<CompleteRequest>(json_body)?;
            to_json(
                ExecutionService::new(client)
                    .complete(request.work_order_id, &request.completion)
                    .await,
            )?
        }
        Resource::InventoryParts => to_json(
            InventoryPartService::new(client)
                .create(&parse::<InventoryPart>(json_body)?)
                .await,
        )?,
        Resource::PurchaseOrders => to_json(
            PurchaseOrderService::new(client)
                .create(&parse::<PurchaseOrder>(json_body)?)
                .await,
        )?,
        Resource::Personnel => to_json(
            PersonnelService::new(client)
                .create(&parse::<NewPersonnel>(json_body)?)
                .await,
        )?,
        Resource::Characters => to_json(
            CharacterService::new(client)
                .create(&parse::<Character>(json_body)?)
                .await,
        )?,
    };

    println!("{} created.", resource.singular());
    render(resource, &created, output)
}

/// UPDATE a resource. Work orders take the technician ids to assign.
pub async fn update(
    resource: &str,
    id: i64,
    json_body: &str,
    output: Output,
    client_config_path: &Path,
) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let (_, client) = connect_authenticated(client_config_path)?;

    let updated = match resource {
        Resource::Plants => {
            to_json(PlantService::new(client).update(id, &parse::<Plant>(json_body)?).await)?
        }
        Resource::ProductionLines => to_json(
            ProductionLineService::new(client)
                .update(id, &parse::<ProductionLine>(json_body)?)
                .await,
        )?,
        Resource::Machines => to_json(
            MachineService::new(client)
                .update(id, &parse::<Machine>(json_body)?)
                .await,
        )?,
        Resource::WorkOrders => {
            let ids = parse::<TechnicianIds>(json_body)?.into_vec();
            to_json(WorkOrderService::new(client).update(id, &ids).await)?
        }
        Resource::DynamicPlans => to_json(
            DynamicPlanService::new(client)
                .update(id, &parse::<DynamicPlan>(json_body)?)
                .await,
        )?,
        Resource::Calendar => to_json(
            CalendarService::new(client)
                .update(id, &parse::<MaintenanceCalendar>(json_body)?)
                .await,
        )?,
        Resource::InventoryParts => to_json(
            InventoryPartService::new(client)
                .update(id, &parse::<InventoryPart>(json_body)?)
                .await,
        )?,
        Resource::PurchaseOrders => to_json(
            PurchaseOrderService::new(client)
                .update(id, &parse::<PurchaseOrder>(json_body)?)
                .await,
        )?,
        Resource::Personnel => to_json(
            PersonnelService::new(client)
                .update(id, &parse::<Personnel>(json_body)?)
                .await,
        )?,
        Resource::ExecutedWorkOrders | Resource::Characters => {
            anyhow::bail!("{} records cannot be updated.", resource.singular())
        }
    };

    println!("{} {} updated.", resource.singular(), id);
    render(resource, &updated, output)
}

/// DELETE a resource.
pub async fn delete(resource: &str, id: i64, client_config_path: &Path) -> Result<()> {
    let resource = Resource::parse(resource)?;
    let (_, client) = connect_authenticated(client_config_path)?;

    let result = match resource {
        Resource::Plants => PlantService::new(client).delete(id).await,
        Resource::ProductionLines => ProductionLineService::new(client).delete(id).await,
        Resource::Machines => MachineService::new(client).delete(id).await,
        Resource::WorkOrders => WorkOrderService::new(client).delete(id).await,
        Resource::DynamicPlans => DynamicPlanService::new(client).delete(id).await,
        Resource::Calendar => CalendarService::new(client).delete(id).await,
        Resource::InventoryParts => InventoryPartService::new(client).delete(id).await,
        Resource::PurchaseOrders => PurchaseOrderService::new(client).delete(id).await,
        Resource::Personnel => PersonnelService::new(client).delete(id).await,
        Resource::ExecutedWorkOrders | Resource::Characters => {
            anyhow::bail!("{} records cannot be deleted.", resource.singular())
        }
    };
    result.map_err(api_error)?;

    println!("{} {} deleted.", resource.singular(), id);
    Ok(())
}

/// Upload an image and print its public URL.
pub async fn upload(file: &Path, client_config_path: &Path) -> Result<()> {
    let bytes = std::fs::read(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());

    let (_, client) = connect_authenticated(client_config_path)?;
    let url = ImageStorage::new(client)
        .upload(&file_name, bytes)
        .await
        .map_err(api_error)?;
    println!("{}", url);
    Ok(())
}

/// STATUS: backend reachability and local session state.
pub async fn status(client_config_path: &Path) -> Result<()> {
    let (ctx, client) = connect(client_config_path)?;
    let base_url = client.config().base_url.clone();
    let auth = AuthService::new(client);

    println!("Context:   {}", ctx.name);
    println!("Server:    {}", base_url);
    println!(
        "Session:   {}",
        if auth.is_authenticated() { "logged in" } else { "anonymous" }
    );
    if auth.check_backend_health().await {
        println!("Status:    connected");
    } else {
        println!("Status:    unreachable");
    }
    Ok(())
}

fn parse<T: DeserializeOwned>(json_body: &str) -> Result<T> {
    serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))
}

fn to_json<T: Serialize>(result: Result<T, mecanaut_client::ApiError>) -> Result<Value> {
    let value = result.map_err(api_error)?;
    Ok(serde_json::to_value(value)?)
}

fn render(resource: Resource, value: &Value, output: Output) -> Result<()> {
    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Output::Table => print!("{}", table(resource.columns(), value)),
    }
    Ok(())
}

/// Lists print one row per item; single objects print one field per line.
fn table(columns: &[&str], value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("No resources found.\n");
                return out;
            }
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| columns.iter().map(|c| cell(&item[*c])).collect())
                .collect();
            let widths: Vec<usize> = columns
                .iter()
                .enumerate()
                .map(|(i, c)| rows.iter().map(|r| r[i].len()).chain([c.len()]).max().unwrap_or(0))
                .collect();

            let header: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:w$}", c.to_uppercase(), w = w))
                .collect();
            out.push_str(header.join("  ").trim_end());
            out.push('\n');
            for row in rows {
                let line: Vec<String> = row
                    .iter()
                    .zip(&widths)
                    .map(|(v, w)| format!("{:w$}", v, w = w))
                    .collect();
                out.push_str(line.join("  ").trim_end());
                out.push('\n');
            }
        }
        Value::Object(map) => {
            let width = map.keys().map(String::len).max().unwrap_or(0);
            for (key, field) in map {
                out.push_str(&format!("{:w$}  {}\n", key, cell(field), w = width));
            }
        }
        other => {
            out.push_str(&cell(other));
            out.push('\n');
        }
    }
    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
