mod machine;
mod plant;
mod production_line;

pub use machine::{
    metric_catalog, Machine, MachineMetric, MachineResource, MetricDefinition, MetricReading,
};
pub use plant::{CreatePlantResource, Plant, PlantResource};
pub use production_line::{ProductionLine, ProductionLineResource};
