//! Asset management: plants, production lines and machines.
//!
//! `model` holds the wire resources and the entities built from them,
//! `assembler` the pure mappings between the two, and `service` the
//! HTTP-backed operations.

pub mod assembler;
pub mod model;
pub mod service;

pub use model::{
    Machine, MachineMetric, MetricDefinition, MetricReading, Plant, ProductionLine,
};
pub use service::{MachineService, PlantService, ProductionLineService};
