//! Spare-part inventory and purchase orders.

pub mod assembler;
pub mod model;
pub mod service;

pub use model::{InventoryPart, PurchaseOrder, StockStatus};
pub use service::{InventoryPartService, PurchaseOrderService};
