mod inventory_part;
mod purchase_order;

pub use inventory_part::{
    CreateInventoryPartResource, InventoryPart, InventoryPartResource, StockStatus,
    UpdateInventoryPartResource,
};
pub use purchase_order::{PurchaseOrder, PurchaseOrderResource, PENDING};
