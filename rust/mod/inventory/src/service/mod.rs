mod inventory_part;
mod purchase_order;

pub use inventory_part::InventoryPartService;
pub use purchase_order::PurchaseOrderService;
