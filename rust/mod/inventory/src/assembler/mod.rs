pub mod inventory_part;
pub mod purchase_order;
