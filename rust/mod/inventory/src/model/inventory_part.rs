use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock level relative to the part's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    Low,
    Medium,
    Ok,
}

impl StockStatus {
    /// No stock is out of stock whatever the minimum; below the minimum is
    /// low; exactly the minimum is medium.
    pub fn from_levels(current: u32, minimum: u32) -> Self {
        if current == 0 {
            Self::OutOfStock
        } else if current < minimum {
            Self::Low
        } else if current == minimum {
            Self::Medium
        } else {
            Self::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::Ok => "OK",
        }
    }
}

impl Default for StockStatus {
    fn default() -> Self {
        Self::OutOfStock
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inventory part as the backend sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPartResource {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub current_stock: Option<u32>,

    #[serde(default)]
    pub min_stock: Option<u32>,

    #[serde(default)]
    pub unit_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<i64>,
}

/// Body of `POST /inventory-parts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryPartResource {
    pub code: String,
    pub name: String,
    pub description: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub unit_price: f64,
    pub plant_id: i64,
}

/// Body of `PUT /inventory-parts/{id}`. Code, name and plant are fixed
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryPartResource {
    pub description: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub unit_price: f64,
}

/// A spare part stocked at a plant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryPart {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub unit_price: f64,
    pub plant_id: Option<i64>,
    /// Derived from the stock levels; ignored on input.
    pub stock_status: StockStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_status_thresholds() {
        assert_eq!(StockStatus::from_levels(0, 0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_levels(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_levels(3, 5), StockStatus::Low);
        assert_eq!(StockStatus::from_levels(5, 5), StockStatus::Medium);
        assert_eq!(StockStatus::from_levels(6, 5), StockStatus::Ok);
        assert_eq!(StockStatus::from_levels(1, 0), StockStatus::Ok);
    }

    #[test]
    fn stock_status_wire_names() {
        assert_eq!(serde_json::to_value(StockStatus::OutOfStock).unwrap(), "OUT_OF_STOCK");
        assert_eq!(StockStatus::Medium.to_string(), "MEDIUM");
    }
}
