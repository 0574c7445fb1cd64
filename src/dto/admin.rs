use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Order};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_orders: usize,
    pub total_revenue: u64,
    pub active_customers: usize,
    pub recent_orders: Vec<Order>,
    pub inventory: Vec<InventoryItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub stock: u32,
}
