use crate::{
    dto::admin::{InventoryItem, StatsResponse},
    error::AppResult,
    models::{Order, Product},
    state::AppState,
};

pub const RECENT_ORDERS_LIMIT: usize = 5;
pub const INVENTORY_LIMIT: usize = 5;

/// Recompute dashboard numbers from the stored collections.
pub async fn stats(state: &AppState) -> AppResult<StatsResponse> {
    let orders = state.orders.read_all().await?;
    let customers = state.users.read_all().await?.len();
    Ok(summarize(orders, customers, state.catalog.products()))
}

pub fn summarize(mut orders: Vec<Order>, customers: usize, products: &[Product]) -> StatsResponse {
    let total_orders = orders.len();
    let total_revenue = orders
        .iter()
        .fold(0u64, |sum, o| sum.saturating_add(o.total));

    orders.sort_by(|a, b| b.date.cmp(&a.date));
    orders.truncate(RECENT_ORDERS_LIMIT);

    StatsResponse {
        total_orders,
        total_revenue,
        active_customers: customers,
        recent_orders: orders,
        inventory: low_stock(products, INVENTORY_LIMIT),
    }
}

/// Products with the least stock, ties kept in catalog order.
pub fn low_stock(products: &[Product], limit: usize) -> Vec<InventoryItem> {
    let mut by_stock: Vec<&Product> = products.iter().collect();
    by_stock.sort_by_key(|p| p.stock);
    by_stock
        .into_iter()
        .take(limit)
        .map(|p| InventoryItem {
            id: p.id,
            name: p.name.clone(),
            category: p.category,
            stock: p.stock,
        })
        .collect()
}
