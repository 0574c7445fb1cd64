use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    cart::Cart,
    catalog::Catalog,
    dto::orders::{CreateOrderRequest, OrderCreated, OrderLine},
    error::{AppError, AppResult},
    models::{CartItem, ORDER_STATUS_PENDING, Order},
    state::AppState,
};

/// `null`, blank strings, and empty arrays or objects count as missing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Resolve submitted lines against the catalog so names and prices come
/// from the server copy.
fn price_lines(catalog: &Catalog, lines: Vec<OrderLine>) -> AppResult<Vec<CartItem>> {
    lines
        .into_iter()
        .map(|line| {
            let product = catalog
                .get(line.id)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown product {}", line.id)))?;
            Ok(CartItem {
                product: product.clone(),
                quantity: line.quantity,
            })
        })
        .collect()
}

pub async fn place_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<OrderCreated> {
    let items = payload.items.unwrap_or_default();
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let (Some(user), Some(address)) = (
        payload.user.filter(|v| !is_blank(v)),
        payload.address.filter(|v| !is_blank(v)),
    ) else {
        return Err(AppError::BadRequest(
            "Missing user or address details".into(),
        ));
    };

    let items = price_lines(&state.catalog, items)?;
    let cart = Cart::from_items(items).map_err(|err| AppError::BadRequest(err.to_string()))?;
    let total = cart
        .total()
        .ok_or_else(|| AppError::BadRequest("Cart total is too large".into()))?;
    let units = cart.item_count();

    let order = Order {
        id: Uuid::new_v4(),
        date: Utc::now(),
        status: ORDER_STATUS_PENDING.to_string(),
        user,
        address,
        total,
        items: cart.into_items(),
        payment_method: payload.payment_method.filter(|m| !m.trim().is_empty()),
    };
    let order_id = order.id;

    state
        .orders
        .update(|orders| {
            orders.push(order);
            Ok::<_, AppError>(())
        })
        .await?;

    tracing::info!(%order_id, units, total, "order placed");

    Ok(OrderCreated {
        message: "Order placed successfully".into(),
        order_id,
    })
}
