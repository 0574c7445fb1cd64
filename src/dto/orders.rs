use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

fn default_quantity() -> u32 {
    1
}

/// One submitted cart line. Only the product id and quantity are read; the
/// rest of the product fields the storefront sends along are ignored and
/// taken from the catalog instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct OrderLine {
    pub id: i64,
    #[serde(rename = "qty", alias = "quantity", default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Option<Vec<OrderLine>>,
    pub user: Option<serde_json::Value>,
    pub address: Option<serde_json::Value>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: Uuid,
}
