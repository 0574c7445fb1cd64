use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Component categories, in the order builds are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Cabinet,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Cabinet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::Psu => "psu",
            Category::Cabinet => "cabinet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub price: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub specs: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub stock: u32,
}

fn default_quantity() -> u32 {
    1
}

/// A product line in a cart or order. Serialized with the product fields
/// inline, the way the storefront keeps it in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "qty", alias = "quantity", default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// `price × qty`, or `None` on overflow.
    pub fn line_total(&self) -> Option<u64> {
        self.product.price.checked_mul(u64::from(self.quantity))
    }
}

pub const ORDER_STATUS_PENDING: &str = "Pending";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub status: String,
    pub user: serde_json::Value,
    pub address: serde_json::Value,
    pub items: Vec<CartItem>,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Empty for records that never had one.
    #[serde(default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
