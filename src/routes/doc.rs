use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{InventoryItem, StatsResponse},
        auth::{AuthResponse, LoginRequest, SignupRequest, UserSummary},
        builds::{BuildRequest, BuildResponse},
        orders::{CreateOrderRequest, OrderCreated, OrderLine},
    },
    models::{CartItem, Category, Order, Product},
    response::ErrorBody,
    routes::{admin, auth, builds, health, orders, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        auth::signup,
        auth::login,
        builds::ai_build,
        orders::create_order,
        admin::stats,
    ),
    components(
        schemas(
            Category,
            Product,
            CartItem,
            Order,
            ErrorBody,
            SignupRequest,
            LoginRequest,
            UserSummary,
            AuthResponse,
            BuildRequest,
            BuildResponse,
            OrderLine,
            CreateOrderRequest,
            OrderCreated,
            StatsResponse,
            InventoryItem,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Auth", description = "Signup and login"),
        (name = "Builder", description = "Budget build suggestions"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Admin", description = "Admin dashboard"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
