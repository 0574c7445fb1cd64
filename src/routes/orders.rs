use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    dto::orders::{CreateOrderRequest, OrderCreated},
    error::AppResult,
    extract::AppJson,
    response::ErrorBody,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order recorded", body = OrderCreated),
        (status = 400, description = "Invalid cart or missing details", body = ErrorBody),
        (status = 500, description = "Order could not be saved", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let resp = order_service::place_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
