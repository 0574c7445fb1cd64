use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::admin::StatsResponse, error::AppResult, response::ErrorBody, services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard totals, recent orders and low stock", body = StatsResponse),
        (status = 500, description = "Data store unreadable", body = ErrorBody),
    ),
    tag = "Admin"
)]
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let resp = admin_service::stats(&state).await?;
    Ok(Json(resp))
}
