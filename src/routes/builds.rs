use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::builds::{BuildRequest, BuildResponse},
    error::AppResult,
    extract::AppJson,
    response::ErrorBody,
    services::build_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/ai-build", post(ai_build))
}

#[utoipa::path(
    post,
    path = "/api/ai-build",
    request_body = BuildRequest,
    responses(
        (status = 200, description = "Suggested parts within the budget", body = BuildResponse),
        (status = 400, description = "Budget missing", body = ErrorBody),
    ),
    tag = "Builder"
)]
pub async fn ai_build(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BuildRequest>,
) -> AppResult<Json<BuildResponse>> {
    let resp = build_service::suggest_build(&state, payload)?;
    Ok(Json(resp))
}
