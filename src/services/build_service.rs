use crate::{
    builder::{UsageProfile, allocate},
    dto::builds::{BuildRequest, BuildResponse},
    error::{AppError, AppResult},
    state::AppState,
};

pub fn suggest_build(state: &AppState, payload: BuildRequest) -> AppResult<BuildResponse> {
    let budget = payload
        .budget
        .ok_or_else(|| AppError::BadRequest("Budget is required".into()))?;
    let profile = payload
        .usage
        .as_deref()
        .map(UsageProfile::parse)
        .unwrap_or_default();

    let build = allocate(&state.catalog, budget, profile);
    tracing::debug!(
        budget,
        ?profile,
        parts = build.parts.len(),
        total = build.total,
        "build suggested"
    );

    Ok(build.into())
}
