use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{builder::Build, models::Product};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BuildRequest {
    pub budget: Option<f64>,
    pub usage: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BuildResponse {
    pub build: Vec<Product>,
    pub total: u64,
    /// Whether enough categories were filled to make a usable build.
    pub complete: bool,
}

impl From<Build> for BuildResponse {
    fn from(build: Build) -> Self {
        let complete = build.is_complete();
        Self {
            build: build.parts,
            total: build.total,
            complete,
        }
    }
}
