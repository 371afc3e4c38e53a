use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DashboardAPIError, ProjectSummary},
    services::membership_queries::{list_projects, with_timeout},
    AppState,
};

#[tracing::instrument(name = "Get project list route handler", skip_all)]
pub async fn get_project_list(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ProjectListResponse>), DashboardAPIError> {
    let projects = with_timeout(
        state.query_timeout,
        list_projects(&state.membership_store),
    )
    .await?;

    Ok((StatusCode::OK, Json(ProjectListResponse { projects })))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}
