use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DashboardAPIError, DisplayMember, ProjectId},
    services::membership_queries::{list_members_of_project, with_timeout},
    AppState,
};

#[derive(Deserialize)]
pub struct GetTeamQueryParams {
    #[serde(rename = "projectId")]
    project_id: uuid::Uuid,
}

#[tracing::instrument(name = "Get project team route handler", skip_all)]
pub async fn get_project_team(
    State(state): State<AppState>,
    query_params: Query<GetTeamQueryParams>,
) -> Result<(StatusCode, Json<TeamResponse>), DashboardAPIError> {
    let project_id = ProjectId::new(query_params.project_id);
    tracing::debug!("project_id: {}", project_id.as_ref().to_string());

    let members = with_timeout(
        state.query_timeout,
        list_members_of_project(&state.membership_store, &project_id),
    )
    .await?;

    let response = Json(TeamResponse {
        project_id,
        members,
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    #[serde(rename = "projectId")]
    pub project_id: ProjectId,
    pub members: Vec<DisplayMember>,
}
