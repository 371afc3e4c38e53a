use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{
    domain::{DashboardAPIError, MemberProjects, UserId},
    services::membership_queries::{list_projects_of_member, with_timeout},
    AppState,
};

#[derive(Deserialize)]
pub struct GetMemberProjectsQueryParams {
    #[serde(rename = "memberId")]
    member_id: uuid::Uuid,
}

#[tracing::instrument(name = "Get member projects route handler", skip_all)]
pub async fn get_member_projects(
    State(state): State<AppState>,
    query_params: Query<GetMemberProjectsQueryParams>,
) -> Result<(StatusCode, Json<MemberProjects>), DashboardAPIError> {
    let member_id = UserId::new(query_params.member_id);
    tracing::debug!("member_id: {}", member_id.as_ref().to_string());

    let member_projects = with_timeout(
        state.query_timeout,
        list_projects_of_member(&state.membership_store, &member_id),
    )
    .await?;

    Ok((StatusCode::OK, Json(member_projects)))
}
