use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::{
    domain::{
        DashboardAPIError, DisplayMember, MemberRole, MembershipStoreError,
        ProjectId, TeamMembership, UserId,
    },
    services::membership_queries::{list_members_of_project, with_timeout},
    utils::tracing::log_error_chain,
    AppState,
};

/// Adds a member to a project and answers with the re-fetched team.
///
/// The response is 201 once the membership is stored. If the team cannot be
/// re-fetched afterwards, `members` is left out.
#[tracing::instrument(name = "Add member to project route handler", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<AddMemberResponse>), DashboardAPIError> {
    let project_id = ProjectId::parse(&request.project_id)?;
    let user_id = UserId::parse(&request.user_id)?;
    let role = request.role.as_deref().map(MemberRole::parse).transpose()?;

    let membership = TeamMembership::new(project_id, user_id, role);

    state
        .membership_store
        .write()
        .await
        .add_membership(&membership)
        .await
        .map_err(|e| match e {
            MembershipStoreError::AlreadyMember => {
                DashboardAPIError::AlreadyMemberError(
                    *membership.project_id.as_ref(),
                )
            }
            MembershipStoreError::MembershipIDExists => {
                DashboardAPIError::IDExistsError(*membership.id.as_ref())
            }
            e => DashboardAPIError::UnexpectedError(eyre!(e)),
        })?;

    let members = with_timeout(
        state.query_timeout,
        list_members_of_project(&state.membership_store, &membership.project_id),
    )
    .await
    .map_err(|e| log_error_chain(&e, Level::ERROR))
    .ok();

    let response = Json(AddMemberResponse {
        membership_id: *membership.id.as_ref(),
        project_id: *membership.project_id.as_ref(),
        members,
    });

    Ok((StatusCode::CREATED, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AddMemberResponse {
    #[serde(rename = "membershipId")]
    pub membership_id: uuid::Uuid,
    #[serde(rename = "projectId")]
    pub project_id: uuid::Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<DisplayMember>>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddMemberRequest {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub role: Option<String>,
}
