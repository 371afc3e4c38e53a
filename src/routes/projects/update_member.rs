use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        DashboardAPIError, MemberRole, MembershipId, MembershipStoreError,
    },
    AppState,
};

#[derive(Deserialize)]
pub struct UpdateMemberQueryParams {
    #[serde(rename = "membershipId")]
    membership_id: uuid::Uuid,
}

#[tracing::instrument(name = "Update member route handler", skip_all)]
pub async fn update_member(
    State(state): State<AppState>,
    query_params: Query<UpdateMemberQueryParams>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<(StatusCode, Json<UpdateMemberResponse>), DashboardAPIError> {
    let membership_id = MembershipId::new(query_params.membership_id);
    let role = request.role.as_deref().map(MemberRole::parse).transpose()?;

    state
        .membership_store
        .write()
        .await
        .update_role(&membership_id, role.as_ref())
        .await
        .map_err(|e| match e {
            MembershipStoreError::MembershipIDNotFound => {
                DashboardAPIError::IDNotFoundError(*membership_id.as_ref())
            }
            e => DashboardAPIError::UnexpectedError(eyre!(e)),
        })?;

    let response = Json(UpdateMemberResponse {
        membership_id: *membership_id.as_ref(),
        role: role.map(|role| role.as_ref().to_owned()),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberResponse {
    #[serde(rename = "membershipId")]
    pub membership_id: uuid::Uuid,
    pub role: Option<String>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct UpdateMemberRequest {
    pub role: Option<String>,
}
