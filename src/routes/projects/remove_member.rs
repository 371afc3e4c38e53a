use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{DashboardAPIError, MembershipId, MembershipStoreError},
    AppState,
};

#[derive(Deserialize)]
pub struct RemoveMemberQueryParams {
    #[serde(rename = "membershipId")]
    membership_id: uuid::Uuid,
}

#[tracing::instrument(name = "Remove member route handler", skip_all)]
pub async fn remove_member(
    State(state): State<AppState>,
    query_params: Query<RemoveMemberQueryParams>,
) -> Result<StatusCode, DashboardAPIError> {
    let membership_id = MembershipId::new(query_params.membership_id);
    tracing::debug!("membership_id: {}", membership_id.as_ref().to_string());

    state
        .membership_store
        .write()
        .await
        .remove_membership(&membership_id)
        .await
        .map_err(|e| match e {
            MembershipStoreError::MembershipIDNotFound => {
                DashboardAPIError::IDNotFoundError(*membership_id.as_ref())
            }
            e => DashboardAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok(StatusCode::OK)
}
