use std::{future::Future, time::Duration};

use crate::{
    app_state::MembershipStoreType,
    domain::{
        display_name, DisplayMember, DisplayProject, MemberProjects,
        ProjectId, ProjectSummary, QueryFailure, UserId,
    },
};

/// Team of a project, in the order the backend returns the membership rows.
#[tracing::instrument(name = "Listing members of project", skip_all)]
pub async fn list_members_of_project(
    store: &MembershipStoreType,
    project_id: &ProjectId,
) -> Result<Vec<DisplayMember>, QueryFailure> {
    tracing::debug!("project_id: {}", project_id.as_ref().to_string());

    let rows = store
        .read()
        .await
        .get_memberships_for_project(project_id)
        .await?;

    Ok(rows.into_iter().map(DisplayMember::from).collect())
}

/// Projects a member belongs to, plus the member's display name.
///
/// Both reads must succeed; a failure of either fails the whole call.
#[tracing::instrument(name = "Listing projects of member", skip_all)]
pub async fn list_projects_of_member(
    store: &MembershipStoreType,
    member_id: &UserId,
) -> Result<MemberProjects, QueryFailure> {
    tracing::debug!("member_id: {}", member_id.as_ref().to_string());

    let store = store.read().await;
    let (rows, profile) = tokio::try_join!(
        store.get_memberships_for_user(member_id),
        store.get_profile(member_id),
    )?;

    Ok(MemberProjects {
        member_name: display_name(profile.as_ref()),
        projects: rows.into_iter().map(DisplayProject::from).collect(),
    })
}

#[tracing::instrument(name = "Listing projects", skip_all)]
pub async fn list_projects(
    store: &MembershipStoreType,
) -> Result<Vec<ProjectSummary>, QueryFailure> {
    let projects = store.read().await.get_projects().await?;
    Ok(projects.into_iter().map(ProjectSummary::from).collect())
}

/// Bounds `query` by `timeout`, turning expiry into a `QueryFailure`.
pub async fn with_timeout<T, F>(
    timeout: Duration,
    query: F,
) -> Result<T, QueryFailure>
where
    F: Future<Output = Result<T, QueryFailure>>,
{
    tokio::time::timeout(timeout, query)
        .await
        .map_err(|_| QueryFailure::TimedOut(timeout))?
}
