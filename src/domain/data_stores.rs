use super::{
    MemberRole, MembershipId, MembershipWithProfile, MembershipWithProject,
    Profile, Project, ProjectId, QueryFailure, TeamMembership, UserId,
};
use color_eyre::eyre::Report;
use thiserror::Error;

/// Backend holding team memberships and the profiles and projects they
/// reference.
///
/// Joined reads use left-join semantics: the membership row is always
/// returned, the joined profile or project may be absent.
#[async_trait::async_trait]
pub trait MembershipStore {
    async fn get_memberships_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<MembershipWithProfile>, MembershipStoreError>;
    async fn get_memberships_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<MembershipWithProject>, MembershipStoreError>;
    async fn get_profile(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, MembershipStoreError>;
    async fn get_projects(&self) -> Result<Vec<Project>, MembershipStoreError>;
    async fn add_membership(
        &mut self,
        membership: &TeamMembership,
    ) -> Result<(), MembershipStoreError>;
    async fn update_role(
        &mut self,
        membership_id: &MembershipId,
        role: Option<&MemberRole>,
    ) -> Result<(), MembershipStoreError>;
    async fn remove_membership(
        &mut self,
        membership_id: &MembershipId,
    ) -> Result<(), MembershipStoreError>;
}

#[derive(Debug, Error)]
pub enum MembershipStoreError {
    #[error("Membership ID exists")]
    MembershipIDExists,
    #[error("Membership ID not found")]
    MembershipIDNotFound,
    #[error("User is already a member of this project")]
    AlreadyMember,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MembershipStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MembershipIDExists, Self::MembershipIDExists)
                | (Self::MembershipIDNotFound, Self::MembershipIDNotFound)
                | (Self::AlreadyMember, Self::AlreadyMember)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

impl From<MembershipStoreError> for QueryFailure {
    fn from(error: MembershipStoreError) -> Self {
        QueryFailure::Backend(error.into())
    }
}
