use super::{MemberRole, MembershipId, Profile, Project, ProjectId, UserId};

/// Association row linking a profile to a project with a role.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMembership {
    pub id: MembershipId,
    pub project_id: ProjectId,
    pub user_id: Option<UserId>,
    pub role: Option<MemberRole>,
}

impl TeamMembership {
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        role: Option<MemberRole>,
    ) -> Self {
        Self {
            id: MembershipId::default(),
            project_id,
            user_id: Some(user_id),
            role,
        }
    }
}

/// Membership row left-joined to the profile referenced by `user_id`.
///
/// `role` is the raw column value; it may be null or blank.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipWithProfile {
    pub membership_id: MembershipId,
    pub user_id: Option<UserId>,
    pub role: Option<String>,
    pub profile: Option<Profile>,
}

/// Membership row left-joined to the project referenced by `project_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipWithProject {
    pub membership_id: MembershipId,
    pub project_id: ProjectId,
    pub role: Option<String>,
    pub project: Option<Project>,
}
