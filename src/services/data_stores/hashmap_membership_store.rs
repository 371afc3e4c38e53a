use std::collections::HashMap;

use color_eyre::eyre::eyre;

use crate::domain::{
    MemberRole, MembershipId, MembershipStore, MembershipStoreError,
    MembershipWithProfile, MembershipWithProject, Profile, Project, ProjectId,
    TeamMembership, UserId,
};

/// In-memory backend. Profiles are keyed by user id. Memberships and
/// projects are `Vec`s so reads come back in the order rows were added.
#[derive(Default)]
pub struct HashmapMembershipStore {
    memberships: Vec<TeamMembership>,
    profiles: HashMap<UserId, Profile>,
    projects: Vec<Project>,
    unavailable: bool,
    reads_unavailable: bool,
}

impl HashmapMembershipStore {
    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn remove_profile(&mut self, user_id: &UserId) -> Option<Profile> {
        self.profiles.remove(user_id)
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.retain(|p| p.id != project.id);
        self.projects.push(project);
    }

    pub fn remove_project(&mut self, project_id: &ProjectId) {
        self.projects.retain(|p| &p.id != project_id);
    }

    /// Makes every call fail as if the backend could not be reached.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Makes reads fail while writes still succeed.
    pub fn set_reads_unavailable(&mut self, unavailable: bool) {
        self.reads_unavailable = unavailable;
    }

    fn check_readable(&self) -> Result<(), MembershipStoreError> {
        self.check_available()?;
        if self.reads_unavailable {
            return Err(MembershipStoreError::UnexpectedError(eyre!(
                "backend reads unavailable"
            )));
        }
        Ok(())
    }

    fn check_available(&self) -> Result<(), MembershipStoreError> {
        if self.unavailable {
            return Err(MembershipStoreError::UnexpectedError(eyre!(
                "backend unavailable"
            )));
        }
        Ok(())
    }

    fn find_membership(
        &mut self,
        membership_id: &MembershipId,
    ) -> Result<&mut TeamMembership, MembershipStoreError> {
        self.memberships
            .iter_mut()
            .find(|m| &m.id == membership_id)
            .ok_or(MembershipStoreError::MembershipIDNotFound)
    }
}

#[async_trait::async_trait]
impl MembershipStore for HashmapMembershipStore {
    async fn get_memberships_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<MembershipWithProfile>, MembershipStoreError> {
        self.check_readable()?;

        Ok(self
            .memberships
            .iter()
            .filter(|m| &m.project_id == project_id)
            .map(|m| MembershipWithProfile {
                membership_id: m.id.clone(),
                user_id: m.user_id.clone(),
                role: m.role.as_ref().map(|r| r.as_ref().to_owned()),
                profile: m
                    .user_id
                    .as_ref()
                    .and_then(|id| self.profiles.get(id))
                    .cloned(),
            })
            .collect())
    }

    async fn get_memberships_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<MembershipWithProject>, MembershipStoreError> {
        self.check_readable()?;

        Ok(self
            .memberships
            .iter()
            .filter(|m| m.user_id.as_ref() == Some(user_id))
            .map(|m| MembershipWithProject {
                membership_id: m.id.clone(),
                project_id: m.project_id.clone(),
                role: m.role.as_ref().map(|r| r.as_ref().to_owned()),
                project: self
                    .projects
                    .iter()
                    .find(|p| p.id == m.project_id)
                    .cloned(),
            })
            .collect())
    }

    async fn get_profile(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, MembershipStoreError> {
        self.check_readable()?;
        Ok(self.profiles.get(user_id).cloned())
    }

    async fn get_projects(&self) -> Result<Vec<Project>, MembershipStoreError> {
        self.check_readable()?;
        Ok(self.projects.clone())
    }

    async fn add_membership(
        &mut self,
        membership: &TeamMembership,
    ) -> Result<(), MembershipStoreError> {
        self.check_available()?;

        if self.memberships.iter().any(|m| m.id == membership.id) {
            return Err(MembershipStoreError::MembershipIDExists);
        }
        if membership.user_id.is_some()
            && self.memberships.iter().any(|m| {
                m.project_id == membership.project_id
                    && m.user_id == membership.user_id
            })
        {
            return Err(MembershipStoreError::AlreadyMember);
        }

        self.memberships.push(membership.clone());
        Ok(())
    }

    async fn update_role(
        &mut self,
        membership_id: &MembershipId,
        role: Option<&MemberRole>,
    ) -> Result<(), MembershipStoreError> {
        self.check_available()?;
        self.find_membership(membership_id)?.role = role.cloned();
        Ok(())
    }

    async fn remove_membership(
        &mut self,
        membership_id: &MembershipId,
    ) -> Result<(), MembershipStoreError> {
        self.check_available()?;

        let index = self
            .memberships
            .iter()
            .position(|m| &m.id == membership_id)
            .ok_or(MembershipStoreError::MembershipIDNotFound)?;
        self.memberships.remove(index);
        Ok(())
    }
}
