use thiserror::Error;

use crate::domain::{
    MemberRole, MembershipId, MembershipStoreError, TeamMembership, UserId,
};

use super::membership_view::{LoadOutcome, MembershipView, ProjectTeam};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddMemberState {
    #[default]
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Error)]
pub enum AddMemberError {
    #[error("Add member form is not open")]
    NotOpen,
    #[error("No project selected")]
    NoScope,
    #[error("Failed to add member")]
    Mutation(#[source] MembershipStoreError),
    /// The membership is stored; only the team re-fetch failed.
    #[error("Member added but the team list could not be refreshed")]
    RefreshFailed(MembershipId),
}

/// Transient "add member" UI of a project team panel.
///
/// The form only closes once the membership is stored and the team view has
/// been re-fetched.
#[derive(Debug, Default)]
pub struct AddMemberForm {
    state: AddMemberState,
}

impl AddMemberForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AddMemberState {
        self.state
    }

    pub fn open(&mut self) {
        if self.state == AddMemberState::Closed {
            self.state = AddMemberState::Open;
        }
    }

    pub fn cancel(&mut self) {
        if self.state == AddMemberState::Open {
            self.state = AddMemberState::Closed;
        }
    }

    #[tracing::instrument(name = "Submitting add member form", skip_all)]
    pub async fn submit(
        &mut self,
        view: &mut MembershipView<ProjectTeam>,
        user_id: UserId,
        role: Option<MemberRole>,
    ) -> Result<MembershipId, AddMemberError> {
        if self.state != AddMemberState::Open {
            return Err(AddMemberError::NotOpen);
        }
        let project_id = view.scope().cloned().ok_or(AddMemberError::NoScope)?;

        self.state = AddMemberState::Submitting;
        let membership = TeamMembership::new(project_id, user_id, role);

        let added = view
            .store()
            .write()
            .await
            .add_membership(&membership)
            .await;
        if let Err(e) = added {
            self.state = AddMemberState::Open;
            return Err(AddMemberError::Mutation(e));
        }

        match view.refresh().await {
            LoadOutcome::Loaded => {
                self.state = AddMemberState::Closed;
                Ok(membership.id)
            }
            outcome => {
                tracing::debug!(?outcome, "Team refresh after add did not load");
                self.state = AddMemberState::Open;
                Err(AddMemberError::RefreshFailed(membership.id))
            }
        }
    }
}
