use std::time::Duration;

use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardAPIError {
    #[error("Resource with ID not found: {0}")]
    IDNotFoundError(uuid::Uuid),
    #[error("Resource with ID already exists: {0}")]
    IDExistsError(uuid::Uuid),
    #[error("User is already a member of project: {0}")]
    AlreadyMemberError(uuid::Uuid),
    #[error("Backend query failed")]
    QueryFailure(#[from] QueryFailure),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

/// A backend read that failed or timed out.
///
/// An empty result and missing joined records are not failures. Missing
/// records are projected to default display values instead.
#[derive(Debug, Error)]
pub enum QueryFailure {
    #[error("Backend query failed")]
    Backend(#[source] Report),
    #[error("Backend query timed out after {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
