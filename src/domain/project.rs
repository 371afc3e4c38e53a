use serde::{Deserialize, Serialize};

use super::ProjectId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: Option<String>,
    pub status: Option<String>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self { id, name, status }
    }
}
