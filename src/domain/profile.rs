use serde::{Deserialize, Serialize};

use super::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl Profile {
    pub fn new(
        id: UserId,
        first_name: Option<String>,
        last_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            avatar_url,
        }
    }

    /// First and last name joined by a space and trimmed. `None` when both
    /// parts are missing or blank.
    pub fn full_name(&self) -> Option<String> {
        let full_name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full_name = full_name.trim();
        if full_name.is_empty() {
            None
        } else {
            Some(full_name.to_owned())
        }
    }
}
