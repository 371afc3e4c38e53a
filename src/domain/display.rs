use serde::{Deserialize, Serialize};

use super::{MembershipWithProfile, MembershipWithProject, Profile, Project};
use crate::utils::constants::display::{
    DEFAULT_ROLE, UNKNOWN_PROJECT, UNKNOWN_STATUS, UNKNOWN_USER,
};

/// Team member as rendered in a project's team panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayMember {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
}

/// Project as rendered in a member's project panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProject {
    pub id: String,
    pub name: String,
    pub status: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProjects {
    #[serde(rename = "memberName")]
    pub member_name: String,
    pub projects: Vec<DisplayProject>,
}

/// Project as listed on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl From<Project> for ProjectSummary {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.as_ref().to_string(),
            name: non_blank(project.name)
                .unwrap_or_else(|| UNKNOWN_PROJECT.to_owned()),
            status: non_blank(project.status)
                .unwrap_or_else(|| UNKNOWN_STATUS.to_owned()),
        }
    }
}

impl From<MembershipWithProfile> for DisplayMember {
    fn from(row: MembershipWithProfile) -> Self {
        let name = display_name(row.profile.as_ref());
        let avatar = row
            .profile
            .and_then(|profile| profile.avatar_url)
            .filter(|url| !url.trim().is_empty());

        Self {
            id: row.membership_id.as_ref().to_string(),
            user_id: row.user_id.map(|id| id.as_ref().to_string()),
            name,
            role: display_role(row.role.as_deref()),
            avatar,
        }
    }
}

impl From<MembershipWithProject> for DisplayProject {
    fn from(row: MembershipWithProject) -> Self {
        let role = display_role(row.role.as_deref());
        match row.project {
            Some(project) => Self {
                id: project.id.as_ref().to_string(),
                name: non_blank(project.name)
                    .unwrap_or_else(|| UNKNOWN_PROJECT.to_owned()),
                status: non_blank(project.status)
                    .unwrap_or_else(|| UNKNOWN_STATUS.to_owned()),
                role,
            },
            None => Self {
                id: String::new(),
                name: UNKNOWN_PROJECT.to_owned(),
                status: UNKNOWN_STATUS.to_owned(),
                role,
            },
        }
    }
}

/// Name shown for a possibly missing profile.
pub fn display_name(profile: Option<&Profile>) -> String {
    profile
        .and_then(Profile::full_name)
        .unwrap_or_else(|| UNKNOWN_USER.to_owned())
}

fn display_role(role: Option<&str>) -> String {
    role.map(str::trim)
        .filter(|role| !role.is_empty())
        .unwrap_or(DEFAULT_ROLE)
        .to_owned()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
