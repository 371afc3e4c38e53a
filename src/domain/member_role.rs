use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRole(String);

impl MemberRole {
    pub fn parse(role: &str) -> Result<Self, ValidationError> {
        let role = role.trim();
        match role.chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Member role cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max role length is 255 characters".to_string(),
            )),
            _ => Ok(Self(role.to_owned())),
        }
    }
}

impl AsRef<String> for MemberRole {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_member_roles() {
    let valid_roles = ["a".to_string(), "Engineer".to_string(), "a".repeat(255)];
    for valid_role in valid_roles.iter() {
        let parsed = MemberRole::parse(valid_role)
            .expect("Failed to parse valid member role");

        assert_eq!(parsed.as_ref(), valid_role);
    }
}

#[test]
fn test_member_roles_are_trimmed() {
    let parsed = MemberRole::parse("  Site Manager ").unwrap();
    assert_eq!(parsed.as_ref(), "Site Manager");
}

#[test]
fn test_empty_member_roles() {
    for empty_role in ["", "   "] {
        let result = MemberRole::parse(empty_role);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().as_ref(), "Member role cannot be empty");
    }
}

#[test]
fn test_long_member_roles() {
    let long_role = "a".repeat(256);
    let result = MemberRole::parse(&long_role);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max role length is 255 characters"
    );
}
