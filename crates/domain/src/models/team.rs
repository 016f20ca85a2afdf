//! Team member domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub exp: String,
    pub photo: String,
}

fn default_name() -> String {
    "New Member".to_string()
}

fn default_role() -> String {
    "Event Planner".to_string()
}

fn default_exp() -> String {
    "2 Years".to_string()
}

fn default_photo() -> String {
    "https://randomuser.me/api/portraits/lego/1.jpg".to_string()
}

/// Create/edit payload. Omitted fields get the placeholder values the team
/// manager uses for a freshly added member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInput {
    #[serde(default = "default_name")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default = "default_exp")]
    pub exp: String,

    #[serde(default = "default_photo")]
    #[validate(custom(function = "shared::validation::validate_image_source"))]
    pub photo: String,
}

impl TeamMemberInput {
    pub fn into_member(self, id: i64) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            exp: self.exp,
            photo: self.photo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_uses_placeholders() {
        let input: TeamMemberInput = serde_json::from_str("{}").unwrap();
        assert!(input.validate().is_ok());

        let member = input.into_member(0);
        assert_eq!(member.name, "New Member");
        assert_eq!(member.role, "Event Planner");
        assert_eq!(member.exp, "2 Years");
    }

    #[test]
    fn test_blank_name_rejected() {
        let input: TeamMemberInput = serde_json::from_str(r#"{"name": " "}"#).unwrap();
        assert!(input.validate().is_err());
    }
}
