//! User model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::utils::errors::LmsError;

/// Account role; decides which dashboard and menu a user gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Parent,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Teacher, Role::Parent, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::Admin => "admin",
        }
    }

    /// Root path of this role's dashboard
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Teacher => "/teacher",
            Role::Parent => "/parent",
            Role::Admin => "/admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
            Role::Admin => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "parent" => Ok(Role::Parent),
            "admin" => Ok(Role::Admin),
            other => Err(LmsError::InvalidInput(format!("Unknown role: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl User {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Initials shown in place of a missing avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    pub fn profile_field(&self, pick: impl Fn(&UserProfile) -> Option<&String>) -> Option<&str> {
        self.profile.as_ref().and_then(|p| pick(p)).map(String::as_str)
    }
}

/// Data accepted by registration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub role: Option<Role>,
    pub profile: Option<UserProfile>,
}

impl RegisterRequest {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: "3".to_string(),
            email: "student@lms.com".to_string(),
            name: "Mike Chen".to_string(),
            role: Role::Student,
            avatar: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            profile: Some(UserProfile {
                grade: Some("10th Grade".to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Role::Admin.dashboard_path(), "/admin");
        assert_eq!(Role::Teacher.dashboard_path(), "/teacher");
        assert_eq!(Role::Parent.dashboard_path(), "/parent");
        assert_eq!(Role::Student.dashboard_path(), "/student");
    }

    #[test]
    fn test_user_serializes_with_client_field_names() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("avatar").is_none());
        assert_eq!(json["profile"]["grade"], "10th Grade");
        assert!(json["profile"].get("phone").is_none());
    }

    #[test]
    fn test_name_helpers() {
        let user = sample_user();
        assert_eq!(user.first_name(), "Mike");
        assert_eq!(user.initials(), "MC");
        assert_eq!(user.profile_field(|p| p.grade.as_ref()), Some("10th Grade"));
        assert_eq!(user.profile_field(|p| p.phone.as_ref()), None);
    }
}
