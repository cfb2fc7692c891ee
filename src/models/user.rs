use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    User,
    Moderator,
    Admin,
}

impl UserStatus {
    fn default_user() -> Self {
        UserStatus::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Jobseeker,
    Employer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub id: i64,
    pub full_name: String,
    pub username: String,
    // Stored in clear; the platform has no password hashing anywhere.
    #[serde(default)]
    pub password: String,
    pub phone: String,
    #[serde(default = "UserStatus::default_user")]
    pub status: UserStatus,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default = "crate::utils::time::now")]
    pub registration_date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Free-form profile overlay stored under `userData_<id>`, separate from
/// the User record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}
