use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[validate(length(min = 3))]
    pub username: String,
    #[validate(custom(function = crate::utils::validation::password))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 3))]
    pub username: String,
    #[validate(custom(function = crate::utils::validation::phone))]
    pub phone: String,
    #[validate(custom(function = crate::utils::validation::password))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateModeratorPayload {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 3))]
    pub username: String,
    #[validate(custom(function = crate::utils::validation::phone))]
    pub phone: String,
    #[validate(custom(function = crate::utils::validation::password))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[validate(length(min = 1))]
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: String,
    pub avatar: Option<String>,
}
