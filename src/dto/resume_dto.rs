use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::resume::{EducationEntry, ExperienceItem};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalPayload {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(custom(function = crate::utils::validation::phone))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    pub address: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumePayload {
    #[validate(nested)]
    pub personal: PersonalPayload,
    #[validate(length(min = 1, message = "at least one education entry is required"))]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub has_experience: bool,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub desired_salary: Option<i64>,
}
