use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vacancy::ModerationStatus;
use crate::models::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub specialty: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub period: String,
    #[serde(default)]
    pub responsibilities: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub has_experience: bool,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub id: i64,
    pub title: String,
    #[serde(default = "crate::utils::time::now")]
    pub created_at: DateTime<Utc>,
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "crate::codec::flexible_opt_i64")]
    pub desired_salary: Option<i64>,
    #[serde(default = "ModerationStatus::legacy_resume_default")]
    pub moderation_status: ModerationStatus,
    #[serde(default)]
    pub moderation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub moderator_id: Option<i64>,
    #[serde(default)]
    pub reject_reason: Option<String>,
}

impl Identified for Resume {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
