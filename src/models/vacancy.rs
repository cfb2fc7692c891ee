use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    /// Vacancy records written before moderation existed count as visible.
    pub(crate) fn legacy_vacancy_default() -> Self {
        ModerationStatus::Approved
    }

    /// Resume records written before moderation existed go back through
    /// the queue. Asymmetric with vacancies on purpose.
    pub(crate) fn legacy_resume_default() -> Self {
        ModerationStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Employment {
    Full,
    Part,
    Remote,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Moscow,
    Spb,
    Remote,
    Other,
}

impl Region {
    pub(crate) fn other() -> Self {
        Region::Other
    }

    pub fn from_city(city: &str) -> Self {
        let city = city.to_lowercase();
        if city.contains("москва") || city.contains("moscow") {
            Region::Moscow
        } else if city.contains("санкт-петербург") || city.contains("спб") || city.contains("питер") {
            Region::Spb
        } else if city.contains("удален") || city.contains("remote") {
            Region::Remote
        } else {
            Region::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub city: String,
    #[serde(default = "Region::other")]
    pub region: Region,
    #[serde(default)]
    pub employment: Vec<Employment>,
    #[serde(default)]
    pub profession: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "crate::codec::flexible_opt_string")]
    pub employer_id: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(alias = "created", default = "crate::utils::time::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "ModerationStatus::legacy_vacancy_default")]
    pub moderation_status: ModerationStatus,
    #[serde(default)]
    pub moderation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub moderator_id: Option<i64>,
    #[serde(default)]
    pub reject_reason: Option<String>,
}

impl Identified for Vacancy {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
