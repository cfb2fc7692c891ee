use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Sent,
    Approved,
    Rejected,
}

/// A jobseeker's response to a vacancy. Stored twice: in the applicant's
/// partition and, when the employer is known, in the employer's. The two
/// copies carry the same id and must agree after every status change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub id: i64,
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub vacancy_id: i64,
    pub vacancy_title: String,
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub resume_id: i64,
    pub resume_title: String,
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub applicant_id: i64,
    pub applicant_name: String,
    #[serde(default, deserialize_with = "crate::codec::flexible_opt_string")]
    pub employer_id: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Identified for Application {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
