use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vacancy::Employment;

/// One payload covers create and edit; `id` present means edit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveVacancyPayload {
    pub id: Option<i64>,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    pub salary: Option<i64>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub employment: Vec<Employment>,
    #[serde(default)]
    pub profession: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub conditions: Option<String>,
    pub experience: Option<String>,
}
