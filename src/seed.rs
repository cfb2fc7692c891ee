use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::resume::Resume;
use crate::models::user::{User, UserStatus};
use crate::models::vacancy::Vacancy;
use crate::utils::time;

/// Built-in administrator record read from the admin seed file. The file
/// predates the store, so the display-name field still answers to its old
/// name (`fio`) on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAdmin {
    #[serde(deserialize_with = "crate::codec::flexible_id")]
    pub id: i64,
    #[serde(alias = "fio")]
    pub full_name: String,
    #[serde(default)]
    pub login: Option<String>,
    pub username: String,
    pub phone: String,
    pub password: String,
    #[serde(default = "SeedAdmin::default_status")]
    pub status: UserStatus,
    #[serde(default = "crate::utils::time::now")]
    pub registration_date: DateTime<Utc>,
}

impl SeedAdmin {
    fn default_status() -> UserStatus {
        UserStatus::Admin
    }

    /// Seed files historically carried both a `login` and a `username`;
    /// either one authenticates.
    pub fn matches_login(&self, username: &str) -> bool {
        self.login.as_deref() == Some(username) || self.username == username
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            full_name: self.full_name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
            status: self.status,
            role: None,
            registration_date: self.registration_date,
            is_active: true,
            company: None,
            position: None,
        }
    }
}

/// Read-only bootstrap data: admin credentials plus the example vacancy
/// and resume catalogs merged into search results at read time. Never
/// written back.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub admins: Vec<SeedAdmin>,
    pub vacancy_catalog: Vec<Vacancy>,
    pub resume_catalog: Vec<Resume>,
}

impl SeedData {
    pub fn load(config: &Config) -> Self {
        let admins = match &config.admin_seed_path {
            Some(path) => match load_json_file::<Vec<SeedAdmin>>(path) {
                Ok(admins) if !admins.is_empty() => admins,
                Ok(_) => {
                    tracing::warn!(path = %path.display(), "admin seed file is empty, using fallback admin");
                    Self::fallback_admins()
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to load admin seed, using fallback admin");
                    Self::fallback_admins()
                }
            },
            None => Self::fallback_admins(),
        };

        Self {
            admins,
            vacancy_catalog: load_catalog(config.vacancy_catalog_path.as_deref()),
            resume_catalog: load_catalog(config.resume_catalog_path.as_deref()),
        }
    }

    /// Hardcoded single-admin fallback for when the seed file is missing
    /// or unreadable: the platform must stay administrable regardless.
    fn fallback_admins() -> Vec<SeedAdmin> {
        let registered = "2025-12-15T11:00:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|_| time::now());

        vec![SeedAdmin {
            id: 1001,
            full_name: "Administrator".to_string(),
            login: Some("admin".to_string()),
            username: "admin".to_string(),
            phone: "+7 (123) 456-78-90".to_string(),
            password: "qweqwe".to_string(),
            status: UserStatus::Admin,
            registration_date: registered,
        }]
    }
}

fn load_catalog<T: DeserializeOwned>(path: Option<&Path>) -> Vec<T> {
    let Some(path) = path else {
        return Vec::new();
    };
    match load_json_file(path) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load catalog, continuing without it");
            Vec::new()
        }
    }
}

fn load_json_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fallback_admin_is_used_when_no_seed_is_configured() {
        let seeds = SeedData::load(&Config::default());
        assert_eq!(seeds.admins.len(), 1);
        let admin = &seeds.admins[0];
        assert_eq!(admin.id, 1001);
        assert!(admin.matches_login("admin"));
        assert_eq!(admin.status, UserStatus::Admin);
    }

    #[test]
    fn seed_file_overrides_the_fallback_and_accepts_legacy_field_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1002, "fio": "Seed Admin", "login": "root", "username": "root",
                 "phone": "+7 (111) 222-33-44", "password": "changeme", "status": "admin",
                 "registrationDate": "2025-01-01T00:00:00Z"}}]"#
        )
        .unwrap();

        let config = Config {
            admin_seed_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let seeds = SeedData::load(&config);
        assert_eq!(seeds.admins.len(), 1);
        assert_eq!(seeds.admins[0].full_name, "Seed Admin");
        assert!(seeds.admins[0].matches_login("root"));
    }

    #[test]
    fn unreadable_seed_degrades_to_the_fallback() {
        let config = Config {
            admin_seed_path: Some("/nonexistent/admin.json".into()),
            ..Config::default()
        };
        let seeds = SeedData::load(&config);
        assert_eq!(seeds.admins[0].id, 1001);
    }
}
