use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub admin_seed_path: Option<PathBuf>,
    pub vacancy_catalog_path: Option<PathBuf>,
    pub resume_catalog_path: Option<PathBuf>,
}

impl Config {
    /// Every value is optional: with nothing set the store still boots on
    /// the built-in admin account and empty catalogs.
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            admin_seed_path: get_path("ADMIN_SEED_PATH"),
            vacancy_catalog_path: get_path("VACANCY_CATALOG_PATH"),
            resume_catalog_path: get_path("RESUME_CATALOG_PATH"),
        }
    }
}

fn get_path(name: &str) -> Option<PathBuf> {
    env::var(name).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}
