pub mod backend;
pub mod codec;
pub mod config;
pub mod dto;
pub mod error;
pub mod keys;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;
pub mod session;
pub mod utils;

use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::config::Config;
use crate::error::Result;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::models::vacancy::Vacancy;
use crate::repository::Partition;
use crate::seed::SeedData;
use crate::services::{
    admin_service::AdminService, application_service::ApplicationService,
    moderation_service::ModerationService, profile_service::ProfileService,
    resume_service::ResumeService, user_service::UserService, vacancy_service::VacancyService,
};
use crate::session::SessionContext;
use crate::utils::ids;

#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueBackend>,
    pub seeds: Arc<SeedData>,
    pub session: SessionContext,
    pub users: UserService,
    pub admin: AdminService,
    pub vacancies: VacancyService,
    pub resumes: ResumeService,
    pub applications: ApplicationService,
    pub moderation: ModerationService,
    pub profiles: ProfileService,
}

impl Store {
    /// Wire every service onto one backend, load the read-only seeds and
    /// bring legacy identifiers up to the 4-digit scheme.
    pub fn open(config: &Config, backend: Arc<dyn KeyValueBackend>) -> Result<Self> {
        let seeds = Arc::new(SeedData::load(config));

        let session = SessionContext::new(backend.clone());
        let users = UserService::new(backend.clone(), seeds.clone());
        let admin = AdminService::new(backend.clone(), seeds.clone());
        let vacancies = VacancyService::new(backend.clone(), seeds.clone());
        let resumes = ResumeService::new(backend.clone(), seeds.clone());
        let applications = ApplicationService::new(
            backend.clone(),
            seeds.clone(),
            vacancies.clone(),
            resumes.clone(),
        );
        let moderation = ModerationService::new(backend.clone(), resumes.clone());
        let profiles = ProfileService::new(backend.clone());

        let store = Self {
            backend,
            seeds,
            session,
            users,
            admin,
            vacancies,
            resumes,
            applications,
            moderation,
            profiles,
        };
        store.migrate_ids()?;
        Ok(store)
    }

    /// Re-key every record whose id predates the 4-digit scheme: users,
    /// vacancies, then each user's resumes, all against one shared census
    /// so a fresh id can never collide across partitions. Idempotent, so
    /// it runs on every open.
    fn migrate_ids(&self) -> Result<()> {
        let mut existing = ids::collect_existing_ids(self.backend.as_ref(), &self.seeds.admins);

        let user_partition: Partition<User> =
            Partition::new(self.backend.clone(), keys::USERS);
        let mut users = user_partition.list();
        if ids::migrate_legacy_ids(&mut users, &mut existing)? {
            tracing::info!("rewrote legacy user ids");
            user_partition.persist(&users)?;
        }

        let vacancy_partition: Partition<Vacancy> =
            Partition::new(self.backend.clone(), keys::VACANCIES);
        let mut vacancies = vacancy_partition.list();
        if ids::migrate_legacy_ids(&mut vacancies, &mut existing)? {
            tracing::info!("rewrote legacy vacancy ids");
            vacancy_partition.persist(&vacancies)?;
        }

        for user in &users {
            let resume_partition: Partition<Resume> =
                Partition::new(self.backend.clone(), keys::resumes(user.id));
            let mut resumes = resume_partition.list();
            if ids::migrate_legacy_ids(&mut resumes, &mut existing)? {
                tracing::info!(owner = user.id, "rewrote legacy resume ids");
                resume_partition.persist(&resumes)?;
            }
        }

        Ok(())
    }
}
