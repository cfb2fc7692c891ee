use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::error::{Error, Result};
use crate::keys;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::models::vacancy::{ModerationStatus, Vacancy};
use crate::repository::Partition;
use crate::services::resume_service::{ResumeListing, ResumeService};
use crate::utils::time;

/// The moderation dashboard's slice of the store: queue listings and the
/// approve/reject transitions for vacancies and resumes. Whether the
/// caller is allowed to moderate is the page's concern; the moderator
/// argument is only recorded on the record.
#[derive(Clone)]
pub struct ModerationService {
    backend: Arc<dyn KeyValueBackend>,
    resumes: ResumeService,
}

impl ModerationService {
    pub fn new(backend: Arc<dyn KeyValueBackend>, resumes: ResumeService) -> Self {
        Self { backend, resumes }
    }

    fn vacancies(&self) -> Partition<Vacancy> {
        Partition::new(self.backend.clone(), keys::VACANCIES)
    }

    fn users(&self) -> Partition<User> {
        Partition::new(self.backend.clone(), keys::USERS)
    }

    pub fn list_vacancies(&self) -> Vec<Vacancy> {
        self.vacancies().list()
    }

    pub fn list_resumes(&self) -> Vec<ResumeListing> {
        self.resumes.list_all(&self.users().list())
    }

    pub fn pending_vacancies(&self) -> Vec<Vacancy> {
        self.list_vacancies()
            .into_iter()
            .filter(|v| v.moderation_status == ModerationStatus::Pending)
            .collect()
    }

    pub fn pending_resumes(&self) -> Vec<ResumeListing> {
        self.list_resumes()
            .into_iter()
            .filter(|l| l.resume.moderation_status == ModerationStatus::Pending)
            .collect()
    }

    pub fn approve_vacancy(&self, moderator: &User, vacancy_id: i64) -> Result<Vacancy> {
        self.stamp_vacancy(moderator, vacancy_id, ModerationStatus::Approved, None)
    }

    pub fn reject_vacancy(
        &self,
        moderator: &User,
        vacancy_id: i64,
        reason: &str,
    ) -> Result<Vacancy> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::BadRequest("a rejection reason is required".to_string()));
        }
        self.stamp_vacancy(
            moderator,
            vacancy_id,
            ModerationStatus::Rejected,
            Some(reason.to_string()),
        )
    }

    fn stamp_vacancy(
        &self,
        moderator: &User,
        vacancy_id: i64,
        status: ModerationStatus,
        reason: Option<String>,
    ) -> Result<Vacancy> {
        let partition = self.vacancies();
        let mut vacancy = partition
            .find_by_id(vacancy_id)
            .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", vacancy_id)))?;

        vacancy.moderation_status = status;
        vacancy.moderation_date = Some(time::now());
        vacancy.moderator_id = Some(moderator.id);
        vacancy.reject_reason = reason;

        partition.update(&vacancy)?;
        Ok(vacancy)
    }

    /// Resume moderation writes back into the owner's partition.
    pub fn approve_resume(
        &self,
        moderator: &User,
        owner_id: i64,
        resume_id: i64,
    ) -> Result<Resume> {
        self.stamp_resume(moderator, owner_id, resume_id, ModerationStatus::Approved, None)
    }

    pub fn reject_resume(
        &self,
        moderator: &User,
        owner_id: i64,
        resume_id: i64,
        reason: &str,
    ) -> Result<Resume> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::BadRequest("a rejection reason is required".to_string()));
        }
        self.stamp_resume(
            moderator,
            owner_id,
            resume_id,
            ModerationStatus::Rejected,
            Some(reason.to_string()),
        )
    }

    fn stamp_resume(
        &self,
        moderator: &User,
        owner_id: i64,
        resume_id: i64,
        status: ModerationStatus,
        reason: Option<String>,
    ) -> Result<Resume> {
        let partition: Partition<Resume> =
            Partition::new(self.backend.clone(), keys::resumes(owner_id));
        let mut resume = partition
            .find_by_id(resume_id)
            .ok_or_else(|| Error::NotFound(format!("resume {} not found", resume_id)))?;

        resume.moderation_status = status;
        resume.moderation_date = Some(time::now());
        resume.moderator_id = Some(moderator.id);
        resume.reject_reason = reason;

        partition.update(&resume)?;
        Ok(resume)
    }
}
