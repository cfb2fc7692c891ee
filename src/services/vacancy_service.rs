use std::collections::HashSet;
use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::dto::vacancy_dto::SaveVacancyPayload;
use crate::error::{Error, Result};
use crate::keys;
use crate::models::user::User;
use crate::models::vacancy::{ModerationStatus, Region, Vacancy};
use crate::repository::Partition;
use crate::seed::SeedData;
use crate::utils::ids;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct VacancyService {
    backend: Arc<dyn KeyValueBackend>,
    seeds: Arc<SeedData>,
}

impl VacancyService {
    pub fn new(backend: Arc<dyn KeyValueBackend>, seeds: Arc<SeedData>) -> Self {
        Self { backend, seeds }
    }

    fn vacancies(&self) -> Partition<Vacancy> {
        Partition::new(self.backend.clone(), keys::VACANCIES)
    }

    /// Create or edit, depending on whether the payload carries an id.
    ///
    /// A new vacancy always enters moderation. An edited one keeps its
    /// creation date and moderation fields, except that an approved
    /// vacancy goes back to pending with the moderation stamp cleared.
    pub fn save(&self, employer: &User, payload: SaveVacancyPayload) -> Result<Vacancy> {
        validate(&payload)?;

        let partition = self.vacancies();
        let mut vacancy = Vacancy {
            id: payload.id.unwrap_or(0),
            title: payload.title,
            company: payload.company,
            salary: payload.salary,
            region: Region::from_city(&payload.city),
            city: payload.city,
            employment: payload.employment,
            profession: payload.profession,
            description: payload.description,
            requirements: payload.requirements,
            responsibilities: payload.responsibilities,
            conditions: payload.conditions,
            experience: payload.experience,
            employer_id: Some(employer.id.to_string()),
            employer_name: Some(employer.full_name.clone()),
            created_at: crate::utils::time::now(),
            moderation_status: ModerationStatus::Pending,
            moderation_date: None,
            moderator_id: None,
            reject_reason: None,
        };

        match payload.id {
            Some(id) => {
                let previous = partition
                    .find_by_id(id)
                    .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", id)))?;

                vacancy.created_at = previous.created_at;
                vacancy.moderation_status = previous.moderation_status;
                vacancy.moderation_date = previous.moderation_date;
                vacancy.moderator_id = previous.moderator_id;
                vacancy.reject_reason = previous.reject_reason;
                if vacancy.moderation_status == ModerationStatus::Approved {
                    vacancy.moderation_status = ModerationStatus::Pending;
                    vacancy.moderation_date = None;
                    vacancy.moderator_id = None;
                }

                partition.update(&vacancy)?;
                Ok(vacancy)
            }
            None => {
                let mut existing_ids =
                    ids::collect_existing_ids(self.backend.as_ref(), &self.seeds.admins);
                partition.create(vacancy, &mut existing_ids)
            }
        }
    }

    pub fn find_by_id(&self, id: i64) -> Option<Vacancy> {
        self.vacancies().find_by_id(id)
    }

    /// Stored vacancies first, then the read-only catalog.
    pub fn find_any(&self, id: i64) -> Option<Vacancy> {
        self.vacancies()
            .find_by_id(id)
            .or_else(|| self.seeds.vacancy_catalog.iter().find(|v| v.id == id).cloned())
    }

    pub fn list_by_employer(&self, employer_id: i64) -> Vec<Vacancy> {
        let employer_id = employer_id.to_string();
        self.vacancies()
            .list()
            .into_iter()
            .filter(|v| v.employer_id.as_deref() == Some(employer_id.as_str()))
            .collect()
    }

    /// What the public search sees: stored vacancies merged with the
    /// catalog (stored wins on id collision), approved only.
    pub fn search_visible(&self) -> Vec<Vacancy> {
        let mut seen = HashSet::new();
        self.vacancies()
            .list()
            .into_iter()
            .chain(self.seeds.vacancy_catalog.iter().cloned())
            .filter(|v| v.moderation_status == ModerationStatus::Approved)
            .filter(|v| seen.insert(v.id))
            .collect()
    }

    pub fn delete(&self, employer: &User, id: i64) -> Result<()> {
        let partition = self.vacancies();
        let vacancy = partition
            .find_by_id(id)
            .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", id)))?;
        if vacancy.employer_id.as_deref() != Some(employer.id.to_string().as_str()) {
            return Err(Error::Unauthorized(
                "only the owning employer can delete a vacancy".to_string(),
            ));
        }
        partition.delete(id)
    }
}
