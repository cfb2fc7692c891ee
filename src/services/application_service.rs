use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::error::{Error, Result};
use crate::keys;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::user::User;
use crate::repository::Partition;
use crate::seed::SeedData;
use crate::services::resume_service::ResumeService;
use crate::services::vacancy_service::VacancyService;
use crate::utils::ids;
use crate::utils::time;

/// Applications live twice: in the applicant's partition and, when the
/// vacancy has a known employer, in that employer's partition. Both legs
/// of every write land before success is reported; a failed second leg
/// rolls the first one back.
#[derive(Clone)]
pub struct ApplicationService {
    backend: Arc<dyn KeyValueBackend>,
    seeds: Arc<SeedData>,
    vacancies: VacancyService,
    resumes: ResumeService,
}

impl ApplicationService {
    pub fn new(
        backend: Arc<dyn KeyValueBackend>,
        seeds: Arc<SeedData>,
        vacancies: VacancyService,
        resumes: ResumeService,
    ) -> Self {
        Self {
            backend,
            seeds,
            vacancies,
            resumes,
        }
    }

    fn applicant_side(&self, applicant_id: i64) -> Partition<Application> {
        Partition::new(self.backend.clone(), keys::applications(applicant_id))
    }

    fn employer_side(&self, employer_id: i64) -> Partition<Application> {
        Partition::new(
            self.backend.clone(),
            keys::applications_to_employer(employer_id),
        )
    }

    pub fn list_for_applicant(&self, applicant_id: i64) -> Vec<Application> {
        self.applicant_side(applicant_id).list()
    }

    pub fn list_for_employer(&self, employer_id: i64) -> Vec<Application> {
        self.employer_side(employer_id).list()
    }

    pub fn submit(&self, applicant: &User, vacancy_id: i64, resume_id: i64) -> Result<Application> {
        let applicant_partition = self.applicant_side(applicant.id);
        if applicant_partition
            .list()
            .iter()
            .any(|a| a.vacancy_id == vacancy_id)
        {
            return Err(Error::BadRequest(
                "you have already applied to this vacancy".to_string(),
            ));
        }

        let resume = self
            .resumes
            .find(applicant.id, resume_id)
            .ok_or_else(|| Error::NotFound(format!("resume {} not found", resume_id)))?;

        // Stored vacancies first, then the catalog; catalog vacancies
        // have no employer to notify.
        let vacancy = self
            .vacancies
            .find_any(vacancy_id)
            .ok_or_else(|| Error::NotFound(format!("vacancy {} not found", vacancy_id)))?;

        let mut existing_ids = ids::collect_existing_ids(self.backend.as_ref(), &self.seeds.admins);
        let application = Application {
            id: 0,
            vacancy_id,
            vacancy_title: vacancy.title.clone(),
            resume_id,
            resume_title: resume.title.clone(),
            applicant_id: applicant.id,
            applicant_name: applicant.full_name.clone(),
            employer_id: vacancy.employer_id.clone(),
            applied_at: time::now(),
            status: ApplicationStatus::Sent,
            reviewed_at: None,
        };

        let applicant_snapshot = applicant_partition.snapshot();
        let application = applicant_partition.create(application, &mut existing_ids)?;

        if let Some(employer_id) = parse_employer_id(application.employer_id.as_deref()) {
            let employer_partition = self.employer_side(employer_id);
            let mut employer_copy = employer_partition.list();
            employer_copy.push(application.clone());
            if let Err(err) = employer_partition.persist(&employer_copy) {
                applicant_partition.restore(applicant_snapshot.as_deref())?;
                return Err(err);
            }
        }

        Ok(application)
    }

    pub fn approve(&self, employer: &User, application_id: i64) -> Result<Application> {
        self.review(employer, application_id, ApplicationStatus::Approved)
    }

    pub fn reject(&self, employer: &User, application_id: i64) -> Result<Application> {
        self.review(employer, application_id, ApplicationStatus::Rejected)
    }

    /// Update the employer-side copy, then mirror status and review time
    /// onto the applicant-side copy.
    fn review(
        &self,
        employer: &User,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<Application> {
        let employer_partition = self.employer_side(employer.id);
        let mut application = employer_partition
            .find_by_id(application_id)
            .ok_or_else(|| Error::NotFound(format!("application {} not found", application_id)))?;

        application.status = status;
        application.reviewed_at = Some(time::now());

        let employer_snapshot = employer_partition.snapshot();
        employer_partition.update(&application)?;

        let applicant_partition = self.applicant_side(application.applicant_id);
        if let Some(mut mirror) = applicant_partition.find_by_id(application_id) {
            mirror.status = application.status;
            mirror.reviewed_at = application.reviewed_at;
            if let Err(err) = applicant_partition.update(&mirror) {
                employer_partition.restore(employer_snapshot.as_deref())?;
                return Err(err);
            }
        }

        Ok(application)
    }
}

fn parse_employer_id(employer_id: Option<&str>) -> Option<i64> {
    employer_id.and_then(|raw| raw.trim().parse::<i64>().ok())
}
