use std::collections::HashSet;
use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::dto::resume_dto::CreateResumePayload;
use crate::error::{Error, Result};
use crate::keys;
use crate::models::resume::{Experience, PersonalInfo, Resume};
use crate::models::user::User;
use crate::models::vacancy::ModerationStatus;
use crate::repository::Partition;
use crate::seed::SeedData;
use crate::utils::ids;
use crate::utils::time;
use crate::utils::validation::validate;

/// A resume with the owner annotation the employer search and the
/// moderation queue need; catalog entries have no owner.
#[derive(Debug, Clone)]
pub struct ResumeListing {
    pub resume: Resume,
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
}

#[derive(Clone)]
pub struct ResumeService {
    backend: Arc<dyn KeyValueBackend>,
    seeds: Arc<SeedData>,
}

impl ResumeService {
    pub fn new(backend: Arc<dyn KeyValueBackend>, seeds: Arc<SeedData>) -> Self {
        Self { backend, seeds }
    }

    fn resumes(&self, owner_id: i64) -> Partition<Resume> {
        Partition::new(self.backend.clone(), keys::resumes(owner_id))
    }

    pub fn create(&self, owner: &User, payload: CreateResumePayload) -> Result<Resume> {
        validate(&payload)?;

        let created_at = time::now();
        let title = format!(
            "Resume {} - {}",
            payload.personal.full_name,
            time::display_date(created_at)
        );

        let resume = Resume {
            id: 0,
            title,
            created_at,
            personal: PersonalInfo {
                full_name: payload.personal.full_name,
                phone: payload.personal.phone,
                email: payload.personal.email,
                address: payload.personal.address,
                city: payload.personal.city,
            },
            education: payload.education,
            experience: Experience {
                has_experience: payload.has_experience,
                // Items entered before "no experience" was ticked are dropped.
                items: if payload.has_experience {
                    payload.experience
                } else {
                    Vec::new()
                },
            },
            skills: payload.skills,
            desired_salary: payload.desired_salary,
            moderation_status: ModerationStatus::Pending,
            moderation_date: None,
            moderator_id: None,
            reject_reason: None,
        };

        let mut existing_ids = ids::collect_existing_ids(self.backend.as_ref(), &self.seeds.admins);
        self.resumes(owner.id).create(resume, &mut existing_ids)
    }

    pub fn list_by_owner(&self, owner_id: i64) -> Vec<Resume> {
        self.resumes(owner_id).list()
    }

    pub fn find(&self, owner_id: i64, resume_id: i64) -> Option<Resume> {
        self.resumes(owner_id).find_by_id(resume_id)
    }

    pub fn delete(&self, owner_id: i64, resume_id: i64) -> Result<()> {
        let partition = self.resumes(owner_id);
        if partition.find_by_id(resume_id).is_none() {
            return Err(Error::NotFound(format!("resume {} not found", resume_id)));
        }
        partition.delete(resume_id)
    }

    /// Every user's resumes plus the catalog, annotated with the owner
    /// where one exists. Stored records win on id collision.
    pub fn list_all(&self, users: &[User]) -> Vec<ResumeListing> {
        let mut seen = HashSet::new();
        let mut listings = Vec::new();

        for user in users {
            for resume in self.resumes(user.id).list() {
                if seen.insert(resume.id) {
                    listings.push(ResumeListing {
                        resume,
                        owner_id: Some(user.id),
                        owner_name: Some(user.full_name.clone()),
                    });
                }
            }
        }

        for resume in &self.seeds.resume_catalog {
            if seen.insert(resume.id) {
                listings.push(ResumeListing {
                    resume: resume.clone(),
                    owner_id: None,
                    owner_name: None,
                });
            }
        }

        listings
    }

    /// The employer-facing search: approved resumes only.
    pub fn search_approved(&self, users: &[User]) -> Vec<ResumeListing> {
        self.list_all(users)
            .into_iter()
            .filter(|listing| listing.resume.moderation_status == ModerationStatus::Approved)
            .collect()
    }
}
