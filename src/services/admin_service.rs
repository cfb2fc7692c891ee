use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::dto::user_dto::CreateModeratorPayload;
use crate::error::{Error, Result};
use crate::keys;
use crate::models::user::{User, UserStatus};
use crate::repository::Partition;
use crate::seed::SeedData;
use crate::utils::ids;
use crate::utils::validation::validate;

/// User administration: the admin dashboard's slice of the store.
#[derive(Clone)]
pub struct AdminService {
    backend: Arc<dyn KeyValueBackend>,
    seeds: Arc<SeedData>,
}

impl AdminService {
    pub fn new(backend: Arc<dyn KeyValueBackend>, seeds: Arc<SeedData>) -> Self {
        Self { backend, seeds }
    }

    fn users(&self) -> Partition<User> {
        Partition::new(self.backend.clone(), keys::USERS)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users().list()
    }

    pub fn list_moderators(&self) -> Vec<User> {
        self.users()
            .list()
            .into_iter()
            .filter(|u| matches!(u.status, UserStatus::Moderator | UserStatus::Admin))
            .collect()
    }

    pub fn create_moderator(&self, payload: CreateModeratorPayload) -> Result<User> {
        validate(&payload)?;

        let partition = self.users();
        if partition.list().iter().any(|u| u.username == payload.username) {
            return Err(Error::BadRequest(
                "a user with this username already exists".to_string(),
            ));
        }
        if self
            .seeds
            .admins
            .iter()
            .any(|a| a.matches_login(&payload.username))
        {
            return Err(Error::BadRequest("this username is reserved".to_string()));
        }

        let mut existing_ids = ids::collect_existing_ids(self.backend.as_ref(), &self.seeds.admins);
        let moderator = User {
            id: 0,
            full_name: payload.full_name,
            username: payload.username,
            password: payload.password,
            phone: payload.phone,
            status: UserStatus::Moderator,
            // Moderators have no jobseeker/employer side.
            role: None,
            registration_date: crate::utils::time::now(),
            is_active: true,
            company: None,
            position: None,
        };

        partition.create(moderator, &mut existing_ids)
    }

    pub fn promote_to_moderator(&self, user_id: i64) -> Result<User> {
        self.set_status(user_id, UserStatus::Moderator)
    }

    pub fn demote_moderator(&self, user_id: i64) -> Result<User> {
        self.set_status(user_id, UserStatus::User)
    }

    fn set_status(&self, user_id: i64, status: UserStatus) -> Result<User> {
        let partition = self.users();
        let mut user = partition
            .find_by_id(user_id)
            .ok_or_else(|| Error::NotFound(format!("user {} not found", user_id)))?;
        user.status = status;
        partition.update(&user)?;
        Ok(user)
    }

    /// Flip the activation flag; returns the updated record.
    pub fn toggle_active(&self, user_id: i64) -> Result<User> {
        let partition = self.users();
        let mut user = partition
            .find_by_id(user_id)
            .ok_or_else(|| Error::NotFound(format!("user {} not found", user_id)))?;
        user.is_active = !user.is_active;
        partition.update(&user)?;
        Ok(user)
    }

    /// Hard delete. The user's resumes, applications and profile overlay
    /// stay behind in their own partitions.
    pub fn delete_user(&self, user_id: i64) -> Result<()> {
        let partition = self.users();
        if partition.find_by_id(user_id).is_none() {
            return Err(Error::NotFound(format!("user {} not found", user_id)));
        }
        partition.delete(user_id)
    }
}
