use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::dto::user_dto::{LoginPayload, RegisterPayload};
use crate::error::{Error, Result};
use crate::keys;
use crate::models::user::{User, UserRole, UserStatus};
use crate::repository::Partition;
use crate::seed::SeedData;
use crate::utils::ids;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct UserService {
    backend: Arc<dyn KeyValueBackend>,
    seeds: Arc<SeedData>,
}

impl UserService {
    pub fn new(backend: Arc<dyn KeyValueBackend>, seeds: Arc<SeedData>) -> Self {
        Self { backend, seeds }
    }

    fn users(&self) -> Partition<User> {
        Partition::new(self.backend.clone(), keys::USERS)
    }

    pub fn list(&self) -> Vec<User> {
        self.users().list()
    }

    pub fn find_by_id(&self, id: i64) -> Option<User> {
        self.users().find_by_id(id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users().list().into_iter().find(|u| u.username == username)
    }

    /// Seed admins are checked first, so the built-in administrator can
    /// sign in before any `users` record exists.
    pub fn authenticate(&self, payload: &LoginPayload) -> Result<User> {
        validate(payload)?;

        if let Some(admin) = self
            .seeds
            .admins
            .iter()
            .find(|a| a.matches_login(&payload.username) && a.password == payload.password)
        {
            return Ok(admin.to_user());
        }

        let user = self
            .users()
            .list()
            .into_iter()
            .find(|u| u.username == payload.username && u.password == payload.password)
            .ok_or_else(|| {
                Error::Unauthorized("unknown username or password".to_string())
            })?;

        if !user.is_active {
            return Err(Error::Unauthorized("this account is deactivated".to_string()));
        }

        Ok(user)
    }

    pub fn register(&self, payload: RegisterPayload) -> Result<User> {
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

        // Employer accounts start with blank company fields; jobseekers
        // never carry them at all.
        let (company, position) = match payload.role {
            UserRole::Employer => (Some(String::new()), Some(String::new())),
            UserRole::Jobseeker => (None, None),
        };

        let mut existing_ids = ids::collect_existing_ids(self.backend.as_ref(), &self.seeds.admins);
        let user = User {
            id: 0,
            full_name: payload.full_name,
            username: payload.username,
            password: payload.password,
            phone: payload.phone,
            status: UserStatus::User,
            role: Some(payload.role),
            registration_date: crate::utils::time::now(),
            is_active: true,
            company,
            position,
        };

        let user = partition.create(user, &mut existing_ids)?;
        tracing::info!(id = user.id, "registered user");
        Ok(user)
    }
}
