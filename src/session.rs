use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::codec;
use crate::error::Result;
use crate::keys;
use crate::models::user::{User, UserRole, UserStatus};

/// The authenticated principal, persisted under the `currentUser` key.
///
/// The store only supplies identity; whether a page is allowed to do
/// something is a predicate over (status, role) owned by the caller. The
/// predicates below exist for the callers' convenience, nothing here
/// enforces them.
#[derive(Clone)]
pub struct SessionContext {
    backend: Arc<dyn KeyValueBackend>,
}

impl SessionContext {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    pub fn current_user(&self) -> Option<User> {
        let raw = self.backend.read(keys::CURRENT_USER)?;
        match codec::decode(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(%err, "discarding undecodable session record");
                None
            }
        }
    }

    pub fn login(&self, user: &User) -> Result<()> {
        let encoded = codec::encode(user)?;
        self.backend.write(keys::CURRENT_USER, &encoded)
    }

    pub fn logout(&self) -> Result<()> {
        self.backend.remove(keys::CURRENT_USER)
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self.current_user(),
            Some(User {
                status: UserStatus::Admin,
                ..
            })
        )
    }

    pub fn is_moderator(&self) -> bool {
        matches!(
            self.current_user(),
            Some(User {
                status: UserStatus::Moderator | UserStatus::Admin,
                ..
            })
        )
    }

    pub fn is_jobseeker(&self) -> bool {
        matches!(
            self.current_user(),
            Some(User {
                role: Some(UserRole::Jobseeker),
                ..
            })
        )
    }

    pub fn is_employer(&self) -> bool {
        matches!(
            self.current_user(),
            Some(User {
                role: Some(UserRole::Employer),
                ..
            })
        )
    }
}
