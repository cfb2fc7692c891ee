use std::sync::Arc;

use crate::backend::KeyValueBackend;
use crate::codec;
use crate::dto::user_dto::ProfilePayload;
use crate::error::Result;
use crate::keys;
use crate::models::user::UserProfile;
use crate::utils::validation::validate;

/// The `userData_<id>` overlay: avatar, birth date and contact details
/// living beside the User record rather than inside it.
#[derive(Clone)]
pub struct ProfileService {
    backend: Arc<dyn KeyValueBackend>,
}

impl ProfileService {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    pub fn get(&self, user_id: i64) -> UserProfile {
        let key = keys::user_data(user_id);
        let Some(raw) = self.backend.read(&key) else {
            return UserProfile::default();
        };
        match codec::decode(&raw) {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(key = %key, %err, "discarding undecodable profile overlay");
                UserProfile::default()
            }
        }
    }

    pub fn save(&self, user_id: i64, payload: ProfilePayload) -> Result<UserProfile> {
        validate(&payload)?;

        let profile = UserProfile {
            full_name: Some(payload.full_name),
            birth_date: payload.birth_date,
            phone: payload.phone,
            email: Some(payload.email),
            avatar: payload.avatar,
        };
        self.persist(user_id, &profile)?;
        Ok(profile)
    }

    /// Avatar uploads save immediately without touching the other fields.
    pub fn set_avatar(&self, user_id: i64, avatar: String) -> Result<UserProfile> {
        let mut profile = self.get(user_id);
        profile.avatar = Some(avatar);
        self.persist(user_id, &profile)?;
        Ok(profile)
    }

    fn persist(&self, user_id: i64, profile: &UserProfile) -> Result<()> {
        let encoded = codec::encode(profile)?;
        self.backend.write(&keys::user_data(user_id), &encoded)
    }
}
