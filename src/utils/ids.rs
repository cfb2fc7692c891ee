use std::collections::HashSet;

use rand::Rng;

use crate::backend::KeyValueBackend;
use crate::codec;
use crate::error::{Error, Result};
use crate::keys;
use crate::models::application::Application;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::models::vacancy::Vacancy;
use crate::models::Identified;
use crate::seed::SeedAdmin;

pub const ID_MIN: i64 = 1000;
pub const ID_MAX: i64 = 9999;

// Random probes before giving up on sampling a dense id space.
const MAX_RANDOM_PROBES: u32 = 20_000;

pub fn is_valid_id(id: i64) -> bool {
    (ID_MIN..=ID_MAX).contains(&id)
}

/// Mint a 4-digit id not present in `existing`. The caller supplies the
/// union of every id across every partition; the allocator keeps no
/// registry of its own.
pub fn allocate(existing: &HashSet<String>) -> Result<i64> {
    let mut rng = rand::thread_rng();
    for _ in 0..MAX_RANDOM_PROBES {
        let candidate = rng.gen_range(ID_MIN..=ID_MAX);
        if !existing.contains(candidate.to_string().as_str()) {
            return Ok(candidate);
        }
    }

    // Nearly-full space: scan instead of sampling forever.
    for candidate in ID_MIN..=ID_MAX {
        if !existing.contains(candidate.to_string().as_str()) {
            return Ok(candidate);
        }
    }

    Err(Error::IdSpaceExhausted)
}

/// Re-key every record whose id falls outside 1000..=9999, one record at a
/// time so fresh ids join the exclusion set before the next mint. Returns
/// whether anything changed; a second run over the same data never does.
pub fn migrate_legacy_ids<T: Identified>(
    records: &mut [T],
    existing: &mut HashSet<String>,
) -> Result<bool> {
    let mut changed = false;
    for record in records.iter_mut() {
        if is_valid_id(record.id()) {
            existing.insert(record.id().to_string());
        } else {
            let fresh = allocate(existing)?;
            tracing::debug!(old = record.id(), new = fresh, "migrated legacy id");
            existing.insert(fresh.to_string());
            record.set_id(fresh);
            changed = true;
        }
    }
    Ok(changed)
}

/// Census of every id currently in use: seed admins, users, vacancies and
/// each user's resumes and applications.
pub fn collect_existing_ids(
    backend: &dyn KeyValueBackend,
    seed_admins: &[SeedAdmin],
) -> HashSet<String> {
    let mut ids = HashSet::new();

    for admin in seed_admins {
        ids.insert(admin.id.to_string());
    }

    let users: Vec<User> = codec::decode_collection(keys::USERS, backend.read(keys::USERS));
    for user in &users {
        ids.insert(user.id.to_string());
    }

    let vacancies: Vec<Vacancy> =
        codec::decode_collection(keys::VACANCIES, backend.read(keys::VACANCIES));
    for vacancy in &vacancies {
        ids.insert(vacancy.id.to_string());
    }

    for user in &users {
        let key = keys::resumes(user.id);
        let resumes: Vec<Resume> = codec::decode_collection(&key, backend.read(&key));
        for resume in &resumes {
            ids.insert(resume.id.to_string());
        }

        let key = keys::applications(user.id);
        let applications: Vec<Application> = codec::decode_collection(&key, backend.read(&key));
        for application in &applications {
            ids.insert(application.id.to_string());
        }
    }

    ids
}
