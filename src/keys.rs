//! Storage-key layout. One text blob per key; the `<id>` suffixed keys are
//! per-user partitions.

pub const USERS: &str = "users";
pub const VACANCIES: &str = "vacancies";
pub const CURRENT_USER: &str = "currentUser";

pub fn resumes(owner_id: i64) -> String {
    format!("resumes_{}", owner_id)
}

pub fn applications(applicant_id: i64) -> String {
    format!("applications_{}", applicant_id)
}

pub fn applications_to_employer(employer_id: i64) -> String {
    format!("applications_to_employer_{}", employer_id)
}

pub fn user_data(user_id: i64) -> String {
    format!("userData_{}", user_id)
}
