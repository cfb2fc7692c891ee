pub mod admin_service;
pub mod application_service;
pub mod moderation_service;
pub mod profile_service;
pub mod resume_service;
pub mod user_service;
pub mod vacancy_service;
