pub mod application;
pub mod resume;
pub mod user;
pub mod vacancy;

/// Implemented by every stored entity so the partition layer and the id
/// migration can work generically.
pub trait Identified {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}
