use std::sync::Arc;

use mockall::mock;
use mockall::predicate::eq;

use jobboard_store::backend::KeyValueBackend;
use jobboard_store::config::Config;
use jobboard_store::dto::user_dto::RegisterPayload;
use jobboard_store::error::{Error, Result};
use jobboard_store::models::user::UserRole;
use jobboard_store::Store;

mock! {
    Backend {}

    impl KeyValueBackend for Backend {
        fn read(&self, key: &str) -> Option<String>;
        fn write(&self, key: &str, value: &str) -> Result<()>;
        fn remove(&self, key: &str) -> Result<()>;
    }
}

#[test]
fn a_full_backend_fails_registration_loudly() {
    let mut backend = MockBackend::new();
    backend.expect_read().returning(|_| None);
    backend
        .expect_write()
        .returning(|key, _| Err(Error::StorageFull(format!("quota hit writing '{}'", key))));

    let store = Store::open(&Config::default(), Arc::new(backend)).expect("open store");

    let refused = store.users.register(RegisterPayload {
        full_name: "Alice".to_string(),
        username: "alice".to_string(),
        phone: "+7 (900) 123-45-67".to_string(),
        password: "secret1".to_string(),
        role: UserRole::Jobseeker,
    });

    assert!(matches!(refused, Err(Error::StorageFull(_))));
}

#[test]
fn a_full_backend_fails_session_login_loudly() {
    let mut backend = MockBackend::new();
    backend.expect_read().returning(|_| None);
    backend
        .expect_write()
        .with(eq("currentUser"), mockall::predicate::always())
        .returning(|_, _| Err(Error::StorageFull("quota hit".to_string())));

    let store = Store::open(&Config::default(), Arc::new(backend)).expect("open store");

    let admin = store.seeds.admins[0].to_user();
    assert!(matches!(
        store.session.login(&admin),
        Err(Error::StorageFull(_))
    ));
}
