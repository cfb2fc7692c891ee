use std::sync::Arc;

use jobboard_store::backend::MemoryBackend;
use jobboard_store::config::Config;
use jobboard_store::dto::user_dto::{LoginPayload, RegisterPayload};
use jobboard_store::error::Error;
use jobboard_store::models::user::{UserRole, UserStatus};
use jobboard_store::Store;

fn open_store() -> Store {
    Store::open(&Config::default(), Arc::new(MemoryBackend::new())).expect("open store")
}

fn register_payload(username: &str, role: UserRole) -> RegisterPayload {
    RegisterPayload {
        full_name: format!("Test {}", username),
        username: username.to_string(),
        phone: "+7 (900) 123-45-67".to_string(),
        password: "secret1".to_string(),
        role,
    }
}

#[test]
fn builtin_admin_authenticates_before_any_user_exists() {
    let store = open_store();

    let admin = store
        .users
        .authenticate(&LoginPayload {
            username: "admin".into(),
            password: "qweqwe".into(),
        })
        .expect("admin login");

    assert_eq!(admin.id, 1001);
    assert_eq!(admin.status, UserStatus::Admin);
    assert!(admin.role.is_none());

    store.session.login(&admin).unwrap();
    assert!(store.session.is_admin());
    assert!(store.session.is_moderator());

    store.session.logout().unwrap();
    assert!(store.session.current_user().is_none());
}

#[test]
fn registration_and_login_round_trip() {
    let store = open_store();

    let user = store
        .users
        .register(register_payload("alice", UserRole::Jobseeker))
        .expect("register");

    assert!((1000..=9999).contains(&user.id));
    assert_eq!(user.status, UserStatus::User);
    assert_eq!(user.role, Some(UserRole::Jobseeker));
    assert!(user.is_active);
    assert!(user.company.is_none());

    let logged_in = store
        .users
        .authenticate(&LoginPayload {
            username: "alice".into(),
            password: "secret1".into(),
        })
        .expect("login");
    assert_eq!(logged_in.id, user.id);

    store.session.login(&logged_in).unwrap();
    assert!(store.session.is_jobseeker());
    assert!(!store.session.is_employer());
    assert!(!store.session.is_moderator());

    let wrong = store.users.authenticate(&LoginPayload {
        username: "alice".into(),
        password: "wrong1".into(),
    });
    assert!(matches!(wrong, Err(Error::Unauthorized(_))));
}

#[test]
fn employer_registration_gets_blank_company_fields() {
    let store = open_store();

    let employer = store
        .users
        .register(register_payload("acme", UserRole::Employer))
        .expect("register employer");

    assert_eq!(employer.role, Some(UserRole::Employer));
    assert_eq!(employer.company.as_deref(), Some(""));
    assert_eq!(employer.position.as_deref(), Some(""));
}

#[test]
fn duplicate_username_is_rejected_and_leaves_one_record() {
    let store = open_store();

    store
        .users
        .register(register_payload("alice", UserRole::Jobseeker))
        .expect("first alice");

    let second = store
        .users
        .register(register_payload("alice", UserRole::Employer));
    assert!(matches!(second, Err(Error::BadRequest(_))));

    let alices: Vec<_> = store
        .users
        .list()
        .into_iter()
        .filter(|u| u.username == "alice")
        .collect();
    assert_eq!(alices.len(), 1);
}

#[test]
fn admin_usernames_are_reserved() {
    let store = open_store();

    let taken = store.users.register(register_payload("admin", UserRole::Jobseeker));
    assert!(matches!(taken, Err(Error::BadRequest(_))));
    assert!(store.users.list().is_empty());
}

#[test]
fn malformed_fields_never_reach_storage() {
    let store = open_store();

    let mut bad_phone = register_payload("bob", UserRole::Jobseeker);
    bad_phone.phone = "89001234567".into();
    assert!(matches!(
        store.users.register(bad_phone),
        Err(Error::Validation(_))
    ));

    let mut short_password = register_payload("bob", UserRole::Jobseeker);
    short_password.password = "abc".into();
    assert!(matches!(
        store.users.register(short_password),
        Err(Error::Validation(_))
    ));

    let mut spaced_password = register_payload("bob", UserRole::Jobseeker);
    spaced_password.password = "abc def".into();
    assert!(matches!(
        store.users.register(spaced_password),
        Err(Error::Validation(_))
    ));

    assert!(store.users.list().is_empty());
}

#[test]
fn deactivated_accounts_cannot_sign_in() {
    let store = open_store();

    let user = store
        .users
        .register(register_payload("carol", UserRole::Jobseeker))
        .expect("register");

    let toggled = store.admin.toggle_active(user.id).expect("deactivate");
    assert!(!toggled.is_active);

    let refused = store.users.authenticate(&LoginPayload {
        username: "carol".into(),
        password: "secret1".into(),
    });
    assert!(matches!(refused, Err(Error::Unauthorized(_))));

    store.admin.toggle_active(user.id).expect("reactivate");
    assert!(store
        .users
        .authenticate(&LoginPayload {
            username: "carol".into(),
            password: "secret1".into(),
        })
        .is_ok());
}

#[test]
fn moderator_lifecycle() {
    use jobboard_store::dto::user_dto::CreateModeratorPayload;

    let store = open_store();

    let moderator = store
        .admin
        .create_moderator(CreateModeratorPayload {
            full_name: "Mod One".into(),
            username: "mod1".into(),
            phone: "+7 (901) 000-00-00".into(),
            password: "modpass".into(),
        })
        .expect("create moderator");
    assert_eq!(moderator.status, UserStatus::Moderator);
    assert!(moderator.role.is_none());

    let demoted = store.admin.demote_moderator(moderator.id).expect("demote");
    assert_eq!(demoted.status, UserStatus::User);

    let promoted = store
        .admin
        .promote_to_moderator(moderator.id)
        .expect("promote");
    assert_eq!(promoted.status, UserStatus::Moderator);
    assert_eq!(store.admin.list_moderators().len(), 1);

    store.admin.delete_user(moderator.id).expect("delete");
    assert!(store.users.find_by_id(moderator.id).is_none());
    assert!(matches!(
        store.admin.delete_user(moderator.id),
        Err(Error::NotFound(_))
    ));
}
