use std::io::Write;
use std::sync::Arc;

use jobboard_store::backend::MemoryBackend;
use jobboard_store::config::Config;
use jobboard_store::dto::user_dto::RegisterPayload;
use jobboard_store::dto::vacancy_dto::SaveVacancyPayload;
use jobboard_store::error::Error;
use jobboard_store::models::user::{User, UserRole};
use jobboard_store::models::vacancy::{Employment, ModerationStatus, Region};
use jobboard_store::Store;

fn open_store() -> Store {
    Store::open(&Config::default(), Arc::new(MemoryBackend::new())).expect("open store")
}

fn employer(store: &Store, username: &str) -> User {
    store
        .users
        .register(RegisterPayload {
            full_name: format!("Employer {}", username),
            username: username.to_string(),
            phone: "+7 (905) 111-22-33".to_string(),
            password: "secret1".to_string(),
            role: UserRole::Employer,
        })
        .expect("register employer")
}

fn admin(store: &Store) -> User {
    store.seeds.admins[0].to_user()
}

fn vacancy_payload(title: &str) -> SaveVacancyPayload {
    SaveVacancyPayload {
        id: None,
        title: title.to_string(),
        company: "Acme".to_string(),
        salary: Some(120_000),
        city: "Москва".to_string(),
        employment: vec![Employment::Full, Employment::Remote],
        profession: "backend".to_string(),
        description: "Build and run the backend".to_string(),
        requirements: Some("Rust".to_string()),
        responsibilities: None,
        conditions: None,
        experience: Some("1-3".to_string()),
    }
}

#[test]
fn new_vacancies_enter_moderation_and_stay_invisible() {
    let store = open_store();
    let owner = employer(&store, "acme");

    let vacancy = store
        .vacancies
        .save(&owner, vacancy_payload("Backend developer"))
        .expect("save");

    assert_eq!(vacancy.moderation_status, ModerationStatus::Pending);
    assert_eq!(vacancy.region, Region::Moscow);
    assert_eq!(vacancy.employer_id.as_deref(), Some(owner.id.to_string().as_str()));
    assert!(store.vacancies.search_visible().is_empty());
    assert_eq!(store.vacancies.list_by_employer(owner.id).len(), 1);
    assert_eq!(store.moderation.pending_vacancies().len(), 1);
}

#[test]
fn approval_makes_a_vacancy_visible_and_editing_sends_it_back() {
    let store = open_store();
    let owner = employer(&store, "acme");
    let reviewer = admin(&store);

    let vacancy = store
        .vacancies
        .save(&owner, vacancy_payload("Backend developer"))
        .expect("save");

    let approved = store
        .moderation
        .approve_vacancy(&reviewer, vacancy.id)
        .expect("approve");
    assert_eq!(approved.moderation_status, ModerationStatus::Approved);
    assert_eq!(approved.moderator_id, Some(reviewer.id));
    assert!(approved.moderation_date.is_some());
    assert_eq!(store.vacancies.search_visible().len(), 1);

    // Editing an approved vacancy re-enters moderation with the stamp
    // cleared, but keeps the original creation date.
    let mut edit = vacancy_payload("Senior backend developer");
    edit.id = Some(vacancy.id);
    let edited = store.vacancies.save(&owner, edit).expect("edit");

    assert_eq!(edited.id, vacancy.id);
    assert_eq!(edited.moderation_status, ModerationStatus::Pending);
    assert!(edited.moderation_date.is_none());
    assert!(edited.moderator_id.is_none());
    assert_eq!(edited.created_at, approved.created_at);
    assert!(store.vacancies.search_visible().is_empty());
}

#[test]
fn rejection_requires_a_reason() {
    let store = open_store();
    let owner = employer(&store, "acme");
    let reviewer = admin(&store);

    let vacancy = store
        .vacancies
        .save(&owner, vacancy_payload("Backend developer"))
        .expect("save");

    let refused = store.moderation.reject_vacancy(&reviewer, vacancy.id, "   ");
    assert!(matches!(refused, Err(Error::BadRequest(_))));

    let rejected = store
        .moderation
        .reject_vacancy(&reviewer, vacancy.id, "too vague")
        .expect("reject");
    assert_eq!(rejected.moderation_status, ModerationStatus::Rejected);
    assert_eq!(rejected.reject_reason.as_deref(), Some("too vague"));
}

#[test]
fn only_the_owner_deletes_a_vacancy() {
    let store = open_store();
    let owner = employer(&store, "acme");
    let other = employer(&store, "globex");

    let vacancy = store
        .vacancies
        .save(&owner, vacancy_payload("Backend developer"))
        .expect("save");

    assert!(matches!(
        store.vacancies.delete(&other, vacancy.id),
        Err(Error::Unauthorized(_))
    ));
    store.vacancies.delete(&owner, vacancy.id).expect("delete");
    assert!(store.vacancies.find_by_id(vacancy.id).is_none());
    assert!(matches!(
        store.vacancies.delete(&owner, vacancy.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn catalog_vacancies_merge_read_only_and_stored_records_win() {
    let mut catalog = tempfile::NamedTempFile::new().unwrap();
    // 3001 collides with nothing; 3002 is shadowed below. Neither entry
    // carries a moderation status, so both decode as approved legacy
    // records.
    write!(
        catalog,
        r#"[
            {{"id": 3001, "title": "Catalog frontend", "company": "Sample Co",
              "description": "Example listing", "city": "Казань"}},
            {{"id": 3002, "title": "Catalog backend", "company": "Sample Co",
              "description": "Example listing"}}
        ]"#
    )
    .unwrap();

    let config = Config {
        vacancy_catalog_path: Some(catalog.path().to_path_buf()),
        ..Config::default()
    };
    let backend = Arc::new(MemoryBackend::new());
    let store = Store::open(&config, backend.clone()).expect("open store");

    let visible = store.vacancies.search_visible();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|v| v.moderation_status == ModerationStatus::Approved));

    // A stored vacancy with a catalog id shadows the catalog entry.
    let vacancies: jobboard_store::repository::Partition<jobboard_store::models::vacancy::Vacancy> =
        jobboard_store::repository::Partition::new(backend.clone(), jobboard_store::keys::VACANCIES);
    let mut shadow = store.vacancies.find_any(3002).expect("catalog entry");
    shadow.title = "Stored backend".to_string();
    vacancies
        .create(shadow, &mut std::collections::HashSet::new())
        .expect("store shadow");

    let visible = store.vacancies.search_visible();
    assert_eq!(visible.len(), 2);
    let shadowed = visible.iter().find(|v| v.id == 3002).expect("id 3002");
    assert_eq!(shadowed.title, "Stored backend");

    // Point lookups hit storage before the catalog.
    assert_eq!(store.vacancies.find_any(3002).unwrap().title, "Stored backend");
    assert_eq!(store.vacancies.find_any(3001).unwrap().title, "Catalog frontend");

    // Catalogs are never written back.
    let reviewer = admin(&store);
    assert!(matches!(
        store.moderation.approve_vacancy(&reviewer, 3001),
        Err(Error::NotFound(_))
    ));
}
