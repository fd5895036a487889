use folio_admin::{
    About, AlwaysConfirm, Education, ListCache, MemoryBackend, MemoryNotifier, ModalState,
    NeverConfirm, ProjectFeature, Registry, Resource, ResourcePage, ResourceKind, Skill,
    SkillDomain, SubmitError, Toast, ToastLevel,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use uuid::Uuid;

struct Env {
    registry: Registry,
    backend: Arc<MemoryBackend>,
    cache: Arc<ListCache>,
    notifier: Arc<MemoryNotifier>,
}

fn env() -> Env {
    Env {
        registry: Registry::portfolio(),
        backend: Arc::new(MemoryBackend::new()),
        cache: Arc::new(ListCache::new()),
        notifier: Arc::new(MemoryNotifier::new()),
    }
}

fn page<R: Resource>(env: &Env) -> ResourcePage<R> {
    ResourcePage::new(
        &env.registry,
        env.backend.clone(),
        env.cache.clone(),
        env.notifier.clone(),
    )
    .expect("registered kind")
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn seed_skill(env: &Env, name: &str, category: &str) -> Uuid {
    env.backend.seed(
        ResourceKind::Skill,
        object(json!({"name": name, "category": category})),
    )
}

fn seed_about(env: &Env, name: &str) -> Uuid {
    env.backend.seed(
        ResourceKind::About,
        object(json!({
            "name": name,
            "role": "Engineer",
            "bio": "Writes programs",
            "experience": "10 years",
            "location": "London",
            "email": "ada@example.com",
            "interests": ["mathematics", "machines"],
        })),
    )
}

#[tokio::test]
async fn creating_a_skill_shows_up_in_the_next_fetch() {
    let env = env();
    let mut page = page::<Skill>(&env);
    page.load().await.unwrap();
    assert!(page.rows().is_empty());

    page.open_create();
    let form = page.form_mut().unwrap();
    form.set("name", "TypeScript").unwrap();
    form.set("category", "FRONTEND").unwrap();
    page.submit().await.unwrap();

    let created = page
        .rows()
        .iter()
        .find(|s| s.name == "TypeScript")
        .expect("created skill is in the refetched list");
    assert_eq!(created.category, SkillDomain::Frontend);
}

#[tokio::test]
async fn successful_create_invalidates_once_and_closes_the_modal() {
    let env = env();
    let mut page = page::<Skill>(&env);
    page.open_create();
    let form = page.form_mut().unwrap();
    form.set("name", "Rust").unwrap();
    form.set("category", "BACKEND").unwrap();

    page.submit().await.unwrap();

    assert_eq!(env.cache.generation(ResourceKind::Skill), 1);
    assert!(!page.modal().is_open());
    assert_eq!(
        env.notifier.toasts(),
        vec![Toast::success("Skill created successfully")]
    );
}

#[tokio::test]
async fn successful_update_invalidates_once_and_closes_the_modal() {
    let env = env();
    let id = seed_skill(&env, "Jawa", "BACKEND");
    let mut page = page::<Skill>(&env);
    page.load().await.unwrap();

    page.open_edit(id).unwrap();
    page.form_mut().unwrap().set("name", "Java").unwrap();
    page.submit().await.unwrap();

    assert_eq!(env.cache.generation(ResourceKind::Skill), 1);
    assert!(!page.modal().is_open());
    assert_eq!(
        env.notifier.toasts(),
        vec![Toast::success("Skill updated successfully")]
    );
    assert!(page.rows().iter().any(|s| s.name == "Java"));
}

#[tokio::test]
async fn validation_failure_blocks_the_network_call() {
    let env = env();
    let mut page = page::<Skill>(&env);
    page.open_create();

    let err = page.submit().await.expect_err("blank name must block");
    match err {
        SubmitError::Invalid(errors) => {
            assert_eq!(errors.message_for("name"), Some("Name is required"));
        }
        other => panic!("expected validation failure, got {other}"),
    }

    assert_eq!(env.backend.count(ResourceKind::Skill), 0);
    assert_eq!(env.cache.generation(ResourceKind::Skill), 0);
    assert!(matches!(page.modal(), ModalState::Create(_)));
    assert!(env.notifier.toasts().is_empty());
}

#[tokio::test]
async fn declined_confirmation_issues_no_delete_request() {
    let env = env();
    let id = seed_skill(&env, "SQL", "DATABASE");
    let mut page = page::<Skill>(&env);
    page.load().await.unwrap();

    let deleted = page.delete(id, &NeverConfirm).await.unwrap();

    assert!(!deleted);
    assert_eq!(env.backend.count(ResourceKind::Skill), 1);
    assert_eq!(env.cache.generation(ResourceKind::Skill), 0);
    assert!(env.notifier.toasts().is_empty());
}

#[tokio::test]
async fn confirmed_delete_removes_the_record_and_refetches() {
    let env = env();
    let id = seed_skill(&env, "SQL", "DATABASE");
    let mut page = page::<Skill>(&env);
    page.load().await.unwrap();

    let deleted = page.delete(id, &AlwaysConfirm).await.unwrap();

    assert!(deleted);
    assert_eq!(env.backend.count(ResourceKind::Skill), 0);
    assert!(page.rows().is_empty());
    assert_eq!(env.cache.generation(ResourceKind::Skill), 1);
    assert_eq!(
        env.notifier.toasts(),
        vec![Toast::success("Skill deleted successfully")]
    );
}

#[tokio::test]
async fn edit_form_matches_the_selected_record_field_for_field() {
    let env = env();
    let id = seed_about(&env, "Ada");
    let mut page = page::<About>(&env);
    page.load().await.unwrap();

    page.open_edit(id).unwrap();
    let record = page.find(id).cloned().expect("loaded record");
    let form = page.form_mut().unwrap();

    assert_eq!(form.get("name").unwrap().as_text(), Some(record.name.as_str()));
    assert_eq!(form.get("role").unwrap().as_text(), Some(record.role.as_str()));
    assert_eq!(form.get("bio").unwrap().as_text(), Some(record.bio.as_str()));
    assert_eq!(
        form.get("experience").unwrap().as_text(),
        Some(record.experience.as_str())
    );
    assert_eq!(
        form.get("location").unwrap().as_text(),
        Some(record.location.as_str())
    );
    assert_eq!(
        form.get("email").unwrap().as_text(),
        Some(record.email.as_str())
    );
    assert_eq!(
        form.get("interests").unwrap().as_list(),
        Some(record.interests.as_slice())
    );
}

#[tokio::test]
async fn deleting_an_about_leaves_education_references_dangling() {
    let env = env();
    let about_id = seed_about(&env, "Ada");
    env.backend.seed(
        ResourceKind::Education,
        object(json!({
            "degree": "BSc",
            "institution": "Somerville",
            "year": "1842",
            "aboutId": about_id.to_string(),
        })),
    );

    let mut abouts = page::<About>(&env);
    abouts.load().await.unwrap();
    abouts.delete(about_id, &AlwaysConfirm).await.unwrap();
    assert!(abouts.rows().is_empty());

    let mut educations = page::<Education>(&env);
    educations.load().await.unwrap();
    assert_eq!(educations.rows().len(), 1);
    assert_eq!(educations.rows()[0].about_id, about_id);
}

#[tokio::test]
async fn failed_update_keeps_the_modal_open_and_state_unchanged() {
    let env = env();
    let id = seed_skill(&env, "Rust", "BACKEND");
    let mut page = page::<Skill>(&env);
    page.load().await.unwrap();
    page.open_edit(id).unwrap();
    page.form_mut().unwrap().set("name", "Rust 2").unwrap();

    // Another session deleted the record; the PATCH now 404s.
    assert!(env.backend.remove(ResourceKind::Skill, id));

    let err = page.submit().await.expect_err("update must fail");
    assert!(matches!(err, SubmitError::Api(_)));
    assert!(matches!(page.modal(), ModalState::Edit { .. }));
    assert_eq!(env.cache.generation(ResourceKind::Skill), 0);
    assert_eq!(
        env.notifier.toasts(),
        vec![Toast::error("Failed to update skill")]
    );
    assert_eq!(
        page.form_mut().unwrap().get("name").unwrap().as_text(),
        Some("Rust 2")
    );
}

#[tokio::test]
async fn scoped_feature_lists_only_return_matching_rows() {
    let env = env();
    let project_a = Uuid::new_v4();
    let project_b = Uuid::new_v4();
    for (label, project) in [("Fast", project_a), ("Slow", project_b)] {
        env.backend.seed(
            ResourceKind::ProjectFeature,
            object(json!({
                "icon": "bolt",
                "label": label,
                "gradient": "from-blue-500",
                "projectId": project.to_string(),
            })),
        );
    }

    let mut features =
        page::<ProjectFeature>(&env).scoped("projectId", project_a.to_string());
    features.load().await.unwrap();

    assert_eq!(features.rows().len(), 1);
    assert_eq!(features.rows()[0].label, "Fast");
    assert_eq!(features.rows()[0].project_id, project_a);
}

#[tokio::test]
async fn lists_are_served_from_cache_until_invalidated() {
    let env = env();
    seed_skill(&env, "Rust", "BACKEND");
    let mut first = page::<Skill>(&env);
    first.load().await.unwrap();
    assert_eq!(first.rows().len(), 1);

    // A row added behind the cache's back is invisible until invalidation.
    seed_skill(&env, "Go", "BACKEND");
    let mut second = page::<Skill>(&env);
    second.load().await.unwrap();
    assert_eq!(second.rows().len(), 1);

    env.cache.invalidate(ResourceKind::Skill).await;
    second.load().await.unwrap();
    assert_eq!(second.rows().len(), 2);
}

#[tokio::test]
async fn toast_texts_use_the_kind_display_name() {
    let env = env();
    let mut page = page::<About>(&env);
    page.open_create();
    let form = page.form_mut().unwrap();
    for (field, value) in [
        ("name", "Ada"),
        ("role", "Engineer"),
        ("bio", "Writes programs"),
        ("experience", "10 years"),
        ("location", "London"),
        ("email", "ada@example.com"),
    ] {
        form.set(field, value).unwrap();
    }

    page.submit().await.unwrap();

    let toasts = env.notifier.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "About information created successfully");
}
