use folio_admin::{FieldType, FormValue, Registry, ResourceDescriptor, ResourceForm, ResourceKind};
use serde_json::{json, Value};
use uuid::Uuid;

fn registry() -> Registry {
    Registry::portfolio()
}

fn descriptor(kind: ResourceKind) -> ResourceDescriptor {
    registry().descriptor(kind).expect("registered kind").clone()
}

/// A form with every field set to a value that passes its constraints.
fn filled_form(descriptor: &ResourceDescriptor) -> ResourceForm {
    let mut form = ResourceForm::blank(descriptor);
    for field in &descriptor.fields {
        let value = match field.ty {
            FieldType::Email => FormValue::Text("admin@example.com".to_string()),
            FieldType::Reference(_) => FormValue::Text(Uuid::new_v4().to_string()),
            FieldType::Choice(options) => FormValue::Text(options[0].to_string()),
            FieldType::TextList => FormValue::List(vec!["item".to_string()]),
            _ => FormValue::Text("value".to_string()),
        };
        form.set(field.name, value).expect("known field");
    }
    form
}

#[test]
fn every_kind_blocks_submission_on_each_missing_required_field() {
    let registry = registry();
    for descriptor in registry.iter() {
        for field in descriptor.fields.iter().filter(|f| f.required) {
            let mut form = filled_form(descriptor);
            let blank = if field.is_list() {
                FormValue::List(Vec::new())
            } else {
                FormValue::Text(String::new())
            };
            form.set(field.name, blank).expect("known field");

            let errors = form.submit().expect_err("missing required field must block");
            assert!(
                errors.message_for(field.name).is_some(),
                "{}.{} should carry a field-specific message",
                descriptor.kind,
                field.name
            );
        }
    }
}

#[test]
fn required_messages_match_the_form_labels() {
    let blog = descriptor(ResourceKind::Blog);
    let errors = ResourceForm::blank(&blog)
        .submit()
        .expect_err("blank blog form");
    assert_eq!(errors.message_for("title"), Some("Title is required"));
    assert_eq!(errors.message_for("image"), Some("Image URL is required"));
    assert_eq!(errors.message_for("excerpt"), Some("Excerpt is required"));
    assert_eq!(errors.message_for("content"), Some("Content is required"));

    let project = descriptor(ResourceKind::Project);
    let errors = ResourceForm::blank(&project)
        .submit()
        .expect_err("blank project form");
    assert_eq!(
        errors.message_for("frontendTech"),
        Some("At least one frontend technology is required")
    );
    assert_eq!(
        errors.message_for("backendTech"),
        Some("At least one backend technology is required")
    );
    assert_eq!(errors.message_for("liveDemoLink"), None);
}

#[test]
fn email_and_reference_formats_are_enforced() {
    let credential = descriptor(ResourceKind::ProjectCredential);
    let mut form = filled_form(&credential);
    form.set("email", "not-an-email").unwrap();
    form.set("projectId", "123").unwrap();

    let errors = form.submit().expect_err("bad formats");
    assert_eq!(errors.message_for("email"), Some("Invalid email address"));
    assert_eq!(errors.message_for("projectId"), Some("Invalid project ID"));
}

#[test]
fn choice_membership_is_enforced() {
    let skill = descriptor(ResourceKind::Skill);
    let mut form = filled_form(&skill);
    form.set("category", "MOBILE").unwrap();

    let errors = form.submit().expect_err("unknown category");
    assert_eq!(
        errors.message_for("category"),
        Some("Category must be one of FRONTEND, BACKEND, DATABASE, TOOLS")
    );
}

#[test]
fn submitted_body_contains_exactly_the_schema_fields() {
    let skill = descriptor(ResourceKind::Skill);
    let mut form = ResourceForm::blank(&skill);
    form.set("name", "TypeScript").unwrap();
    form.set("category", "FRONTEND").unwrap();

    let body = form.submit().expect("valid skill form");
    assert_eq!(
        Value::Object(body),
        json!({"name": "TypeScript", "category": "FRONTEND"})
    );
}

#[test]
fn empty_optional_fields_are_omitted_from_the_body() {
    let project = descriptor(ResourceKind::Project);
    let mut form = filled_form(&project);
    form.set("liveDemoLink", "").unwrap();
    form.set("clientRepoLink", "").unwrap();
    form.set("serverRepoLink", "").unwrap();

    let body = form.submit().expect("valid project form");
    assert!(!body.contains_key("liveDemoLink"));
    assert!(!body.contains_key("clientRepoLink"));
    assert!(!body.contains_key("serverRepoLink"));
    assert!(body.contains_key("frontendTech"));
}

#[test]
fn unknown_fields_and_shape_mismatches_are_rejected() {
    let skill = descriptor(ResourceKind::Skill);
    let mut form = ResourceForm::blank(&skill);
    assert!(form.set("colour", "blue").is_err());
    assert!(form
        .set("name", FormValue::List(vec!["a".to_string()]))
        .is_err());

    let about = descriptor(ResourceKind::About);
    let mut form = ResourceForm::blank(&about);
    assert!(form.set("interests", "rust").is_err());
}

#[test]
fn seeding_copies_record_values_and_skips_server_fields() {
    let about = descriptor(ResourceKind::About);
    let record = json!({
        "id": Uuid::new_v4().to_string(),
        "name": "Ada",
        "role": "Engineer",
        "bio": "Writes programs",
        "experience": "10 years",
        "location": "London",
        "email": "ada@example.com",
        "interests": ["mathematics", "machines"],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z",
    });

    let form = ResourceForm::seeded(&about, &record).expect("seedable record");
    assert_eq!(form.get("name").and_then(FormValue::as_text), Some("Ada"));
    assert_eq!(
        form.get("interests").and_then(FormValue::as_list),
        Some(&["mathematics".to_string(), "machines".to_string()][..])
    );
    assert!(form.get("id").is_none());
    assert!(form.get("createdAt").is_none());
}

#[test]
fn blank_choice_fields_default_to_the_first_option() {
    let skill = descriptor(ResourceKind::Skill);
    let form = ResourceForm::blank(&skill);
    assert_eq!(
        form.get("category").and_then(FormValue::as_text),
        Some("FRONTEND")
    );
}
