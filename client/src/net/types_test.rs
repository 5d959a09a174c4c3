use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_decodes_from_code_and_label() {
    let from_code: Role = serde_json::from_value(json!(2)).unwrap();
    let from_label: Role = serde_json::from_value(json!("admin")).unwrap();
    assert_eq!(from_code, Role::Manager);
    assert_eq!(from_label, Role::Admin);
}

#[test]
fn role_rejects_unknown_values() {
    assert!(serde_json::from_value::<Role>(json!(9)).is_err());
    assert!(serde_json::from_value::<Role>(json!("owner")).is_err());
    assert!(serde_json::from_value::<Role>(json!(true)).is_err());
}

#[test]
fn role_serializes_as_backend_code() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!(3));
}

#[test]
fn staff_roles_are_manager_and_admin() {
    assert!(!Role::User.is_staff());
    assert!(Role::Manager.is_staff());
    assert!(Role::Admin.is_staff());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_me_payload() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "first_name": "Ayşe",
        "last_name": "Yılmaz",
        "email": "ayse@example.edu",
        "role": 2,
        "role_name": "Manager",
        "is_active": true,
        "date_joined": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.display_name(), "Ayşe Yılmaz");
    assert_eq!(user.personnel_type, None);
}

#[test]
fn user_display_name_falls_back_to_email() {
    let user = User { email: "x@example.edu".to_owned(), ..User::default() };
    assert_eq!(user.display_name(), "x@example.edu");
}

// =============================================================
// Queue / Lodgement
// =============================================================

#[test]
fn queue_label_joins_categories() {
    let queue: Queue = serde_json::from_value(json!({
        "id": 1,
        "lodgement_type": "Sıra Tahsisli",
        "personel_type": "Akademik",
        "lodgement_size": "2+1",
        "required_documents": [{ "id": 4, "name": "Kimlik" }]
    }))
    .unwrap();
    assert_eq!(queue.label(), "Sıra Tahsisli - Akademik - 2+1");
    assert_eq!(queue.required_documents[0].name, "Kimlik");
}

#[test]
fn lodgement_image_url_is_under_static_mount() {
    let lodgement = Lodgement { image_path: Some("/img/a.png".to_owned()), ..Lodgement::default() };
    assert_eq!(lodgement.image_url().as_deref(), Some("/static/img/a.png"));

    let blank = Lodgement { image_path: Some("  ".to_owned()), ..Lodgement::default() };
    assert_eq!(blank.image_url(), None);
}

#[test]
fn lodgement_display_name_falls_back_to_id() {
    let lodgement = Lodgement { id: 12, name: None, ..Lodgement::default() };
    assert_eq!(lodgement.display_name(), "Lodgement #12");
}

#[test]
fn lodgement_size_labels() {
    assert_eq!(lodgement_size_label(1), "1+1");
    assert_eq!(lodgement_size_label(2), "2+1");
    assert_eq!(lodgement_size_label(5), "5");
}

// =============================================================
// Scoring form
// =============================================================

#[test]
fn field_type_decodes_labels_with_text_fallback() {
    let item: FormItem = serde_json::from_value(json!({
        "id": 1, "label": "Eşiniz var mı?", "caption": "", "field_type": "Boolean", "point": 6, "answer": null
    }))
    .unwrap();
    assert_eq!(item.field_type, FieldType::Boolean);
    assert_eq!(FieldType::from("Weird".to_owned()), FieldType::Text);
}

#[test]
fn answer_display_formats_by_type() {
    let int_item = FormItem { field_type: FieldType::Integer, answer: Some(json!({ "value": 3 })), ..FormItem::default() };
    let bool_item = FormItem { field_type: FieldType::Boolean, answer: Some(json!({ "value": 1 })), ..FormItem::default() };
    let text_item = FormItem { field_type: FieldType::Text, answer: Some(json!({ "value": "abc" })), ..FormItem::default() };
    let empty = FormItem { field_type: FieldType::Integer, answer: Some(json!({ "value": null })), ..FormItem::default() };
    assert_eq!(int_item.answer_display(), "3");
    assert_eq!(bool_item.answer_display(), "Yes");
    assert_eq!(text_item.answer_display(), "abc");
    assert_eq!(empty.answer_display(), "N/A");
}

// =============================================================
// Application
// =============================================================

#[test]
fn application_status_codes_match_backend() {
    assert_eq!(ApplicationStatus::from_label("Approved").map(ApplicationStatus::code), Some(3));
    assert_eq!(ApplicationStatus::from_label("Rejected").map(ApplicationStatus::code), Some(4));
    assert_eq!(ApplicationStatus::from_label("Re Upload").map(ApplicationStatus::code), Some(5));
    assert_eq!(ApplicationStatus::from_label("Unknown"), None);
}

#[test]
fn finalized_applications_cannot_be_cancelled() {
    assert!(ApplicationStatus::InProgress.is_cancellable());
    assert!(!ApplicationStatus::Approved.is_cancellable());
    assert!(!ApplicationStatus::Rejected.is_cancellable());
    assert!(ApplicationStatus::ReUpload.accepts_documents());
    assert!(!ApplicationStatus::Cancelled.accepts_documents());
}

#[test]
fn application_decodes_review_payload() {
    let app: Application = serde_json::from_value(json!({
        "id": 3,
        "user": { "id": 1, "email": "a@example.edu", "role": 1 },
        "status": "Pending",
        "queue": { "id": 2, "lodgement_type": "Görev Tahsisli", "personel_type": "İdari", "lodgement_size": "1+1" },
        "scoring_form": { "id": 9, "type": "4 No'lu Cetvel", "items": [] },
        "documents": [{ "file": "https://bucket/x.pdf", "description": "", "is_approved": false, "document": { "id": 1, "name": "Kimlik" } }],
        "total_points": 42,
        "created_at": "01 May 2024, 10:00",
        "estimated_availability": "Available",
        "rank": "2"
    }))
    .unwrap();
    assert_eq!(app.parsed_status(), Some(ApplicationStatus::Pending));
    assert_eq!(app.total_points, Some(42));
    assert_eq!(app.rank, Some(2));
    assert_eq!(app.documents[0].document.name, "Kimlik");
    assert_eq!(app.scoring_form.map(|f| f.form_type), Some("4 No'lu Cetvel".to_owned()));
}

#[test]
fn application_tolerates_missing_optional_fields() {
    let app: Application = serde_json::from_value(json!({ "id": 1, "status": "In Progress" })).unwrap();
    assert_eq!(app.total_points, None);
    assert!(app.documents.is_empty());
    assert!(app.scoring_form.is_none());
}
