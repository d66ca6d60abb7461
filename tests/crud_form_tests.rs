
use portfolio_admin::{
    entities::{
        Draft,
        education::Education,
        internship::Internship,
        project::Project,
        skill::{Skill, SkillCategory},
    },
    notifications::{NotificationKind, Notifier},
};
use serde_json::json;
use test_utils::TestApp;

fn acme_internship() -> Internship {
    Internship {
        id: None,
        company: "Acme".into(),
        role: "Intern".into(),
        period: "Jun 2023 - Aug 2023".into(),
        responsibilities: vec!["Wrote code".into(), String::new()],
    }
}

#[actix_rt::test]
async fn created_record_shows_up_in_the_refreshed_list() {
    let app = TestApp::spawn().await;
    let notifier = Notifier::new();
    let mut form = app.crud_form::<Internship>(&notifier);

    *form.draft_mut() = acme_internship();
    assert!(form.submit().await);

    let records = form.records().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].company, "Acme");
    assert_eq!(records[0].responsibilities, vec!["Wrote code".to_string()]);
    assert!(records[0].id.is_some(), "server assigns the identity");

    // Draft reset to the empty shape, including the single blank entry.
    assert_eq!(form.draft(), &Internship::empty());
}

#[actix_rt::test]
async fn enveloped_list_response_is_unwrapped() {
    let app = TestApp::spawn().await;
    app.stash.envelope("educations");
    app.stash.seed(
        "educations",
        json!({
            "institution": "Stanford University",
            "degree": "BSc Computer Science",
            "period": "2019 - 2023",
            "score": "3.9 GPA"
        }),
    );

    let notifier = Notifier::new();
    let mut form = app.crud_form::<Education>(&notifier);
    form.refresh().await;

    assert_eq!(form.records().len(), 1);
    assert_eq!(form.records().records()[0].institution, "Stanford University");
    assert!(notifier.is_empty());
}

#[actix_rt::test]
async fn failed_fetch_leaves_an_empty_collection_and_one_notification() {
    let app = TestApp::spawn().await;
    app.stash.fail("skills");

    let notifier = Notifier::new();
    let mut form = app.crud_form::<Skill>(&notifier);
    assert!(form.records().is_loading());

    form.refresh().await;

    assert!(form.records().is_empty());
    assert!(!form.records().is_loading());
    let toasts = notifier.snapshot();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, NotificationKind::Error);
    assert_eq!(toasts[0].message, "Failed to fetch skills");
}

#[actix_rt::test]
async fn editing_an_existing_record_dispatches_an_update() {
    let app = TestApp::spawn().await;
    let id = app.stash.seed(
        "internships",
        json!({
            "company": "Acme",
            "role": "Intern",
            "period": "Jun 2023",
            "responsibilities": ["Wrote code"]
        }),
    );

    let notifier = Notifier::new();
    let mut form = app.crud_form::<Internship>(&notifier);
    form.refresh().await;

    let record = form.records().records()[0].clone();
    form.start_edit(&record);
    assert_eq!(form.editing_id(), Some(id.as_str()));

    form.draft_mut().role = "Senior Intern".into();
    assert!(form.submit().await);

    // The server replaced the record instead of appending a new one.
    let stored = app.stash.records_of("internships");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["role"], json!("Senior Intern"));
    assert_eq!(stored[0]["id"], json!(id));
    assert!(form.editing_id().is_none());
}

#[actix_rt::test]
async fn delete_drops_the_record_remotely_and_locally() {
    let app = TestApp::spawn().await;
    let id = app.stash.seed(
        "educations",
        json!({
            "institution": "MIT",
            "degree": "MSc",
            "period": "2023 - 2025",
            "score": ""
        }),
    );

    let notifier = Notifier::new();
    let mut form = app.crud_form::<Education>(&notifier);
    form.refresh().await;
    assert_eq!(form.records().len(), 1);

    assert!(form.delete(&id).await);
    assert!(form.records().is_empty());
    assert!(app.stash.records_of("educations").is_empty());
    assert_eq!(notifier.snapshot()[0].kind, NotificationKind::Success);
}

#[actix_rt::test]
async fn failed_delete_keeps_the_local_list() {
    let app = TestApp::spawn().await;
    let id = app.stash.seed(
        "skills",
        json!({ "name": "Rust", "level": 90, "category": "Programming Languages" }),
    );

    let notifier = Notifier::new();
    let mut form = app.crud_form::<Skill>(&notifier);
    form.refresh().await;
    app.stash.fail("skills");

    assert!(!form.delete(&id).await);
    assert_eq!(form.records().len(), 1);
    assert_eq!(app.stash.records_of("skills").len(), 1);
    assert_eq!(notifier.snapshot().last().unwrap().kind, NotificationKind::Error);
}

#[actix_rt::test]
async fn project_create_sends_the_array_payload_shape() {
    let app = TestApp::spawn().await;
    let notifier = Notifier::new();
    let mut form = app.crud_form::<Project>(&notifier);

    let draft = form.draft_mut();
    draft.title = "Portfolio".into();
    draft.description = "Personal site".into();
    draft.set_technology(0, "Rust");
    draft.add_technology();
    draft.set_technology(1, "  ");
    draft.github_url = "https://github.com/me/portfolio".into();

    assert!(form.submit().await);

    let stored = app.stash.records_of("projects");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["title"], json!("Portfolio"));
    assert_eq!(stored[0]["githubUrl"], json!("https://github.com/me/portfolio"));
    // Blank technology entries are filtered before sending.
    assert_eq!(stored[0]["technologies"], json!(["Rust"]));
    assert_eq!(form.records().len(), 1);
}

#[actix_rt::test]
async fn failed_create_retains_the_draft_for_resubmission() {
    let app = TestApp::spawn().await;
    app.stash.fail("internships");

    let notifier = Notifier::new();
    let mut form = app.crud_form::<Internship>(&notifier);
    *form.draft_mut() = acme_internship();

    assert!(!form.submit().await);
    assert_eq!(form.draft(), &acme_internship());
    assert!(!form.is_submitting());

    // Manual resubmission succeeds once the server recovers.
    app.stash.recover("internships");
    assert!(form.submit().await);
    assert_eq!(form.records().len(), 1);
}

#[actix_rt::test]
async fn skill_round_trip_preserves_the_category_string() {
    let app = TestApp::spawn().await;
    let notifier = Notifier::new();
    let mut form = app.crud_form::<Skill>(&notifier);

    let draft = form.draft_mut();
    draft.name = "Solidity".into();
    draft.category = Some(SkillCategory::BlockchainDevelopment);
    draft.set_level(85);

    assert!(form.submit().await);

    let stored = app.stash.records_of("skills");
    assert_eq!(stored[0]["category"], json!("Blockchain Development"));
    assert_eq!(stored[0]["level"], json!(85));
    assert_eq!(
        form.records().records()[0].category,
        Some(SkillCategory::BlockchainDevelopment)
    );
}
