use auth0_management::types::{Job, LogEntry, Organization, User};
use auth0_management::{
    CheckpointEnvelope, DecodeError, OffsetEnvelope, ResponseDecoder,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_user_full() {
    let json = load_fixture("user.json");
    let user: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user.user_id, "auth0|64b7f1c2a9e3d5f6a7b8c9d0");
    assert_eq!(user.base.email.as_deref(), Some("jane.doe@example.com"));
    assert_eq!(user.base.given_name.as_deref(), Some("Jane"));
    assert_eq!(user.base.blocked, Some(false));
    assert_eq!(user.base.user_metadata.as_ref().unwrap()["theme"], "dark");
    assert!(user.identities.is_empty());
    assert_eq!(
        user.created_at.unwrap().to_rfc3339(),
        "2024-01-15T10:30:00+00:00"
    );
    assert!(user.last_login.is_none());
}

#[test]
fn deserialize_users_page() {
    let json = load_fixture("users_page.json");
    let page = OffsetEnvelope::<User>::new("users")
        .decode(json.as_bytes())
        .unwrap();
    assert_eq!(page.len(), 2);

    let jane = &page.items()[0];
    assert_eq!(jane.identities[0].provider, "auth0");
    assert!(!jane.identities[0].is_social);
    assert_eq!(jane.base.app_metadata.as_ref().unwrap()["plan"], "pro");
    assert_eq!(jane.last_ip.as_deref(), Some("203.0.113.10"));

    let sam = &page.items()[1];
    assert!(sam.base.nickname.is_none());
    assert!(sam.updated_at.is_none());
}

#[test]
fn user_missing_id_reports_item_index() {
    let body = br#"{"users": [{"user_id": "auth0|1"}, {"email": "x@example.com"}]}"#;
    let err = OffsetEnvelope::<User>::new("users").decode(body).unwrap_err();
    assert!(matches!(err, DecodeError::Item { index: 1, .. }));
}

#[test]
fn deserialize_org_members_page() {
    let json = load_fixture("org_members.json");
    let page = CheckpointEnvelope::<serde_json::Value>::new("members")
        .decode(json.as_bytes())
        .unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.has_more());
}

#[test]
fn deserialize_organization_with_branding() {
    let json = r##"{
        "id": "org_123",
        "name": "acme",
        "display_name": "Acme Corp",
        "branding": {
            "logo_url": "https://acme.example/logo.png",
            "colors": {"primary": "#0059d6", "page_background": "#000000"}
        },
        "metadata": {"tier": "gold"}
    }"##;
    let org: Organization = serde_json::from_str(json).unwrap();
    assert_eq!(org.id, "org_123");
    assert_eq!(org.base.display_name.as_deref(), Some("Acme Corp"));
    let branding = org.base.branding.unwrap();
    assert_eq!(
        branding.logo_url.as_deref(),
        Some("https://acme.example/logo.png")
    );
    assert_eq!(branding.colors.unwrap()["primary"], "#0059d6");
}

#[test]
fn deserialize_log_entry_type_field() {
    let json = load_fixture("logs_page.json");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entry: LogEntry = serde_json::from_value(value["logs"][0].clone()).unwrap();
    assert_eq!(entry.event_type.as_deref(), Some("s"));
    assert_eq!(entry.description.as_deref(), Some("Success Login"));
    assert_eq!(entry.client_name.as_deref(), Some("Dashboard"));
}

#[test]
fn deserialize_job() {
    let json = load_fixture("job.json");
    let job: Job = serde_json::from_str(&json).unwrap();
    assert_eq!(job.id, "job_0000000000000001");
    assert_eq!(job.connection_id.as_deref(), Some("con_0000000000000001"));
    assert!(job.percentage_done.is_none());
}
