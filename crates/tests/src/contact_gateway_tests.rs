use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{new_contact_draft, BackendRequest, PanelRoute, CONTACT_FIELDS};

use crate::common::StubBackend;

#[tokio::test]
async fn test_create_contact_posts_every_field_once() {
    let stub = StubBackend::ok().await;
    let mut draft = new_contact_draft();
    draft.set("first_name", "Ada");
    draft.set("last_name", "Lovelace");
    draft.set("email", "ada@example.com");

    stub.gateway()
        .submit(BackendRequest::to(PanelRoute::ContactsStore).with_draft(&draft))
        .await
        .expect("Create should succeed");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1, "Exactly one request should reach the backend");
    let req = &requests[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/contacts");
    assert!(!req.multipart);
    assert_eq!(req.accept.as_deref(), Some("application/json"));

    let mut keys: Vec<&str> = req.fields.iter().map(|(k, _)| k.as_str()).collect();
    keys.sort_unstable();
    let mut expected = CONTACT_FIELDS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);

    assert_eq!(req.field("first_name"), Some("Ada"));
    assert_eq!(req.field("email"), Some("ada@example.com"));
    assert_eq!(req.field("city"), Some(""));
    assert_eq!(req.field("_method"), None);
}

#[tokio::test]
async fn test_update_contact_uses_method_override() {
    let stub = StubBackend::ok().await;
    let mut draft = new_contact_draft();
    draft.set("first_name", "Grace");

    stub.gateway()
        .submit(BackendRequest::to(PanelRoute::ContactsUpdate(5)).with_draft(&draft))
        .await
        .expect("Update should succeed");

    let req = &stub.requests()[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/contacts/5");
    assert_eq!(req.field("_method"), Some("PUT"));
    assert_eq!(req.field("first_name"), Some("Grace"));
}

#[tokio::test]
async fn test_destroy_and_restore_contact() {
    let stub = StubBackend::ok().await;
    let gateway = stub.gateway();

    gateway
        .submit(BackendRequest::to(PanelRoute::ContactsDestroy(3)))
        .await
        .expect("Destroy should succeed");
    gateway
        .submit(BackendRequest::to(PanelRoute::ContactsRestore(3)))
        .await
        .expect("Restore should succeed");

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        (requests[0].method.as_str(), requests[0].path.as_str()),
        ("DELETE", "/contacts/3/destroy")
    );
    assert_eq!(
        (requests[1].method.as_str(), requests[1].path.as_str()),
        ("PUT", "/contacts/3/restore")
    );
    assert!(requests.iter().all(|r| r.fields.is_empty()));
}

#[tokio::test]
async fn test_get_contact_decodes_record() {
    let stub = StubBackend::start(|_| {
        (
            StatusCode::OK,
            r#"{"id": 3, "first_name": "Ada", "last_name": "Lovelace", "country": "CA",
                "organization_id": 2, "organization": {"id": 2, "name": "Analytical Engines"},
                "deleted_at": "2024-05-01T12:00:00Z"}"#
                .to_string(),
        )
    })
    .await;

    let contact: shared_types::Contact = stub
        .gateway()
        .fetch(BackendRequest::to(PanelRoute::ContactsEdit(3)))
        .await
        .expect("Fetch should succeed");

    assert_eq!(contact.name(), "Ada Lovelace");
    assert_eq!(contact.draft().get("organization_id"), "2");
    assert!(contact.deleted_at.is_some());
    assert_eq!(stub.requests()[0].path, "/contacts/3");
}
