use pretty_assertions::assert_eq;
use shared_types::{new_user_draft, BackendRequest, FileUpload, PanelRoute, PHOTO_FIELD};

use crate::common::StubBackend;

fn photo() -> FileUpload {
    FileUpload::new("me.png", "image/png", vec![0x89, b'P', b'N', b'G'])
}

#[tokio::test]
async fn test_update_user_sends_multipart_with_override_and_photo() {
    let stub = StubBackend::ok().await;
    let mut draft = new_user_draft();
    draft.set("first_name", "Ada");
    draft.set("owner", "1");

    stub.gateway()
        .submit(
            BackendRequest::to(PanelRoute::UsersUpdate(4))
                .with_draft(&draft)
                .with_file(PHOTO_FIELD, Some(photo())),
        )
        .await
        .expect("Update should succeed");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/users/4");
    assert!(req.multipart);
    assert_eq!(req.field("_method"), Some("PUT"));
    assert_eq!(req.field("owner"), Some("1"));
    assert_eq!(req.field("password"), Some(""));

    assert_eq!(req.files.len(), 1);
    let (field, name, content_type, bytes) = &req.files[0];
    assert_eq!(field, "photo");
    assert_eq!(name, "me.png");
    assert_eq!(content_type, "image/png");
    assert_eq!(bytes, &vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_update_user_without_photo_is_plain_form() {
    let stub = StubBackend::ok().await;

    stub.gateway()
        .submit(
            BackendRequest::to(PanelRoute::UsersUpdate(4))
                .with_draft(&new_user_draft())
                .with_file(PHOTO_FIELD, None),
        )
        .await
        .expect("Update should succeed");

    let req = &stub.requests()[0];
    assert!(!req.multipart);
    assert!(req.files.is_empty());
    assert_eq!(req.field("_method"), Some("PUT"));
    assert_eq!(req.field("owner"), Some("0"));
}

#[tokio::test]
async fn test_create_user_posts_to_collection() {
    let stub = StubBackend::ok().await;

    stub.gateway()
        .submit(
            BackendRequest::to(PanelRoute::UsersStore)
                .with_draft(&new_user_draft())
                .with_file(PHOTO_FIELD, Some(photo())),
        )
        .await
        .expect("Create should succeed");

    let req = &stub.requests()[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/users");
    assert_eq!(req.field("_method"), None);
    assert_eq!(req.files.len(), 1);
}

#[tokio::test]
async fn test_destroy_and_restore_user() {
    let stub = StubBackend::ok().await;
    let gateway = stub.gateway();

    gateway
        .submit(BackendRequest::to(PanelRoute::UsersDestroy(9)))
        .await
        .expect("Destroy should succeed");
    gateway
        .submit(BackendRequest::to(PanelRoute::UsersRestore(9)))
        .await
        .expect("Restore should succeed");

    let requests = stub.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/users/9/destroy");
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/users/9/restore");
}
