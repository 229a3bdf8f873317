use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::backend::PanelBackend;
use server::error_convert::AppErrorExt;
use shared_types::{
    new_contact_draft, AppError, AppErrorKind, BackendConfig, BackendRequest, PanelRoute,
};

use crate::common::StubBackend;

#[tokio::test]
async fn test_validation_reply_becomes_field_errors() {
    let stub = StubBackend::start(|_| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message": "The given data was invalid.",
                "errors": {"email": ["The email field is required."],
                           "first_name": ["The first name field is required."]}}"#
                .to_string(),
        )
    })
    .await;

    let err = stub
        .gateway()
        .submit(BackendRequest::to(PanelRoute::ContactsStore).with_draft(&new_contact_draft()))
        .await
        .expect_err("Validation failure should surface as an error");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.len(), 2);
    assert_eq!(err.field_errors["email"], "The email field is required.");

    // Field errors survive the trip through a server function error.
    let wire = err.into_server_fn_error().to_string();
    let parsed = AppError::parse_field_errors(&wire);
    assert_eq!(parsed["first_name"], "The first name field is required.");
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_missing_record_maps_to_not_found() {
    let stub = StubBackend::start(|_| {
        (
            StatusCode::NOT_FOUND,
            r#"{"message": "No query results for model [User] 99"}"#.to_string(),
        )
    })
    .await;

    let err = stub
        .gateway()
        .fetch::<shared_types::User>(BackendRequest::to(PanelRoute::UsersEdit(99)))
        .await
        .expect_err("Missing user should fail");

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "No query results for model [User] 99");
    assert!(err.field_errors.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_internal() {
    let stub =
        StubBackend::start(|_| (StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string())).await;

    let err = stub
        .gateway()
        .submit(BackendRequest::to(PanelRoute::UsersDestroy(1)))
        .await
        .expect_err("Server error should fail");

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "Panel backend returned status 500");
}

#[tokio::test]
async fn test_malformed_success_body_is_internal() {
    let stub = StubBackend::start(|_| (StatusCode::OK, "not json".to_string())).await;

    let err = stub
        .gateway()
        .fetch::<shared_types::Contact>(BackendRequest::to(PanelRoute::ContactsEdit(1)))
        .await
        .expect_err("Garbage body should fail to decode");

    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn test_unreachable_backend_is_reported() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    let gateway = PanelBackend::new(BackendConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    })
    .expect("Failed to build gateway client");

    let err = gateway
        .submit(BackendRequest::to(PanelRoute::ContactsRestore(1)))
        .await
        .expect_err("Nothing is listening");

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "The panel backend is unreachable");
}
