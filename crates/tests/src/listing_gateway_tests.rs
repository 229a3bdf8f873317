use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{
    BackendRequest, FilterKey, FilterQuery, FilterValues, Organization, Paginated, PanelRoute,
    User,
};

use crate::common::StubBackend;

const USERS_PAGE: &str = r#"{
    "data": [
        {"id": 1, "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com", "owner": true},
        {"id": 2, "first_name": "Grace", "last_name": "Hopper", "email": "grace@example.com",
         "deleted_at": "2024-01-02T03:04:05Z"}
    ],
    "current_page": 1,
    "last_page": 2,
    "total": 12
}"#;

#[tokio::test]
async fn test_cleared_filters_send_only_the_sentinel() {
    let stub = StubBackend::start(|_| (StatusCode::OK, USERS_PAGE.to_string())).await;

    let query = FilterValues::default().to_query();
    let page: Paginated<User> = stub
        .gateway()
        .fetch(BackendRequest::to(PanelRoute::Users).with_query(&query))
        .await
        .expect("Listing should succeed");

    assert_eq!(page.data.len(), 2);
    assert!(page.has_next());
    assert!(page.data[0].owner);
    assert!(page.data[1].deleted_at.is_some());

    let req = &stub.requests()[0];
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/users");
    assert_eq!(req.query.as_deref(), Some("remember=forget"));
}

#[tokio::test]
async fn test_active_filters_are_forwarded() {
    let stub = StubBackend::start(|_| (StatusCode::OK, r#"{"data": []}"#.to_string())).await;

    let mut values = FilterValues::default();
    values.set(FilterKey::Role, "owner");
    values.set(FilterKey::Trashed, "only");
    let page: Paginated<User> = stub
        .gateway()
        .fetch(BackendRequest::to(PanelRoute::Users).with_query(&values.to_query()))
        .await
        .expect("Listing should succeed");

    assert!(page.is_empty());
    assert_eq!(
        stub.requests()[0].query.as_deref(),
        Some("role=owner&trashed=only")
    );
}

#[tokio::test]
async fn test_route_without_filters_sends_no_query() {
    let stub = StubBackend::start(|_| (StatusCode::OK, r#"{"data": []}"#.to_string())).await;

    let query = FilterQuery::from_route(None, None, None, None);
    let _: Paginated<User> = stub
        .gateway()
        .fetch(BackendRequest::to(PanelRoute::Contacts).with_query(&query))
        .await
        .expect("Listing should succeed");

    assert_eq!(stub.requests()[0].query, None);
}

#[tokio::test]
async fn test_organizations_list() {
    let stub = StubBackend::start(|_| {
        (
            StatusCode::OK,
            r#"[{"id": 1, "name": "Acme"}, {"id": 2, "name": "Globex"}]"#.to_string(),
        )
    })
    .await;

    let orgs: Vec<Organization> = stub
        .gateway()
        .fetch(BackendRequest::to(PanelRoute::Organizations))
        .await
        .expect("Organizations should load");

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[1].name, "Globex");
    assert_eq!(stub.requests()[0].path, "/organizations");
}
