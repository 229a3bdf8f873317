use dioxus::prelude::*;
use shared_types::{FileUpload, FilterQuery, FormDraft, Paginated, User};

/// List users matching the filter query.
#[server]
pub async fn list_users(query: FilterQuery) -> Result<Paginated<User>, ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::fetch(BackendRequest::to(PanelRoute::Users).with_query(&query)).await
}

#[server]
pub async fn get_user(id: i64) -> Result<User, ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::fetch(BackendRequest::to(PanelRoute::UsersEdit(id))).await
}

/// Create a user; the photo, when present, goes out as a multipart part.
#[server]
pub async fn create_user(draft: FormDraft, photo: Option<FileUpload>) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute, PHOTO_FIELD};

    gateway::submit(
        BackendRequest::to(PanelRoute::UsersStore)
            .with_draft(&draft)
            .with_file(PHOTO_FIELD, photo),
    )
    .await
}

/// Update a user. Sent as POST with `_method=PUT` so the photo can ride along.
#[server]
pub async fn update_user(
    id: i64,
    draft: FormDraft,
    photo: Option<FileUpload>,
) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute, PHOTO_FIELD};

    gateway::submit(
        BackendRequest::to(PanelRoute::UsersUpdate(id))
            .with_draft(&draft)
            .with_file(PHOTO_FIELD, photo),
    )
    .await
}

#[server]
pub async fn destroy_user(id: i64) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::submit(BackendRequest::to(PanelRoute::UsersDestroy(id))).await
}

#[server]
pub async fn restore_user(id: i64) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::submit(BackendRequest::to(PanelRoute::UsersRestore(id))).await
}
