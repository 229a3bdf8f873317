use dioxus::prelude::*;
use shared_types::{Contact, FilterQuery, FormDraft, Paginated};

/// List contacts matching the filter query.
#[server]
pub async fn list_contacts(query: FilterQuery) -> Result<Paginated<Contact>, ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::fetch(BackendRequest::to(PanelRoute::Contacts).with_query(&query)).await
}

/// Load a contact for editing, trashed ones included.
#[server]
pub async fn get_contact(id: i64) -> Result<Contact, ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::fetch(BackendRequest::to(PanelRoute::ContactsEdit(id))).await
}

/// Create a contact from the full form draft.
#[server]
pub async fn create_contact(draft: FormDraft) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::submit(BackendRequest::to(PanelRoute::ContactsStore).with_draft(&draft)).await
}

#[server]
pub async fn update_contact(id: i64, draft: FormDraft) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::submit(BackendRequest::to(PanelRoute::ContactsUpdate(id)).with_draft(&draft)).await
}

/// Soft-delete a contact.
#[server]
pub async fn destroy_contact(id: i64) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::submit(BackendRequest::to(PanelRoute::ContactsDestroy(id))).await
}

#[server]
pub async fn restore_contact(id: i64) -> Result<(), ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::submit(BackendRequest::to(PanelRoute::ContactsRestore(id))).await
}
