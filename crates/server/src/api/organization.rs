use dioxus::prelude::*;
use shared_types::Organization;

/// Organizations offered by the contact form's select.
#[server]
pub async fn list_organizations() -> Result<Vec<Organization>, ServerFnError> {
    use super::gateway;
    use shared_types::{BackendRequest, PanelRoute};

    gateway::fetch(BackendRequest::to(PanelRoute::Organizations)).await
}
