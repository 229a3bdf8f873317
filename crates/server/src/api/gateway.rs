use dioxus::prelude::ServerFnError;
use serde::de::DeserializeOwned;
use shared_types::BackendRequest;

use crate::backend::get_backend;
use crate::error_convert::AppErrorExt;

/// Forward a request and decode the JSON reply for the client.
pub(crate) async fn fetch<T: DeserializeOwned>(request: BackendRequest) -> Result<T, ServerFnError> {
    let backend = get_backend().map_err(|e| e.into_server_fn_error())?;
    backend
        .fetch(request)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Forward a request whose reply body is not needed.
pub(crate) async fn submit(request: BackendRequest) -> Result<(), ServerFnError> {
    let backend = get_backend().map_err(|e| e.into_server_fn_error())?;
    backend
        .submit(request)
        .await
        .map_err(|e| e.into_server_fn_error())
}
