use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::{AppError, BackendConfig, BackendRequest, FieldErrors, HttpMethod};
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

/// Client created lazily on the first server function call and shared by
/// all of them.
static BACKEND: OnceLock<PanelBackend> = OnceLock::new();

/// Get or initialize the shared panel backend client.
pub fn get_backend() -> Result<&'static PanelBackend, AppError> {
    if let Some(backend) = BACKEND.get() {
        return Ok(backend);
    }
    let backend = PanelBackend::new(crate::config::config().backend.clone())?;
    let _ = BACKEND.set(backend);
    BACKEND
        .get()
        .ok_or_else(|| AppError::internal("Panel backend client unavailable"))
}

/// HTTP gateway to the panel backend.
///
/// Sends each [`BackendRequest`] unchanged and maps the reply; it does not
/// validate payloads or keep any state of its own.
#[derive(Debug, Clone)]
pub struct PanelBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl PanelBackend {
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| e.into_app_error())?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Send a request and return the raw success body.
    #[tracing::instrument(
        skip(self, request),
        fields(
            route = request.route_name,
            method = %request.method,
            path = %request.path,
            multipart = request.is_multipart(),
        )
    )]
    pub async fn send(&self, request: BackendRequest) -> Result<String, AppError> {
        let url = self.config.url(&request.path);
        let mut builder = self
            .client
            .request(reqwest_method(request.method), url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let fields = request.form_fields();
        let has_body = request.has_body();
        if let Some((field, file)) = request.file {
            let mut form = multipart::Form::new();
            for (name, value) in fields {
                form = form.text(name, value);
            }
            tracing::debug!(file = %file.name, size = file.size(), "attaching file");
            let part = multipart::Part::bytes(file.bytes)
                .file_name(file.name)
                .mime_str(&file.content_type)
                .map_err(|e| e.into_app_error())?;
            builder = builder.multipart(form.part(field, part));
        } else if has_body {
            builder = builder.form(&fields);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "panel backend request failed");
            e.into_app_error()
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.into_app_error())?;

        if (200..300).contains(&status) {
            tracing::info!(status, "panel backend request succeeded");
            Ok(body)
        } else {
            let err = error_from_reply(status, &body);
            if err.is_validation() {
                tracing::info!(status, fields = err.field_errors.len(), "panel backend rejected payload");
            } else {
                tracing::warn!(status, message = %err.message, "panel backend returned an error");
            }
            Err(err)
        }
    }

    /// Send a request and decode its JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, request: BackendRequest) -> Result<T, AppError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::internal(format!("Unexpected response from the panel backend: {e}"))
        })
    }

    /// Send a request whose reply body carries nothing the client needs.
    pub async fn submit(&self, request: BackendRequest) -> Result<(), AppError> {
        self.send(request).await.map(|_| ())
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Error body of the panel backend: `{"message": ..., "errors": {...}}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: HashMap<String, ErrorMessages>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    fn first(self) -> Option<String> {
        match self {
            ErrorMessages::One(msg) => Some(msg),
            ErrorMessages::Many(msgs) => msgs.into_iter().next(),
        }
    }
}

/// Map a non-success reply to an AppError; 422 keeps the first message per
/// field.
pub fn error_from_reply(status: u16, body: &str) -> AppError {
    let reply: ErrorReply = serde_json::from_str(body).unwrap_or_default();
    if status == 422 {
        let field_errors: FieldErrors = reply
            .errors
            .into_iter()
            .filter_map(|(field, msgs)| msgs.first().map(|m| (field, m)))
            .collect();
        let message = reply
            .message
            .unwrap_or_else(|| "The given data was invalid.".to_string());
        return AppError::validation(message, field_errors);
    }
    let message = reply
        .message
        .unwrap_or_else(|| format!("Panel backend returned status {status}"));
    AppError::from_status(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn validation_reply_keeps_first_message_per_field() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email field is required.", "The email must be valid."],
                "first_name": "The first name field is required."
            }
        }"#;
        let err = error_from_reply(422, body);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.len(), 2);
        assert_eq!(err.field_errors["email"], "The email field is required.");
        assert_eq!(err.field_errors["first_name"], "The first name field is required.");
    }

    #[test]
    fn validation_reply_without_body_still_classifies() {
        let err = error_from_reply(422, "");
        assert!(err.is_validation());
        assert!(err.field_errors.is_empty());
        assert_eq!(err.message, "The given data was invalid.");
    }

    #[test]
    fn other_statuses_use_reply_message() {
        let err = error_from_reply(404, r#"{"message": "No query results for model [User] 12"}"#);
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "No query results for model [User] 12");

        let err = error_from_reply(500, "<html>Server Error</html>");
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert_eq!(err.message, "Panel backend returned status 500");
    }
}
