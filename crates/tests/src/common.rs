use axum::{
    body::Body,
    extract::{FromRequest, Multipart, State},
    http::{header, Request, StatusCode},
    response::IntoResponse,
    Form, Router,
};
use server::backend::PanelBackend;
use shared_types::BackendConfig;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One request as seen by the stub panel backend.
#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub accept: Option<String>,
    pub multipart: bool,
    pub fields: Vec<(String, String)>,
    /// (field, file name, content type, bytes)
    pub files: Vec<(String, String, String, Vec<u8>)>,
}

impl Recorded {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

type Responder = Arc<dyn Fn(&Recorded) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    respond: Responder,
}

/// Panel backend stand-in bound to an ephemeral port. Records every request
/// and answers with whatever the responder returns.
pub struct StubBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubBackend {
    pub async fn start(
        respond: impl Fn(&Recorded) -> (StatusCode, String) + Send + Sync + 'static,
    ) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            requests: requests.clone(),
            respond: Arc::new(respond),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend crashed");
        });

        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    /// Stub that answers every request with `200 {}`.
    pub async fn ok() -> Self {
        Self::start(|_| (StatusCode::OK, "{}".to_string())).await
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("Stub state poisoned").clone()
    }

    /// Gateway client pointed at this stub.
    pub fn gateway(&self) -> PanelBackend {
        PanelBackend::new(BackendConfig {
            base_url: self.url.clone(),
            timeout_secs: 5,
        })
        .expect("Failed to build gateway client")
    }
}

async fn record(State(state): State<StubState>, req: Request<Body>) -> impl IntoResponse {
    let mut recorded = Recorded {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        accept: req
            .headers()
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        ..Default::default()
    };

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        recorded.multipart = true;
        let mut multipart = Multipart::from_request(req, &())
            .await
            .expect("Invalid multipart body");
        while let Some(field) = multipart.next_field().await.expect("Bad multipart field") {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.expect("Unreadable file part");
                    recorded.files.push((name, file_name, content_type, bytes.to_vec()));
                }
                None => {
                    let value = field.text().await.expect("Unreadable text part");
                    recorded.fields.push((name, value));
                }
            }
        }
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, &())
            .await
            .expect("Invalid form body");
        recorded.fields = fields;
    }

    let (status, body) = (state.respond)(&recorded);
    state
        .requests
        .lock()
        .expect("Stub state poisoned")
        .push(recorded);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
