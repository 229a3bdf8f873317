use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{tonic_types, WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keeps the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the OTLP gRPC exporters; tonic spawns onto it lazily.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Exporter settings read from the environment.
struct OtlpSettings {
    endpoint: String,
    service_name: String,
    environment: String,
    /// Optional `OTEL_EXPORTER_OTLP_TOKEN`, sent as `authorization` metadata.
    token: Option<String>,
}

impl OtlpSettings {
    fn from_env() -> Option<Self> {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok()?;
        Some(Self {
            endpoint,
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "panel".to_string()),
            environment: std::env::var("DEPLOY_ENV")
                .unwrap_or_else(|_| "development".to_string()),
            token: std::env::var("OTEL_EXPORTER_OTLP_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
        })
    }

    fn tls(&self) -> Option<tonic_types::transport::ClientTlsConfig> {
        self.endpoint
            .starts_with("https://")
            .then(|| tonic_types::transport::ClientTlsConfig::new().with_native_roots())
    }

    fn metadata(&self) -> Option<tonic_types::metadata::MetadataMap> {
        let token = self.token.as_ref()?;
        let value = format!("Bearer {token}").parse().ok()?;
        let mut metadata = tonic_types::metadata::MetadataMap::new();
        metadata.insert("authorization", value);
        Some(metadata)
    }
}

/// Register OTLP trace and log exporters.
///
/// Dioxus owns the `tracing` subscriber; this only wires the span exporter
/// used by [`OtelTraceLayer`] and bridges the `log` crate to OTLP. Does
/// nothing when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset.
pub fn init_telemetry() {
    let Some(settings) = OtlpSettings::from_env() else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    let runtime = OTEL_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
            .unwrap_or_else(|e| panic!("failed to start telemetry runtime: {e}"))
    });
    let _guard = runtime.enter();

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(settings.service_name.clone())
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", settings.environment.clone()))
        .build();

    let mut spans = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if let Some(tls) = settings.tls() {
        spans = spans.with_tls_config(tls);
    }
    if let Some(metadata) = settings.metadata() {
        spans = spans.with_metadata(metadata);
    }
    match spans.build() {
        Ok(exporter) => {
            let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                .with_batch_exporter(exporter)
                .with_resource(resource.clone())
                .build();
            global::set_tracer_provider(provider);
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP span exporter");
            return;
        }
    }

    let mut logs = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if let Some(tls) = settings.tls() {
        logs = logs.with_tls_config(tls);
    }
    if let Some(metadata) = settings.metadata() {
        logs = logs.with_metadata(metadata);
    }
    let log_exporter = match logs.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP log exporter");
            return;
        }
    };

    let provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::info!("log bridge skipped, a logger is already installed"),
    }

    tracing::info!(
        endpoint = %settings.endpoint,
        version = APP_VERSION,
        "telemetry initialized"
    );
}

/// Coarse kind of an incoming HTTP request, used to split spans by role.
///
/// Server function calls go through `/api/`, bundled files through
/// `/assets/` or `/wasm/`; everything else is a page render.
fn request_kind(path: &str) -> &'static str {
    if path.starts_with("/api/") {
        "server_fn"
    } else if path.starts_with("/assets/") || path.starts_with("/wasm/") || path == "/favicon.ico" {
        "asset"
    } else {
        "page"
    }
}

/// Collapse numeric path segments so `/users/12/edit` and `/users/7/edit`
/// share a span name.
fn span_route(path: &str) -> String {
    path.split('/')
        .map(|seg| {
            if !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()) {
                ":id"
            } else {
                seg
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Records method, path, the collapsed route, request kind, request ID and
/// the response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer("panel");
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let route = span_route(&path);

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.route", route.clone()),
            KeyValue::new("panel.request_kind", request_kind(&path)),
            KeyValue::new("http.request_id", request_id),
        ];

        let span = tracer
            .span_builder(format!("{} {}", &method, &route))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_function_calls_are_tagged() {
        assert_eq!(request_kind("/api/list_users"), "server_fn");
        assert_eq!(request_kind("/api/create_contact123"), "server_fn");
    }

    #[test]
    fn bundled_files_are_assets() {
        assert_eq!(request_kind("/assets/main.css"), "asset");
        assert_eq!(request_kind("/wasm/panel_bg.wasm"), "asset");
        assert_eq!(request_kind("/favicon.ico"), "asset");
    }

    #[test]
    fn everything_else_is_a_page() {
        assert_eq!(request_kind("/users"), "page");
        assert_eq!(request_kind("/contacts/create"), "page");
        assert_eq!(request_kind("/"), "page");
    }

    #[test]
    fn span_route_collapses_ids() {
        assert_eq!(span_route("/users/12/edit"), "/users/:id/edit");
        assert_eq!(span_route("/contacts/7"), "/contacts/:id");
        assert_eq!(span_route("/contacts/create"), "/contacts/create");
        assert_eq!(span_route("/"), "/");
    }
}
