use dioxus::prelude::*;

mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let telemetry = server::config::feature_flags().telemetry;

        if telemetry {
            server::telemetry::init_telemetry();
        }

        let mut router = dioxus::server::router(App);

        if telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        // Photos travel base64-encoded inside server function bodies.
        let router = router
            .layer(axum::extract::DefaultBodyLimit::max(
                server::config::max_upload_bytes(),
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
