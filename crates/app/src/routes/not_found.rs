use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for unknown panel paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Dashboard {}, class: "not-found-link", "Back to Dashboard" }
        }
    }
}
