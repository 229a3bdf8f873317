use dioxus::prelude::*;

/// Top row of a panel page: title (or breadcrumbs) and actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Title split into a parent link and the current item, e.g. `Users / Ada`.
#[component]
pub fn Breadcrumbs(parent: Element, current: String) -> Element {
    rsx! {
        h1 { class: "page-title breadcrumbs",
            span { class: "breadcrumbs-parent", {parent} }
            span { class: "breadcrumbs-separator", "/" }
            span { class: "breadcrumbs-current", "{current}" }
        }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
