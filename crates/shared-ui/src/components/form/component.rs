use dioxus::prelude::*;

/// Form wrapper that stops the browser's own submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two-column field grid inside a [`Form`].
#[component]
pub fn FormFields(children: Element) -> Element {
    rsx! {
        div { class: "form-fields", {children} }
    }
}

/// Right-aligned action row at the bottom of a [`Form`].
#[component]
pub fn FormFooter(children: Element) -> Element {
    rsx! {
        div { class: "form-footer", {children} }
    }
}
