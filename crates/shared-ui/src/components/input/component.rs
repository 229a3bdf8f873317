use dioxus::prelude::*;

/// Labelled text input with an optional validation message beneath it.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Message from the backend for this field, if any.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                p { class: "input-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_renders_beneath_the_field() {
        let html = dioxus_ssr::render_element(rsx! {
            Input {
                label: "Email",
                name: "email",
                value: "not-an-email",
                error: Some("The email must be a valid email address.".to_string()),
            }
        });
        assert!(html.contains(r#"aria-invalid="true""#));
        assert!(html.contains("The email must be a valid email address."));
        assert!(html.contains(r#"value="not-an-email""#));
    }

    #[test]
    fn field_without_error_has_no_message() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { label: "City", name: "city" }
        });
        assert!(!html.contains("input-error"));
        assert!(html.contains(r#"aria-invalid="false""#));
    }
}
