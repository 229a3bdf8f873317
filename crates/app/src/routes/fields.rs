use dioxus::prelude::*;
use shared_types::{AppError, FieldErrors, FormDraft};
use shared_ui::components::{FormSelect, Input};

/// Text input bound to one field of a form draft.
#[component]
pub fn DraftInput(
    draft: Signal<FormDraft>,
    errors: Signal<FieldErrors>,
    name: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    let mut draft = draft;
    let value = draft.read().get(&name).to_string();
    let error = errors.read().get(&name).cloned();
    let field = name.clone();

    rsx! {
        Input {
            label: label,
            name: name,
            input_type: input_type,
            value: value,
            error: error,
            on_input: move |e: FormEvent| {
                draft.write().set(&field, e.value());
            },
        }
    }
}

/// Select bound to one field of a form draft. `options` are (value, text)
/// pairs; an empty leading option is always offered.
#[component]
pub fn DraftSelect(
    draft: Signal<FormDraft>,
    errors: Signal<FieldErrors>,
    name: String,
    label: String,
    options: Vec<(String, String)>,
    #[props(default = true)] allow_empty: bool,
) -> Element {
    let mut draft = draft;
    let value = draft.read().get(&name).to_string();
    let error = errors.read().get(&name).cloned();
    let field = name.clone();

    rsx! {
        FormSelect {
            label: label,
            name: name,
            value: value.clone(),
            error: error,
            onchange: move |e: FormEvent| {
                draft.write().set(&field, e.value());
            },
            if allow_empty {
                option { value: "", selected: value.is_empty(), "" }
            }
            for (option_value, text) in options {
                option {
                    value: "{option_value}",
                    selected: option_value == value,
                    "{text}"
                }
            }
        }
    }
}

/// Split a failed server call into per-field messages and, when the failure
/// is not about any field, a message for a toast.
pub fn failure_feedback(err: &ServerFnError) -> (FieldErrors, Option<String>) {
    let raw = err.to_string();
    let fields = AppError::parse_field_errors(&raw);
    let message = fields.is_empty().then(|| AppError::friendly_message(&raw));
    (fields, message)
}
