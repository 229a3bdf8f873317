use dioxus::prelude::*;
use shared_types::{FieldErrors, FileUpload, FormDraft, OwnerChoice, PHOTO_FIELD};
use shared_ui::components::FileInput;

use crate::routes::fields::{DraftInput, DraftSelect};

/// Fields shared by the user create and edit pages. The photo lives outside
/// the draft and is reported through `on_photo`.
#[component]
pub fn UserFields(
    draft: Signal<FormDraft>,
    errors: Signal<FieldErrors>,
    on_photo: EventHandler<Option<FileUpload>>,
) -> Element {
    let owner_options: Vec<(String, String)> = OwnerChoice::OPTIONS
        .iter()
        .map(|(choice, text)| (choice.as_param().to_string(), text.to_string()))
        .collect();
    let photo_error = errors.read().get(PHOTO_FIELD).cloned();

    rsx! {
        DraftInput { draft, errors, name: "first_name", label: "First name" }
        DraftInput { draft, errors, name: "last_name", label: "Last name" }
        DraftInput { draft, errors, name: "email", label: "Email", input_type: "email" }
        DraftInput {
            draft,
            errors,
            name: "password",
            label: "Password",
            input_type: "password",
        }
        DraftSelect {
            draft,
            errors,
            name: "owner",
            label: "Owner",
            options: owner_options,
            allow_empty: false,
        }
        FileInput {
            name: PHOTO_FIELD,
            label: "Photo",
            accept: "image/*",
            error: photo_error,
            on_change: move |file| on_photo.call(file),
        }
    }
}
