use dioxus::prelude::*;
use shared_types::{new_user_draft, FieldErrors, FileUpload, Submission};
use shared_ui::components::{Breadcrumbs, Form, FormFields, FormFooter, LoadingButton, PageHeader};
use shared_ui::{use_toast, ToastOptions};

use super::form::UserFields;
use crate::routes::fields::failure_feedback;
use crate::routes::Route;

#[component]
pub fn UserCreate() -> Element {
    let toast = use_toast();
    let draft = use_signal(new_user_draft);
    let mut photo = use_signal(|| None::<FileUpload>);
    let mut errors = use_signal(FieldErrors::new);
    let mut submission = use_signal(Submission::default);

    let handle_submit = move |_: FormEvent| {
        if !submission.write().begin() {
            return;
        }
        let payload = draft.read().clone();
        let file = photo.read().clone();
        spawn(async move {
            let result = server::api::create_user(payload, file).await;
            let result = submission.write().settle(result);
            match result {
                Ok(()) => {
                    toast.success("User created.".to_string(), ToastOptions::new());
                    navigator().push(Route::users());
                }
                Err(e) => {
                    let (fields, message) = failure_feedback(&e);
                    errors.set(fields);
                    if let Some(message) = message {
                        toast.error(message, ToastOptions::new());
                    }
                }
            }
        });
    };

    let busy = submission.read().is_busy();

    rsx! {
        div { class: "container",
            PageHeader {
                Breadcrumbs {
                    parent: rsx! { Link { to: Route::users(), "Users" } },
                    current: "Create",
                }
            }
            Form { onsubmit: handle_submit,
                FormFields {
                    UserFields { draft, errors, on_photo: move |file| photo.set(file) }
                }
                FormFooter {
                    LoadingButton { loading: busy, "Create User" }
                }
            }
        }
    }
}
