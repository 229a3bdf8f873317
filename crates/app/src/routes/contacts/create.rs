use dioxus::prelude::*;
use shared_types::{new_contact_draft, FieldErrors, Submission};
use shared_ui::components::{Breadcrumbs, Form, FormFields, FormFooter, LoadingButton, PageHeader};
use shared_ui::{use_toast, ToastOptions};

use super::form::ContactFields;
use crate::routes::fields::failure_feedback;
use crate::routes::Route;

#[component]
pub fn ContactCreate() -> Element {
    let toast = use_toast();
    let draft = use_signal(new_contact_draft);
    let mut errors = use_signal(FieldErrors::new);
    let mut submission = use_signal(Submission::default);

    let organizations = use_resource(|| async move {
        server::api::list_organizations().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load organizations");
            Vec::new()
        })
    });

    let handle_submit = move |_: FormEvent| {
        if !submission.write().begin() {
            return;
        }
        let payload = draft.read().clone();
        spawn(async move {
            let result = server::api::create_contact(payload).await;
            let result = submission.write().settle(result);
            match result {
                Ok(()) => {
                    toast.success("Contact created.".to_string(), ToastOptions::new());
                    navigator().push(Route::contacts());
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
    let organization_list = organizations.read().clone().unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                Breadcrumbs {
                    parent: rsx! { Link { to: Route::contacts(), "Contacts" } },
                    current: "Create",
                }
            }
            Form { onsubmit: handle_submit,
                FormFields {
                    ContactFields { draft, errors, organizations: organization_list }
                }
                FormFooter {
                    LoadingButton { loading: busy, "Create Contact" }
                }
            }
        }
    }
}
