use dioxus::prelude::*;
use shared_types::{Contact, FieldErrors, LifecycleAction, RecordLifecycle, Submission};
use shared_ui::components::{Breadcrumbs, Form, FormFields, FormFooter, LoadingButton, PageHeader};
use shared_ui::{use_toast, ToastOptions};

use super::form::ContactFields;
use crate::routes::fields::failure_feedback;
use crate::routes::lifecycle::{DeleteControl, LifecycleConfirm, TrashedNotice};
use crate::routes::Route;

#[component]
pub fn ContactEdit(id: i64) -> Element {
    let mut contact = use_resource(use_reactive!(|id| async move {
        server::api::get_contact(id).await
    }));

    match &*contact.read() {
        Some(Ok(record)) => rsx! {
            ContactEditForm {
                key: "{record.id}",
                contact: record.clone(),
                on_changed: move |_| contact.restart(),
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "container",
                p { class: "load-error", "Could not load this contact: {e}" }
            }
        },
        None => rsx! {
            div { class: "loading", "Loading…" }
        },
    }
}

#[component]
fn ContactEditForm(contact: Contact, on_changed: EventHandler<()>) -> Element {
    let toast = use_toast();
    let id = contact.id;
    let seed = contact.clone();
    let draft = use_signal(move || seed.draft());
    let mut errors = use_signal(FieldErrors::new);
    let mut submission = use_signal(Submission::default);
    let mut pending = use_signal(|| None::<LifecycleAction>);
    let mut acting = use_signal(|| false);

    let organizations = use_resource(|| async move {
        server::api::list_organizations().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load organizations");
            Vec::new()
        })
    });

    let lifecycle = RecordLifecycle::from_deleted_at(contact.deleted_at);

    let handle_submit = move |_: FormEvent| {
        if !submission.write().begin() {
            return;
        }
        let payload = draft.read().clone();
        spawn(async move {
            let result = server::api::update_contact(id, payload).await;
            let result = submission.write().settle(result);
            match result {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    toast.success("Contact updated.".to_string(), ToastOptions::new());
                    on_changed.call(());
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

    let handle_lifecycle = move |action: LifecycleAction| {
        if acting() {
            return;
        }
        acting.set(true);
        spawn(async move {
            let result = match action {
                LifecycleAction::Delete => server::api::destroy_contact(id).await,
                LifecycleAction::Restore => server::api::restore_contact(id).await,
            };
            acting.set(false);
            pending.set(None);
            match result {
                Ok(()) => {
                    let message = match action {
                        LifecycleAction::Delete => "Contact deleted.",
                        LifecycleAction::Restore => "Contact restored.",
                    };
                    toast.success(message.to_string(), ToastOptions::new());
                    on_changed.call(());
                }
                Err(e) => {
                    let (_, message) = failure_feedback(&e);
                    toast.error(
                        message.unwrap_or_else(|| e.to_string()),
                        ToastOptions::new(),
                    );
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
                    current: contact.name(),
                }
            }
            TrashedNotice { entity: "contact", lifecycle, pending }
            Form { onsubmit: handle_submit,
                FormFields {
                    ContactFields { draft, errors, organizations: organization_list }
                }
                FormFooter {
                    DeleteControl { entity: "contact", lifecycle, pending }
                    LoadingButton { loading: busy, "Update Contact" }
                }
            }
            LifecycleConfirm {
                entity: "contact",
                pending,
                busy: acting(),
                on_confirm: handle_lifecycle,
            }
        }
    }
}
