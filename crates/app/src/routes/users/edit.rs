use dioxus::prelude::*;
use shared_types::{FieldErrors, FileUpload, LifecycleAction, RecordLifecycle, Submission, User};
use shared_ui::components::{Breadcrumbs, Form, FormFields, FormFooter, LoadingButton, PageHeader};
use shared_ui::{use_toast, ToastOptions};

use super::form::UserFields;
use crate::routes::fields::failure_feedback;
use crate::routes::lifecycle::{DeleteControl, LifecycleConfirm, TrashedNotice};
use crate::routes::Route;

#[component]
pub fn UserEdit(id: i64) -> Element {
    let mut user = use_resource(use_reactive!(|id| async move {
        server::api::get_user(id).await
    }));

    match &*user.read() {
        Some(Ok(record)) => rsx! {
            UserEditForm {
                key: "{record.id}",
                user: record.clone(),
                on_changed: move |_| user.restart(),
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "container",
                p { class: "load-error", "Could not load this user: {e}" }
            }
        },
        None => rsx! {
            div { class: "loading", "Loading…" }
        },
    }
}

#[component]
fn UserEditForm(user: User, on_changed: EventHandler<()>) -> Element {
    let toast = use_toast();
    let id = user.id;
    let seed = user.clone();
    let draft = use_signal(move || seed.draft());
    let mut photo = use_signal(|| None::<FileUpload>);
    let mut errors = use_signal(FieldErrors::new);
    let mut submission = use_signal(Submission::default);
    let mut pending = use_signal(|| None::<LifecycleAction>);
    let mut acting = use_signal(|| false);

    let lifecycle = RecordLifecycle::from_deleted_at(user.deleted_at);

    // Sent as POST with `_method=PUT` by the gateway so the photo can ride
    // along as multipart.
    let handle_submit = move |_: FormEvent| {
        if !submission.write().begin() {
            return;
        }
        let payload = draft.read().clone();
        let file = photo.read().clone();
        spawn(async move {
            let result = server::api::update_user(id, payload, file).await;
            let result = submission.write().settle(result);
            match result {
                Ok(()) => {
                    errors.set(FieldErrors::new());
                    toast.success("User updated.".to_string(), ToastOptions::new());
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
                LifecycleAction::Delete => server::api::destroy_user(id).await,
                LifecycleAction::Restore => server::api::restore_user(id).await,
            };
            acting.set(false);
            pending.set(None);
            match result {
                Ok(()) => {
                    let message = match action {
                        LifecycleAction::Delete => "User deleted.",
                        LifecycleAction::Restore => "User restored.",
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

    rsx! {
        div { class: "container",
            PageHeader {
                Breadcrumbs {
                    parent: rsx! { Link { to: Route::users(), "Users" } },
                    current: user.name(),
                }
                if let Some(url) = user.photo.clone() {
                    img { class: "user-photo", src: "{url}", alt: "{user.name()}" }
                }
            }
            TrashedNotice { entity: "user", lifecycle, pending }
            Form { onsubmit: handle_submit,
                FormFields {
                    UserFields { draft, errors, on_photo: move |file| photo.set(file) }
                }
                FormFooter {
                    DeleteControl { entity: "user", lifecycle, pending }
                    LoadingButton { loading: busy, "Update User" }
                }
            }
            LifecycleConfirm {
                entity: "user",
                pending,
                busy: acting(),
                on_confirm: handle_lifecycle,
            }
        }
    }
}
