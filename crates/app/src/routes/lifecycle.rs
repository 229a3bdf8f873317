use dioxus::prelude::*;
use shared_types::{LifecycleAction, RecordLifecycle};
use shared_ui::components::{Button, ButtonVariant, ConfirmDialog, TrashedMessage};

/// Notice shown above a trashed record; asks before restoring.
#[component]
pub fn TrashedNotice(
    entity: &'static str,
    lifecycle: RecordLifecycle,
    pending: Signal<Option<LifecycleAction>>,
) -> Element {
    let mut pending = pending;
    if !lifecycle.shows_restore_notice() {
        return rsx! {};
    }
    rsx! {
        TrashedMessage {
            on_restore: move |_| pending.set(Some(LifecycleAction::Restore)),
            {LifecycleAction::trashed_notice(entity)}
        }
    }
}

/// "Delete <Entity>" control for live records; asks before deleting.
#[component]
pub fn DeleteControl(
    entity: &'static str,
    lifecycle: RecordLifecycle,
    pending: Signal<Option<LifecycleAction>>,
) -> Element {
    let mut pending = pending;
    if !lifecycle.shows_delete() {
        return rsx! {};
    }
    rsx! {
        Button {
            variant: ButtonVariant::Destructive,
            onclick: move |_| pending.set(Some(LifecycleAction::Delete)),
            {LifecycleAction::Delete.label(entity)}
        }
    }
}

/// Confirmation for whichever lifecycle action is pending. Declining clears
/// it without calling `on_confirm`.
#[component]
pub fn LifecycleConfirm(
    entity: &'static str,
    pending: Signal<Option<LifecycleAction>>,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<LifecycleAction>,
) -> Element {
    let mut pending = pending;
    let action = pending();
    let (title, message, confirm_label) = match action {
        Some(action) => (
            action.label(entity),
            action.confirmation(entity),
            action.label(entity),
        ),
        None => Default::default(),
    };

    rsx! {
        ConfirmDialog {
            open: action.is_some(),
            title: title,
            message: message,
            confirm_label: confirm_label,
            busy: busy,
            on_cancel: move |_| pending.set(None),
            on_confirm: move |_| {
                if let Some(action) = action {
                    on_confirm.call(action);
                }
            },
        }
    }
}
