use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Modal confirmation for destructive or state-changing actions.
///
/// Declining (Cancel, Escape or closing the dialog) only calls `on_cancel`;
/// nothing else happens until the user picks the confirm action.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot {
            class: "confirm-dialog-overlay",
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            prim::AlertDialogContent {
                class: "confirm-dialog",
                prim::AlertDialogTitle { class: "confirm-dialog-title", "{title}" }
                prim::AlertDialogDescription { class: "confirm-dialog-message", "{message}" }
                prim::AlertDialogActions { class: "confirm-dialog-actions",
                    prim::AlertDialogCancel { class: "confirm-dialog-cancel", "Cancel" }
                    prim::AlertDialogAction {
                        class: "confirm-dialog-confirm",
                        on_click: move |_| {
                            if !busy {
                                on_confirm.call(());
                            }
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
