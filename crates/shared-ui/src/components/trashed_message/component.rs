use dioxus::prelude::*;

/// Warning strip shown above a soft-deleted record, with an inline restore
/// action.
#[component]
pub fn TrashedMessage(
    #[props(default)] on_restore: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "trashed-message", role: "alert",
            div { class: "trashed-message-text", {children} }
            button {
                class: "trashed-message-restore",
                r#type: "button",
                onclick: move |evt| on_restore.call(evt),
                "Restore"
            }
        }
    }
}
