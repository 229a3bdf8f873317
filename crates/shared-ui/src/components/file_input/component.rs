use dioxus::prelude::*;
use shared_types::{FileSlot, FileUpload};

/// Single-file attachment control.
///
/// Reads the picked file into memory and reports it through `on_change`;
/// "Remove" reports `None` and swaps in a fresh native input so the same
/// file can be picked again.
#[component]
pub fn FileInput(
    name: String,
    #[props(default)] label: String,
    #[props(default)] accept: String,
    #[props(default)] error: Option<String>,
    #[props(default)] on_change: EventHandler<Option<FileUpload>>,
) -> Element {
    let mut slot = use_signal(FileSlot::default);
    let mut read_error = use_signal(|| None::<String>);

    let handle_file = move |evt: FormEvent| {
        spawn(async move {
            let files = evt.files();
            let Some(f) = files.first() else {
                return;
            };
            let file_name = f.name();
            let content_type = f
                .content_type()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            match f.read_bytes().await {
                Ok(bytes) => {
                    let upload = FileUpload::new(file_name, content_type, bytes.to_vec());
                    read_error.set(None);
                    slot.write().select(upload);
                    on_change.call(slot.read().selection());
                }
                Err(_) => read_error.set(Some("Could not read the selected file.".to_string())),
            }
        });
    };

    let handle_remove = move |_| {
        slot.write().remove();
        on_change.call(slot.read().selection());
    };

    let current = slot.read().clone();
    let message = error.or_else(|| read_error());

    rsx! {
        FileInputView {
            name: name,
            label: label,
            accept: accept,
            file: current.file().cloned(),
            input_key: current.input_key(),
            error: message,
            on_select: handle_file,
            on_remove: handle_remove,
        }
    }
}

/// Stateless rendering of [`FileInput`].
#[component]
pub fn FileInputView(
    name: String,
    #[props(default)] label: String,
    #[props(default)] accept: String,
    #[props(default)] file: Option<FileUpload>,
    #[props(default)] input_key: String,
    #[props(default)] error: Option<String>,
    #[props(default)] on_select: EventHandler<FormEvent>,
    #[props(default)] on_remove: EventHandler<MouseEvent>,
) -> Element {
    let input_id = format!("{name}-file");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "file-input",
            if !label.is_empty() {
                span { class: "file-input-label", "{label}" }
            }
            div {
                class: "file-input-control",
                "data-invalid": if error.is_some() { "true" } else { "false" },
                // One-item keyed list: a new key mounts a fresh, empty input.
                for generation in std::iter::once(input_key.clone()) {
                    input {
                        key: "{generation}",
                        id: "{input_id}",
                        name: "{name}",
                        class: "file-input-native",
                        r#type: "file",
                        accept: "{accept}",
                        onchange: move |evt| on_select.call(evt),
                    }
                }
                match file {
                    Some(selected) => rsx! {
                        div { class: "file-input-selected",
                            span { class: "file-input-name", "{selected.name}" }
                            span { class: "file-input-size", "({selected.size_label()})" }
                        }
                        button {
                            class: "file-input-button",
                            r#type: "button",
                            onclick: move |evt| on_remove.call(evt),
                            "Remove"
                        }
                    },
                    None => rsx! {
                        label { class: "file-input-button", r#for: "{input_id}", "Browse" }
                    },
                }
            }
            if let Some(message) = error {
                p { class: "file-input-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::{Mutation, ScopeId, VirtualDom};
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn empty_control_offers_browse() {
        let html = dioxus_ssr::render_element(rsx! {
            FileInputView { name: "photo", label: "Photo", accept: "image/*" }
        });
        assert!(html.contains("Browse"));
        assert!(!html.contains("Remove"));
        assert!(html.contains(r#"type="file""#));
        assert!(html.contains(r#"for="photo-file""#));
    }

    #[test]
    fn selected_file_shows_name_size_and_remove() {
        let file = FileUpload::new("avatar.png", "image/png", vec![0; 1536]);
        let html = dioxus_ssr::render_element(rsx! {
            FileInputView { name: "photo", file: Some(file) }
        });
        assert!(html.contains("avatar.png"));
        assert!(html.contains("(1.5 kB)"));
        assert!(html.contains("Remove"));
        assert!(!html.contains("Browse"));
    }

    #[test]
    fn error_shows_under_the_control() {
        let html = dioxus_ssr::render_element(rsx! {
            FileInputView {
                name: "photo",
                error: Some("The photo must be an image.".to_string()),
            }
        });
        assert!(html.contains(r#"data-invalid="true""#));
        assert!(html.contains("The photo must be an image."));
    }

    #[test]
    fn stateful_control_starts_empty() {
        let html = dioxus_ssr::render_element(rsx! {
            FileInput { name: "photo", label: "Photo" }
        });
        assert!(html.contains("Browse"));
    }

    static GENERATION: AtomicU64 = AtomicU64::new(0);

    fn photo_field() -> Element {
        let generation = GENERATION.load(Ordering::SeqCst);
        rsx! {
            FileInputView { name: "photo", input_key: format!("file-input-{generation}") }
        }
    }

    fn replaces_nodes(edits: &[Mutation]) -> bool {
        edits
            .iter()
            .any(|m| matches!(m, Mutation::ReplaceWith { .. }))
    }

    #[test]
    fn new_input_key_mounts_a_fresh_native_input() {
        let mut dom = VirtualDom::new(photo_field);
        dom.rebuild_in_place();

        // Same key: the native input is kept.
        dom.mark_dirty(ScopeId::APP);
        let unchanged = dom.render_immediate_to_vec();
        assert!(!replaces_nodes(&unchanged.edits));

        // A removal bumps the key: the old input is swapped out.
        GENERATION.store(1, Ordering::SeqCst);
        dom.mark_dirty(ScopeId::APP);
        let removed = dom.render_immediate_to_vec();
        assert!(replaces_nodes(&removed.edits));
    }
}
