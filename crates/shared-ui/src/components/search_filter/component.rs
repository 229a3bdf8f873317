use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronDown;
use dioxus_free_icons::Icon;
use shared_types::{
    FilterBar, FilterDefaults, FilterKey, FilterQuery, RoleFilter, TrashedFilter,
};

/// Search box with a filter popover for listing pages.
///
/// Seeds its values from `defaults`, then calls `on_sync` exactly once per
/// committed change (never on mount) with the query the listing should be
/// reloaded with. When the page is rendered again with defaults that no
/// longer describe the bar's values, the bar reseeds from them without
/// syncing. The role select only appears when `defaults` declares `role`.
#[component]
pub fn SearchFilter(
    defaults: FilterDefaults,
    on_sync: EventHandler<FilterQuery>,
    #[props(default = "Search…".to_string())] placeholder: String,
) -> Element {
    let show_role = defaults.declares(FilterKey::Role);
    let mut bar = use_signal(|| FilterBar::new(&defaults));

    use_effect(use_reactive!(|defaults| {
        if !bar.peek().matches(&defaults) {
            bar.write().reseed(&defaults);
        }
    }));

    let mut change = move |key: FilterKey, value: String| {
        let synced = bar.write().change(key, value);
        if let Some(query) = synced {
            on_sync.call(query);
        }
    };

    let reset = move |_: MouseEvent| {
        let synced = bar.write().reset();
        if let Some(query) = synced {
            on_sync.call(query);
        }
    };

    let opened = bar.read().is_open();
    let current = bar.read().values().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-filter",
            div { class: "search-filter-box",
                div { class: "search-filter-anchor",
                    if opened {
                        div {
                            class: "search-filter-backdrop",
                            onclick: move |_| bar.write().close(),
                        }
                    }
                    button {
                        class: "search-filter-toggle",
                        r#type: "button",
                        "aria-expanded": if opened { "true" } else { "false" },
                        onclick: move |_| bar.write().open(),
                        span { "Filter" }
                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                    }
                    div {
                        class: "search-filter-popover",
                        hidden: !opened,
                        if show_role {
                            label { class: "search-filter-label", r#for: "role", "Role:" }
                            select {
                                id: "role",
                                name: "role",
                                class: "search-filter-select",
                                value: "{current.role}",
                                onchange: move |e| change(FilterKey::Role, e.value()),
                                for (role, text) in RoleFilter::OPTIONS {
                                    option {
                                        value: role.as_param(),
                                        selected: current.role == role.as_param(),
                                        "{text}"
                                    }
                                }
                            }
                        }
                        label { class: "search-filter-label", r#for: "trashed", "Trashed:" }
                        select {
                            id: "trashed",
                            name: "trashed",
                            class: "search-filter-select",
                            value: "{current.trashed}",
                            onchange: move |e| change(FilterKey::Trashed, e.value()),
                            for (trashed, text) in TrashedFilter::OPTIONS {
                                option {
                                    value: trashed.as_param(),
                                    selected: current.trashed() == trashed,
                                    "{text}"
                                }
                            }
                        }
                    }
                }
                input {
                    class: "search-filter-input",
                    r#type: "text",
                    name: "search",
                    autocomplete: "off",
                    placeholder: "{placeholder}",
                    value: "{current.search}",
                    oninput: move |e| change(FilterKey::Search, e.value()),
                }
            }
            button {
                class: "search-filter-reset",
                r#type: "button",
                onclick: reset,
                "Reset"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::{ScopeId, VirtualDom};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn render(defaults: FilterDefaults) -> String {
        dioxus_ssr::render_element(rsx! {
            SearchFilter { defaults: defaults, on_sync: move |_| {} }
        })
    }

    #[test]
    fn role_select_follows_declared_defaults() {
        let users = FilterDefaults::new()
            .declare(FilterKey::Role, None)
            .declare(FilterKey::Search, None)
            .declare(FilterKey::Trashed, None);
        let html = render(users);
        assert!(html.contains(r#"name="role""#));
        assert!(html.contains("Owner"));

        let contacts = FilterDefaults::new()
            .declare(FilterKey::Search, None)
            .declare(FilterKey::Trashed, None);
        let html = render(contacts);
        assert!(!html.contains(r#"name="role""#));
        assert!(html.contains(r#"name="search""#));
        assert!(html.contains(r#"name="trashed""#));
    }

    #[test]
    fn seeds_values_from_defaults() {
        let defaults = FilterDefaults::new()
            .declare(FilterKey::Search, Some("acme".into()))
            .declare(FilterKey::Trashed, Some("only".into()));
        let html = render(defaults);
        assert!(html.contains(r#"value="acme""#));
        assert!(html.contains("Only Trashed"));
    }

    #[test]
    fn popover_starts_closed() {
        let html = render(FilterDefaults::new().declare(FilterKey::Search, None));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("search-filter-backdrop"));
        assert!(html.contains("Reset"));
    }

    static SEARCH_IN_ROUTE: AtomicBool = AtomicBool::new(true);
    static SYNC_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn contacts_listing() -> Element {
        let search = SEARCH_IN_ROUTE
            .load(Ordering::SeqCst)
            .then(|| "ada".to_string());
        let defaults = FilterDefaults::new()
            .declare(FilterKey::Search, search)
            .declare(FilterKey::Trashed, None);
        rsx! {
            SearchFilter {
                defaults,
                on_sync: move |_| {
                    SYNC_CALLS.fetch_add(1, Ordering::SeqCst);
                },
            }
        }
    }

    #[test]
    fn mount_and_new_route_defaults_do_not_sync() {
        let mut dom = VirtualDom::new(contacts_listing);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains(r#"value="ada""#));
        assert_eq!(SYNC_CALLS.load(Ordering::SeqCst), 0);

        SEARCH_IN_ROUTE.store(false, Ordering::SeqCst);
        dom.mark_dirty(ScopeId::APP);
        let _ = dom.render_immediate_to_vec();
        assert_eq!(SYNC_CALLS.load(Ordering::SeqCst), 0);
    }
}
