pub mod contacts;
pub mod dashboard;
pub mod fields;
pub mod lifecycle;
pub mod not_found;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdLayoutDashboard, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{FilterKey, FilterQuery};

use contacts::{ContactCreate, ContactEdit, ContactList};
use dashboard::Dashboard;
use not_found::NotFound;
use users::{UserCreate, UserEdit, UserList};

/// Application routes.
///
/// Listing routes carry their filters in the query string; `remember=forget`
/// marks a listing whose filters were all cleared on purpose.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/contacts?:search&:trashed&:remember")]
    ContactList {
        search: Option<String>,
        trashed: Option<String>,
        remember: Option<String>,
    },
    #[route("/contacts/create")]
    ContactCreate {},
    #[route("/contacts/:id/edit")]
    ContactEdit { id: i64 },
    #[route("/users?:search&:role&:trashed&:remember")]
    UserList {
        search: Option<String>,
        role: Option<String>,
        trashed: Option<String>,
        remember: Option<String>,
    },
    #[route("/users/create")]
    UserCreate {},
    #[route("/users/:id/edit")]
    UserEdit { id: i64 },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Unfiltered contacts listing.
    pub fn contacts() -> Self {
        Route::contacts_with(&FilterQuery::default())
    }

    pub fn contacts_with(query: &FilterQuery) -> Self {
        Route::ContactList {
            search: query.get(FilterKey::Search),
            trashed: query.get(FilterKey::Trashed),
            remember: query.remember(),
        }
    }

    /// Unfiltered users listing.
    pub fn users() -> Self {
        Route::users_with(&FilterQuery::default())
    }

    pub fn users_with(query: &FilterQuery) -> Self {
        Route::UserList {
            search: query.get(FilterKey::Search),
            role: query.get(FilterKey::Role),
            trashed: query.get(FilterKey::Trashed),
            remember: query.remember(),
        }
    }
}

/// Panel shell: brand, main navigation and the routed page.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let on_contacts = matches!(
        route,
        Route::ContactList { .. } | Route::ContactCreate {} | Route::ContactEdit { .. }
    );
    let on_users = matches!(
        route,
        Route::UserList { .. } | Route::UserCreate {} | Route::UserEdit { .. }
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "app-nav",
                div { class: "app-brand", "Panel" }
                Link {
                    to: Route::Dashboard {},
                    class: if matches!(route, Route::Dashboard {}) { "app-nav-link active" } else { "app-nav-link" },
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                    "Dashboard"
                }
                Link {
                    to: Route::contacts(),
                    class: if on_contacts { "app-nav-link active" } else { "app-nav-link" },
                    Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                    "Contacts"
                }
                Link {
                    to: Route::users(),
                    class: if on_users { "app-nav-link active" } else { "app-nav-link" },
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                    "Users"
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
