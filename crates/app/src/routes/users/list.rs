use dioxus::prelude::*;
use shared_types::{FilterKey, FilterQuery, RecordLifecycle, User};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageTitle,
    SearchFilter,
};

use crate::routes::Route;

/// Filters understood by the users listing.
const USER_FILTERS: [FilterKey; 3] = [FilterKey::Role, FilterKey::Search, FilterKey::Trashed];

#[component]
pub fn UserList(
    search: Option<String>,
    role: Option<String>,
    trashed: Option<String>,
    remember: Option<String>,
) -> Element {
    let query = FilterQuery::from_route(role, search, trashed, remember);
    let defaults = query.defaults_for(&USER_FILTERS);

    let users = use_resource(use_reactive!(|query| async move {
        server::api::list_users(query).await
    }));

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Users" }
            }
            div { class: "listing-toolbar",
                SearchFilter {
                    defaults,
                    on_sync: move |query: FilterQuery| {
                        navigator().replace(Route::users_with(&query));
                    },
                }
                Link { to: Route::UserCreate {},
                    Button { variant: ButtonVariant::Primary, "Create User" }
                }
            }
            match &*users.read() {
                Some(Ok(page)) => rsx! {
                    UserTable { users: page.data.clone() }
                    if let Some(summary) = page.partial_summary("users") {
                        p { class: "listing-summary", "{summary}" }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "load-error", "Could not load users: {e}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading…" }
                },
            }
        }
    }
}

#[component]
fn UserTable(users: Vec<User>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Role" }
            }
            DataTableBody {
                if users.is_empty() {
                    DataTableEmpty { columns: 3, "No users found." }
                }
                for user in users {
                    UserRow { key: "{user.id}", user }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User) -> Element {
    let id = user.id;
    let trashed = RecordLifecycle::from_deleted_at(user.deleted_at).is_trashed();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::UserEdit { id });
            },
            DataTableCell {
                if let Some(url) = user.photo.clone() {
                    img { class: "user-thumb", src: "{url}", alt: "" }
                }
                "{user.name()}"
                if trashed {
                    Badge { variant: BadgeVariant::Destructive, "Deleted" }
                }
            }
            DataTableCell { "{user.email}" }
            DataTableCell {
                if user.owner {
                    Badge { variant: BadgeVariant::Success, "Owner" }
                } else {
                    Badge { "User" }
                }
            }
        }
    }
}
