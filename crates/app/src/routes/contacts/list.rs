use dioxus::prelude::*;
use shared_types::{Contact, FilterKey, FilterQuery, RecordLifecycle};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageTitle,
    SearchFilter,
};

use crate::routes::Route;

/// Filters understood by the contacts listing.
const CONTACT_FILTERS: [FilterKey; 2] = [FilterKey::Search, FilterKey::Trashed];

#[component]
pub fn ContactList(
    search: Option<String>,
    trashed: Option<String>,
    remember: Option<String>,
) -> Element {
    let query = FilterQuery::from_route(None, search, trashed, remember);
    let defaults = query.defaults_for(&CONTACT_FILTERS);

    let contacts = use_resource(use_reactive!(|query| async move {
        server::api::list_contacts(query).await
    }));

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Contacts" }
            }
            div { class: "listing-toolbar",
                SearchFilter {
                    defaults,
                    on_sync: move |query: FilterQuery| {
                        navigator().replace(Route::contacts_with(&query));
                    },
                }
                Link { to: Route::ContactCreate {},
                    Button { variant: ButtonVariant::Primary, "Create Contact" }
                }
            }
            match &*contacts.read() {
                Some(Ok(page)) => rsx! {
                    ContactTable { contacts: page.data.clone() }
                    if let Some(summary) = page.partial_summary("contacts") {
                        p { class: "listing-summary", "{summary}" }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "load-error", "Could not load contacts: {e}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading…" }
                },
            }
        }
    }
}

#[component]
fn ContactTable(contacts: Vec<Contact>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Organization" }
                DataTableColumn { "City" }
                DataTableColumn { "Phone" }
            }
            DataTableBody {
                if contacts.is_empty() {
                    DataTableEmpty { columns: 4, "No contacts found." }
                }
                for contact in contacts {
                    ContactRow { key: "{contact.id}", contact }
                }
            }
        }
    }
}

#[component]
fn ContactRow(contact: Contact) -> Element {
    let id = contact.id;
    let trashed = RecordLifecycle::from_deleted_at(contact.deleted_at).is_trashed();
    let organization = contact
        .organization
        .as_ref()
        .map(|org| org.name.clone())
        .unwrap_or_default();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::ContactEdit { id });
            },
            DataTableCell {
                "{contact.name()}"
                if trashed {
                    Badge { variant: BadgeVariant::Destructive, "Deleted" }
                }
            }
            DataTableCell { "{organization}" }
            DataTableCell { {contact.city.clone().unwrap_or_default()} }
            DataTableCell { {contact.phone.clone().unwrap_or_default()} }
        }
    }
}
