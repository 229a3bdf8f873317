use dioxus::prelude::*;
use shared_ui::components::{PageHeader, PageTitle};

use crate::routes::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Dashboard" }
            }
            p { "Manage the people your organization works with." }
            ul {
                li { Link { to: Route::contacts(), "Contacts" } }
                li { Link { to: Route::users(), "Users" } }
            }
        }
    }
}
