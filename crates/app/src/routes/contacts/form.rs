use dioxus::prelude::*;
use shared_types::{FieldErrors, FormDraft, Organization, COUNTRY_OPTIONS};

use crate::routes::fields::{DraftInput, DraftSelect};

/// The ten contact fields shared by the create and edit pages.
#[component]
pub fn ContactFields(
    draft: Signal<FormDraft>,
    errors: Signal<FieldErrors>,
    organizations: Vec<Organization>,
) -> Element {
    let organization_options: Vec<(String, String)> = organizations
        .iter()
        .map(|org| (org.id.to_string(), org.name.clone()))
        .collect();
    let country_options: Vec<(String, String)> = COUNTRY_OPTIONS
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

    rsx! {
        DraftInput { draft, errors, name: "first_name", label: "First name" }
        DraftInput { draft, errors, name: "last_name", label: "Last name" }
        DraftSelect {
            draft,
            errors,
            name: "organization_id",
            label: "Organization",
            options: organization_options,
        }
        DraftInput { draft, errors, name: "email", label: "Email", input_type: "email" }
        DraftInput { draft, errors, name: "phone", label: "Phone" }
        DraftInput { draft, errors, name: "address", label: "Address" }
        DraftInput { draft, errors, name: "city", label: "City" }
        DraftInput { draft, errors, name: "region", label: "Province/State" }
        DraftSelect {
            draft,
            errors,
            name: "country",
            label: "Country",
            options: country_options,
        }
        DraftInput { draft, errors, name: "postal_code", label: "Postal code" }
    }
}
