use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::FormDraft;

/// Fields submitted by the contact create and edit forms.
pub const CONTACT_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "organization_id",
    "email",
    "phone",
    "address",
    "city",
    "region",
    "country",
    "postal_code",
];

/// Countries offered by the contact form's country select.
pub const COUNTRY_OPTIONS: &[(&str, &str)] = &[("CA", "Canada"), ("US", "United States")];

/// Organization a contact may belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

/// Contact record as served by the panel backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default, deserialize_with = "crate::lifecycle::deserialize_deleted_at")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Contact {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Draft for the edit form, one entry per [`CONTACT_FIELDS`] name.
    pub fn draft(&self) -> FormDraft {
        FormDraft::seeded(CONTACT_FIELDS, |name| match name {
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "organization_id" => self.organization_id.map(|id| id.to_string()),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "address" => self.address.clone(),
            "city" => self.city.clone(),
            "region" => self.region.clone(),
            "country" => self.country.clone(),
            "postal_code" => self.postal_code.clone(),
            _ => None,
        })
    }
}

/// Empty draft for the contact create form.
pub fn new_contact_draft() -> FormDraft {
    FormDraft::new(CONTACT_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::RecordLifecycle;

    #[test]
    fn create_draft_declares_all_contact_fields() {
        let draft = new_contact_draft();
        assert_eq!(draft.len(), CONTACT_FIELDS.len());
        assert!(draft.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn contact_deserializes_sparse_backend_json() {
        let json = r#"{"id": 7, "first_name": "Ada", "last_name": "Lovelace", "city": null, "organization_id": 3, "deleted_at": null}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name(), "Ada Lovelace");
        assert_eq!(contact.city, None);
        assert_eq!(contact.deleted_at, None);

        let draft = contact.draft();
        assert_eq!(draft.get("organization_id"), "3");
        assert_eq!(draft.get("city"), "");
        assert_eq!(draft.len(), CONTACT_FIELDS.len());
    }

    #[test]
    fn deleted_at_parses_timestamps() {
        let json = r#"{"id": 1, "first_name": "A", "last_name": "B", "deleted_at": "2024-03-01T10:00:00Z"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(contact.deleted_at.is_some());
    }

    #[test]
    fn deleted_at_in_database_format_still_decodes() {
        let json = r#"{"id": 1, "first_name": "A", "last_name": "B", "deleted_at": "2024-03-01 10:00:00"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert!(RecordLifecycle::from_deleted_at(contact.deleted_at).is_trashed());
    }
}
