use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::FormDraft;

/// Text fields of the user forms. The photo travels next to the draft.
pub const USER_FIELDS: &[&str] = &["first_name", "last_name", "email", "password", "owner"];

/// Form field name of the user photo.
pub const PHOTO_FIELD: &str = "photo";

/// The owner flag as the edit form's select encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerChoice {
    Yes,
    #[default]
    No,
}

impl OwnerChoice {
    pub const OPTIONS: [(OwnerChoice, &'static str); 2] =
        [(OwnerChoice::Yes, "Yes"), (OwnerChoice::No, "No")];

    pub fn from_bool(owner: bool) -> Self {
        if owner {
            OwnerChoice::Yes
        } else {
            OwnerChoice::No
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            OwnerChoice::Yes => "1",
            OwnerChoice::No => "0",
        }
    }

    /// Anything but `"1"` reads as not an owner.
    pub fn from_param(value: &str) -> Self {
        if value == "1" {
            OwnerChoice::Yes
        } else {
            OwnerChoice::No
        }
    }
}

/// User record as served by the panel backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "crate::lifecycle::deserialize_deleted_at")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Draft for the edit form. The password starts empty; the backend keeps
    /// the current one when it is submitted blank.
    pub fn draft(&self) -> FormDraft {
        FormDraft::seeded(USER_FIELDS, |name| match name {
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "email" => Some(self.email.clone()),
            "owner" => Some(OwnerChoice::from_bool(self.owner).as_param().to_string()),
            _ => None,
        })
    }
}

/// Empty draft for the user create form; the owner select starts at "No".
pub fn new_user_draft() -> FormDraft {
    FormDraft::seeded(USER_FIELDS, |name| {
        (name == "owner").then(|| OwnerChoice::No.as_param().to_string())
    })
}
