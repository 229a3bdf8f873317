use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field name to message, exactly as reported by the panel backend.
pub type FieldErrors = HashMap<String, String>;

/// Transient, not-yet-submitted field values of a form.
///
/// Holds one entry per declared field for the whole lifetime of the form.
/// Values never go missing: an absent record value seeds `""`, and setting
/// a field the form did not declare is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
}

impl FormDraft {
    /// Empty draft for a create form.
    pub fn new(fields: &[&str]) -> Self {
        Self::seeded(fields, |_| None)
    }

    /// Draft seeded from an existing record; `seed` returns `None` for
    /// attributes the record does not carry.
    pub fn seeded(fields: &[&str], seed: impl Fn(&str) -> Option<String>) -> Self {
        let values = fields
            .iter()
            .map(|name| (name.to_string(), seed(name).unwrap_or_default()))
            .collect();
        Self { values }
    }

    /// Current value of a field, `""` for unknown names.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Update a declared field. Returns `false` when `name` was not declared.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn declares(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every declared field with its value, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Busy flag guarding a form submission.
///
/// `begin` flips the flag synchronously and refuses a second submission
/// while one is pending; `settle` clears it whatever the outcome was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    busy: bool,
}

impl Submission {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn settle<T, E>(&mut self, result: Result<T, E>) -> Result<T, E> {
        self.busy = false;
        result
    }
}
