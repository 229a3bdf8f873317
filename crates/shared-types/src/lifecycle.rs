use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Soft-delete state of a record, derived from its `deleted_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLifecycle {
    Active,
    Trashed { deleted_at: DateTime<Utc> },
}

impl RecordLifecycle {
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(deleted_at) => RecordLifecycle::Trashed { deleted_at },
            None => RecordLifecycle::Active,
        }
    }

    pub fn is_trashed(&self) -> bool {
        matches!(self, RecordLifecycle::Trashed { .. })
    }

    /// The delete control only exists for live records.
    pub fn shows_delete(&self) -> bool {
        !self.is_trashed()
    }

    /// The "has been deleted" notice with its restore link.
    pub fn shows_restore_notice(&self) -> bool {
        self.is_trashed()
    }
}

/// Read a `deleted_at` column leniently. Only its presence matters, so a
/// timestamp in a format we do not know still marks the record as deleted
/// (at the epoch). Blank strings count as absent.
pub fn deserialize_deleted_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_timestamp(s).unwrap_or_default()))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|at| at.and_utc())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|at| at.and_utc())
        })
}

/// Destructive record actions that need an explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Delete,
    Restore,
}

impl LifecycleAction {
    fn verb(&self) -> &'static str {
        match self {
            LifecycleAction::Delete => "delete",
            LifecycleAction::Restore => "restore",
        }
    }

    /// Confirmation question naming the action and its target, e.g.
    /// "Are you sure you want to delete this user?".
    pub fn confirmation(&self, entity: &str) -> String {
        format!("Are you sure you want to {} this {}?", self.verb(), entity)
    }

    /// Button text, e.g. "Delete User" or "Restore".
    pub fn label(&self, entity: &str) -> String {
        match self {
            LifecycleAction::Delete => format!("Delete {}", capitalize(entity)),
            LifecycleAction::Restore => "Restore".to_string(),
        }
    }

    /// Notice shown above a soft-deleted record.
    pub fn trashed_notice(entity: &str) -> String {
        format!("This {entity} has been deleted.")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}
