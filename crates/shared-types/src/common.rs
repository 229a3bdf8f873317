use serde::{Deserialize, Serialize};

/// Page of listing rows as returned by the panel backend's paginator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: i64,
    #[serde(default = "first_page")]
    pub last_page: i64,
    #[serde(default)]
    pub total: i64,
}

fn first_page() -> i64 {
    1
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Footer line for a listing that only shows part of its rows, e.g.
    /// "Showing 10 of 25 users.". `None` when every row is shown.
    pub fn partial_summary(&self, noun: &str) -> Option<String> {
        self.has_next()
            .then(|| format!("Showing {} of {} {noun}.", self.data.len(), self.total))
    }
}
