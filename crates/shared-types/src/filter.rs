use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query key sent when every filter is empty.
pub const SENTINEL_KEY: &str = "remember";
/// Value paired with [`SENTINEL_KEY`].
pub const SENTINEL_VALUE: &str = "forget";

/// Filter vocabulary understood by the listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Role,
    Search,
    Trashed,
}

impl FilterKey {
    pub const ALL: [FilterKey; 3] = [FilterKey::Role, FilterKey::Search, FilterKey::Trashed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Role => "role",
            FilterKey::Search => "search",
            FilterKey::Trashed => "trashed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "role" => Some(FilterKey::Role),
            "search" => Some(FilterKey::Search),
            "trashed" => Some(FilterKey::Trashed),
            _ => None,
        }
    }
}

/// Soft-delete visibility of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrashedFilter {
    #[default]
    Unset,
    With,
    Only,
}

impl TrashedFilter {
    pub const OPTIONS: [(TrashedFilter, &'static str); 3] = [
        (TrashedFilter::Unset, ""),
        (TrashedFilter::With, "With Trashed"),
        (TrashedFilter::Only, "Only Trashed"),
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            TrashedFilter::Unset => "",
            TrashedFilter::With => "with",
            TrashedFilter::Only => "only",
        }
    }

    /// Anything other than `with`/`only` reads as unset.
    pub fn from_param(value: &str) -> Self {
        match value {
            "with" => TrashedFilter::With,
            "only" => TrashedFilter::Only,
            _ => TrashedFilter::Unset,
        }
    }
}

/// Role restriction of the users listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    Unset,
    User,
    Owner,
}

impl RoleFilter {
    pub const OPTIONS: [(RoleFilter, &'static str); 3] = [
        (RoleFilter::Unset, ""),
        (RoleFilter::User, "User"),
        (RoleFilter::Owner, "Owner"),
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            RoleFilter::Unset => "",
            RoleFilter::User => "user",
            RoleFilter::Owner => "owner",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "user" => RoleFilter::User,
            "owner" => RoleFilter::Owner,
            _ => RoleFilter::Unset,
        }
    }
}

/// Filter defaults handed to a filter bar by its listing page.
///
/// A key being *declared* is what matters for which controls are shown: a
/// declared key with no value still gets its control. This lets one bar
/// serve listings with different vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterDefaults {
    declared: BTreeMap<FilterKey, Option<String>>,
}

impl FilterDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, key: FilterKey, value: Option<String>) -> Self {
        self.declared.insert(key, value);
        self
    }

    pub fn declares(&self, key: FilterKey) -> bool {
        self.declared.contains_key(&key)
    }

    pub fn value(&self, key: FilterKey) -> Option<&str> {
        self.declared.get(&key).and_then(|v| v.as_deref())
    }
}

/// Draft values of a filter bar. Every known key is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterValues {
    pub role: String,
    pub search: String,
    pub trashed: String,
}

impl FilterValues {
    pub fn from_defaults(defaults: &FilterDefaults) -> Self {
        let seed = |key| defaults.value(key).unwrap_or_default().to_string();
        Self {
            role: seed(FilterKey::Role),
            search: seed(FilterKey::Search),
            trashed: TrashedFilter::from_param(&seed(FilterKey::Trashed))
                .as_param()
                .to_string(),
        }
    }

    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Role => &self.role,
            FilterKey::Search => &self.search,
            FilterKey::Trashed => &self.trashed,
        }
    }

    /// Update one key. `trashed` is normalized to `""`, `with` or `only`.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FilterKey::Role => self.role = value,
            FilterKey::Search => self.search = value,
            FilterKey::Trashed => {
                self.trashed = TrashedFilter::from_param(&value).as_param().to_string()
            }
        }
    }

    pub fn trashed(&self) -> TrashedFilter {
        TrashedFilter::from_param(&self.trashed)
    }

    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|k| self.get(*k).is_empty())
    }

    /// Query parameters for the current values: the non-empty subset, or
    /// the sentinel alone when everything is empty.
    pub fn to_query(&self) -> FilterQuery {
        let params: Vec<(FilterKey, String)> = FilterKey::ALL
            .iter()
            .filter(|k| !self.get(**k).is_empty())
            .map(|k| (*k, self.get(*k).to_string()))
            .collect();
        if params.is_empty() {
            FilterQuery::Forget
        } else {
            FilterQuery::Params(params)
        }
    }
}

/// Query string content produced by a filter synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterQuery {
    Params(Vec<(FilterKey, String)>),
    /// Every filter was explicitly cleared.
    Forget,
}

impl Default for FilterQuery {
    fn default() -> Self {
        FilterQuery::Params(Vec::new())
    }
}

impl FilterQuery {
    /// Rebuild a query from route parameters. The sentinel wins over any
    /// stray filter values; empty values are dropped.
    pub fn from_route(
        role: Option<String>,
        search: Option<String>,
        trashed: Option<String>,
        remember: Option<String>,
    ) -> Self {
        if remember.as_deref() == Some(SENTINEL_VALUE) {
            return FilterQuery::Forget;
        }
        let params = [
            (FilterKey::Role, role),
            (FilterKey::Search, search),
            (FilterKey::Trashed, trashed),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (k, v)))
        .collect();
        FilterQuery::Params(params)
    }

    pub fn get(&self, key: FilterKey) -> Option<String> {
        match self {
            FilterQuery::Params(params) => params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone()),
            FilterQuery::Forget => None,
        }
    }

    pub fn is_forget(&self) -> bool {
        matches!(self, FilterQuery::Forget)
    }

    /// Sentinel parameter value for route construction.
    pub fn remember(&self) -> Option<String> {
        self.is_forget().then(|| SENTINEL_VALUE.to_string())
    }

    /// Key/value pairs in wire form.
    pub fn pairs(&self) -> Vec<(String, String)> {
        match self {
            FilterQuery::Params(params) => params
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.clone()))
                .collect(),
            FilterQuery::Forget => vec![(SENTINEL_KEY.to_string(), SENTINEL_VALUE.to_string())],
        }
    }

    /// Filter defaults for a listing with the given vocabulary.
    pub fn defaults_for(&self, vocabulary: &[FilterKey]) -> FilterDefaults {
        vocabulary
            .iter()
            .fold(FilterDefaults::new(), |d, k| d.declare(*k, self.get(*k)))
    }
}

/// Decides when a filter bar must re-issue its navigation.
///
/// The first observation is the mount and never syncs; every later
/// observation is a committed change and yields exactly one query.
#[derive(Debug, Clone, Default)]
pub struct FilterSync {
    previous: Option<FilterValues>,
}

impl FilterSync {
    pub fn observe(&mut self, values: &FilterValues) -> Option<FilterQuery> {
        let mounted = self.previous.replace(values.clone()).is_some();
        mounted.then(|| values.to_query())
    }
}

/// Complete state of a filter bar: draft values, popover visibility and the
/// sync state machine.
///
/// Transitions that commit values return the query to navigate with. The
/// bar is seeded once on construction, which counts as the mount.
#[derive(Debug, Clone)]
pub struct FilterBar {
    values: FilterValues,
    opened: bool,
    sync: FilterSync,
}

impl FilterBar {
    pub fn new(defaults: &FilterDefaults) -> Self {
        let values = FilterValues::from_defaults(defaults);
        let mut sync = FilterSync::default();
        sync.observe(&values);
        Self {
            values,
            opened: false,
            sync,
        }
    }

    pub fn values(&self) -> &FilterValues {
        &self.values
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn open(&mut self) {
        self.opened = true;
    }

    pub fn close(&mut self) {
        self.opened = false;
    }

    /// Update one value. Any change closes the popover.
    pub fn change(&mut self, key: FilterKey, value: impl Into<String>) -> Option<FilterQuery> {
        self.values.set(key, value);
        self.opened = false;
        self.sync.observe(&self.values)
    }

    /// Clear every value in a single update.
    pub fn reset(&mut self) -> Option<FilterQuery> {
        self.values = FilterValues::default();
        self.sync.observe(&self.values)
    }

    /// Whether `defaults` describe the values already shown. False after a
    /// navigation the bar did not cause.
    pub fn matches(&self, defaults: &FilterDefaults) -> bool {
        FilterValues::from_defaults(defaults) == self.values
    }

    /// Start over from `defaults`, as if freshly mounted. Never syncs.
    pub fn reseed(&mut self, defaults: &FilterDefaults) {
        *self = Self::new(defaults);
    }
}
