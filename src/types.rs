use std::fmt::{Display, Formatter};

/// Kind of item fetched from the detail endpoint.
///
/// The mode selects both the path segment (`/vmalert/api/v1/rule` vs
/// `/vmalert/api/v1/alert`) and the name of the identifier parameter
/// (`rule_id` vs `alert_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemMode {
    Rule,
    Alert,
}

impl ItemMode {
    /// The string substituted verbatim into the URL path and parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemMode::Rule => "rule",
            ItemMode::Alert => "alert",
        }
    }
}

impl Display for ItemMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for the rule-group listing endpoint.
///
/// Values are interpolated into the URL exactly as given: no trimming,
/// case-folding, or percent-encoding. Supply pre-sanitized tokens.
///
/// # Example
///
/// ```rust
/// use vmalert_explore_api::GroupsQuery;
///
/// let query = GroupsQuery::new()
///     .with_search("cpu")
///     .with_resource_type("alert")
///     .with_state("firing")
///     .with_state("pending")
///     .with_group_limit(20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsQuery {
    /// Free-text search over group and rule names
    pub search: String,

    /// Rule type filter, e.g. "alert" or "record"
    pub resource_type: String,

    /// State filters, rendered as one comma-joined parameter value.
    /// An empty list renders as `state=` (present but empty).
    pub states: Vec<String>,

    /// Maximum number of groups to return. Rendered as-is, including
    /// zero and negative values; range validation is the caller's job.
    pub group_limit: i64,
}

impl GroupsQuery {
    /// Create an empty query (no search, no type, no states, limit 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    /// Set the rule type filter
    pub fn with_resource_type(mut self, resource_type: &str) -> Self {
        self.resource_type = resource_type.to_string();
        self
    }

    /// Append a state filter token, e.g. "firing", "pending" or "inactive"
    ///
    /// States are rendered in insertion order.
    pub fn with_state(mut self, state: &str) -> Self {
        self.states.push(state.to_string());
        self
    }

    /// Replace the state filter list
    pub fn with_states(mut self, states: Vec<String>) -> Self {
        self.states = states;
        self
    }

    /// Set the group limit
    pub fn with_group_limit(mut self, limit: i64) -> Self {
        self.group_limit = limit;
        self
    }
}
