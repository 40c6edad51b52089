//! URL construction for the vmalert explore endpoints.
//!
//! Pure, stateless string assembly: each function maps a server address and a
//! parameter bag to a complete request URL. Parameter values are interpolated
//! verbatim, without percent-encoding, for wire compatibility with the server;
//! callers must supply pre-sanitized tokens (identifiers and state names from
//! a fixed vocabulary, not arbitrary user input).

use crate::types::{GroupsQuery, ItemMode};

const API_PATH: &str = "/vmalert/api/v1";

/// Strip trailing slashes so the joined URL has exactly one separator
/// between the server address and the API path.
fn base(server: &str) -> &str {
    server.trim_end_matches('/')
}

/// Build the URL for listing alerting rule groups.
///
/// Parameter order is part of the contract: `datasource_type` (always
/// `prometheus`), `search`, `type`, `state`, `group_limit`. States render as
/// a single comma-joined value; an empty list renders as `state=`.
///
/// # Example
///
/// ```rust
/// use vmalert_explore_api::{groups_url, GroupsQuery};
///
/// let query = GroupsQuery::new()
///     .with_search("foo")
///     .with_resource_type("alert")
///     .with_state("firing")
///     .with_group_limit(10);
/// assert_eq!(
///     groups_url("http://localhost:8880", &query),
///     "http://localhost:8880/vmalert/api/v1/rules?datasource_type=prometheus&search=foo&type=alert&state=firing&group_limit=10"
/// );
/// ```
pub fn groups_url(server: &str, query: &GroupsQuery) -> String {
    format!(
        "{}{API_PATH}/rules?datasource_type=prometheus&search={}&type={}&state={}&group_limit={}",
        base(server),
        query.search,
        query.resource_type,
        query.states.join(","),
        query.group_limit,
    )
}

/// Build the URL for fetching a single rule or alert.
///
/// The mode string appears both as the path segment and as the prefix of the
/// identifier parameter (`rule_id` / `alert_id`).
pub fn item_url(server: &str, group_id: &str, item_id: &str, mode: ItemMode) -> String {
    let mode = mode.as_str();
    format!(
        "{}{API_PATH}/{mode}?group_id={group_id}&{mode}_id={item_id}",
        base(server),
    )
}

/// Build the URL for fetching a single rule group.
pub fn group_url(server: &str, group_id: &str) -> String {
    format!("{}{API_PATH}/group?group_id={group_id}", base(server))
}

/// Build the URL for fetching the notifier configuration. No query string.
pub fn notifiers_url(server: &str) -> String {
    format!("{}{API_PATH}/notifiers", base(server))
}
