//! # vmalert Explore API
//!
//! A Rust client library for the read-only explore endpoints of
//! [vmalert](https://docs.victoriametrics.com/vmalert/): listing alerting
//! rule groups, fetching individual rules/alerts, and reading notifier
//! configuration.
//!
//! ## Features
//!
//! - Pure URL builders for the four explore endpoints, reproducing the
//!   server's exact path and parameter contract
//! - Builder pattern for constructing group-listing queries
//! - Optional thin HTTP client that issues the GET and returns the raw body
//!
//! The URL builders interpolate values verbatim (no percent-encoding), so
//! callers are expected to pass pre-sanitized identifiers and state tokens.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vmalert_explore_api::{ExploreAlertsClient, GroupsQuery, ItemMode};
//! use url::Url;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExploreAlertsClient::new(
//!         Url::parse("http://localhost:8880")?,
//!         Duration::from_secs(10),
//!     )?;
//!
//!     let query = GroupsQuery::new()
//!         .with_search("cpu")
//!         .with_resource_type("alert")
//!         .with_state("firing")
//!         .with_group_limit(20);
//!
//!     let groups = client.groups(&query).await?;
//!     let alert = client.item("g1", "a1", ItemMode::Alert).await?;
//!     println!("{groups}\n{alert}");
//!     Ok(())
//! }
//! ```

mod client;
mod errors;
mod types;
mod urls;

pub use client::ExploreAlertsClient;
pub use errors::{ExploreApiError, Result};
pub use types::{GroupsQuery, ItemMode};
pub use urls::{group_url, groups_url, item_url, notifiers_url};
