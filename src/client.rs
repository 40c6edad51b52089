use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{ExploreApiError, Result};
use crate::types::{GroupsQuery, ItemMode};
use crate::urls;

/// Client for the read-only vmalert explore endpoints
///
/// All methods issue a GET against the corresponding endpoint and return the
/// raw response body. Decoding the body is left to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use vmalert_explore_api::{ExploreAlertsClient, GroupsQuery};
/// use url::Url;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ExploreAlertsClient::new(
///         Url::parse("http://localhost:8880")?,
///         Duration::from_secs(10),
///     )?;
///
///     let query = GroupsQuery::new()
///         .with_resource_type("alert")
///         .with_state("firing")
///         .with_group_limit(20);
///
///     let body = client.groups(&query).await?;
///     println!("{body}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ExploreAlertsClient {
    client: ClientWithMiddleware,
    server_url: Url,
}

impl ExploreAlertsClient {
    /// Create a new explore API client
    ///
    /// # Arguments
    ///
    /// * `server_url` - Base URL of the vmalert instance (e.g., `http://localhost:8880`)
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(server_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ExploreApiError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Ok(Self { client, server_url })
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// This allows you to add custom middleware (retry, logging, etc.)
    pub fn with_client(client: ClientWithMiddleware, server_url: Url) -> Self {
        Self { client, server_url }
    }

    /// List alerting rule groups matching the given query
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - vmalert returns a non-success status code
    #[instrument(name = "ExploreAlertsClient::groups", skip_all)]
    pub async fn groups(&self, query: &GroupsQuery) -> Result<String> {
        self.get(urls::groups_url(self.server_url.as_str(), query))
            .await
    }

    /// Fetch a single rule or alert by group and item identifier
    #[instrument(name = "ExploreAlertsClient::item", skip(self))]
    pub async fn item(&self, group_id: &str, item_id: &str, mode: ItemMode) -> Result<String> {
        self.get(urls::item_url(
            self.server_url.as_str(),
            group_id,
            item_id,
            mode,
        ))
        .await
    }

    /// Fetch a single rule group by identifier
    #[instrument(name = "ExploreAlertsClient::group", skip(self))]
    pub async fn group(&self, group_id: &str) -> Result<String> {
        self.get(urls::group_url(self.server_url.as_str(), group_id))
            .await
    }

    /// Fetch the notifier configuration
    #[instrument(name = "ExploreAlertsClient::notifiers", skip_all)]
    pub async fn notifiers(&self) -> Result<String> {
        self.get(urls::notifiers_url(self.server_url.as_str())).await
    }

    /// Get the base server URL
    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    async fn get(&self, url: String) -> Result<String> {
        debug!(url = %url, "Querying vmalert");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(ExploreApiError::Request)?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExploreApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|err| ExploreApiError::Request(err.into()))
    }
}
