//! HTTP client for the backoffice REST API.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

pub use reqwest::Method;

use crate::{
    config::ClientConfig,
    query::Query,
    resource::{EntityDescriptor, Resource, COLLATERAL_ROLLS, CUSTOMERS},
    types::{CollateralRoll, Customer},
    Error,
};

/// HTTP client for the backoffice REST API.
///
/// Every entity operation funnels through [`Client::request`]. Each request
/// builds a fresh `reqwest::Client` with the configured timeout.
pub struct Client {
    config: ClientConfig,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A typed handle on one entity's endpoints.
    pub fn resource<T>(&self, entity: &'static EntityDescriptor) -> Resource<'_, T> {
        Resource::new(self, entity)
    }

    pub fn customers(&self) -> Resource<'_, Customer> {
        self.resource(&CUSTOMERS)
    }

    pub fn collateral_rolls(&self) -> Resource<'_, CollateralRoll> {
        self.resource(&COLLATERAL_ROLLS)
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(format!("{}{}", base, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Sends `method path` with an optional JSON body and parses the JSON response.
    ///
    /// `path` must already carry its query string. URL parsing re-escapes the
    /// characters the WHATWG query set reserves, so a `'` that
    /// [`crate::query::build`] leaves bare goes out as `%27`. Decoded
    /// parameter values are unchanged.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.send(method, path, body).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    /// Like [`Client::request`] but discards the response body.
    pub async fn request_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await.map(|_| ())
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let path = match query {
            Some(query) => query.append_to_path(path),
            None => path.to_string(),
        };
        self.request::<T, ()>(Method::GET, &path, None).await
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<String, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path)?;
        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        tracing::debug!(method = %method, path = %path, "sending request");

        let mut request = client
            .request(method.clone(), url)
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to {} {}: {}", method, path, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
