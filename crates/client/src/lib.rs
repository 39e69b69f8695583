//! Predicat HTTP Client
//!
//! A native Rust client for the predicat translation server.
//!
//! # Quick Start
//!
//! ```no_run
//! use predicat_client::PredicatClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), predicat_client::Error> {
//!     let client = PredicatClient::new("http://localhost:8001")?;
//!
//!     let result = client.translate("Tous les hommes sont mortels").await?;
//!     println!("{}", result.fol_translation);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```no_run
//! use predicat_client::PredicatClientBuilder;
//! use std::time::Duration;
//!
//! let client = PredicatClientBuilder::new("http://localhost:8001")
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//! ```

mod error;
mod reference;
mod rules;
mod translate;

pub use error::Error;
pub use rules::RuleInfo;

// Re-export the wire types so callers don't need a direct `predicat_core` dependency.
pub use predicat_core::{Example, SymbolTable, TranslationResult};

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the predicat translation server.
#[derive(Debug, Clone)]
pub struct PredicatClient {
    client: Client,
    base_url: String,
}

/// Builder for configuring a [`PredicatClient`].
#[derive(Debug)]
pub struct PredicatClientBuilder {
    base_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl PredicatClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom reqwest Client. The configured timeout is then ignored.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<PredicatClient, Error> {
        let client = match self.client {
            Some(c) => c,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };

        Ok(PredicatClient {
            client,
            base_url: self.base_url,
        })
    }
}

/// Service status reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Number of loaded translation rules.
    pub rules: usize,
}

#[derive(Debug, Deserialize)]
struct InfoBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl PredicatClient {
    /// Create a client with default configuration.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        PredicatClientBuilder::new(base_url).build()
    }

    /// Create a builder for advanced configuration.
    pub fn builder(base_url: impl Into<String>) -> PredicatClientBuilder {
        PredicatClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Fetch the service status.
    pub async fn health(&self) -> Result<HealthStatus, Error> {
        self.get_json("/health").await
    }

    /// Fetch the liveness message served at the API root.
    pub async fn info(&self) -> Result<String, Error> {
        let body: InfoBody = self.get_json("/api/").await?;
        Ok(body.message)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        decode(response).await
    }
}

/// Decode a successful response, or turn a failed one into an [`Error`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| Error::Deserialization(e.to_string()));
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => Err(Error::Api {
            status: status.as_u16(),
            message: body.error,
        }),
        Err(_) => Err(Error::Http {
            status: status.as_u16(),
            message: format!("unexpected status: {status}"),
        }),
    }
}
