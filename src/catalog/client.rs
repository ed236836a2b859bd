use crate::catalog::query::{search_envelope, GraphQlEnvelope};
use crate::catalog::token::{StaticTokenProvider, TokenProvider};
use crate::catalog::{CatalogError, ContentType};
use crate::config::Config;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const PANDORA_GRAPHQL_URL: &str = "https://ce.pandora.com/api/v1/graphql/graphql";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error object handed back to the agent instead of a raised error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResult {
    pub error: String,
    pub response_text: Option<String>,
}

impl From<CatalogError> for ErrorResult {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidContentType(_) => Self {
                error: err.to_string(),
                response_text: None,
            },
            other => Self {
                error: format!("Pandora API call failed: {}", other),
                response_text: other.response_text().map(str::to_owned),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// Decoded response body, untouched.
    Found(Value),
    Failed(ErrorResult),
}

impl SearchResult {
    pub fn is_error(&self) -> bool {
        matches!(self, SearchResult::Failed(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            SearchResult::Found(body) => body,
            SearchResult::Failed(err) => match err.response_text {
                Some(text) => json!({ "error": err.error, "response_text": text }),
                None => json!({ "error": err.error }),
            },
        }
    }
}

/// Thin adapter over the catalog's GraphQL search endpoint.
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
    token_provider: Arc<dyn TokenProvider>,
}

impl CatalogClient {
    pub fn new(token_provider: Arc<dyn TokenProvider>) -> Result<Self, CatalogError> {
        Self::with_endpoint(PANDORA_GRAPHQL_URL, REQUEST_TIMEOUT, token_provider)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, CatalogError> {
        // One request per search: redirects are reported, never followed.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token_provider,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        Self::with_endpoint(
            config.pandora_graphql_url.clone(),
            Duration::from_secs(config.pandora_timeout_secs),
            Arc::new(StaticTokenProvider::new(config.pandora_access_token.clone())),
        )
    }

    /// Search the catalog for one content type.
    ///
    /// Never fails: every problem is reported as [`SearchResult::Failed`] so the
    /// calling agent can keep the conversation going.
    pub async fn search_catalog(&self, query: &str, content_type: &str) -> SearchResult {
        match self.try_search(query, content_type).await {
            Ok(body) => SearchResult::Found(body),
            Err(err) => {
                warn!("Catalog search failed: {}", err);
                SearchResult::Failed(err.into())
            }
        }
    }

    pub async fn try_search(&self, query: &str, content_type: &str) -> Result<Value, CatalogError> {
        let resolved = ContentType::parse(content_type)
            .ok_or_else(|| CatalogError::InvalidContentType(content_type.to_string()))?;

        let envelope = search_envelope(resolved.code(), query);
        let token = self.token_provider.fetch_token().await?;

        info!("Catalog: searching {} for '{}'", resolved, query);
        self.post(&token, &envelope).await
    }

    async fn post(&self, token: &str, envelope: &GraphQlEnvelope) -> Result<Value, CatalogError> {
        debug!("Catalog: POST {} ({} byte query)", self.endpoint, envelope.query.len());

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Remote { status, body });
        }

        match serde_json::from_str(&body) {
            Ok(decoded) => {
                debug!("Catalog: {} response decoded", status);
                Ok(decoded)
            }
            Err(source) => Err(CatalogError::Decode { source, body }),
        }
    }
}
