//! Content service client

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;

use super::loader::LoadError;
use super::query::GraphqlRequest;
use crate::config::SiteConfig;

/// Longest response body kept in a status error
const MAX_ERROR_BODY: usize = 512;

/// Something that can answer GraphQL requests with the response's `data` object
pub trait ContentService: Send + Sync {
    fn execute(
        &self,
        request: &GraphqlRequest,
    ) -> impl Future<Output = Result<Value, LoadError>> + Send;
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// HTTP client for the DatoCMS content delivery API
#[derive(Clone)]
pub struct DatoClient {
    http: Client,
    endpoint: String,
    token: String,
    environment: Option<String>,
    include_drafts: bool,
}

impl DatoClient {
    /// Create a client for an endpoint and read-only API token
    pub fn new(endpoint: &str, token: &str) -> Result<Self, LoadError> {
        let http = Client::builder()
            .user_agent(concat!("cms-blog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            environment: None,
            include_drafts: false,
        })
    }

    /// Create a client from the site configuration
    pub fn from_config(config: &SiteConfig) -> Result<Self, LoadError> {
        let token = config
            .api_token()
            .ok_or_else(|| LoadError::MissingToken(config.api_token_env.clone()))?;

        let mut client = Self::new(&config.endpoint, &token)?;
        client.environment = config.environment.clone();
        client.include_drafts = config.include_drafts;
        Ok(client)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContentService for DatoClient {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value, LoadError> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .json(request);

        if let Some(environment) = &self.environment {
            builder = builder.header("X-Environment", environment);
        }
        if self.include_drafts {
            builder = builder.header("X-Include-Drafts", "true");
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Content service answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        parse_response(&body)
    }
}

/// Extract `data` from a response body, turning GraphQL errors into a load error
fn parse_response(body: &str) -> Result<Value, LoadError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(LoadError::Graphql(messages.join("; ")));
    }

    response.data.ok_or(LoadError::EmptyResponse)
}
