use crate::domain::model::GenerationRequest;
use crate::domain::ports::IdentityEndpoint;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// A deployed generate-brand function reached over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteEndpoint {
    client: Client,
    url: String,
    bearer_token: Option<String>,
}

impl RemoteEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            bearer_token: None,
        }
    }

    /// Token sent as `Authorization: Bearer`, e.g. the project's anon key.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait]
impl IdentityEndpoint for RemoteEndpoint {
    async fn invoke(&self, request: &GenerationRequest) -> Result<(u16, String)> {
        tracing::debug!("Invoking remote endpoint: {}", self.url);
        let mut builder = self.client.post(&self.url).json(request);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}
