use crate::domain::completion::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::ports::CompletionGateway;
use crate::utils::error::{BrandError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// reqwest client for the AI gateway's chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionGateway for HttpGateway {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        tracing::debug!("Making AI gateway request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("AI gateway response status: {}", status);

        if !status.is_success() {
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => BrandError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => BrandError::QuotaExceeded,
                _ => {
                    let body = response.text().await.unwrap_or_default();
                    tracing::error!("AI gateway error: {} {}", status.as_u16(), body);
                    BrandError::UpstreamFailure {
                        status: status.as_u16(),
                        body,
                    }
                }
            });
        }

        let text = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        // 合法 JSON 但結構不符，視為無效的 AI 回應
        ChatCompletionResponse::deserialize(&value)
            .map_err(|e| BrandError::invalid_upstream(e.to_string()))
    }
}
