use crate::domain::completion::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::model::GenerationRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const API_KEY_ENV: &str = "LOVABLE_API_KEY";
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn gateway_url(&self) -> &str;
    fn model(&self) -> &str;
    fn strict_identity(&self) -> bool;
}

/// Upstream chat-completion service.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// Whatever the form submits to: the handler in-process or a deployed function.
/// Returns the HTTP status and raw body.
#[async_trait]
pub trait IdentityEndpoint: Send + Sync {
    async fn invoke(&self, request: &GenerationRequest) -> Result<(u16, String)>;
}
