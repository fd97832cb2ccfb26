use crate::core::prompt::build_completion_request;
use crate::domain::http::{HttpRequest, HttpResponse};
use crate::domain::model::{BrandIdentity, GenerationRequest};
use crate::domain::ports::{CompletionGateway, ConfigProvider, API_KEY_ENV};
use crate::utils::error::{BrandError, Result};
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Stateless brand identity request handler; one upstream call per request.
pub struct BrandHandler<G: CompletionGateway, C: ConfigProvider> {
    gateway: G,
    config: C,
}

impl<G: CompletionGateway, C: ConfigProvider> BrandHandler<G, C> {
    pub fn new(gateway: G, config: C) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        if request.method == Method::OPTIONS {
            return HttpResponse::preflight();
        }

        match self.generate_from_body(request.body.as_deref()).await {
            Ok(identity) => HttpResponse::json(StatusCode::OK, identity.to_string()),
            Err(e) => {
                match &e {
                    BrandError::InvalidInput { reason } => {
                        tracing::warn!("Rejected brand request: {}", reason)
                    }
                    BrandError::InvalidUpstreamResponse { reason } => {
                        tracing::error!("generate-brand error: Invalid AI response ({})", reason)
                    }
                    other => tracing::error!("generate-brand error: {}", other),
                }
                error_response(&e)
            }
        }
    }

    async fn generate_from_body(&self, body: Option<&str>) -> Result<Value> {
        let body: Value = serde_json::from_str(body.unwrap_or_default())?;
        let request = GenerationRequest::from_body(&body)?;
        self.generate(&request).await
    }

    /// Runs the upstream call and returns the tool-call arguments object unchanged.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Value> {
        let api_key = self
            .config
            .api_key()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| BrandError::ConfigError {
                message: format!("{} is not configured", API_KEY_ENV),
            })?;

        let completion = build_completion_request(self.config.model(), request);
        tracing::info!(
            "Generating brand identity (idea: {} chars, industry: {})",
            request.brand_idea.chars().count(),
            request.industry.is_some()
        );
        tracing::debug!("User prompt: {:?}", completion.user_message());

        let response = self.gateway.complete(api_key, &completion).await?;

        let arguments = response
            .first_tool_arguments()
            .ok_or_else(|| BrandError::invalid_upstream("no tool call arguments in response"))?;

        let identity: Value = serde_json::from_str(arguments)?;
        if !identity.is_object() {
            return Err(BrandError::invalid_upstream(
                "tool call arguments are not a JSON object",
            ));
        }

        if self.config.strict_identity() {
            BrandIdentity::from_value(&identity)?.check_contract()?;
        }

        tracing::info!("Brand identity generated");
        Ok(identity)
    }
}

pub fn error_response(err: &BrandError) -> HttpResponse {
    let body = serde_json::json!({ "error": err.user_friendly_message() });
    HttpResponse::json(err.status_code(), body.to_string())
}
