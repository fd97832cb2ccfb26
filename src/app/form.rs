use crate::app::render::{assistant_reply, Showcase};
use crate::app::transcript::Transcript;
use crate::core::handler::BrandHandler;
use crate::domain::http::HttpRequest;
use crate::domain::model::{BrandIdentity, ErrorResponse, GenerationRequest};
use crate::domain::ports::{CompletionGateway, ConfigProvider, IdentityEndpoint};
use crate::utils::error::{BrandError, Result};
use crate::utils::validation::{validate_max_chars, MAX_BRAND_IDEA_CHARS, MAX_INDUSTRY_CHARS};
use async_trait::async_trait;
use serde_json::Value;

pub const EMPTY_IDEA_MESSAGE: &str = "Please enter a brand idea or keyword";
const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate brand. Please try again.";

/// Runs the handler in the same process, going through its HTTP surface.
pub struct LocalEndpoint<G: CompletionGateway, C: ConfigProvider> {
    handler: BrandHandler<G, C>,
}

impl<G: CompletionGateway, C: ConfigProvider> LocalEndpoint<G, C> {
    pub fn new(handler: BrandHandler<G, C>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<G: CompletionGateway, C: ConfigProvider> IdentityEndpoint for LocalEndpoint<G, C> {
    async fn invoke(&self, request: &GenerationRequest) -> Result<(u16, String)> {
        let body = serde_json::to_string(request)?;
        let response = self.handler.handle(HttpRequest::post(body)).await;
        Ok((response.status.as_u16(), response.body.unwrap_or_default()))
    }
}

/// Client side of the brand form: input guards, one call, result decoding.
pub struct FormController<E: IdentityEndpoint> {
    endpoint: E,
}

impl<E: IdentityEndpoint> FormController<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// 整理表單輸入；空白的 industry 會改用 view 的預設值
    pub fn prepare(
        &self,
        brand_idea: &str,
        industry: Option<&str>,
        view: Showcase,
    ) -> Result<GenerationRequest> {
        let brand_idea = brand_idea.trim();
        if brand_idea.is_empty() {
            return Err(BrandError::FormError {
                message: EMPTY_IDEA_MESSAGE.to_string(),
            });
        }
        validate_max_chars("Brand idea", brand_idea, MAX_BRAND_IDEA_CHARS)?;

        let industry = industry
            .map(str::trim)
            .filter(|industry| !industry.is_empty())
            .or_else(|| view.preset_industry());
        if let Some(industry) = industry {
            validate_max_chars("Industry", industry, MAX_INDUSTRY_CHARS)?;
        }

        Ok(GenerationRequest {
            brand_idea: brand_idea.to_string(),
            industry: industry.map(str::to_string),
        })
    }

    pub async fn submit(
        &self,
        brand_idea: &str,
        industry: Option<&str>,
        view: Showcase,
    ) -> Result<BrandIdentity> {
        let request = self.prepare(brand_idea, industry, view)?;
        let (status, body) = self.endpoint.invoke(&request).await?;
        decode_response(status, &body)
    }

    /// 助理模式的一輪對話；失敗時保留使用者訊息，不加入回覆
    pub async fn ask(&self, transcript: &mut Transcript, message: &str) -> Result<()> {
        let message = message.trim();
        if message.is_empty() {
            return Err(BrandError::FormError {
                message: EMPTY_IDEA_MESSAGE.to_string(),
            });
        }

        transcript.push_user(message);
        let identity = self.submit(message, None, Showcase::Assistant).await?;
        transcript.push_assistant(assistant_reply(&identity));
        Ok(())
    }
}

/// An `{ error }` body wins over the status; no identity is returned alongside an error.
pub fn decode_response(status: u16, body: &str) -> Result<BrandIdentity> {
    if let Ok(ErrorResponse { error }) = serde_json::from_str::<ErrorResponse>(body) {
        return Err(BrandError::RemoteError {
            status,
            message: error,
        });
    }
    if !(200..300).contains(&status) {
        return Err(BrandError::RemoteError {
            status,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        });
    }

    let value: Value = serde_json::from_str(body)?;
    BrandIdentity::from_value(&value)
}
