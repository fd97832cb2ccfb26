use crate::domain::http::{HttpRequest, HttpResponse};
use crate::domain::ports::{ConfigProvider, API_KEY_ENV, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
use crate::utils::error::{BrandError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_key: Option<String>,
    pub gateway_url: String,
    pub model: String,
    pub strict_identity: bool,
}

impl LambdaConfig {
    /// 金鑰在冷啟動時可缺少，到請求時才回報錯誤
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            gateway_url: env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            model: env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            strict_identity: env::var("STRICT_IDENTITY")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl ConfigProvider for LambdaConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn strict_identity(&self) -> bool {
        self.strict_identity
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("gateway_url", &self.gateway_url)?;
        validate_non_empty_string("model", &self.model)?;

        if self.api_key.is_none() {
            tracing::warn!("{} is not set; requests will fail until it is", API_KEY_ENV);
        }
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpContext {
    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub http: Option<HttpContext>,
}

/// API Gateway (REST or HTTP API) / Function URL proxy event, only the parts
/// the handler reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub http_method: Option<String>,
    pub request_context: Option<RequestContext>,
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyRequest {
    pub fn method(&self) -> Result<Method> {
        let raw = self
            .http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .and_then(|http| http.method.as_deref())
            })
            .unwrap_or("POST");

        Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).map_err(|_| {
            BrandError::UnsupportedRequest {
                message: format!("Unsupported HTTP method: {}", raw),
            }
        })
    }

    pub fn into_http_request(self) -> Result<HttpRequest> {
        let method = self.method()?;
        if self.is_base64_encoded && method != Method::OPTIONS {
            return Err(BrandError::UnsupportedRequest {
                message: "Base64-encoded request bodies are not supported".to_string(),
            });
        }
        Ok(HttpRequest::new(method, self.body))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl From<HttpResponse> for ProxyResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status_code: response.status.as_u16(),
            headers: response.headers.into_iter().collect(),
            body: response.body,
            is_base64_encoded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_rest_api_event() {
        let event: ProxyRequest = serde_json::from_value(json!({
            "httpMethod": "POST",
            "body": "{\"brandIdea\":\"tea\"}",
            "isBase64Encoded": false
        }))
        .unwrap();
        let request = event.into_http_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body.as_deref(), Some("{\"brandIdea\":\"tea\"}"));
    }

    #[test]
    fn test_function_url_event() {
        let event: ProxyRequest = serde_json::from_value(json!({
            "requestContext": {"http": {"method": "OPTIONS"}},
            "isBase64Encoded": false
        }))
        .unwrap();
        assert_eq!(event.method().unwrap(), Method::OPTIONS);
    }

    #[test]
    fn test_base64_body_rejected() {
        let event = ProxyRequest {
            http_method: Some("POST".to_string()),
            body: Some("eyJ9".to_string()),
            is_base64_encoded: true,
            ..Default::default()
        };
        assert!(event.into_http_request().is_err());
    }

    #[test]
    fn test_response_conversion() {
        let response: ProxyResponse =
            HttpResponse::json(reqwest::StatusCode::TOO_MANY_REQUESTS, "{}".to_string()).into();
        assert_eq!(response.status_code, 429);
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn test_config_validation() {
        let config = LambdaConfig {
            api_key: None,
            gateway_url: "not-a-url".to_string(),
            model: DEFAULT_MODEL.to_string(),
            strict_identity: false,
        };
        assert!(config.validate().is_err());

        let config = LambdaConfig {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
