use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandError {
    #[error("Invalid brand idea")]
    InvalidInput { reason: String },

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("AI usage limit reached. Please add credits.")]
    QuotaExceeded,

    #[error("AI generation failed")]
    UpstreamFailure { status: u16, body: String },

    #[error("Invalid AI response")]
    InvalidUpstreamResponse { reason: String },

    #[error("{message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    FormError { message: String },

    #[error("{message}")]
    UnsupportedRequest { message: String },

    /// 遠端 endpoint 回傳的 `{ error }` 訊息
    #[error("{message}")]
    RemoteError { status: u16, message: String },

    #[error(transparent)]
    ApiError(#[from] reqwest::Error),

    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl BrandError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_upstream(reason: impl Into<String>) -> Self {
        Self::InvalidUpstreamResponse {
            reason: reason.into(),
        }
    }

    /// HTTP status the handler answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BrandError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            BrandError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            BrandError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            BrandError::RemoteError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `{ "error": ... }` body.
    pub fn user_friendly_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BrandError::InvalidInput { .. } | BrandError::FormError { .. } => {
                "Enter a brand idea between 1 and 200 characters"
            }
            BrandError::RateLimited => "Wait a moment and submit again",
            BrandError::QuotaExceeded => "Add credits to the AI gateway workspace",
            BrandError::ConfigError { .. } | BrandError::InvalidConfigValueError { .. } => {
                "Check LOVABLE_API_KEY and the gateway settings"
            }
            BrandError::UpstreamFailure { .. } | BrandError::InvalidUpstreamResponse { .. } => {
                "Try again; the AI gateway returned an unusable answer"
            }
            BrandError::ApiError(_) => "Check network connectivity to the AI gateway",
            _ => "Check the logs for details",
        }
    }

    /// 上游暫時性錯誤，呼叫端可以稍後再試
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BrandError::RateLimited
                | BrandError::UpstreamFailure { .. }
                | BrandError::ApiError(_)
                | BrandError::RemoteError { status: 429, .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BrandError>;
