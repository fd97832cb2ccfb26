use crate::app::render::Showcase;
use crate::config::toml_config::TomlConfig;
use crate::domain::ports::{ConfigProvider, API_KEY_ENV, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "brand-forge")]
#[command(about = "Generate a brand identity from an idea or a few keywords")]
pub struct CliConfig {
    /// Brand idea or keywords, e.g. "eco-friendly coffee"
    pub brand_idea: String,

    #[arg(long, help = "Industry, e.g. \"Food & Beverage\"")]
    pub industry: Option<String>,

    #[arg(long, value_enum, default_value = "full")]
    pub view: Showcase,

    #[arg(long, help = "Deployed generate-brand function URL; runs in-process when omitted")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Bearer token sent to --endpoint")]
    pub endpoint_token: Option<String>,

    #[arg(
        long,
        help = "TOML file with [gateway] and [identity] settings; --gateway-url, --model and --strict override it"
    )]
    pub config: Option<String>,

    #[arg(long, help = "AI gateway API key (defaults to $LOVABLE_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(long, help = "Chat completions URL [default: Lovable AI gateway]")]
    pub gateway_url: Option<String>,

    #[arg(long, help = "Model id [default: google/gemini-3-flash-preview]")]
    pub model: Option<String>,

    #[arg(long, help = "Reject identities without 5 names and 5 hex colors")]
    pub strict: bool,

    #[arg(long, help = "Print the identity as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 未指定 --api-key 時改用環境變數
    pub fn resolve_api_key(&mut self) {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok();
        }
    }

    /// 明確指定的 CLI 參數覆蓋設定檔；設定檔沒有 api_key 時沿用 CLI 的
    pub fn apply_overrides(&self, file: &mut TomlConfig) {
        if let Some(url) = &self.gateway_url {
            file.gateway.endpoint = url.clone();
        }
        if let Some(model) = &self.model {
            file.gateway.model = model.clone();
        }
        if self.strict {
            file.identity.strict = true;
        }
        if file.api_key().is_none() {
            file.gateway.api_key = self.api_key.clone();
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn gateway_url(&self) -> &str {
        self.gateway_url.as_deref().unwrap_or(DEFAULT_GATEWAY_URL)
    }

    fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    fn strict_identity(&self) -> bool {
        self.strict
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("gateway_url", self.gateway_url())?;
        validate_non_empty_string("model", self.model())?;
        if let Some(endpoint) = &self.endpoint {
            validate_url("endpoint", endpoint)?;
        }
        Ok(())
    }
}
