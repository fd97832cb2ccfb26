use crate::utils::error::{BrandError, Result};
use crate::utils::validation::{is_hex_color, validate_brand_idea};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const EXPECTED_BRAND_NAMES: usize = 5;
pub const EXPECTED_COLORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub brand_idea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl GenerationRequest {
    /// 從原始 JSON body 建立請求；brandIdea 會被修剪並驗證
    pub fn from_body(body: &Value) -> Result<Self> {
        let brand_idea = match body.get("brandIdea") {
            Some(Value::String(idea)) => validate_brand_idea(idea)?.to_string(),
            Some(_) => return Err(BrandError::invalid_input("brandIdea is not a string")),
            None => return Err(BrandError::invalid_input("brandIdea is missing")),
        };

        // industry is forwarded as-is, only an absent/null/empty value means "none"
        let industry = match body.get("industry") {
            None | Some(Value::Null) => None,
            Some(Value::String(industry)) if industry.is_empty() => None,
            Some(Value::String(industry)) => Some(industry.clone()),
            Some(other) => Some(other.to_string()),
        };

        Ok(Self {
            brand_idea,
            industry,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandIdentity {
    pub brand_names: Vec<String>,
    pub tagline: String,
    pub mission_statement: String,
    pub brand_voice: String,
    pub color_suggestions: Vec<String>,
    pub elevator_pitch: String,
}

impl BrandIdentity {
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value)
            .map_err(|e| BrandError::invalid_upstream(format!("identity shape mismatch: {}", e)))
    }

    /// Enforces the five-names / five-hex-colors contract requested from the model.
    pub fn check_contract(&self) -> Result<()> {
        if self.brand_names.len() != EXPECTED_BRAND_NAMES {
            return Err(BrandError::invalid_upstream(format!(
                "expected {} brand names, got {}",
                EXPECTED_BRAND_NAMES,
                self.brand_names.len()
            )));
        }
        if self.color_suggestions.len() != EXPECTED_COLORS {
            return Err(BrandError::invalid_upstream(format!(
                "expected {} colors, got {}",
                EXPECTED_COLORS,
                self.color_suggestions.len()
            )));
        }
        if let Some(bad) = self.color_suggestions.iter().find(|c| !is_hex_color(c)) {
            return Err(BrandError::invalid_upstream(format!(
                "color {:?} is not a hex code",
                bad
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&BrandError> for ErrorResponse {
    fn from(err: &BrandError) -> Self {
        Self {
            error: err.user_friendly_message(),
        }
    }
}
