use crate::utils::error::{BrandError, Result};
use url::Url;

pub const MAX_BRAND_IDEA_CHARS: usize = 200;
pub const MAX_INDUSTRY_CHARS: usize = 100;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BrandError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BrandError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BrandError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BrandError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 修剪後檢查品牌構想：不可為空，且不超過 200 個字元
pub fn validate_brand_idea(value: &str) -> Result<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BrandError::invalid_input("brand idea is empty"));
    }
    let length = trimmed.chars().count();
    if length > MAX_BRAND_IDEA_CHARS {
        return Err(BrandError::invalid_input(format!(
            "brand idea is {} characters, limit is {}",
            length, MAX_BRAND_IDEA_CHARS
        )));
    }
    Ok(trimmed)
}

pub fn validate_max_chars(field_name: &str, value: &str, max: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max {
        return Err(BrandError::FormError {
            message: format!("{} must be at most {} characters", field_name, max),
        });
    }
    Ok(())
}

/// `#RGB` or `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
