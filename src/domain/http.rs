use reqwest::{Method, StatusCode};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type, x-supabase-client-platform, x-supabase-client-platform-version, x-supabase-client-runtime, x-supabase-client-runtime-version";

/// Transport-neutral view of an incoming request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, body: Option<String>) -> Self {
        Self { method, body }
    }

    pub fn post(body: impl Into<String>) -> Self {
        Self::new(Method::POST, Some(body.into()))
    }

    pub fn preflight() -> Self {
        Self::new(Method::OPTIONS, None)
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpResponse {
    /// Empty 200 carrying only the CORS headers.
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            headers: cors_headers(),
            body: None,
        }
    }

    pub fn json(status: StatusCode, body: String) -> Self {
        let mut headers = cors_headers();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        Self {
            status,
            headers,
            body: Some(body),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

pub fn cors_headers() -> Vec<(String, String)> {
    vec![
        (
            "Access-Control-Allow-Origin".to_string(),
            ALLOW_ORIGIN.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        ),
    ]
}
