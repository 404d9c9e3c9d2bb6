use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Failure of a gateway call. Local form validation never produces one of
/// these; see `state::form::FieldErrors` for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("{}", server_display(*status, detail.as_deref()))]
    Server { status: u16, detail: Option<String> },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

fn server_display(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("server responded with status {status}"),
    }
}

impl ApiError {
    pub fn server(status: u16, detail: impl Into<String>) -> Self {
        Self::Server {
            status,
            detail: Some(detail.into()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message shown to the operator: the server's `detail` when there is one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_no_response(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Pulls a readable `detail` out of an error response body.
///
/// `detail` is usually a string. Request validation failures carry a list of
/// `{ "loc": [...], "msg": "..." }` objects instead; their messages are joined.
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match parsed.detail {
        Value::String(text) => text,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                Value::Object(map) => map.get("msg").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    let detail = detail.trim();
    (!detail.is_empty()).then(|| detail.to_string())
}
