use serde::Deserialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Rejected { status: u16, detail: Option<String> },
    Network(String),
    Decode(String),
    Config(String),
    Io(String),
}

/// Body convention for non-ok responses. `detail` is only used when it is a
/// plain string; validation errors from the backend send a list instead.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl AppError {
    /// Builds a `Rejected` error from a non-ok status and its raw body.
    pub fn rejected(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.as_str().map(str::to_string));
        AppError::Rejected { status, detail }
    }

    /// The message a handler shows for this error. Backend rejections carry
    /// their own text when they have one; everything else falls back to the
    /// handler's generic wording.
    pub fn user_message(&self, rejected_fallback: &str, failure_fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Rejected { detail: Some(detail), .. } => detail.clone(),
            AppError::Rejected { detail: None, .. } => rejected_fallback.to_string(),
            AppError::Network(_) | AppError::Decode(_) | AppError::Config(_) | AppError::Io(_) => {
                failure_fallback.to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Rejected { status, detail: Some(detail) } => {
                write!(f, "Rejected ({}): {}", status, detail)
            }
            AppError::Rejected { status, detail: None } => write!(f, "Rejected ({})", status),
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            AppError::Io(msg) => write!(f, "IO Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(err.to_string())
    }
}
