use crate::errors::AppError;
use std::env;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Which upload endpoint the backend exposes. Deployments differ, so this is
/// configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadRoute {
    /// `POST /files/upload/{id}`
    #[default]
    Files,
    /// `POST /upload/{id}`
    Legacy,
}

impl UploadRoute {
    pub fn segments(self) -> &'static [&'static str] {
        match self {
            UploadRoute::Files => &["files", "upload"],
            UploadRoute::Legacy => &["upload"],
        }
    }
}

impl FromStr for UploadRoute {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "files" => Ok(UploadRoute::Files),
            "legacy" | "upload" => Ok(UploadRoute::Legacy),
            other => Err(AppError::Config(format!("unknown upload route '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub upload_route: UploadRoute,
}

impl ClientConfig {
    pub fn new(base_url: &str, upload_route: UploadRoute) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!("'{}' cannot be used as a base URL", base_url)));
        }
        Ok(ClientConfig { base_url, upload_route })
    }

    /// Reads `HR_API_BASE_URL` and `HR_UPLOAD_ROUTE`, falling back to the
    /// local backend and the `/files/upload` route.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = env::var("HR_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let upload_route = match env::var("HR_UPLOAD_ROUTE") {
            Ok(route) => route.parse()?,
            Err(_) => UploadRoute::default(),
        };
        Self::new(&base_url, upload_route)
    }
}
