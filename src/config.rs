//! Front-end configuration.
//!
//! The API base URL is fixed at compile time from `WEBOOK_API_URL` so the
//! same binary works in the browser, where there is no process environment.

/// Base URL used when `WEBOOK_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads the build-time override, falling back to the default URL.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("WEBOOK_API_URL"))
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Joins an endpoint onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
