//! Client configuration.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const BASE_URL_ENV: &str = "SUBWAY_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `SUBWAY_API_URL`, falling back to
    /// `DEFAULT_BASE_URL` when unset or empty.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn from_env_reads_base_url_or_falls_back() {
        // Only test that touches SUBWAY_API_URL.
        env::set_var(BASE_URL_ENV, "http://api.example.com:9000/");
        assert_eq!(ClientConfig::from_env().base_url, "http://api.example.com:9000");

        env::set_var(BASE_URL_ENV, "   ");
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);

        env::set_var(BASE_URL_ENV, "");
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);

        env::remove_var(BASE_URL_ENV);
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
