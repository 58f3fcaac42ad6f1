//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server binding
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream feed and refresh behavior
    #[serde(default)]
    pub news: NewsConfig,

    /// Extra text cleanup rules
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Tool catalog location and affiliate tagging
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply `TOOLSCOPE_HOST` / `TOOLSCOPE_PORT` overrides.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("TOOLSCOPE_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        match std::env::var("TOOLSCOPE_PORT").map(|p| p.parse::<u16>()) {
            Ok(Ok(port)) => self.server.port = port,
            Ok(Err(e)) => log::warn!("Ignoring TOOLSCOPE_PORT: {}", e),
            Err(_) => {}
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::validation("server.port must be > 0"));
        }
        if self.news.endpoint.trim().is_empty() {
            return Err(AppError::validation("news.endpoint is empty"));
        }
        Url::parse(&self.news.endpoint).map_err(|e| {
            AppError::validation(format!(
                "news.endpoint '{}' is not a valid URL: {}",
                self.news.endpoint, e
            ))
        })?;
        if self.news.user_agent.trim().is_empty() {
            return Err(AppError::validation("news.user_agent is empty"));
        }
        if self.news.timeout_secs == 0 {
            return Err(AppError::validation("news.timeout_secs must be > 0"));
        }
        if self.news.refresh_interval_secs == 0 {
            return Err(AppError::validation(
                "news.refresh_interval_secs must be > 0",
            ));
        }
        if self.news.max_items == 0 {
            return Err(AppError::validation("news.max_items must be > 0"));
        }
        if self.catalog.tracking_param.trim().is_empty() {
            return Err(AppError::validation("catalog.tracking_param is empty"));
        }
        Ok(())
    }
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

/// Upstream feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Feed endpoint returning a JSON array of news records
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// User-Agent header for feed requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Automatic refresh period in seconds
    #[serde(default = "defaults::refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Items whose cleaned title is this long or shorter are dropped
    #[serde(default = "defaults::min_title_len")]
    pub min_title_len: usize,

    /// Upper bound on the displayed list
    #[serde(default = "defaults::max_items")]
    pub max_items: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            refresh_interval_secs: defaults::refresh_interval(),
            min_title_len: defaults::min_title_len(),
            max_items: defaults::max_items(),
        }
    }
}

/// Extra text cleanup applied after the built-in passes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CleaningConfig {
    /// Regex patterns removed from titles and summaries
    #[serde(default)]
    pub remove_patterns: Vec<String>,

    /// Literal replacements applied after removal
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

/// A text replacement rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

/// Tool catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog TOML, relative to the working directory
    #[serde(default = "defaults::catalog_path")]
    pub path: String,

    /// Affiliate tag appended to outbound links, if any
    #[serde(default)]
    pub affiliate_tag: Option<String>,

    /// Query parameter carrying the affiliate tag
    #[serde(default = "defaults::tracking_param")]
    pub tracking_param: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::catalog_path(),
            affiliate_tag: None,
            tracking_param: defaults::tracking_param(),
        }
    }
}

mod defaults {
    // Server defaults
    pub fn host() -> String {
        "0.0.0.0".into()
    }
    pub fn port() -> u16 {
        8080
    }

    // News defaults
    pub fn endpoint() -> String {
        "http://127.0.0.1:3000/api/ai-news".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; toolscope/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn refresh_interval() -> u64 {
        30 * 60
    }
    pub fn min_title_len() -> usize {
        3
    }
    pub fn max_items() -> usize {
        12
    }

    // Catalog defaults
    pub fn catalog_path() -> String {
        "data/tools.toml".into()
    }
    pub fn tracking_param() -> String {
        "ref".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_refresh_is_thirty_minutes() {
        assert_eq!(NewsConfig::default().refresh_interval_secs, 1800);
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.news.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.news.refresh_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.news.endpoint = "/api/ai-news".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [news]
            endpoint = "https://feeds.example.com/ai.json"
            max_items = 6

            [[cleaning.replacements]]
            from = "A.I."
            to = "AI"
            "#,
        )
        .unwrap();

        assert_eq!(config.news.endpoint, "https://feeds.example.com/ai.json");
        assert_eq!(config.news.max_items, 6);
        assert_eq!(config.news.min_title_len, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cleaning.replacements.len(), 1);
        assert_eq!(config.catalog.tracking_param, "ref");
    }

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9000,
        };
        assert_eq!(server.bind_addr(), "127.0.0.1:9000");
    }
}
