//! Server configuration from environment variables.
//!
//! Load configuration using `ServerConfig::from_env()` after calling `dotenvy::dotenv()`.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Public base URL used for absolute links in `/sitemap.xml`
    /// Example: https://wandb.online
    pub public_url: Option<String>,

    /// Tracing filter directive
    /// Example: wandb_online=debug,tower_http=info
    pub log_filter: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PUBLIC_URL").ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    /// Build from raw variable values. Blank values count as unset.
    pub fn from_vars(public_url: Option<String>, log_filter: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Self {
            public_url: non_blank(public_url),
            log_filter: non_blank(log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Check if a public URL override is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// Base URL for the XML sitemap, falling back to the site's canonical URL
    pub fn base_url<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.public_url.as_deref().unwrap_or(fallback)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // ServerConfig Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = ServerConfig::from_vars(
            Some("https://staging.wandb.online".to_string()),
            Some("wandb_online=debug".to_string()),
        );

        assert_eq!(
            config.public_url,
            Some("https://staging.wandb.online".to_string())
        );
        assert_eq!(config.log_filter, "wandb_online=debug");
        assert!(config.has_public_url());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = ServerConfig::from_vars(None, None);

        assert!(config.public_url.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.has_public_url());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ServerConfig::from_vars(Some("   ".to_string()), Some("".to_string()));

        assert!(config.public_url.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_base_url_prefers_override() {
        let config = ServerConfig::from_vars(Some("http://localhost:3000".to_string()), None);
        assert_eq!(config.base_url("https://wandb.online"), "http://localhost:3000");

        let config = ServerConfig::from_vars(None, None);
        assert_eq!(config.base_url("https://wandb.online"), "https://wandb.online");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so only the invariants are checked
        let config = ServerConfig::from_env();

        assert!(!config.log_filter.is_empty());
        let _ = config.has_public_url();
    }

    #[test]
    fn test_config_debug() {
        let config = ServerConfig::from_vars(Some("https://wandb.online".to_string()), None);

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("public_url"));
        assert!(debug_str.contains("https://wandb.online"));
    }
}
