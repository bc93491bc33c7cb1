use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Serialization(e.to_string())
    }
}

/// Simulated request latencies, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub save_draft_ms: u64,
    pub publish_ms: u64,
    pub edit_save_ms: u64,
    pub preview_ms: u64,
    pub dashboard_ms: u64,
    pub player_load_ms: u64,
    pub player_retry_ms: u64,
    /// How long a save success message stays visible
    pub save_success_clear_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1500,
            save_draft_ms: 1500,
            publish_ms: 2000,
            edit_save_ms: 2000,
            preview_ms: 1500,
            dashboard_ms: 1000,
            player_load_ms: 800,
            player_retry_ms: 1000,
            save_success_clear_ms: 5000,
        }
    }
}

/// Site-wide settings, loaded from the YAML bundled with the web app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Base URL used for SEO previews
    pub public_base_url: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    /// Slugs that already exist and cannot be reused by a new page
    pub reserved_slugs: Vec<String>,
    pub latency: LatencyConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Enterprise UX Showcase".to_string(),
            public_base_url: "https://enterprise-ux.com".to_string(),
            admin_email: "admin@enterprise-ux.com".to_string(),
            admin_password: "admin123".to_string(),
            admin_name: "Admin User".to_string(),
            reserved_slugs: vec![
                "home-video-gallery".to_string(),
                "full-screen-video-player".to_string(),
                "figma-prototype-display".to_string(),
                "edit-page-content".to_string(),
            ],
            latency: LatencyConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse YAML. Missing keys take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Parse YAML, logging and falling back to defaults on any error.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_yaml(source) {
            Ok(config) => {
                info!("Loaded site config for '{}'", config.site_name);
                config
            }
            Err(e) => {
                warn!("Invalid site config, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.admin_email.trim().is_empty() {
            return Err(ConfigError::Config("admin_email must not be empty".into()));
        }
        if self.admin_password.is_empty() {
            return Err(ConfigError::Config(
                "admin_password must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn is_reserved_slug(&self, slug: &str) -> bool {
        self.reserved_slugs.iter().any(|s| s == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(SiteConfig::from_yaml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "site_name: Demo\nlatency:\n  login_ms: 10\n";
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.site_name, "Demo");
        assert_eq!(config.latency.login_ms, 10);
        assert_eq!(config.latency.publish_ms, 2000);
        assert_eq!(config.admin_email, "admin@enterprise-ux.com");
        assert!(config.is_reserved_slug("home-video-gallery"));
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        match SiteConfig::from_yaml("latency: [1, 2") {
            Err(ConfigError::Serialization(_)) => {}
            other => panic!("Expected serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_credentials_rejected() {
        match SiteConfig::from_yaml("admin_password: ''") {
            Err(ConfigError::Config(msg)) => assert!(msg.contains("admin_password")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = SiteConfig::load_or_default("site_name: [");
        assert_eq!(config, SiteConfig::default());
    }
}
