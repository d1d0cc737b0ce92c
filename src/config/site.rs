//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default GraphQL endpoint of the content service
pub const DEFAULT_ENDPOINT: &str = "https://graphql.datocms.com/";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    pub root: String,

    // Content service
    pub endpoint: String,
    pub api_token: Option<String>,
    pub api_token_env: String,
    pub environment: Option<String>,
    pub include_drafts: bool,

    // Rendering
    pub date_format: String,
    pub static_dir: String,
    pub stylesheets: Vec<String>,
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog.".to_string(),
            language: "en".to_string(),
            root: "/".to_string(),

            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            api_token_env: "DATOCMS_API_TOKEN".to_string(),
            environment: None,
            include_drafts: false,

            date_format: "MMMM D, YYYY".to_string(),
            static_dir: "public".to_string(),
            stylesheets: vec!["/assets/index.css".to_string()],
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// API token from the config file, or from the configured environment variable
    pub fn api_token(&self) -> Option<String> {
        self.api_token
            .clone()
            .filter(|token| !token.is_empty())
            .or_else(|| std::env::var(&self.api_token_env).ok())
            .filter(|token| !token.is_empty())
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Blog.");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.date_format, "MMMM D, YYYY");
        assert!(!config.include_drafts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
api_token: secret
environment: staging
highlight:
  theme: InspiredGitHub
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.api_token(), Some("secret".to_string()));
        assert_eq!(config.environment.as_deref(), Some("staging"));
        assert_eq!(config.highlight.theme, "InspiredGitHub");
        assert!(!config.highlight.line_number);
        assert_eq!(config.stylesheets, vec!["/assets/index.css".to_string()]);
    }

    #[test]
    fn test_api_token_from_env() {
        let config = SiteConfig {
            api_token_env: "CMS_BLOG_TEST_TOKEN_FROM_ENV".to_string(),
            ..SiteConfig::default()
        };
        std::env::set_var("CMS_BLOG_TEST_TOKEN_FROM_ENV", "from-env");
        assert_eq!(config.api_token(), Some("from-env".to_string()));
        std::env::remove_var("CMS_BLOG_TEST_TOKEN_FROM_ENV");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: From File\ninclude_drafts: true\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From File");
        assert!(config.include_drafts);
        assert_eq!(config.language, "en");
        assert_eq!(config.stylesheets, vec!["/assets/index.css".to_string()]);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
    }
}
