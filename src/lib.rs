//! cms-blog: blog post pages rendered from a headless content service
//!
//! Posts are fetched from a GraphQL content API with one fixed query and
//! rendered to HTML with embedded Tera templates, either on request by the
//! built-in server or once from the command line.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static assets served under `/assets`
    pub static_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            config::SiteConfig::default()
        };

        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            static_dir,
        })
    }

    /// Client for the configured content service
    pub fn client(&self) -> Result<content::DatoClient> {
        Ok(content::DatoClient::from_config(&self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Blog.");
        assert_eq!(blog.static_dir, dir.path().join("public"));
    }

    #[test]
    fn test_new_with_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "title: Notes\nstatic_dir: static\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Notes");
        assert_eq!(blog.static_dir, dir.path().join("static"));
    }
}
