//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default `_config.yml` written by `init`
const CONFIG_TEMPLATE: &str = r#"# cms-blog configuration

# Site
title: Blog.
language: en
root: /

# Content service
endpoint: https://graphql.datocms.com/
# Read-only API token. Leave empty to read it from `api_token_env`.
api_token:
api_token_env: DATOCMS_API_TOKEN
# Sandbox environment to query instead of the primary one
environment:
include_drafts: false

# Rendering
date_format: MMMM D, YYYY
static_dir: public
stylesheets:
  - /assets/index.css
highlight:
  theme: base16-ocean.dark
  line_number: false
"#;

/// Starter stylesheet for the classes used by the page templates
const STYLESHEET_TEMPLATE: &str = r#".container { max-width: 64rem; margin: 0 auto; padding: 0 1rem; }
.section { margin: 2rem 0; }
.section--narrow { max-width: 42rem; margin: 2rem auto; }
.section__title { font-size: 1.5rem; font-weight: 700; }
.title { font-size: 3rem; line-height: 1.1; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 2rem; list-style: none; padding: 0; }
.grid__link { color: inherit; text-decoration: none; }
.grid__image { width: 100%; height: auto; }
.grid__title { font-size: 1.25rem; font-weight: 600; }
.date { color: #666; }
.avatar { display: flex; align-items: center; gap: 0.75rem; }
.avatar__img { width: 3rem; height: 3rem; border-radius: 50%; }
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("public"))?;

    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;
    write_if_missing(&target_dir.join("public/index.css"), STYLESHEET_TEMPLATE)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_init_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("public/index.css").exists());
        let config = SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.title, defaults.title);
        assert_eq!(config.endpoint, defaults.endpoint);
        assert_eq!(config.api_token, None);
        assert_eq!(config.stylesheets, defaults.stylesheets);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Mine\n").unwrap();

        init_site(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join("_config.yml")).unwrap();
        assert_eq!(content, "title: Mine\n");
    }
}
