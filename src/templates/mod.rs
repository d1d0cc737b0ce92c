//! Built-in page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Fragments such as images, dates and
//! structured text are rendered to HTML before they reach a template, so
//! autoescaping is off and plain strings go through `escape_html`.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Template renderer with the embedded blog templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("post.html", include_str!("blog/post.html")),
            ("error.html", include_str!("blog/error.html")),
        ])?;

        tera.register_filter("escape_html", escape_html_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Tera filter: escape HTML special characters
fn escape_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_html", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub root: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    /// Pre-rendered `<time>` element
    pub date: String,
    /// Pre-rendered `<img>` element
    pub cover_image: String,
    pub avatar: String,
    /// Pre-rendered structured text
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCardData {
    pub title: String,
    pub path: String,
    pub date: String,
    pub excerpt: String,
    pub cover_image: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConfigData {
        ConfigData {
            title: "Blog.".to_string(),
            root: "/".to_string(),
            language: "en".to_string(),
        }
    }

    #[test]
    fn test_escape_html_filter() {
        let value = tera::Value::String("<b>\"x\"</b>".to_string());
        let escaped = escape_html_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(escaped, "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_render_error_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("config", &config());
        context.insert("head", "<title>Oops</title>");
        context.insert("stylesheets", &Vec::<String>::new());
        context.insert("heading", "Not found");
        context.insert("message", "No post <here>");

        let html = renderer.render("error.html", &context).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Oops</title>"));
        assert!(html.contains(r#"<h1 class="title">Not found</h1>"#));
        assert!(html.contains("No post &lt;here&gt;"));
    }
}
