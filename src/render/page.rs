//! Full page rendering

use tera::Context;

use super::{render_structured_text, CodeHighlighter, RenderError};
use crate::config::SiteConfig;
use crate::content::{PostPage, RelatedPost, SeoTag};
use crate::helpers::{
    avatar, merge_meta_tags, post_url, render_link_tags, render_meta_map, responsive_image_tag,
    stylesheet_tag, time_tag, url_for,
};
use crate::templates::{ConfigData, PostCardData, PostData, TemplateRenderer};

/// Class shared by every cover image on the page
const COVER_CLASS: &str = "grid__image";

/// Renders post pages and error pages
pub struct PageRenderer {
    config: SiteConfig,
    templates: TemplateRenderer,
    highlighter: CodeHighlighter,
}

impl PageRenderer {
    /// Create a renderer for a site
    pub fn new(config: &SiteConfig) -> Result<Self, RenderError> {
        Ok(Self {
            config: config.clone(),
            templates: TemplateRenderer::new()?,
            highlighter: CodeHighlighter::from_config(&config.highlight),
        })
    }

    /// Render the page of a loaded post
    pub fn render_post(&self, page: &PostPage) -> Result<String, RenderError> {
        let post = &page.post;

        let post_data = PostData {
            title: post.title.clone(),
            date: time_tag(&post.date, &self.config.date_format),
            cover_image: responsive_image_tag(&post.cover_image.responsive_image, COVER_CLASS),
            avatar: avatar(&post.author),
            content: render_structured_text(&post.content, &self.highlighter)?,
        };

        let more_posts: Vec<_> = page
            .more_posts
            .iter()
            .map(|related| self.post_card(related))
            .collect();

        let mut context = self.base_context(&self.head(page));
        context.insert("post", &post_data);
        context.insert("more_posts", &more_posts);

        Ok(self.templates.render("post.html", &context)?)
    }

    /// Render a generic error page
    pub fn render_error(&self, heading: &str, message: &str) -> Result<String, RenderError> {
        let title = SeoTag::content("title", heading);
        let head = render_meta_map(&merge_meta_tags(&[std::slice::from_ref(&title)]));

        let mut context = self.base_context(&head);
        context.insert("heading", heading);
        context.insert("message", message);

        Ok(self.templates.render("error.html", &context)?)
    }

    /// `<head>` directives: merged SEO and favicon tags, then favicon links
    fn head(&self, page: &PostPage) -> String {
        let mut meta = merge_meta_tags(&[page.post.seo.as_slice(), page.site.favicon.as_slice()]);
        if let Some(og_image) = &page.post.og_image {
            meta.entry("og:image".to_string())
                .or_insert_with(|| og_image.url.clone());
        }

        let links = render_link_tags(&page.site.favicon);
        if links.is_empty() {
            render_meta_map(&meta)
        } else {
            format!("{}\n{}", render_meta_map(&meta), links)
        }
    }

    fn post_card(&self, related: &RelatedPost) -> PostCardData {
        PostCardData {
            title: related.title.clone(),
            path: post_url(&self.config, &related.slug),
            date: time_tag(&related.date, &self.config.date_format),
            excerpt: related.excerpt.clone().unwrap_or_default(),
            cover_image: responsive_image_tag(&related.cover_image.responsive_image, COVER_CLASS),
            avatar: avatar(&related.author),
        }
    }

    fn base_context(&self, head: &str) -> Context {
        let stylesheets: Vec<_> = self
            .config
            .stylesheets
            .iter()
            .map(|href| stylesheet_tag(&url_for(&self.config, href)))
            .collect();

        let mut context = Context::new();
        context.insert(
            "config",
            &ConfigData {
                title: self.config.title.clone(),
                root: url_for(&self.config, ""),
                language: self.config.language.clone(),
            },
        );
        context.insert("head", head);
        context.insert("stylesheets", &stylesheets);
        context
    }
}
