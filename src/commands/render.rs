//! Render one post page from the command line

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{ContentLoader, ContentService};
use crate::render::PageRenderer;
use crate::Blog;

/// Load and render a post page
pub async fn render_to_string<S: ContentService>(blog: &Blog, service: S, slug: &str) -> Result<String> {
    let renderer = PageRenderer::new(&blog.config)?;
    let loader = ContentLoader::new(service);

    let page = loader.load(Some(slug)).await?;
    tracing::info!("Rendering {:?} ({} related posts)", page.post.title, page.more_posts.len());
    Ok(renderer.render_post(&page)?)
}

/// Render a post page to a file, or to stdout when no output is given
pub async fn run<S: ContentService>(
    blog: &Blog,
    service: S,
    slug: &str,
    output: Option<&Path>,
) -> Result<()> {
    let html = render_to_string(blog, service, slug).await?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
