//! Content loader - fetches everything a post page needs

use thiserror::Error;

use super::client::ContentService;
use super::post::{PostBySlugData, PostPage};
use super::query;

/// Errors raised while loading a post
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("expected a post slug")]
    MissingSlug,

    #[error("no API token configured (set `api_token` or ${0})")]
    MissingToken(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("content service returned no data")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("post not found: {0}")]
    PostNotFound(String),
}

/// Loads post pages through a content service
pub struct ContentLoader<S> {
    service: S,
}

impl<S: ContentService> ContentLoader<S> {
    /// Create a new content loader
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Load a post, its two most recent siblings and the site tags
    ///
    /// An absent or empty slug fails before the service is called.
    pub async fn load(&self, slug: Option<&str>) -> Result<PostPage, LoadError> {
        let slug = slug
            .filter(|slug| !slug.is_empty())
            .ok_or(LoadError::MissingSlug)?;

        tracing::debug!("Loading post {:?}", slug);
        let request = query::post_by_slug(slug);
        let data = self.service.execute(&request).await?;

        let data: PostBySlugData = serde_json::from_value(data)?;
        let post = data
            .post
            .ok_or_else(|| LoadError::PostNotFound(slug.to_string()))?;

        tracing::debug!(
            "Loaded post {:?} with {} blocks and {} related posts",
            post.slug,
            post.content.blocks.len(),
            data.more_posts.len()
        );

        Ok(PostPage {
            site: data.site,
            post,
            more_posts: data.more_posts,
        })
    }
}
