//! HTTP server rendering post pages on request

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{ContentLoader, ContentService, LoadError};
use crate::render::{PageRenderer, RenderError};
use crate::Blog;

/// Shared, read-only state of the server
pub struct AppState<S> {
    loader: ContentLoader<S>,
    renderer: PageRenderer,
    static_dir: PathBuf,
}

impl<S: ContentService> AppState<S> {
    pub fn new(blog: &Blog, service: S) -> Result<Self> {
        Ok(Self {
            loader: ContentLoader::new(service),
            renderer: PageRenderer::new(&blog.config)?,
            static_dir: blog.static_dir.clone(),
        })
    }

    /// Load and render one post page
    pub async fn render_post(&self, slug: Option<&str>) -> Result<String, PageError> {
        let page = self.loader.load(slug).await?;
        Ok(self.renderer.render_post(&page)?)
    }

    fn error_page(&self, status: StatusCode, heading: &str, message: &str) -> Response {
        match self.renderer.render_error(heading, message) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, heading.to_string()).into_response()
            }
        }
    }
}

/// Why a page could not be produced
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Build the router
pub fn router<S: ContentService + 'static>(state: Arc<AppState<S>>) -> Router {
    let mut app = Router::new()
        .route("/posts/:slug", get(post_handler::<S>))
        .route("/posts", get(missing_slug_handler::<S>))
        .route("/posts/", get(missing_slug_handler::<S>));

    if state.static_dir.is_dir() {
        app = app.nest_service("/assets", ServeDir::new(&state.static_dir));
    }

    app.fallback(not_found_handler::<S>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start<S: ContentService + 'static>(
    blog: &Blog,
    service: S,
    ip: &str,
    port: u16,
) -> Result<()> {
    let state = Arc::new(AppState::new(blog, service)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn post_handler<S: ContentService + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(slug): Path<String>,
) -> Response {
    respond(&state, Some(&slug)).await
}

async fn missing_slug_handler<S: ContentService + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Response {
    respond(&state, None).await
}

async fn not_found_handler<S: ContentService + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Response {
    state.error_page(StatusCode::NOT_FOUND, "Not Found", "There is no page here.")
}

/// Render a post, or the error page for whatever went wrong
async fn respond<S: ContentService>(state: &AppState<S>, slug: Option<&str>) -> Response {
    match state.render_post(slug).await {
        Ok(html) => Html(html).into_response(),
        Err(PageError::Load(LoadError::PostNotFound(slug))) => {
            tracing::info!("Post not found: {}", slug);
            state.error_page(StatusCode::NOT_FOUND, "Not Found", "This post does not exist.")
        }
        Err(e) => {
            tracing::error!("Failed to render post {:?}: {}", slug, e);
            state.error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Application Error",
                "Something went wrong while rendering this page.",
            )
        }
    }
}
