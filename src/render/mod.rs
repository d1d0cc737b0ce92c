//! Rendering of loaded posts into HTML

pub mod block;
mod highlight;
pub mod page;
pub mod structured_text;

use thiserror::Error;

pub use block::{render_block, UNKNOWN_BLOCK_NOTICE};
pub use highlight::CodeHighlighter;
pub use page::PageRenderer;
pub use structured_text::render_structured_text;

/// Errors raised while rendering a post
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image block {block_id} has no image")]
    MissingAsset { block_id: String },

    #[error("structured text references block {0}, which is not in its block list")]
    UnknownBlockReference(String),

    #[error("structured text is not a valid document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("failed to serialize block: {0}")]
    Dump(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}
