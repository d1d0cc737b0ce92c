//! Content module - post models and loading them from the content service

mod block;
pub mod client;
pub mod loader;
mod post;
pub mod query;

pub use block::{Block, ImageAsset, ImageBlock, UnknownBlock, IMAGE_BLOCK_TYPENAME};
pub use client::{ContentService, DatoClient};
pub use loader::{ContentLoader, LoadError};
pub(crate) use post::PostBySlugData;
pub use post::{
    parse_date, Author, CoverImage, OgImage, Picture, Post, PostPage, RelatedPost, ResponsiveImage,
    SeoTag, Site, StructuredText,
};
