//! Post models as returned by the `PostBySlug` query

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Block;

/// Everything a post page needs, loaded in one query
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub site: Site,
    pub post: Post,
    pub more_posts: Vec<RelatedPost>,
}

/// Raw `data` object of the query response, before the post is checked for presence
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostBySlugData {
    pub site: Site,
    pub post: Option<Post>,
    #[serde(default)]
    pub more_posts: Vec<RelatedPost>,
}

/// Site-wide settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Site {
    /// Favicon link/meta tags
    #[serde(default)]
    pub favicon: Vec<SeoTag>,
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// SEO tags generated by the content service
    #[serde(default)]
    pub seo: Vec<SeoTag>,

    pub title: String,

    pub slug: String,

    /// Rich content
    pub content: StructuredText,

    /// Publication date
    #[serde(with = "post_date")]
    pub date: NaiveDate,

    /// Plain URL of the cover image, used for social previews
    pub og_image: Option<OgImage>,

    pub cover_image: CoverImage,

    pub author: Author,
}

/// A post shown in the "More posts" list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    #[serde(with = "post_date")]
    pub date: NaiveDate,
    pub cover_image: CoverImage,
    pub author: Author,
}

/// Structured text field: a document tree plus the records embedded in it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredText {
    /// The document tree, kept as received
    pub value: serde_json::Value,

    /// Blocks referenced from `value` by id
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl StructuredText {
    /// Find an embedded block by id
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == Some(id))
    }
}

/// Cover image of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub responsive_image: ResponsiveImage,
}

/// Cover image rendered as a single URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
}

/// An image in several resolutions plus layout hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveImage {
    pub src_set: String,
    #[serde(default)]
    pub webp_src_set: Option<String>,
    pub sizes: String,
    pub src: String,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub base64: Option<String>,
}

/// Post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub picture: Picture,
}

/// Author picture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
}

/// A single `<head>` directive (title, meta or link)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoTag {
    /// HTML tag name: `title`, `meta` or `link`
    pub tag: String,

    /// Inner content, only set for tags without attributes
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub attributes: Option<IndexMap<String, String>>,
}

impl SeoTag {
    /// Create a tag carrying only inner content, such as `<title>`
    pub fn content(tag: &str, content: &str) -> Self {
        Self {
            tag: tag.to_string(),
            content: Some(content.to_string()),
            attributes: None,
        }
    }

    /// Create a tag from attribute pairs
    pub fn with_attributes(tag: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_string(),
            content: None,
            attributes: Some(
                attributes
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    /// Look up a single attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }
}

/// Post dates arrive either as plain dates or as full timestamps
mod post_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
    }
}

/// Parse a `YYYY-MM-DD` date or an RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
