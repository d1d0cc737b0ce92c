//! The fixed GraphQL query behind the post page

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// Number of related posts shown under a post
pub const MORE_POSTS_LIMIT: usize = 2;

/// Image transformation parameters passed to the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImgixParams {
    /// Output format
    pub fm: &'static str,
    /// Crop mode
    pub fit: &'static str,
    pub w: u32,
    pub h: u32,
    /// Saturation adjustment, -100 for greyscale
    pub sat: Option<i32>,
}

/// Cover images and images embedded in content
pub const COVER_IMAGE: ImgixParams = ImgixParams {
    fm: "jpg",
    fit: "crop",
    w: 2000,
    h: 1000,
    sat: None,
};

/// Author avatars
pub const AUTHOR_PICTURE: ImgixParams = ImgixParams {
    fm: "jpg",
    fit: "crop",
    w: 100,
    h: 100,
    sat: Some(-100),
};

impl fmt::Display for ImgixParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{fm: {}, fit: {}, w: {}, h: {}",
            self.fm, self.fit, self.w, self.h
        )?;
        if let Some(sat) = self.sat {
            write!(f, ", sat: {}", sat)?;
        }
        write!(f, "}}")
    }
}

/// Fields requested for every responsive image
pub const RESPONSIVE_IMAGE_FRAGMENT: &str = r#"
fragment responsiveImageFragment on ResponsiveImage {
  srcSet
  webpSrcSet
  sizes
  src
  width
  height
  aspectRatio
  alt
  title
  base64
}
"#;

/// Fields requested for every SEO/favicon tag
pub const META_TAGS_FRAGMENT: &str = r#"
fragment metaTagsFragment on Tag {
  attributes
  content
  tag
}
"#;

/// A GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
}

/// Text of the `PostBySlug` query, fragments included
pub fn post_by_slug_query() -> String {
    format!(
        r#"query PostBySlug($slug: String) {{
  site: _site {{
    favicon: faviconMetaTags {{
      ...metaTagsFragment
    }}
  }}
  post(filter: {{slug: {{eq: $slug}}}}) {{
    seo: _seoMetaTags {{
      ...metaTagsFragment
    }}
    title
    slug
    content {{
      value
      blocks {{
        __typename
        ...on ImageBlockRecord {{
          id
          image {{
            responsiveImage(imgixParams: {cover}) {{
              ...responsiveImageFragment
            }}
          }}
        }}
      }}
    }}
    date
    ogImage: coverImage {{
      url(imgixParams: {cover})
    }}
    coverImage {{
      responsiveImage(imgixParams: {cover}) {{
        ...responsiveImageFragment
      }}
    }}
    author {{
      name
      picture {{
        url(imgixParams: {avatar})
      }}
    }}
  }}
  morePosts: allPosts(orderBy: date_DESC, first: {limit}, filter: {{slug: {{neq: $slug}}}}) {{
    title
    slug
    excerpt
    date
    coverImage {{
      responsiveImage(imgixParams: {cover}) {{
        ...responsiveImageFragment
      }}
    }}
    author {{
      name
      picture {{
        url(imgixParams: {avatar})
      }}
    }}
  }}
}}
{responsive}{meta}"#,
        cover = COVER_IMAGE,
        avatar = AUTHOR_PICTURE,
        limit = MORE_POSTS_LIMIT,
        responsive = RESPONSIVE_IMAGE_FRAGMENT,
        meta = META_TAGS_FRAGMENT,
    )
}

/// Build the request for one post
pub fn post_by_slug(slug: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: post_by_slug_query(),
        variables: json!({ "slug": slug }),
    }
}
