//! `<head>` tag helpers

use indexmap::IndexMap;

use super::html::{escape_text, html_escape};
use crate::content::SeoTag;

/// Merge tag lists into a `key -> content` map
///
/// Lists are walked in order and the first tag seen for a key wins. Tags
/// without attributes map `tag -> content`; the others map
/// `property` (or `name`) to the `content` attribute. Tags with neither,
/// such as favicon links, have no key and are left out.
pub fn merge_meta_tags(lists: &[&[SeoTag]]) -> IndexMap<String, String> {
    let mut merged = IndexMap::new();

    for tag in lists.iter().flat_map(|list| list.iter()) {
        let entry = match &tag.attributes {
            None => Some((tag.tag.clone(), tag.content.clone().unwrap_or_default())),
            Some(_) => tag
                .attribute("property")
                .or_else(|| tag.attribute("name"))
                .map(|key| {
                    let content = tag.attribute("content").unwrap_or_default();
                    (key.to_string(), content.to_string())
                }),
        };

        match entry {
            Some((key, content)) => {
                merged.entry(key).or_insert(content);
            }
            None => tracing::trace!("Skipping <{}> tag without a key", tag.tag),
        }
    }

    merged
}

/// Render a merged meta map as `<title>` and `<meta>` tags
pub fn render_meta_map(meta: &IndexMap<String, String>) -> String {
    meta.iter()
        .map(|(key, content)| {
            if key == "title" {
                format!("<title>{}</title>", escape_text(content))
            } else if key.starts_with("og:") {
                format!(
                    r#"<meta property="{}" content="{}">"#,
                    html_escape(key),
                    html_escape(content)
                )
            } else {
                format!(
                    r#"<meta name="{}" content="{}">"#,
                    html_escape(key),
                    html_escape(content)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render every `<link>` tag with its attributes as given
pub fn render_link_tags(tags: &[SeoTag]) -> String {
    tags.iter()
        .filter(|tag| tag.tag == "link")
        .filter_map(|tag| tag.attributes.as_ref())
        .map(|attributes| {
            let attrs: String = attributes
                .iter()
                .map(|(name, value)| format!(r#" {}="{}""#, html_escape(name), html_escape(value)))
                .collect();
            format!("<link{}>", attrs)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
