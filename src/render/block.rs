//! Rendering of blocks embedded in structured text

use super::RenderError;
use crate::content::Block;
use crate::helpers::{escape_text, responsive_image_tag};

/// Shown above the dump of a block that has no rendering
pub const UNKNOWN_BLOCK_NOTICE: &str = "Don't know how to render a block!";

/// Render one embedded block
///
/// Image blocks become a responsive `<img>`. Every other record type renders
/// a notice followed by a pretty-printed dump of the whole record.
pub fn render_block(block: &Block) -> Result<String, RenderError> {
    match block {
        Block::Image(image) => {
            let rendering = image
                .responsive_image()
                .ok_or_else(|| RenderError::MissingAsset {
                    block_id: image.id.clone(),
                })?;
            Ok(responsive_image_tag(rendering, "grid__image"))
        }
        Block::Unknown(other) => {
            tracing::debug!("No rendering for block type {}", other.typename);
            let dump = serde_json::to_string_pretty(&other.payload)?;
            Ok(format!(
                "<p>{}</p>\n<pre>{}</pre>",
                UNKNOWN_BLOCK_NOTICE,
                escape_text(&dump)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn block(value: Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    /// Undo `escape_text` on the `<pre>` contents
    fn dumped_payload(html: &str) -> Value {
        let start = html.find("<pre>").unwrap() + "<pre>".len();
        let end = html.rfind("</pre>").unwrap();
        let text = html[start..end]
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&");
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_image_block() {
        let html = render_block(&block(json!({
            "__typename": "ImageBlockRecord",
            "id": "b1",
            "image": { "responsiveImage": { "srcSet": "a 1x", "sizes": "100vw", "src": "a.jpg" } }
        })))
        .unwrap();

        assert!(html.contains(r#"srcset="a 1x" sizes="100vw" src="a.jpg""#));
        assert!(html.starts_with("<img "));
        assert!(!html.contains(UNKNOWN_BLOCK_NOTICE));
    }

    #[test]
    fn test_image_block_without_asset() {
        let result = render_block(&block(json!({
            "__typename": "ImageBlockRecord",
            "id": "b1",
            "image": null
        })));
        match result {
            Err(RenderError::MissingAsset { block_id }) => assert_eq!(block_id, "b1"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_block() {
        let raw = json!({ "__typename": "VideoBlockRecord", "id": "b2", "url": "v.mp4" });
        let html = render_block(&block(raw.clone())).unwrap();

        assert!(html.contains("<p>Don't know how to render a block!</p>"));
        assert!(html.contains(r#""url": "v.mp4""#));
        assert_eq!(dumped_payload(&html), raw);
    }

    #[test]
    fn test_unknown_block_dump_round_trips_markup() {
        let raw = json!({
            "__typename": "QuoteBlockRecord",
            "id": "b3",
            "text": "<script>alert('x & y')</script>",
            "nested": { "list": [1, 2, { "deep": true }] }
        });
        let html = render_block(&block(raw.clone())).unwrap();

        assert!(!html.contains("<script>"));
        assert_eq!(dumped_payload(&html), raw);
    }

    #[test]
    fn test_dump_is_pretty_printed() {
        let html = render_block(&block(json!({ "__typename": "X", "id": "b4" }))).unwrap();
        assert!(html.contains("{\n  \"__typename\": \"X\",\n  \"id\": \"b4\"\n}"));
    }
}
