//! Structured text (dast) to HTML

use serde::Deserialize;

use super::{render_block, CodeHighlighter, RenderError};
use crate::content::StructuredText;
use crate::helpers::{escape_text, html_escape};

/// Link meta entries copied onto the `<a>` tag
const LINK_ATTRIBUTES: [&str; 3] = ["target", "rel", "title"];

/// Top level of a structured text value
#[derive(Debug, Deserialize)]
struct Document {
    document: Node,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum Node {
    Root {
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        style: ListStyle,
        #[serde(default)]
        children: Vec<Node>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    Blockquote {
        #[serde(default)]
        attribution: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Code {
        code: String,
        #[serde(default)]
        language: Option<String>,
    },
    ThematicBreak,
    Block {
        item: String,
    },
    InlineBlock {
        item: String,
    },
    Span {
        value: String,
        #[serde(default)]
        marks: Vec<Mark>,
    },
    Link {
        url: String,
        #[serde(default)]
        meta: Vec<MetaEntry>,
        #[serde(default)]
        children: Vec<Node>,
    },
    ItemLink {
        #[serde(default)]
        children: Vec<Node>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ListStyle {
    Bulleted,
    Numbered,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Mark {
    Strong,
    Emphasis,
    Underline,
    Strikethrough,
    Code,
    Highlight,
    #[serde(other)]
    Other,
}

impl Mark {
    fn tag(self) -> Option<&'static str> {
        match self {
            Mark::Strong => Some("strong"),
            Mark::Emphasis => Some("em"),
            Mark::Underline => Some("u"),
            Mark::Strikethrough => Some("s"),
            Mark::Code => Some("code"),
            Mark::Highlight => Some("mark"),
            Mark::Other => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MetaEntry {
    id: String,
    value: String,
}

/// Render a structured text field, embedded blocks included
///
/// A `null` value renders as empty content.
pub fn render_structured_text(
    text: &StructuredText,
    highlighter: &CodeHighlighter,
) -> Result<String, RenderError> {
    if text.value.is_null() {
        return Ok(String::new());
    }

    let document = Document::deserialize(&text.value).map_err(RenderError::InvalidDocument)?;

    let renderer = NodeRenderer { text, highlighter };
    let mut out = String::new();
    renderer.node(&document.document, &mut out)?;
    Ok(out)
}

struct NodeRenderer<'a> {
    text: &'a StructuredText,
    highlighter: &'a CodeHighlighter,
}

impl NodeRenderer<'_> {
    fn node(&self, node: &Node, out: &mut String) -> Result<(), RenderError> {
        match node {
            Node::Root { children } => self.children(children, out)?,
            Node::Paragraph { children } => self.wrap("p", children, out)?,
            Node::Heading { level, children } => {
                let tag = format!("h{}", (*level).clamp(1, 6));
                self.wrap(&tag, children, out)?;
            }
            Node::List { style, children } => {
                let tag = match style {
                    ListStyle::Bulleted => "ul",
                    ListStyle::Numbered => "ol",
                };
                self.wrap(tag, children, out)?;
            }
            Node::ListItem { children } => self.wrap("li", children, out)?,
            Node::Blockquote {
                attribution,
                children,
            } => {
                out.push_str("<blockquote>");
                self.children(children, out)?;
                if let Some(attribution) = attribution {
                    out.push_str("<footer>");
                    out.push_str(&escape_text(attribution));
                    out.push_str("</footer>");
                }
                out.push_str("</blockquote>");
            }
            Node::Code { code, language } => {
                out.push_str(&self.highlighter.highlight(code, language.as_deref()));
            }
            Node::ThematicBreak => out.push_str("<hr>"),
            Node::Block { item } | Node::InlineBlock { item } => {
                let block = self
                    .text
                    .block(item)
                    .ok_or_else(|| RenderError::UnknownBlockReference(item.clone()))?;
                out.push_str(&render_block(block)?);
            }
            Node::Span { value, marks } => out.push_str(&render_span(value, marks)),
            Node::Link {
                url,
                meta,
                children,
            } => {
                out.push_str(&format!(r#"<a href="{}""#, html_escape(url)));
                for entry in meta {
                    if LINK_ATTRIBUTES.contains(&entry.id.as_str()) {
                        out.push_str(&format!(
                            r#" {}="{}""#,
                            entry.id,
                            html_escape(&entry.value)
                        ));
                    }
                }
                out.push('>');
                self.children(children, out)?;
                out.push_str("</a>");
            }
            // Linked records are not part of the query, keep the link text
            Node::ItemLink { children } => self.children(children, out)?,
            Node::Unsupported => tracing::debug!("Skipping unsupported structured text node"),
        }
        Ok(())
    }

    fn children(&self, children: &[Node], out: &mut String) -> Result<(), RenderError> {
        for child in children {
            self.node(child, out)?;
        }
        Ok(())
    }

    fn wrap(&self, tag: &str, children: &[Node], out: &mut String) -> Result<(), RenderError> {
        out.push_str(&format!("<{}>", tag));
        self.children(children, out)?;
        out.push_str(&format!("</{}>", tag));
        Ok(())
    }
}

/// Escape span text, turn newlines into `<br>` and apply marks innermost first
fn render_span(value: &str, marks: &[Mark]) -> String {
    let mut html = escape_text(value).replace('\n', "<br>");
    for tag in marks.iter().filter_map(|mark| mark.tag()) {
        html = format!("<{tag}>{html}</{tag}>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn text(children: Value, blocks: Value) -> StructuredText {
        serde_json::from_value(json!({
            "value": { "schema": "dast", "document": { "type": "root", "children": children } },
            "blocks": blocks
        }))
        .unwrap()
    }

    fn render(children: Value) -> String {
        render_structured_text(&text(children, json!([])), &CodeHighlighter::new()).unwrap()
    }

    fn span(value: &str) -> Value {
        json!({ "type": "span", "value": value })
    }

    #[test]
    fn test_paragraphs_and_headings() {
        let html = render(json!([
            { "type": "heading", "level": 2, "children": [span("Title")] },
            { "type": "paragraph", "children": [span("a < b")] }
        ]));
        assert_eq!(html, "<h2>Title</h2><p>a &lt; b</p>");
    }

    #[test]
    fn test_lists() {
        let html = render(json!([
            { "type": "list", "style": "numbered", "children": [
                { "type": "listItem", "children": [{ "type": "paragraph", "children": [span("one")] }] }
            ]},
            { "type": "list", "style": "bulleted", "children": [] }
        ]));
        assert_eq!(html, "<ol><li><p>one</p></li></ol><ul></ul>");
    }

    #[test]
    fn test_span_marks_and_breaks() {
        let html = render(json!([
            { "type": "paragraph", "children": [
                { "type": "span", "value": "bold", "marks": ["strong", "emphasis"] },
                { "type": "span", "value": "line\nbreak", "marks": ["custom"] }
            ]}
        ]));
        assert_eq!(html, "<p><em><strong>bold</strong></em>line<br>break</p>");
    }

    #[test]
    fn test_links() {
        let html = render(json!([
            { "type": "paragraph", "children": [
                { "type": "link", "url": "https://example.com/?a=1&b=2",
                  "meta": [{ "id": "target", "value": "_blank" }, { "id": "onclick", "value": "x" }],
                  "children": [span("site")] },
                { "type": "itemLink", "item": "42", "children": [span(" record")] },
                { "type": "inlineItem", "item": "43" }
            ]}
        ]));
        assert_eq!(
            html,
            r#"<p><a href="https://example.com/?a=1&amp;b=2" target="_blank">site</a> record</p>"#
        );
    }

    #[test]
    fn test_blockquote_and_break() {
        let html = render(json!([
            { "type": "blockquote", "attribution": "Someone", "children": [
                { "type": "paragraph", "children": [span("quoted")] }
            ]},
            { "type": "thematicBreak" }
        ]));
        assert_eq!(
            html,
            "<blockquote><p>quoted</p><footer>Someone</footer></blockquote><hr>"
        );
    }

    #[test]
    fn test_code_node() {
        let html = render(json!([{ "type": "code", "code": "let x = 1;", "language": "rust" }]));
        assert!(html.starts_with("<pre"));
        assert!(html.contains("let"));
    }

    #[test]
    fn test_blocks_are_resolved_by_id() {
        let text = text(
            json!([
                { "type": "block", "item": "b2" },
                { "type": "block", "item": "b1" }
            ]),
            json!([
                { "__typename": "ImageBlockRecord", "id": "b1",
                  "image": { "responsiveImage": { "srcSet": "a 1x", "sizes": "100vw", "src": "a.jpg" } } },
                { "__typename": "VideoBlockRecord", "id": "b2", "url": "v.mp4" }
            ]),
        );
        let html = render_structured_text(&text, &CodeHighlighter::new()).unwrap();

        let notice = html.find("Don't know how to render a block!").unwrap();
        let image = html.find(r#"srcset="a 1x" sizes="100vw" src="a.jpg""#).unwrap();
        assert!(notice < image);
    }

    #[test]
    fn test_missing_block_reference() {
        let text = text(json!([{ "type": "block", "item": "zzz" }]), json!([]));
        match render_structured_text(&text, &CodeHighlighter::new()) {
            Err(RenderError::UnknownBlockReference(id)) => assert_eq!(id, "zzz"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_nodes_are_skipped() {
        let html = render(json!([
            { "type": "somethingNew", "children": [span("hidden")] },
            { "type": "paragraph", "children": [span("shown")] }
        ]));
        assert_eq!(html, "<p>shown</p>");
    }

    #[test]
    fn test_invalid_document() {
        let text = StructuredText {
            value: json!({ "schema": "dast" }),
            blocks: Vec::new(),
        };
        assert!(matches!(
            render_structured_text(&text, &CodeHighlighter::new()),
            Err(RenderError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_null_value_is_empty() {
        let text = StructuredText {
            value: Value::Null,
            blocks: Vec::new(),
        };
        assert_eq!(
            render_structured_text(&text, &CodeHighlighter::new()).unwrap(),
            ""
        );
    }
}
