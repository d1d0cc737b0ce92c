//! HTML helper functions

use crate::content::{Author, ResponsiveImage};

/// Escape HTML special characters for use in attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape text content; quotes are left alone
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Generate an `<img>` tag carrying every candidate of a responsive image
///
/// # Examples
/// ```ignore
/// responsive_image_tag(&image, "grid__image")
/// // -> <img class="grid__image" srcset="a 1x" sizes="100vw" src="a.jpg">
/// ```
pub fn responsive_image_tag(image: &ResponsiveImage, class: &str) -> String {
    let alt_attr = image
        .alt
        .as_deref()
        .map(|alt| format!(r#" alt="{}""#, html_escape(alt)))
        .unwrap_or_default();

    format!(
        r#"<img class="{}" srcset="{}" sizes="{}" src="{}"{}>"#,
        html_escape(class),
        html_escape(&image.src_set),
        html_escape(&image.sizes),
        html_escape(&image.src),
        alt_attr
    )
}

/// Generate the author avatar: picture plus name
pub fn avatar(author: &Author) -> String {
    format!(
        r#"<div class="avatar"><img class="avatar__img" src="{}" alt="{}"><div class="avatar__name">{}</div></div>"#,
        html_escape(&author.picture.url),
        html_escape(&author.name),
        escape_text(&author.name)
    )
}

/// Generate a stylesheet link tag
pub fn stylesheet_tag(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(href))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Picture;

    fn image() -> ResponsiveImage {
        ResponsiveImage {
            src_set: "a.jpg?w=100 100w, a.jpg?w=200 200w".to_string(),
            webp_src_set: None,
            sizes: "(max-width: 200px) 100vw, 200px".to_string(),
            src: "a.jpg?w=200&h=100".to_string(),
            width: Some(200.0),
            height: Some(100.0),
            aspect_ratio: Some(2.0),
            alt: None,
            title: None,
            base64: None,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(html_escape(r#"<a href="x">'"#), "&lt;a href=&quot;x&quot;&gt;&#39;");
        assert_eq!(escape_text(r#"Don't "quote" <b>"#), r#"Don't "quote" &lt;b&gt;"#);
    }

    #[test]
    fn test_responsive_image_tag() {
        let tag = responsive_image_tag(&image(), "grid__image");
        assert_eq!(
            tag,
            r#"<img class="grid__image" srcset="a.jpg?w=100 100w, a.jpg?w=200 200w" sizes="(max-width: 200px) 100vw, 200px" src="a.jpg?w=200&amp;h=100">"#
        );
    }

    #[test]
    fn test_responsive_image_tag_with_alt() {
        let mut image = image();
        image.alt = Some("A \"cat\"".to_string());
        assert!(responsive_image_tag(&image, "x").ends_with(r#" alt="A &quot;cat&quot;">"#));
    }

    #[test]
    fn test_avatar() {
        let author = Author {
            name: "Ann & Co".to_string(),
            picture: Picture {
                url: "https://img/ann.jpg".to_string(),
            },
        };
        let html = avatar(&author);
        assert!(html.contains(r#"src="https://img/ann.jpg""#));
        assert!(html.contains(r#"<div class="avatar__name">Ann &amp; Co</div>"#));
    }
}
