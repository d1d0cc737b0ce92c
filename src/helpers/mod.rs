//! Helper functions for page rendering
//!
//! Small HTML, date, URL and `<head>` builders shared by the renderers.

mod date;
mod html;
mod meta;
mod url;

pub use date::*;
pub use html::*;
pub use meta::*;
pub use url::*;
