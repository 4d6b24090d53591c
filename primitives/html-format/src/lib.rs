//! HTML Format - Plain Text to HTML
//!
//! Turns free text into HTML that is safe to hand to a chat service: literal
//! text is escaped, and anything that looks like a URL becomes a link.
//!
//! # Usage
//!
//! ```
//! use html_format::{InputFormat, plain_text_to_html};
//!
//! let html = plain_text_to_html("5 < 10, see http://example.com/thing");
//! assert_eq!(
//!     html,
//!     r#"5 &lt; 10, see <a href="http://example.com/thing">http://example.com/thing</a>"#
//! );
//!
//! // Input that is already HTML passes through untouched.
//! assert_eq!(InputFormat::Html.render("<b>hi</b>"), "<b>hi</b>");
//! ```

mod url;

use std::borrow::Cow;

pub use url::{UrlMatch, find_url, url_matches};

/// How the caller's text should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Plain text; escape it and link URLs.
    #[default]
    Plain,
    /// Already HTML; use it as is.
    Html,
}

impl InputFormat {
    /// Produces the HTML body for `text`.
    pub fn render(self, text: &str) -> Cow<'_, str> {
        match self {
            InputFormat::Plain => Cow::Owned(plain_text_to_html(text)),
            InputFormat::Html => Cow::Borrowed(text),
        }
    }
}

/// Escapes `&`, `<`, `>`, `'` and `"`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }
}

/// Converts plain text to HTML.
///
/// Text between URLs is escaped exactly once. Each URL is copied verbatim
/// into `<a href="URL">URL</a>`.
pub fn plain_text_to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut cursor = 0;

    for m in url_matches(text) {
        push_escaped(&mut out, &text[cursor..m.start]);
        let link = m.as_str(text);
        out.push_str("<a href=\"");
        out.push_str(link);
        out.push_str("\">");
        out.push_str(link);
        out.push_str("</a>");
        cursor = m.end;
    }

    push_escaped(&mut out, &text[cursor..]);
    out
}
