//! URL recognition in free text.
//!
//! The grammar is a modified form of John Gruber's "liberal URL regex" (v2),
//! <https://mathiasbynens.be/demo/url-regex>. It only accepts a single level of
//! balanced parentheses, so in prose like "did you see it? (you know,
//! http://bit.ly/thing)" the closing paren stays outside the link.
//!
//! Word boundaries and whitespace are ASCII only: a URL glued to CJK or
//! accented text is still found, and a no-break space does not end one.

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xi)
        (?-u:\b)
        https?:(?:/{1,3}|[a-z0-9%])
        (?:
            [^\t\n\f\r\x20()<>]+
            |
            \((?:[^\t\n\f\r\x20()<>]+|\([^\t\n\f\r\x20()<>]+\))*\)
        )+
        (?:
            \((?:[^\t\n\f\r\x20()<>]+|\([^\t\n\f\r\x20()<>]+\))*\)
            |
            [^\t\n\f\r\x20`!()\[\]{};:'".,<>?«»“”‘’]
        )
        "#,
    )
    .expect("URL pattern is valid")
});

/// A URL found in a piece of text, as byte offsets `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch {
    pub start: usize,
    pub end: usize,
}

impl UrlMatch {
    /// Returns the matched slice of `text`.
    ///
    /// `text` must be the string the match was found in.
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Finds the leftmost URL in `text`.
pub fn find_url(text: &str) -> Option<UrlMatch> {
    URL_RE.find(text).map(|m| UrlMatch {
        start: m.start(),
        end: m.end(),
    })
}

/// Scans `text` left to right, yielding each URL after the previous one.
///
/// Every search restarts on the unconsumed remainder, so a match never
/// overlaps or looks behind the end of the one before it.
pub fn url_matches(text: &str) -> impl Iterator<Item = UrlMatch> + '_ {
    let mut cursor = 0;
    std::iter::from_fn(move || {
        let rest = text.get(cursor..)?;
        let found = find_url(rest)?;
        let m = UrlMatch {
            start: cursor + found.start,
            end: cursor + found.end,
        };
        cursor = m.end;
        Some(m)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(text: &str) -> Vec<&str> {
        url_matches(text).map(|m| m.as_str(text)).collect()
    }

    #[test]
    fn basic_url() {
        assert_eq!(
            urls("see http://example.com/thing here"),
            vec!["http://example.com/thing"]
        );
    }

    #[test]
    fn span_offsets() {
        let m = find_url("see http://example.com/thing here");
        assert_eq!(m, Some(UrlMatch { start: 4, end: 28 }));
    }

    #[test]
    fn https_and_case_insensitive() {
        assert_eq!(urls("HTTPS://Example.COM/Path"), vec!["HTTPS://Example.COM/Path"]);
    }

    #[test]
    fn outer_paren_excluded() {
        assert_eq!(
            urls("(see http://example.com/thing)"),
            vec!["http://example.com/thing"]
        );
    }

    #[test]
    fn balanced_paren_included() {
        let text = "http://en.wikipedia.org/wiki/PHP_(programming_language)";
        assert_eq!(urls(text), vec![text]);
    }

    #[test]
    fn balanced_paren_inside_outer_paren() {
        let text = "(about http://en.wikipedia.org/wiki/Rust_(language))";
        assert_eq!(urls(text), vec!["http://en.wikipedia.org/wiki/Rust_(language)"]);
    }

    #[test]
    fn trailing_punctuation_excluded() {
        assert_eq!(urls("Go to http://example.com/a."), vec!["http://example.com/a"]);
        assert_eq!(urls("http://example.com/a, then"), vec!["http://example.com/a"]);
        assert_eq!(urls("really http://example.com/a?!"), vec!["http://example.com/a"]);
        assert_eq!(urls("\"http://example.com/a\""), vec!["http://example.com/a"]);
        assert_eq!(urls("«http://example.com/a»"), vec!["http://example.com/a"]);
        assert_eq!(urls("“http://example.com/a”"), vec!["http://example.com/a"]);
    }

    #[test]
    fn query_and_fragment_kept() {
        let text = "https://example.com/path?q=1&r=2#frag";
        assert_eq!(urls(text), vec![text]);
    }

    #[test]
    fn interior_punctuation_kept() {
        assert_eq!(urls("http://example.com/a.b;c"), vec!["http://example.com/a.b;c"]);
    }

    #[test]
    fn scheme_without_slashes() {
        assert_eq!(urls("try http:example.com now"), vec!["http:example.com"]);
    }

    #[test]
    fn angle_brackets_stop_match() {
        assert_eq!(urls("<http://example.com/x>"), vec!["http://example.com/x"]);
    }

    #[test]
    fn not_a_url() {
        assert!(urls("ftp://example.com and mailto:someone").is_empty());
        assert!(urls("http:// alone").is_empty());
        assert!(urls("xhttp://example.com").is_empty());
    }

    #[test]
    fn url_after_non_ascii_letters() {
        assert_eq!(
            urls("请看http://example.com/x"),
            vec!["http://example.com/x"]
        );
        assert_eq!(urls("éhttp://example.com/x"), vec!["http://example.com/x"]);
        assert_eq!(
            find_url("请看http://example.com/x"),
            Some(UrlMatch { start: 6, end: 26 })
        );
    }

    #[test]
    fn only_ascii_whitespace_ends_url() {
        let text = "http://example.com/a\u{a0}b";
        assert_eq!(urls(text), vec![text]);
        assert_eq!(
            urls("http://example.com/a\tb\u{c}c"),
            vec!["http://example.com/a"]
        );
    }

    #[test]
    fn multiple_urls() {
        assert_eq!(
            urls("http://a.example and https://b.example/x"),
            vec!["http://a.example", "https://b.example/x"]
        );
    }
}
