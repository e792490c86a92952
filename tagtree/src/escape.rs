//! HTML entity escaping.
//!
//! One entity set is used everywhere (text, attribute names and values, tag
//! names):
//!
//! | char  | entity   |
//! |-------|----------|
//! | `&`   | `&amp;`  |
//! | `<`   | `&lt;`   |
//! | `>`   | `&gt;`   |
//! | `"`   | `&#34;`  |
//! | `'`   | `&#39;`  |
//! | `\0`  | `U+FFFD` |
//!
//! Escaping is a single pass and is not idempotent: already-escaped entities
//! get their `&` escaped again.

use std::borrow::Cow;
use std::fmt::{self, Write};

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\'' => Some("&#39;"),
        '\0' => Some("\u{FFFD}"),
        _ => None,
    }
}

/// Escape `text` for inclusion in markup.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| entity(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    // Writing into a String cannot fail.
    let _ = write_escaped(&mut out, &text[first..]);
    Cow::Owned(out)
}

/// Write `text` to `out`, escaping as it goes.
///
/// Runs of characters that need no escaping are written in one call.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    let mut last_end = 0;
    for (i, c) in text.char_indices() {
        if let Some(replacement) = entity(c) {
            out.write_str(&text[last_end..i])?;
            out.write_str(replacement)?;
            last_end = i + c.len_utf8();
        }
    }
    out.write_str(&text[last_end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_entity_set() {
        assert_eq!(
            escape_html(r#"4<'"5"'>6 & 7"#),
            "4&lt;&#39;&#34;5&#34;&#39;&gt;6 &amp; 7"
        );
        assert_eq!(escape_html("a\0b"), "a\u{FFFD}b");
    }

    #[test]
    fn test_not_idempotent() {
        let once = escape_html("<oops>789</oops>");
        assert_eq!(once, "&lt;oops&gt;789&lt;/oops&gt;");

        let twice = escape_html(&once);
        assert_eq!(twice, "&amp;lt;oops&amp;gt;789&amp;lt;/oops&amp;gt;");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(escape_html("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }

    #[test]
    fn test_write_escaped_streams() {
        let mut out = String::from("prefix:");
        write_escaped(&mut out, "a<b").unwrap();
        assert_eq!(out, "prefix:a&lt;b");
    }
}
