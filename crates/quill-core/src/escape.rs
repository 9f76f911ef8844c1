//! Escaping of text content.
//!
//! [`escape`] makes a piece of text safe to place inside an element body:
//! `&`, `<` and `>` are replaced by their entity references, while character
//! and entity references that are already well formed (`&amp;`, `&#169;`)
//! pass through untouched. Escaping is therefore idempotent.
//!
//! ```
//! use quill_core::escape::escape;
//!
//! assert_eq!(escape("Fish & Chips <3"), "Fish &amp; Chips &lt;3");
//! assert_eq!(escape("a &amp; b"), "a &amp; b");
//! ```

/// Escapes `text` for use as element content.
///
/// The input is scanned once, left to right. An `&` opens a candidate entity
/// whose name is buffered while it consists of ASCII alphanumerics (a single
/// leading `#` is also allowed). A `;` closing a non-empty name emits the
/// reference verbatim; any other character flushes the buffer as an escaped
/// ampersand and is then handled as ordinary text.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut pending: Option<String> = None;

    for ch in text.chars() {
        if let Some(name) = pending.as_mut() {
            if ch == ';' && is_reference_name(name) {
                escaped.push('&');
                escaped.push_str(name);
                escaped.push(';');
                pending = None;
                continue;
            }

            let accepts = ch.is_ascii_alphanumeric() || (ch == '#' && name.is_empty());
            if accepts {
                name.push(ch);
                continue;
            }

            escaped.push_str("&amp;");
            escaped.push_str(name);
            pending = None;
        }

        match ch {
            '&' => pending = Some(String::new()),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }

    if let Some(name) = pending {
        escaped.push_str("&amp;");
        escaped.push_str(&name);
    }

    escaped
}

fn is_reference_name(name: &str) -> bool {
    !name.is_empty() && name != "#"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(escape("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_keeps_references() {
        assert_eq!(escape("a &amp; b"), "a &amp; b");
        assert_eq!(escape("&copy; 2024"), "&copy; 2024");
        assert_eq!(escape("&#169;"), "&#169;");
        assert_eq!(escape("&#x2014;"), "&#x2014;");
    }

    #[test]
    fn test_escape_incomplete_references() {
        assert_eq!(escape("&"), "&amp;");
        assert_eq!(escape("&amp"), "&amp;amp");
        assert_eq!(escape("&;"), "&amp;;");
        assert_eq!(escape("&#;"), "&amp;#;");
        assert_eq!(escape("& then"), "&amp; then");
        assert_eq!(escape("&&x;"), "&amp;&x;");
        assert_eq!(escape("&a#1;"), "&amp;a#1;");
        assert_eq!(escape("&lt<"), "&amp;lt&lt;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("Hello, world!"), "Hello, world!");
        assert_eq!(escape("naïve café"), "naïve café");
    }
}
