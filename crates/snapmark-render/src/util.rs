//! Small shared helpers.

/// Escape the HTML-significant characters `&`, `<`, `>` and `"`.
///
/// Returns a borrowed string unchanged when nothing needs escaping.
pub fn escape_html(text: &str) -> String {
    if !text.contains(['&', '<', '>', '"']) {
        return text.to_owned();
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Normalize line endings to `\n`.
pub(crate) fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_html_clean_passthrough() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_escape_is_single_pass() {
        // Escaping already-escaped text escapes the ampersands again; the
        // renderer must therefore escape exactly once.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("unchanged\n"), "unchanged\n");
    }
}
