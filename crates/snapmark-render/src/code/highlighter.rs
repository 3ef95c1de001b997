//! Syntect-backed syntax highlighting.
//!
//! Produces the inner `<span>`-decorated markup for a code block. The
//! syntect HTML generator wraps its output in its own `<pre style="…">`
//! shell; that shell is stripped structurally before the fragment is
//! returned, so callers always receive bare span markup and apply their
//! own wrapper.

use std::sync::LazyLock;

use regex::Regex;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use tracing::{debug, warn};

use crate::util::escape_html;

/// Theme used by [`Highlighter::new`].
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Failure to construct a [`Highlighter`].
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The requested theme is not in the bundled theme set.
    #[error("unknown highlight theme `{0}`")]
    UnknownTheme(String),
}

/// The wrapping shell emitted by the syntect HTML generator.
static PRE_SHELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<pre[^>]*>\n?(.*)</pre>\s*$").expect("pre shell pattern"));

/// Syntax highlighter keyed by canonical language name.
///
/// Syntax definitions and the theme are loaded once at construction;
/// [`highlight`](Self::highlight) is pure with respect to that state and
/// safe to call concurrently.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
    theme_name: String,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme_name", &self.theme_name)
            .finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the default theme.
    pub fn new() -> Self {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(DEFAULT_THEME).unwrap_or_default();
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: DEFAULT_THEME.to_owned(),
        }
    }

    /// Create a highlighter with a named theme from the bundled set.
    pub fn with_theme(name: &str) -> Result<Self, HighlightError> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(name)
            .ok_or_else(|| HighlightError::UnknownTheme(name.to_owned()))?;
        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            theme_name: name.to_owned(),
        })
    }

    /// Name of the theme this highlighter was built with.
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Highlight `code` as `lang`, returning an HTML fragment.
    ///
    /// Unknown languages and highlighter failures degrade to the
    /// HTML-escaped code with no highlight markup.
    pub fn highlight(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_token(&lang.to_lowercase()));
        let Some(syntax) = syntax else {
            debug!(language = lang, "no syntax definition, emitting escaped code");
            return escape_html(code);
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(html) => unwrap_shell(html.trim()),
            Err(error) => {
                warn!(language = lang, %error, "highlighting failed, emitting escaped code");
                escape_html(code)
            }
        }
    }
}

/// Strip the generator's `<pre>` shell and return the inner markup.
///
/// The strip is structural (tag-shaped match), never offset slicing. When
/// the output is not in the expected shape it is returned untouched — the
/// fence renderer then treats it as a ready-made `<pre>` block.
fn unwrap_shell(html: &str) -> String {
    let Some(captures) = PRE_SHELL.captures(html) else {
        warn!("highlighter output missing the expected <pre> shell");
        return html.to_owned();
    };
    let inner = captures.get(1).map_or("", |m| m.as_str()).trim();

    // syntect keeps each line break inside the closing span of its line
    // (code text is escaped, so a literal `\n</span>` can only be a line
    // boundary). Move the break outside the span so emitted lines match
    // source lines.
    let mut normalized = inner.replace("\n</span>", "</span>\n");
    let trimmed = normalized.trim_end().len();
    normalized.truncate(trimmed);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_round_trips_escaped() {
        let highlighter = Highlighter::new();
        let code = "if a < b && c > d { \"quote\" }\n";
        assert_eq!(highlighter.highlight(code, "text"), escape_html(code));
    }

    #[test]
    fn test_known_language_emits_spans_without_shell() {
        let highlighter = Highlighter::new();
        let html = highlighter.highlight("fn main() {}\n", "Rust");
        assert!(html.contains("<span"));
        assert!(!html.starts_with("<pre"));
        assert!(!html.contains("</pre>"));
    }

    #[test]
    fn test_emitted_line_count_matches_source() {
        let highlighter = Highlighter::new();
        let html = highlighter.highlight("let a = 1;\nlet b = 2;\nlet c = 3;\n", "Rust");
        assert_eq!(html.split('\n').count(), 3);
    }

    #[test]
    fn test_code_text_is_escaped() {
        let highlighter = Highlighter::new();
        let html = highlighter.highlight("a && b\n", "Rust");
        assert!(html.contains("&amp;&amp;"));
    }

    #[test]
    fn test_unknown_theme_is_construction_error() {
        let result = Highlighter::with_theme("no-such-theme");
        assert!(matches!(result, Err(HighlightError::UnknownTheme(_))));
    }

    #[test]
    fn test_default_theme_exists() {
        assert!(Highlighter::with_theme(DEFAULT_THEME).is_ok());
    }

    #[test]
    fn test_unwrap_shell_structural() {
        let shelled = "<pre style=\"background-color:#2b303b;\">\n<span>one\n</span><span>two\n</span></pre>\n";
        assert_eq!(
            unwrap_shell(shelled.trim()),
            "<span>one</span>\n<span>two</span>"
        );
    }

    #[test]
    fn test_unwrap_shell_passthrough_on_unexpected_shape() {
        assert_eq!(unwrap_shell("<span>bare</span>"), "<span>bare</span>");
    }
}
