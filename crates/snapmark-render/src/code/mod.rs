//! Fenced code block rendering.
//!
//! Turns one `fence` token into the decorated HTML block: the highlighted
//! (or escaped) code body, an optional highlight-lines column, an optional
//! line-numbers column, and the outer wrapper div carrying the language
//! and extension classes.

mod highlight_lines;
mod highlighter;
mod languages;

use std::sync::LazyLock;

use regex::Regex;

pub use highlight_lines::{LineRange, is_highlight_line, resolve_highlight_lines};
pub use highlighter::{DEFAULT_THEME, HighlightError, Highlighter};
pub use languages::{LanguageEntry, PLAIN_TEXT, resolve_language};

use crate::engine::RenderRule;
use crate::token::Token;
use crate::util::escape_html;

/// `:no-line-numbers` modifier, word-boundary matched anywhere in the info
/// string.
static NO_LINE_NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":no-line-numbers\b").expect("line numbers pattern"));

/// Render rule for `fence` tokens.
pub(crate) struct FenceRule {
    lang_prefix: String,
    highlighter: Option<Highlighter>,
}

impl FenceRule {
    pub(crate) fn new(lang_prefix: String, highlighter: Option<Highlighter>) -> Self {
        Self {
            lang_prefix,
            highlighter,
        }
    }
}

impl RenderRule for FenceRule {
    fn render(&self, tokens: &[Token], idx: usize) -> String {
        render_fence(&tokens[idx], &self.lang_prefix, self.highlighter.as_ref())
    }
}

/// Render one fenced code block.
fn render_fence(token: &Token, lang_prefix: &str, highlighter: Option<&Highlighter>) -> String {
    let info = if token.info.trim().is_empty() {
        ""
    } else {
        token.info.as_str()
    };
    let language = resolve_language(info);
    let language_class = format!("{lang_prefix}{}", language.name.to_lowercase());

    let code = match highlighter {
        Some(highlighter) => highlighter.highlight(&token.content, language.name),
        None => escape_html(&token.content),
    };

    // A highlighter may hand back a complete <pre> block; use it as-is,
    // otherwise synthesize the wrapper. Exactly one of the two happens.
    let mut block = if code.starts_with("<pre") {
        code.clone()
    } else {
        format!("<pre class=\"{language_class}\"><code>{code}</code></pre>")
    };

    // Emitted line count: split on newlines, dropping the single trailing
    // empty segment left by a final newline.
    let mut lines: Vec<&str> = code.split('\n').collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let line_count = lines.len();

    if let Some(ranges) = resolve_highlight_lines(info) {
        let mut marks = String::new();
        for line in 1..=line_count {
            marks.push_str(if is_highlight_line(line, &ranges) {
                "<div class=\"highlight-line\">&nbsp;</div>"
            } else {
                "<br/>"
            });
        }
        block.push_str(&format!("<div class=\"highlight-lines\">{marks}</div>"));
    }

    let line_numbers = !NO_LINE_NUMBERS.is_match(info);
    if line_numbers {
        // One extra slot lines up with the blank produced by the block's
        // final newline.
        let slots = "<div class=\"line-number\"></div>".repeat(line_count + 1);
        block.push_str(&format!(
            "<div class=\"line-numbers\" aria-hidden=\"true\">{slots}</div>"
        ));
    }

    let mode = if line_numbers { " line-numbers-mode" } else { "" };
    format!(
        "<div class=\"{language_class} ext-{}{mode}\">{block}</div>",
        language.ext
    )
}
