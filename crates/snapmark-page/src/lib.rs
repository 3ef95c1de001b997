//! Page assembly around rendered fragments.
//!
//! The render crate produces HTML fragments; this crate turns a fragment
//! into the self-contained page handed to the screenshot step: viewport
//! meta, an inline stylesheet cascade, and the body wrapper the built-in
//! CSS targets. It also carries the plain-text conversion path for inputs
//! that are not markdown.

use std::borrow::Cow;

use snapmark_render::RenderEngine;

/// Built-in stylesheets, compiled into the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinCss {
    /// Minimal element reset.
    Reset,
    /// Typography for `.markdown-body` and `.container`.
    Markdown,
    /// Code block layout: line numbers and highlighted-line columns.
    Code,
    /// Container block (admonition) layout.
    Container,
}

impl BuiltinCss {
    /// All built-in stylesheets in cascade order.
    pub const ALL: [Self; 4] = [Self::Reset, Self::Markdown, Self::Code, Self::Container];

    /// Stylesheet name, also usable with [`by_name`](Self::by_name).
    pub fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Markdown => "markdown",
            Self::Code => "code",
            Self::Container => "container",
        }
    }

    /// Raw stylesheet text.
    pub fn css(self) -> &'static str {
        match self {
            Self::Reset => include_str!("../assets/reset.css"),
            Self::Markdown => include_str!("../assets/markdown.css"),
            Self::Code => include_str!("../assets/code.css"),
            Self::Container => include_str!("../assets/container.css"),
        }
    }

    /// Look up a built-in stylesheet's text by name.
    pub fn by_name(name: &str) -> Option<&'static str> {
        Self::ALL.iter().find(|css| css.name() == name).map(|css| css.css())
    }
}

/// Convert plain text into paragraph-per-line HTML.
///
/// Lines are inserted verbatim, so a line of raw HTML stays HTML — that is
/// the intended escape hatch for non-markdown input. Line endings are
/// normalized first.
pub fn text_to_html(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let paragraphs: String = normalized
        .trim()
        .split('\n')
        .map(|line| format!("<p>{line}</p>"))
        .collect();
    format!("<div class=\"container\">{paragraphs}</div>")
}

/// Wrap a converted markdown fragment in the body div the built-in CSS
/// targets.
pub fn markdown_body(fragment: &str) -> String {
    format!("<div class=\"markdown-body\">{fragment}</div>")
}

/// A page template: an inline stylesheet cascade applied around a body.
///
/// Build once, render many bodies; rendering never mutates the template.
#[derive(Clone, Debug)]
pub struct Page {
    styles: Vec<Cow<'static, str>>,
}

impl Page {
    /// Page with the full built-in cascade.
    pub fn new() -> Self {
        Self {
            styles: BuiltinCss::ALL.iter().map(|css| Cow::Borrowed(css.css())).collect(),
        }
    }

    /// Page without any stylesheet.
    pub fn bare() -> Self {
        Self { styles: Vec::new() }
    }

    /// Append a stylesheet to the cascade (after any earlier ones).
    #[must_use]
    pub fn with_style(mut self, css: impl Into<Cow<'static, str>>) -> Self {
        self.styles.push(css.into());
        self
    }

    /// Assemble the full HTML document around a body fragment.
    pub fn render(&self, body: &str) -> String {
        format!(
            "<html><head><meta name=\"viewport\" content=\"width=device-width,initial-scale=1.0\"><style>{}</style></head><body>{}</body></html>",
            self.styles.join("\n"),
            body
        )
    }

    /// Convert markdown and assemble the resulting page in one step.
    pub fn render_markdown(&self, engine: &RenderEngine, content: &str) -> String {
        self.render(&markdown_body(&engine.convert(content)))
    }

    /// Assemble a page for plain text input.
    pub fn render_text(&self, text: &str) -> String {
        self.render(&text_to_html(text))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_css_by_name() {
        assert_eq!(BuiltinCss::by_name("code"), Some(BuiltinCss::Code.css()));
        assert_eq!(BuiltinCss::by_name("missing"), None);
    }

    #[test]
    fn test_builtin_css_nonempty() {
        for css in BuiltinCss::ALL {
            assert!(!css.css().trim().is_empty(), "{} is empty", css.name());
        }
    }

    #[test]
    fn test_text_to_html_paragraph_per_line() {
        assert_eq!(
            text_to_html("one\ntwo"),
            "<div class=\"container\"><p>one</p><p>two</p></div>"
        );
    }

    #[test]
    fn test_text_to_html_normalizes_newlines_and_trims() {
        assert_eq!(
            text_to_html("  one\r\ntwo\r"),
            "<div class=\"container\"><p>one</p><p>two</p></div>"
        );
    }

    #[test]
    fn test_text_to_html_keeps_raw_html() {
        let html = text_to_html("<b>bold</b>");
        assert_eq!(html, "<div class=\"container\"><p><b>bold</b></p></div>");
    }

    #[test]
    fn test_page_single_style_block() {
        let page = Page::new();
        let html = page.render("<p>body</p>");
        assert_eq!(html.matches("<style>").count(), 1);
        assert!(html.contains("<meta name=\"viewport\""));
        assert!(html.contains("<body><p>body</p></body>"));
    }

    #[test]
    fn test_page_cascade_order() {
        let page = Page::bare().with_style(".a{}").with_style(".b{}");
        let html = page.render("");
        let a = html.find(".a{}").expect("first style");
        let b = html.find(".b{}").expect("second style");
        assert!(a < b);
    }

    #[test]
    fn test_render_markdown_wraps_body() {
        let engine = RenderEngine::new();
        let page = Page::new();
        let html = page.render_markdown(&engine, "# Hello\n");
        assert!(html.contains("<div class=\"markdown-body\"><h1>Hello</h1>"));
    }
}
