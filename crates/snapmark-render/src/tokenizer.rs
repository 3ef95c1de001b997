//! Source-to-token adaptation over pulldown-cmark.
//!
//! The tokenizer scans the source line by line, turning registered `:::`
//! container markers into open/close tokens while fenced code is tracked so
//! markers inside it stay literal. The markdown runs in between go through
//! pulldown-cmark: fenced code blocks surface as self-contained `fence`
//! tokens, everything else is rendered by the parser's default HTML
//! renderer and surfaces as pass-through `html` tokens.

use std::sync::Arc;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use tracing::debug;

use crate::container::ContainerRenderer;
use crate::token::{Token, container_kind};

/// Tracks fenced code state so container markers inside fences are ignored.
///
/// A closing fence must use the same character as the opening fence and be
/// at least as long.
#[derive(Debug, Default)]
struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Update state for a line; returns `true` when the line is a fence
    /// delimiter.
    fn observe(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some(first) = trimmed.chars().next() else {
            return false;
        };
        if first != '`' && first != '~' {
            return false;
        }
        let run = trimmed.chars().take_while(|&c| c == first).count();
        if run < 3 {
            return false;
        }
        match self.open {
            None => {
                self.open = Some((first, run));
                true
            }
            Some((open_char, open_len))
                if open_char == first
                    && run >= open_len
                    && trimmed[run..].trim().is_empty() =>
            {
                self.open = None;
                true
            }
            Some(_) => false,
        }
    }
}

/// A line that looks like a container marker.
enum Marker<'a> {
    Open(&'a str),
    Close,
}

/// Parse a `:::` marker line. Three or more colons; an empty remainder
/// closes, anything else is the marker text (name plus optional title).
fn container_marker(line: &str) -> Option<Marker<'_>> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix(":::")?;
    let rest = rest.trim_start_matches(':').trim();
    if rest.is_empty() {
        Some(Marker::Close)
    } else {
        Some(Marker::Open(rest))
    }
}

/// Tokenize a normalized (LF-only) source string.
pub(crate) fn tokenize(
    source: &str,
    options: Options,
    containers: &[Arc<dyn ContainerRenderer>],
) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::with_capacity(source.len());
    let mut fence = FenceTracker::default();
    let mut open_stack: Vec<String> = Vec::new();

    for line in source.lines() {
        if fence.observe(line) || fence.in_fence() {
            run.push_str(line);
            run.push('\n');
            continue;
        }

        match container_marker(line) {
            Some(Marker::Close) if !open_stack.is_empty() => {
                flush_markdown(&mut run, options, &mut tokens);
                if let Some(kind) = open_stack.pop() {
                    tokens.push(Token::close(kind));
                }
                continue;
            }
            Some(Marker::Close) => {
                debug!("container closer with no open container, keeping as text");
            }
            Some(Marker::Open(marker)) => {
                // First installed container whose validate accepts the
                // marker wins; unknown markers stay ordinary markdown.
                if let Some(container) = containers.iter().find(|c| c.validate(marker)) {
                    flush_markdown(&mut run, options, &mut tokens);
                    let kind = container_kind(container.marker());
                    tokens.push(Token::open(kind.clone(), marker.to_owned()));
                    open_stack.push(kind);
                    continue;
                }
            }
            None => {}
        }

        run.push_str(line);
        run.push('\n');
    }

    while let Some(kind) = open_stack.pop() {
        debug!(%kind, "container left open at end of input, closing");
        flush_markdown(&mut run, options, &mut tokens);
        tokens.push(Token::close(kind));
    }
    flush_markdown(&mut run, options, &mut tokens);

    tokens
}

/// Parse a buffered markdown run, splitting out fenced code blocks and
/// rendering the rest through the default HTML renderer.
fn flush_markdown(run: &mut String, options: Options, tokens: &mut Vec<Token>) {
    if run.is_empty() {
        return;
    }
    let source = std::mem::take(run);
    let mut parser = Parser::new_ext(&source, options);
    let mut pending: Vec<Event<'_>> = Vec::new();

    while let Some(event) = parser.next() {
        if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = event {
            drain_pending(&mut pending, tokens);
            let mut content = String::new();
            for inner in parser.by_ref() {
                match inner {
                    Event::Text(text) => content.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => break,
                    _ => {}
                }
            }
            tokens.push(Token::fence(info.to_string(), content));
        } else {
            pending.push(event);
        }
    }
    drain_pending(&mut pending, tokens);
}

/// Render buffered events with the default renderer into an `html` token.
fn drain_pending(pending: &mut Vec<Event<'_>>, tokens: &mut Vec<Token>) {
    if pending.is_empty() {
        return;
    }
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, pending.drain(..));
    tokens.push(Token::html(html));
}
