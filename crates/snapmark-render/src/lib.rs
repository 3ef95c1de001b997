//! Markdown-to-HTML fragment rendering for screenshot pipelines.
//!
//! This crate turns markdown text into styled HTML fragments meant to be
//! embedded in a page and captured by an external browser-automation step.
//! Parsing is delegated to pulldown-cmark; this crate adds the pieces the
//! stock renderer does not have:
//!
//! - decorated fenced code blocks: syntax highlighting (syntect), a
//!   `{1,3-5}` highlighted-line column and a line-number column, driven by
//!   the fence info string
//! - named container blocks (`:::tip` … `:::`) rendered as titled, styled
//!   divs
//! - a render-rule registry keyed by token kind, frozen at construction,
//!   so either piece can be overridden without touching the engine
//!
//! # Example
//!
//! ```
//! use snapmark_render::RenderEngine;
//!
//! let engine = RenderEngine::new();
//! let html = engine.convert("# Hi\n\n:::tip\nBe kind.\n:::\n");
//! assert!(html.contains("<h1>Hi</h1>"));
//! assert!(html.contains("class=\"tip container-block\""));
//! ```
//!
//! Engines are built once and frozen; `convert` takes `&self` and is safe
//! to call from multiple threads.

mod code;
mod container;
mod engine;
pub mod plugin;
mod token;
mod tokenizer;
mod util;

pub use code::{
    DEFAULT_THEME, HighlightError, Highlighter, LanguageEntry, LineRange, PLAIN_TEXT,
    is_highlight_line, resolve_highlight_lines, resolve_language,
};
pub use container::{ContainerBlock, ContainerColor, ContainerRenderer};
pub use engine::{EngineBuilder, RenderEngine, RenderRule};
pub use plugin::{DEFAULT_PLUGINS, EnginePlugin};
pub use token::{Token, container_kind};
pub use util::escape_html;

// Parser options are part of the builder API surface.
pub use pulldown_cmark::Options;
