//! Render engine: a frozen rule registry over the token stream.
//!
//! An engine is assembled once through [`EngineBuilder`] and immutable
//! afterwards; [`RenderEngine::convert`] keeps all per-call state local, so
//! one engine can serve concurrent conversions.

use std::collections::HashMap;
use std::sync::Arc;

use pulldown_cmark::Options;

use crate::code::{FenceRule, Highlighter};
use crate::container::{ContainerBlock, ContainerRenderer, ContainerRule};
use crate::plugin::{DEFAULT_PLUGINS, EnginePlugin};
use crate::token::{Token, container_kind};
use crate::tokenizer::tokenize;
use crate::util::normalize_newlines;

/// A render-rule override for one token kind.
///
/// Rules receive the whole token slice plus the index of the token to
/// render and return the HTML fragment for it. Closures with the matching
/// signature implement this trait.
pub trait RenderRule: Send + Sync {
    fn render(&self, tokens: &[Token], idx: usize) -> String;
}

impl<F> RenderRule for F
where
    F: Fn(&[Token], usize) -> String + Send + Sync,
{
    fn render(&self, tokens: &[Token], idx: usize) -> String {
        self(tokens, idx)
    }
}

/// Builder collecting parser options, plugins, containers and rule
/// overrides before freezing them into a [`RenderEngine`].
pub struct EngineBuilder {
    options: Options,
    lang_prefix: String,
    highlighter: Option<Highlighter>,
    fence_rule: bool,
    containers: Vec<Arc<dyn ContainerRenderer>>,
    overrides: Vec<(String, Arc<dyn RenderRule>)>,
}

impl EngineBuilder {
    fn new() -> Self {
        Self {
            options: Options::empty(),
            lang_prefix: "lang-".to_owned(),
            highlighter: None,
            fence_rule: false,
            containers: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Enable additional parser options for the external parser core.
    #[must_use]
    pub fn enable(mut self, options: Options) -> Self {
        self.options |= options;
        self
    }

    /// Apply a single plugin.
    #[must_use]
    pub fn with_plugin(self, plugin: &EnginePlugin) -> Self {
        (plugin.apply)(self)
    }

    /// Apply a plugin list in order.
    #[must_use]
    pub fn with_plugins(mut self, plugins: &[EnginePlugin]) -> Self {
        for plugin in plugins {
            self = (plugin.apply)(self);
        }
        self
    }

    /// CSS class prefix for the canonical language name (default `lang-`).
    #[must_use]
    pub fn with_lang_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.lang_prefix = prefix.into();
        self
    }

    /// Install a syntax highlighter for fenced code. Without one, fence
    /// content is HTML-escaped verbatim.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Install the decorated fence render rule.
    #[must_use]
    pub fn with_code(mut self) -> Self {
        self.fence_rule = true;
        self
    }

    /// Install a container kind. Installation order matters for markers
    /// whose names are prefixes of one another: the first validating
    /// container wins.
    #[must_use]
    pub fn with_container(mut self, container: impl ContainerRenderer + 'static) -> Self {
        self.containers.push(Arc::new(container));
        self
    }

    /// Register a render rule override for a token kind. Overrides are
    /// applied after the stock rules and replace them on key collision.
    #[must_use]
    pub fn with_rule(mut self, kind: impl Into<String>, rule: impl RenderRule + 'static) -> Self {
        self.overrides.push((kind.into(), Arc::new(rule)));
        self
    }

    /// Freeze the builder into an immutable engine.
    #[must_use]
    pub fn build(self) -> RenderEngine {
        let mut rules: HashMap<String, Arc<dyn RenderRule>> = HashMap::new();
        if self.fence_rule {
            rules.insert(
                Token::FENCE.to_owned(),
                Arc::new(FenceRule::new(self.lang_prefix, self.highlighter)),
            );
        }
        for container in &self.containers {
            rules.insert(
                container_kind(container.marker()),
                Arc::new(ContainerRule(Arc::clone(container))),
            );
        }
        for (kind, rule) in self.overrides {
            rules.insert(kind, rule);
        }
        RenderEngine {
            options: self.options,
            rules,
            containers: self.containers,
        }
    }
}

/// Markdown-to-HTML converter with a frozen rule set.
pub struct RenderEngine {
    options: Options,
    rules: HashMap<String, Arc<dyn RenderRule>>,
    containers: Vec<Arc<dyn ContainerRenderer>>,
}

impl RenderEngine {
    /// Engine with the default plugin list, the stock `tip`/`warning`/
    /// `danger` containers and the default highlighter.
    pub fn new() -> Self {
        Self::builder()
            .with_plugins(DEFAULT_PLUGINS)
            .with_highlighter(Highlighter::new())
            .with_container(ContainerBlock::tip())
            .with_container(ContainerBlock::warning())
            .with_container(ContainerBlock::danger())
            .build()
    }

    /// Start assembling a custom engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Convert markdown text into an HTML fragment.
    pub fn convert(&self, text: &str) -> String {
        let source = normalize_newlines(text);
        let tokens = tokenize(&source, self.options, &self.containers);

        let mut output = String::with_capacity(source.len() * 2);
        for idx in 0..tokens.len() {
            match self.rules.get(tokens[idx].kind.as_str()) {
                Some(rule) => output.push_str(&rule.render(&tokens, idx)),
                // Tokens without a rule pass their default-rendered
                // content through untouched.
                None => output.push_str(&tokens[idx].content),
            }
        }
        output
    }
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}
