//! Named engine plugins and the default set.
//!
//! A plugin is a `(id, apply)` pair that mutates the engine builder during
//! construction. [`DEFAULT_PLUGINS`] is the fixed, ordered list applied by
//! [`RenderEngine::new`](crate::RenderEngine::new).

use pulldown_cmark::Options;

use crate::engine::EngineBuilder;

/// A named builder mutation applied during engine construction.
#[derive(Clone, Copy)]
pub struct EnginePlugin {
    /// Stable identifier, useful when assembling custom plugin lists.
    pub id: &'static str,
    /// Builder transformation installed by this plugin.
    pub apply: fn(EngineBuilder) -> EngineBuilder,
}

impl std::fmt::Debug for EnginePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnginePlugin").field("id", &self.id).finish()
    }
}

fn apply_tables(builder: EngineBuilder) -> EngineBuilder {
    builder.enable(Options::ENABLE_TABLES)
}

fn apply_strikethrough(builder: EngineBuilder) -> EngineBuilder {
    builder.enable(Options::ENABLE_STRIKETHROUGH)
}

fn apply_task_lists(builder: EngineBuilder) -> EngineBuilder {
    builder.enable(Options::ENABLE_TASKLISTS)
}

fn apply_footnotes(builder: EngineBuilder) -> EngineBuilder {
    builder.enable(Options::ENABLE_FOOTNOTES)
}

fn apply_front_matter(builder: EngineBuilder) -> EngineBuilder {
    builder.enable(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS)
}

fn apply_code(builder: EngineBuilder) -> EngineBuilder {
    builder.with_code()
}

/// GFM tables, rendered by the default renderer.
pub const TABLES: EnginePlugin = EnginePlugin { id: "tables", apply: apply_tables };
/// `~~strikethrough~~`, rendered by the default renderer.
pub const STRIKETHROUGH: EnginePlugin = EnginePlugin {
    id: "strikethrough",
    apply: apply_strikethrough,
};
/// `- [x]` task lists, rendered by the default renderer.
pub const TASK_LISTS: EnginePlugin = EnginePlugin {
    id: "task-lists",
    apply: apply_task_lists,
};
/// Footnote references and definitions, rendered by the default renderer.
pub const FOOTNOTES: EnginePlugin = EnginePlugin {
    id: "footnotes",
    apply: apply_footnotes,
};
/// YAML front matter, consumed without output.
pub const FRONT_MATTER: EnginePlugin = EnginePlugin {
    id: "front-matter",
    apply: apply_front_matter,
};
/// Decorated fenced code blocks (the `fence` render rule).
pub const CODE: EnginePlugin = EnginePlugin { id: "code", apply: apply_code };

/// Default plugin list, applied in order during construction.
pub const DEFAULT_PLUGINS: &[EnginePlugin] = &[
    TABLES,
    STRIKETHROUGH,
    TASK_LISTS,
    FOOTNOTES,
    FRONT_MATTER,
    CODE,
];
