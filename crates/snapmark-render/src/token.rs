//! Token stream model shared by the tokenizer and the render rules.

/// One token of the parsed document, in document order.
///
/// Tokens are produced once by the tokenizer and never mutated afterwards;
/// render rules receive the whole slice plus an index so a rule can inspect
/// its neighborhood if it needs to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Token kind, used as the render-rule registry key.
    pub kind: String,
    /// `1` opens a block, `-1` closes it, `0` is self-contained.
    pub nesting: i8,
    /// Info string (fence info, container marker text).
    pub info: String,
    /// Raw content for self-contained tokens.
    pub content: String,
}

impl Token {
    /// Kind of a fenced code block token.
    pub const FENCE: &'static str = "fence";
    /// Kind of a pass-through token carrying default-rendered HTML.
    pub const HTML: &'static str = "html";

    /// Pass-through token wrapping HTML produced by the default renderer.
    pub(crate) fn html(content: String) -> Self {
        Self {
            kind: Self::HTML.to_owned(),
            nesting: 0,
            info: String::new(),
            content,
        }
    }

    /// Self-contained fenced code block token.
    pub(crate) fn fence(info: String, content: String) -> Self {
        Self {
            kind: Self::FENCE.to_owned(),
            nesting: 0,
            info,
            content,
        }
    }

    /// Container opening token for the given kind.
    pub(crate) fn open(kind: String, info: String) -> Self {
        Self {
            kind,
            nesting: 1,
            info,
            content: String::new(),
        }
    }

    /// Container closing token for the given kind.
    pub(crate) fn close(kind: String) -> Self {
        Self {
            kind,
            nesting: -1,
            info: String::new(),
            content: String::new(),
        }
    }
}

/// Registry key for a container of the given marker name.
pub fn container_kind(name: &str) -> String {
    format!("container_{name}")
}
