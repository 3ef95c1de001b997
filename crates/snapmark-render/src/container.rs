//! Named container blocks (`:::tip` … `:::`).
//!
//! A container renders as a titled, styled div. The text after the marker
//! name on the opening line overrides the registered default title.

use crate::engine::RenderRule;
use crate::token::Token;
use crate::util::escape_html;

/// Handler for one container kind: marker validation plus open/close
/// rendering.
///
/// The default [`validate`](Self::validate) accepts any marker that starts
/// with the registered name, so `tip Custom Title` opens a `tip` container.
/// The flip side is that two kinds whose names are prefixes of one another
/// (`tip`/`tips`) collide: whichever was installed first wins. Install the
/// longer name first, or override `validate` to demand a delimiter.
pub trait ContainerRenderer: Send + Sync {
    /// Marker name matched against `:::name` lines.
    fn marker(&self) -> &str;

    /// Whether this handler accepts the marker text of an opening line.
    fn validate(&self, marker: &str) -> bool {
        marker.starts_with(self.marker())
    }

    /// Render the open (`nesting == 1`) or close (`nesting == -1`) token.
    fn render(&self, tokens: &[Token], idx: usize) -> String;
}

/// Inline-style color triple for a container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerColor {
    pub color: String,
    pub border_color: String,
    pub background_color: String,
}

impl ContainerColor {
    pub fn new(
        color: impl Into<String>,
        border_color: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            border_color: border_color.into(),
            background_color: background_color.into(),
        }
    }

    /// Render as an inline `style` attribute value.
    pub fn to_style(&self) -> String {
        format!(
            "color:{};border-color:{};background-color:{}",
            self.color, self.border_color, self.background_color
        )
    }
}

impl From<ContainerColor> for String {
    fn from(color: ContainerColor) -> Self {
        color.to_style()
    }
}

/// Stock container kind: marker name, default title, inline style.
///
/// Immutable once installed into an engine.
#[derive(Clone, Debug)]
pub struct ContainerBlock {
    name: String,
    title: String,
    style: String,
}

impl ContainerBlock {
    /// Create a container kind. The default title is the marker name until
    /// overridden with [`with_title`](Self::with_title).
    pub fn new(name: impl Into<String>, style: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            style: style.into(),
        }
    }

    /// Set the default title used when the opening line carries none.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The stock `tip` container.
    pub fn tip() -> Self {
        Self::new(
            "tip",
            ContainerColor::new("#155f3e", "rgba(66, 184, 131, .5)", "rgba(66, 184, 131, .05)"),
        )
        .with_title("TIP")
    }

    /// The stock `warning` container.
    pub fn warning() -> Self {
        Self::new(
            "warning",
            ContainerColor::new("#ad850e", "rgba(255, 197, 23, .5)", "rgba(255, 197, 23, .05)"),
        )
        .with_title("WARNING")
    }

    /// The stock `danger` container.
    pub fn danger() -> Self {
        Self::new(
            "danger",
            ContainerColor::new("#ab2131", "rgba(237, 60, 80, .5)", "rgba(237, 60, 80, .05)"),
        )
        .with_title("DANGER")
    }
}

impl ContainerRenderer for ContainerBlock {
    fn marker(&self) -> &str {
        &self.name
    }

    fn render(&self, tokens: &[Token], idx: usize) -> String {
        let token = &tokens[idx];
        if token.nesting == 1 {
            let info = token.info.trim();
            let rest = info.strip_prefix(&self.name).unwrap_or(info).trim();
            let title = if rest.is_empty() { &self.title } else { rest };
            format!(
                "<div style=\"{}\" class=\"{} container-block\"><p class=\"container-block-title\">{}</p>\n",
                self.style,
                self.name,
                escape_html(title)
            )
        } else {
            "</div>\n".to_owned()
        }
    }
}

/// Adapter installing a [`ContainerRenderer`] into the rule registry.
pub(crate) struct ContainerRule(pub(crate) std::sync::Arc<dyn ContainerRenderer>);

impl RenderRule for ContainerRule {
    fn render(&self, tokens: &[Token], idx: usize) -> String {
        self.0.render(tokens, idx)
    }
}
