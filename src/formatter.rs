mod xml;

pub use self::xml::XmlFormatter;
use crate::node::Node;

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// String repeated once per nesting level. `None` renders everything on a
    /// single line with no indentation.
    pub indent: Option<String>,
    /// Nesting level of the node being rendered
    pub depth: usize,
}

/// Default configuration for formatting: one space per level, starting at
/// depth zero
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: Some(" ".to_string()),
            depth: 0,
        }
    }
}

impl FormatConfig {
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Disables indentation and line breaks
    #[must_use]
    pub fn without_indent(mut self) -> Self {
        self.indent = None;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub(crate) fn from_parts(depth: usize, indent: Option<&str>) -> Self {
        Self {
            indent: indent.map(str::to_string),
            depth,
        }
    }
}

/// Trait for rendering a node as a string
pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String;
}
