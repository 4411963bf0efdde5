use std::fmt::{self, Write};

use super::{FormatConfig, Formatter};
use crate::{
    escape::escape_text,
    node::{Element, Node, Text},
};

pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = Self::write_node(&mut out, node, config.depth, config.indent.as_deref());
        out
    }
}

impl XmlFormatter {
    pub fn format_element(&self, element: &Element, config: &FormatConfig) -> String {
        let mut out = String::new();
        let _ = Self::write_element(&mut out, element, config.depth, config.indent.as_deref());
        out
    }

    /// Writes `node` and its subtree into `out`, one line per tag or text run
    /// unless `indent` is `None`
    pub fn write_node<W: Write + ?Sized>(
        out: &mut W,
        node: &Node,
        depth: usize,
        indent: Option<&str>,
    ) -> fmt::Result {
        match node {
            Node::Element(element) => Self::write_element(out, element, depth, indent),
            Node::Text(text) => Self::write_text(out, text, depth, indent),
        }
    }

    pub fn write_element<W: Write + ?Sized>(
        out: &mut W,
        element: &Element,
        depth: usize,
        indent: Option<&str>,
    ) -> fmt::Result {
        Self::write_prefix(out, depth, indent)?;
        write!(out, "<{}", element.name())?;
        element.with_contents(|attributes, children| {
            for (key, value) in attributes {
                write!(out, " {}=\"{}\"", key, escape_text(value))?;
            }

            if children.is_empty() {
                out.write_str(" />")?;
            } else {
                out.write_str(">")?;
                out.write_str(Self::terminator(indent))?;
                for child in children {
                    Self::write_node(out, child, depth + 1, indent)?;
                }
                Self::write_prefix(out, depth, indent)?;
                write!(out, "</{}>", element.name())?;
            }
            out.write_str(Self::terminator(indent))
        })
    }

    pub fn write_text<W: Write + ?Sized>(
        out: &mut W,
        text: &Text,
        depth: usize,
        indent: Option<&str>,
    ) -> fmt::Result {
        Self::write_prefix(out, depth, indent)?;
        out.write_str(&escape_text(text.content()))?;
        out.write_str(Self::terminator(indent))
    }

    fn write_prefix<W: Write + ?Sized>(
        out: &mut W,
        depth: usize,
        indent: Option<&str>,
    ) -> fmt::Result {
        if let Some(unit) = indent {
            for _ in 0..depth {
                out.write_str(unit)?;
            }
        }
        Ok(())
    }

    fn terminator(indent: Option<&str>) -> &'static str {
        if indent.is_some() {
            "\n"
        } else {
            ""
        }
    }
}
