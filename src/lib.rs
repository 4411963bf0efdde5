//! lwdom: a light-weight XML DOM builder
//!
//! This crate provides functionality to:
//! - Build a tree of elements and text nodes with a chaining API
//! - Validate element and attribute names
//! - Escape reserved characters in text and attribute values
//! - Write the tree as an indented XML document to a string, a writer or a file
//!
//! There is no parser: data only flows from the tree to text.
//!
//! # Examples
//! ```
//! use lwdom::{new_element, Result};
//!
//! fn example() -> Result<()> {
//!     let xml = new_element("root")?
//!         .append_child(
//!             new_element("group")?
//!                 .set_attribute("id", "g1")?
//!                 .append_text("Say hello to group 1!"),
//!         )
//!         .append_child(
//!             new_element("group")?
//!                 .set_attribute("id", "g2")?
//!                 .set_attribute("color", "green")?
//!                 .append_text("Hi! I'm in group 2")
//!                 .append_child(new_element("something")?),
//!         )
//!         .write_to_string();
//!     assert!(xml.contains("<group id=\"g2\" color=\"green\">"));
//!     assert!(xml.contains("  Hi! I&apos;m in group 2\n"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod document;
pub mod error;
pub mod escape;
pub mod formatter;
pub mod name;
pub mod node;

// Re-exports
pub use document::XML_DECLARATION;
pub use error::{Error, ErrorKind, IdentifierUsage, Result};
pub use escape::escape_text;
pub use formatter::{FormatConfig, Formatter, XmlFormatter};
pub use name::is_valid_identifier;
pub use node::{Element, Node, Text};

/// Creates a new element called `name`, see [`Element::new`]
pub fn new_element(name: impl Into<String>) -> Result<Element> {
    Element::new(name)
}
