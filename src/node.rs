//! DOM node types.
//!
//! A tree is made of [`Element`]s and [`Text`]s wrapped in the [`Node`] sum
//! type. Both handles are reference counted: cloning a handle never copies the
//! node, and the same node may be appended under several parents. Child
//! lookups (`remove_child`, `replace_child`, `index_of_child`) compare nodes by
//! identity, not by content.
//!
//! Nothing prevents an element from becoming its own descendant. Rendering or
//! searching such a graph recurses until the stack is exhausted, so callers
//! must keep their trees acyclic.
//!
//! Each element guards its attributes and children with its own lock. A single
//! call is atomic with respect to that element, but sequences of calls, or
//! changes spanning several elements, need external synchronization when the
//! tree is shared between threads.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::{
    error::{Error, ErrorKind, IdentifierUsage, Result},
    formatter::{FormatConfig, Formatter, XmlFormatter},
    name::is_valid_identifier,
};

/// A node in the DOM: either an element or a run of text
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    /// Returns true when both handles point at the same node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a.ptr_eq(b),
            (Self::Text(a), Self::Text(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// All child nodes. Always empty for text.
    pub fn children(&self) -> Vec<Self> {
        match self {
            Self::Element(element) => element.children(),
            Self::Text(_) => Vec::new(),
        }
    }

    /// Child elements only. Always empty for text.
    pub fn elements(&self) -> Vec<Element> {
        match self {
            Self::Element(element) => element.elements(),
            Self::Text(_) => Vec::new(),
        }
    }

    /// Child text nodes only. Always empty for text.
    pub fn texts(&self) -> Vec<Text> {
        match self {
            Self::Element(element) => element.texts(),
            Self::Text(_) => Vec::new(),
        }
    }

    /// Renders this node and its subtree, see [`Element::to_text`]
    pub fn to_text(&self, depth: usize, indent: Option<&str>) -> String {
        XmlFormatter.format(self, &FormatConfig::from_parts(depth, indent))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        XmlFormatter::write_node(f, self, 0, Some(" "))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&Element> for Node {
    fn from(element: &Element) -> Self {
        Self::Element(element.clone())
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<&Text> for Node {
    fn from(text: &Text) -> Self {
        Self::Text(text.clone())
    }
}

/// A named element with attributes and ordered children.
///
/// Mutators take `&self` and hand the element back so calls can be chained:
///
/// ```
/// use lwdom::Element;
/// # fn main() -> lwdom::Result<()> {
/// let item = Element::new("item")?;
/// item.set_attribute("id", "1")?.append_text("first");
/// assert_eq!(item.child_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Element {
    inner: Arc<ElementInner>,
}

struct ElementInner {
    name: String,
    state: RwLock<ElementState>,
}

#[derive(Default)]
struct ElementState {
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    ///
    /// Fails with [`ErrorKind::InvalidIdentifier`] if `name` is not a valid
    /// XML name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(Error::invalid_identifier(
                &name,
                IdentifierUsage::ElementName,
            ));
        }
        Ok(Self {
            inner: Arc::new(ElementInner {
                name,
                state: RwLock::new(ElementState::default()),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Appends a node after the existing children. Appending an ancestor
    /// creates a cycle, which is not detected.
    pub fn append_child(&self, node: impl Into<Node>) -> &Self {
        let node = node.into();
        self.inner.state.write().children.push(node);
        trace!(element = %self.name(), "appended child");
        self
    }

    /// Appends a new text node holding `text`
    pub fn append_text(&self, text: impl Into<String>) -> &Self {
        self.append_child(Text::new(text))
    }

    /// Inserts a node at `index`, shifting later children right.
    ///
    /// `index` may equal [`child_count`](Self::child_count), which appends.
    pub fn insert_child(&self, index: usize, node: impl Into<Node>) -> Result<&Self> {
        let node = node.into();
        let mut state = self.inner.state.write();
        let len = state.children.len();
        if index > len {
            return Err(Error::new(ErrorKind::IndexOutOfRange { index, len }));
        }
        state.children.insert(index, node);
        trace!(element = %self.name(), index, "inserted child");
        Ok(self)
    }

    /// Removes the first child that is the same node as `node`, if any
    pub fn remove_child(&self, node: &Node) -> &Self {
        let mut state = self.inner.state.write();
        if let Some(index) = state.children.iter().position(|c| c.ptr_eq(node)) {
            state.children.remove(index);
            trace!(element = %self.name(), index, "removed child");
        }
        self
    }

    pub fn remove_first_child(&self) -> Result<&Self> {
        let mut state = self.inner.state.write();
        if state.children.is_empty() {
            return Err(Error::new(ErrorKind::EmptyChildren));
        }
        state.children.remove(0);
        trace!(element = %self.name(), "removed first child");
        Ok(self)
    }

    pub fn remove_last_child(&self) -> Result<&Self> {
        let mut state = self.inner.state.write();
        if state.children.pop().is_none() {
            return Err(Error::new(ErrorKind::EmptyChildren));
        }
        trace!(element = %self.name(), "removed last child");
        Ok(self)
    }

    /// Puts `replacement` in place of the first child that is the same node as
    /// `target`. Does nothing if `target` is not a child.
    pub fn replace_child(&self, target: &Node, replacement: impl Into<Node>) -> &Self {
        let replacement = replacement.into();
        let mut state = self.inner.state.write();
        if let Some(index) = state.children.iter().position(|c| c.ptr_eq(target)) {
            if let Some(slot) = state.children.get_mut(index) {
                *slot = replacement;
                trace!(element = %self.name(), index, "replaced child");
            }
        }
        self
    }

    pub fn child(&self, index: usize) -> Option<Node> {
        self.inner.state.read().children.get(index).cloned()
    }

    pub fn first_child(&self) -> Option<Node> {
        self.inner.state.read().children.first().cloned()
    }

    pub fn last_child(&self) -> Option<Node> {
        self.inner.state.read().children.last().cloned()
    }

    pub fn index_of_child(&self, node: &Node) -> Option<usize> {
        self.inner
            .state
            .read()
            .children
            .iter()
            .position(|c| c.ptr_eq(node))
    }

    pub fn child_count(&self) -> usize {
        self.inner.state.read().children.len()
    }

    /// Snapshot of all children in document order
    pub fn children(&self) -> Vec<Node> {
        self.inner.state.read().children.clone()
    }

    /// Snapshot of the child elements in document order, text skipped
    pub fn elements(&self) -> Vec<Self> {
        self.inner
            .state
            .read()
            .children
            .iter()
            .filter_map(Node::as_element)
            .cloned()
            .collect()
    }

    /// Snapshot of the child text nodes in document order, elements skipped
    pub fn texts(&self) -> Vec<Text> {
        self.inner
            .state
            .read()
            .children
            .iter()
            .filter_map(Node::as_text)
            .cloned()
            .collect()
    }

    /// Collects every descendant element called `name`.
    ///
    /// The walk is pre-order: an element comes before its own descendants, and
    /// siblings are visited left to right. `self` is never part of the result.
    pub fn search_elements_by_name(&self, name: &str) -> Vec<Self> {
        let mut found = Vec::new();
        self.collect_by_name(name, &mut found);
        found
    }

    fn collect_by_name(&self, name: &str, found: &mut Vec<Self>) {
        // snapshot so no lock is held while descending
        for element in self.elements() {
            if element.name() == name {
                found.push(element.clone());
            }
            element.collect_by_name(name, found);
        }
    }

    /// Sets `key` to `value`, overwriting any previous value.
    ///
    /// An existing key keeps its position in the attribute order. Fails with
    /// [`ErrorKind::InvalidIdentifier`] and leaves the attributes untouched if
    /// `key` is not a valid XML name.
    pub fn set_attribute(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&Self> {
        let key = key.into();
        if !is_valid_identifier(&key) {
            return Err(Error::invalid_identifier(
                &key,
                IdentifierUsage::AttributeName,
            ));
        }
        trace!(element = %self.name(), attribute = %key, "set attribute");
        self.inner
            .state
            .write()
            .attributes
            .insert(key, value.into());
        Ok(self)
    }

    pub fn remove_attribute(&self, key: &str) -> &Self {
        if self.inner.state.write().attributes.shift_remove(key).is_some() {
            trace!(element = %self.name(), attribute = %key, "removed attribute");
        }
        self
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.inner.state.read().attributes.contains_key(key)
    }

    pub fn attribute(&self, key: &str) -> Option<String> {
        self.inner.state.read().attributes.get(key).cloned()
    }

    /// Snapshot of the attributes in the order they were first set
    pub fn attributes(&self) -> IndexMap<String, String> {
        self.inner.state.read().attributes.clone()
    }

    /// Renders this element and its subtree without the XML declaration.
    ///
    /// Every line is prefixed with `indent` repeated `depth` times and ends
    /// with a newline. With `indent` set to `None` the output has no
    /// indentation and no line breaks at all.
    ///
    /// ```
    /// use lwdom::Element;
    /// # fn main() -> lwdom::Result<()> {
    /// let p = Element::new("p")?;
    /// p.append_text("hi");
    /// assert_eq!(p.to_text(1, Some("\t")), "\t<p>\n\t\thi\n\t</p>\n");
    /// assert_eq!(p.to_text(3, None), "<p>hi</p>");
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_text(&self, depth: usize, indent: Option<&str>) -> String {
        XmlFormatter.format_element(self, &FormatConfig::from_parts(depth, indent))
    }

    /// Gives the renderer read access to attributes and children.
    ///
    /// Uses a recursive read lock since a shared node may already be read
    /// higher up the same walk.
    pub(crate) fn with_contents<R>(
        &self,
        f: impl FnOnce(&IndexMap<String, String>, &[Node]) -> R,
    ) -> R {
        let state = self.inner.state.read_recursive();
        f(&state.attributes, &state.children)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_contents(|attributes, children| {
            f.debug_struct("Element")
                .field("name", &self.name())
                .field("attributes", attributes)
                .field("children", &children.len())
                .finish()
        })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        XmlFormatter::write_element(f, self, 0, Some(" "))
    }
}

/// Literal text content. Reserved characters are escaped when rendered, not
/// when stored.
#[derive(Clone, Debug)]
pub struct Text {
    content: Arc<str>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Arc::from(content.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.content, &other.content)
    }

    /// Renders the escaped content on its own line, see [`Element::to_text`]
    pub fn to_text(&self, depth: usize, indent: Option<&str>) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = XmlFormatter::write_text(&mut out, self, depth, indent);
        out
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Text {}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        XmlFormatter::write_text(f, self, 0, Some(" "))
    }
}
