//! The [`Node`] tree shared by the XML and JSON readers.

use std::collections::BTreeMap;
use std::fmt;

/// Namespace-qualified element name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI, empty when the element has none.
    pub space: String,
    /// Local element name.
    pub local: String,
}

impl QName {
    /// Create a qualified name.
    pub fn new(space: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.space.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.space, self.local)
        }
    }
}

/// One element of a decoded document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    /// Local element name (or JSON key).
    pub name: String,
    /// Namespace URI, if the wire format carries one.
    pub namespace: Option<String>,
    /// Polymorphic type name (`xsi:type` or `_typeName`), prefix stripped.
    pub type_name: Option<String>,
    /// Trimmed text content, `None` when absent or whitespace-only.
    pub text: Option<String>,
    /// Unqualified attributes.
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: set the polymorphic type name.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The qualified name of this element.
    pub fn qname(&self) -> QName {
        QName::new(self.namespace.clone().unwrap_or_default(), self.name.clone())
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Node::text)
    }

    /// Text content of this node.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Attribute value by unqualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the node carries no text and no children.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }
}

/// Strip an XML namespace prefix (`vim25:InvalidLogin` → `InvalidLogin`).
pub(crate) fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// Trim text, mapping whitespace-only content to `None`.
pub(crate) fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
