//! Tree model: attributes, elements, and nodes.
//!
//! A tree is a plain value built by composition. Every piece of text in it is
//! either raw text, which is escaped when rendered, or pre-escaped markup,
//! which is emitted byte-for-byte. The two are distinct variants, so "empty
//! text" and "no text" never get confused.
//!
//! # Example
//!
//! ```rust
//! use tagtree::{Element, Node, attrs};
//!
//! let greeting: Node = Element::new("div")
//!     .with_attrs(attrs!["class" => "greeting"])
//!     .with_text("Hello, world!")
//!     .into();
//! assert_eq!(greeting.to_html(), r#"<div class="greeting">Hello, world!</div>"#);
//! ```

use smallvec::SmallVec;

use crate::Stem;

/// Attribute value: raw text or pre-escaped markup.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum AttrValue {
    /// Escaped on output.
    Text(Stem),
    /// Emitted verbatim. The caller guarantees it is safe.
    Markup(Stem),
}

impl AttrValue {
    /// The stored string, whichever form it is in.
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Text(s) | AttrValue::Markup(s) => s,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, AttrValue::Markup(_))
    }
}

/// A single `name="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
pub struct Attribute {
    /// Attribute name, always escaped on output.
    pub name: Stem,
    pub value: AttrValue,
}

impl Attribute {
    /// Attribute whose value is escaped on output.
    pub fn text(name: impl Into<Stem>, value: impl Into<Stem>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Text(value.into()),
        }
    }

    /// Attribute whose value is emitted verbatim.
    pub fn markup(name: impl Into<Stem>, value: impl Into<Stem>) -> Self {
        Self {
            name: name.into(),
            value: AttrValue::Markup(value.into()),
        }
    }
}

/// Ordered attribute list. Duplicates are kept and rendered in order.
pub type Attributes = SmallVec<[Attribute; 4]>;

/// Whether an element may render without a closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, facet::Facet)]
#[repr(u8)]
pub enum ElementKind {
    /// Always rendered as `<tag ...>content</tag>`.
    #[default]
    Normal,
    /// An HTML void element (`br`, `input`, ...). How it is closed is decided
    /// by [`SerializeOptions::void_style`](crate::SerializeOptions).
    Void,
}

/// The inner content of an element.
///
/// Precedence, highest first: markup shortcut, text shortcut, children.
/// Holding exactly one of them makes that order structural.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum Content {
    /// Rendered children, in order.
    Children(Vec<Node>),
    /// Raw text shortcut, escaped on output.
    Text(Stem),
    /// Pre-escaped markup shortcut, emitted verbatim.
    Markup(Stem),
}

impl Content {
    /// True when nothing would be rendered between the tags.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Children(children) => children.is_empty(),
            Content::Text(s) | Content::Markup(s) => s.is_empty(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Children(Vec::new())
    }
}

/// An HTML or SVG element.
#[derive(Debug, Clone, PartialEq, Eq, Default, facet::Facet)]
pub struct Element {
    /// The tag name, escaped on output.
    pub tag: Stem,
    pub kind: ElementKind,
    /// Attributes in insertion order.
    pub attrs: Attributes,
    pub content: Content,
}

impl Element {
    /// Create a normal element with no attributes and no content.
    pub fn new(tag: impl Into<Stem>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Create a void element (`br`, `img`, ...).
    pub fn void(tag: impl Into<Stem>) -> Self {
        Self {
            tag: tag.into(),
            kind: ElementKind::Void,
            ..Default::default()
        }
    }

    pub fn is_void(&self) -> bool {
        self.kind == ElementKind::Void
    }

    /// Append a raw-text attribute.
    pub fn with_attr(mut self, name: impl Into<Stem>, value: impl Into<Stem>) -> Self {
        self.attrs.push(Attribute::text(name, value));
        self
    }

    /// Append every attribute from `attrs`.
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attribute>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// Append a child, unless a text or markup shortcut is set.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push_child(child.into());
        self
    }

    /// Append children, unless a text or markup shortcut is set.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self.push_child(child);
        }
        self
    }

    /// Set the raw text shortcut. Ignored if a markup shortcut is present
    /// or if `text` is empty.
    pub fn with_text(mut self, text: impl Into<Stem>) -> Self {
        let text = text.into();
        if !text.is_empty() && !matches!(self.content, Content::Markup(_)) {
            self.content = Content::Text(text);
        }
        self
    }

    /// Set the pre-escaped markup shortcut, replacing any other content.
    /// An empty `markup` is ignored, so it never hides existing children.
    pub fn with_markup(mut self, markup: impl Into<Stem>) -> Self {
        let markup = markup.into();
        if !markup.is_empty() {
            self.content = Content::Markup(markup);
        }
        self
    }

    /// Add a child node. Returns `false` (and drops the child) when a
    /// shortcut already decides the element's content.
    pub fn push_child(&mut self, child: Node) -> bool {
        match &mut self.content {
            Content::Children(children) => {
                children.push(child);
                true
            }
            Content::Text(_) | Content::Markup(_) => false,
        }
    }

    /// Child nodes, or an empty slice when a shortcut is set.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) | Content::Markup(_) => &[],
        }
    }

    /// First attribute with the given name.
    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// Raw text of this element and all descendants. Markup payloads are
    /// skipped since they are not plain text.
    pub fn text_content(&self) -> Stem {
        let mut out = Stem::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Stem) {
        match &self.content {
            Content::Text(t) => out.push_str(t),
            Content::Markup(_) => {}
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// A node of the tree.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum Node {
    /// An element with tag, attributes, and content.
    Element(Element),
    /// A raw text leaf, escaped on output.
    Text(Stem),
    /// A pre-escaped markup leaf, emitted verbatim.
    Markup(Stem),
    /// A tagless group of siblings, rendered as their concatenation.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Node::Markup(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Node::Fragment(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Children of an element or fragment; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(e) => e.children(),
            Node::Fragment(children) => children,
            Node::Text(_) | Node::Markup(_) => &[],
        }
    }

    /// Raw text of this node and all descendants.
    pub fn text_content(&self) -> Stem {
        let mut out = Stem::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Stem) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Markup(_) => {}
            Node::Element(e) => e.collect_text(out),
            Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

// =============================================================================
// Tests
// =============================================================================
