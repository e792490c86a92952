//! Serializer: turn a tree into markup.
//!
//! Output is exactly what the tree specifies:
//!
//! - Tag names, attribute names and raw text are escaped
//! - Pre-escaped markup is emitted byte-for-byte
//! - Attributes are rendered in order as ` name="value"`
//! - No DOCTYPE, no whitespace is added or normalized
//!
//! The only knob is how empty void elements are closed, see [`VoidStyle`].

use crate::escape::write_escaped;
use crate::{AttrValue, Attribute, Content, Element, Node};
use std::fmt::{self, Write};
use std::io;

/// How an empty [`Void`](crate::ElementKind::Void) element is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoidStyle {
    /// `<br></br>`: same as any other element.
    #[default]
    ClosingTag,
    /// `<br/>`
    SelfClosing,
    /// `<br>`
    Html5,
}

/// Options for serialization.
#[derive(Clone, Debug, Default)]
pub struct SerializeOptions {
    /// How to close empty void elements (default: [`VoidStyle::ClosingTag`]).
    pub void_style: VoidStyle,
}

impl SerializeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how empty void elements are closed.
    pub fn void_style(mut self, style: VoidStyle) -> Self {
        self.void_style = style;
        self
    }

    /// Close empty void elements with `/>`.
    pub fn self_closing(self) -> Self {
        self.void_style(VoidStyle::SelfClosing)
    }

    /// Leave empty void elements unclosed, as HTML5 does.
    pub fn html5(self) -> Self {
        self.void_style(VoidStyle::Html5)
    }
}

/// Serialize a node to a string.
pub fn serialize_node(node: &Node, opts: &SerializeOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(node, &mut out, opts);
    out
}

/// Serialize a node into any [`fmt::Write`] sink.
pub fn write_node<W: Write + ?Sized>(
    node: &Node,
    out: &mut W,
    opts: &SerializeOptions,
) -> fmt::Result {
    Serializer::new(out, opts).write_node(node)
}

/// Serialize a node into an [`io::Write`] sink, streaming as it goes.
pub fn write_node_io<W: io::Write + ?Sized>(
    node: &Node,
    out: &mut W,
    opts: &SerializeOptions,
) -> io::Result<()> {
    let mut adapter = IoAdapter {
        inner: out,
        error: None,
    };
    match write_node(node, &mut adapter, opts) {
        Ok(()) => Ok(()),
        Err(fmt::Error) => Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

/// Forwards `fmt::Write` to `io::Write`, keeping the first io error.
struct IoAdapter<'a, W: io::Write + ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

struct Serializer<'a, W: Write + ?Sized> {
    out: &'a mut W,
    options: &'a SerializeOptions,
}

impl<'a, W: Write + ?Sized> Serializer<'a, W> {
    fn new(out: &'a mut W, options: &'a SerializeOptions) -> Self {
        Self { out, options }
    }

    fn write_node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Element(elem) => self.write_element(elem),
            Node::Text(text) => write_escaped(&mut *self.out, text),
            Node::Markup(markup) => self.out.write_str(markup),
            Node::Fragment(children) => {
                for child in children {
                    self.write_node(child)?;
                }
                Ok(())
            }
        }
    }

    fn write_attr(&mut self, attr: &Attribute) -> fmt::Result {
        write_escaped(&mut *self.out, &attr.name)?;
        self.out.write_str("=\"")?;
        match &attr.value {
            AttrValue::Text(text) => write_escaped(&mut *self.out, text)?,
            AttrValue::Markup(markup) => self.out.write_str(markup)?,
        }
        self.out.write_char('"')
    }

    fn write_element(&mut self, elem: &Element) -> fmt::Result {
        // Opening tag
        self.out.write_char('<')?;
        write_escaped(&mut *self.out, &elem.tag)?;
        for attr in &elem.attrs {
            self.out.write_char(' ')?;
            self.write_attr(attr)?;
        }

        // Empty void elements
        if elem.is_void() && elem.content.is_empty() {
            match self.options.void_style {
                VoidStyle::ClosingTag => {}
                VoidStyle::SelfClosing => return self.out.write_str("/>"),
                VoidStyle::Html5 => return self.out.write_char('>'),
            }
        }
        self.out.write_char('>')?;

        match &elem.content {
            Content::Markup(markup) => self.out.write_str(markup)?,
            Content::Text(text) => write_escaped(&mut *self.out, text)?,
            Content::Children(children) => {
                for child in children {
                    self.write_node(child)?;
                }
            }
        }

        self.out.write_str("</")?;
        write_escaped(&mut *self.out, &elem.tag)?;
        self.out.write_char('>')
    }
}

// =============================================================================
// Convenience methods
// =============================================================================

impl Node {
    /// Serialize this node to a string with default options.
    pub fn to_html(&self) -> String {
        serialize_node(self, &SerializeOptions::default())
    }

    /// Serialize this node with custom options.
    pub fn to_html_with_options(&self, opts: &SerializeOptions) -> String {
        serialize_node(self, opts)
    }

    /// Stream this node into an [`io::Write`] sink with default options.
    pub fn write_html<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_node_io(self, out, &SerializeOptions::default())
    }
}

impl Element {
    /// Serialize this element to a string with default options.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = Serializer::new(&mut out, &SerializeOptions::default()).write_element(self);
        out
    }
}

impl Attribute {
    /// Serialize this attribute as `name="value"`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = Serializer::new(&mut out, &SerializeOptions::default()).write_attr(self);
        out
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f, &SerializeOptions::default())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Serializer::new(f, &SerializeOptions::default()).write_element(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
