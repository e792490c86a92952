//! Construction helpers.
//!
//! ```rust
//! use tagtree::{attrs, element, text};
//!
//! let link = element(
//!     "a",
//!     attrs!["href" => "https://example.com", "target" => "_blank"],
//!     [text("Goo<g>le")],
//! );
//! assert_eq!(
//!     link.to_html(),
//!     r#"<a href="https://example.com" target="_blank">Goo&lt;g&gt;le</a>"#
//! );
//! ```

use crate::{Attribute, Attributes, Element, Error, Node, Result, Stem};

/// Build an [`Attributes`] list from `name => value` pairs. Values are raw
/// text and get escaped on output.
///
/// ```rust
/// let attrs = tagtree::attrs!["class" => "greeting", "style" => "color: red;"];
/// assert_eq!(attrs.len(), 2);
/// assert!(tagtree::attrs![].is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $(attrs.push($crate::Attribute::text($name, $value));)+
        attrs
    }};
}

/// Build an element with the given tag, attributes, and children.
///
/// The element is always [`Normal`](crate::ElementKind::Normal); void
/// elements come from the per-tag constructors in [`tags`](crate::tags) or
/// [`Element::void`].
pub fn element(
    tag: impl Into<Stem>,
    attrs: Attributes,
    children: impl IntoIterator<Item = Node>,
) -> Node {
    Element::new(tag)
        .with_attrs(attrs)
        .with_children(children)
        .into()
}

/// A raw text leaf, escaped when rendered.
pub fn text(s: impl Into<Stem>) -> Node {
    Node::Text(s.into())
}

/// A pre-escaped markup leaf, emitted verbatim. The caller is responsible for
/// its safety.
pub fn markup(s: impl Into<Stem>) -> Node {
    Node::Markup(s.into())
}

/// Build attributes from an alternating `name, value, name, value, ...`
/// list, as it might arrive at runtime.
pub fn attrs_from_pairs<S: AsRef<str>>(keyvalues: &[S]) -> Result<Attributes> {
    let mut pairs = keyvalues.chunks_exact(2);
    let attrs = pairs
        .by_ref()
        .map(|pair| Attribute::text(pair[0].as_ref(), pair[1].as_ref()))
        .collect();

    if let [name] = pairs.remainder() {
        return Err(Error::UnpairedAttribute {
            name: name.as_ref().to_owned(),
            count: keyvalues.len(),
        });
    }
    Ok(attrs)
}
