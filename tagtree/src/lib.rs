//! Build HTML trees in code and render them to escaped markup.
//!
//! tagtree provides:
//! - **Tree model**: [`Node`], [`Element`] and [`Attribute`], with raw text and
//!   pre-escaped markup kept apart as distinct variants
//! - **Construction**: [`element`], [`text`], [`markup`], [`attrs!`], and one
//!   constructor per HTML/SVG tag in [`tags`]
//! - **Serialization**: single-pass escaping into a `String`, any
//!   [`fmt::Write`](std::fmt::Write), or any [`io::Write`](std::io::Write)
//! - **Editing**: [`join`] siblings into a fragment, and [`replace_all`]
//!   occurrences of a string in the tree's text with another node
//!
//! # Example
//!
//! ```rust
//! use tagtree::{attrs, element, text};
//! use tagtree::tags::strong;
//!
//! let tree = element(
//!     "div",
//!     attrs!["class" => "1 2 3", "data-foo" => r#"4<'"5"'>6"#],
//!     [
//!         text("<oops>789</oops>"),
//!         strong(attrs![], [text("10")]),
//!     ],
//! );
//!
//! assert_eq!(
//!     tree.to_html(),
//!     r#"<div class="1 2 3" data-foo="4&lt;&#39;&#34;5&#34;&#39;&gt;6">&lt;oops&gt;789&lt;/oops&gt;<strong>10</strong></div>"#
//! );
//! ```

mod tracing_macros;

mod builder;
pub mod edit;
mod error;
pub mod escape;
mod node;
pub mod serialize;
mod stem;
pub mod tags;

#[allow(unused_imports)]
pub(crate) use tracing_macros::{debug, trace};

// Re-export construction helpers
pub use builder::{attrs_from_pairs, element, markup, text};

// Re-export editing helpers
pub use edit::{Replacer, join, replace_all};

// Re-export serialization
pub use serialize::{SerializeOptions, VoidStyle, serialize_node, write_node, write_node_io};

// Re-export tree types at crate root for convenience
pub use error::{Error, Result};
pub use node::{AttrValue, Attribute, Attributes, Content, Element, ElementKind, Node};
pub use stem::Stem;
