use crate::Node;

/// Group `nodes` into one fragment that renders as their concatenation,
/// with no separator and no wrapping tag.
///
/// ```rust
/// use tagtree::{attrs, join, markup, text};
/// use tagtree::tags::strong;
///
/// let joined = join([
///     strong(attrs![], [text("world")]),
///     text("! <em>"),
///     markup(" <span>x</span>"),
/// ]);
/// assert_eq!(joined.to_html(), "<strong>world</strong>! &lt;em&gt; <span>x</span>");
/// assert_eq!(join([]).to_html(), "");
/// ```
pub fn join(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(nodes.into_iter().collect())
}
