use crate::escape::escape_html;
use crate::{Content, Element, Node, SerializeOptions, Stem, debug, trace};

/// Replace every occurrence of `needle` in the visible text of `root` with
/// `replacement`, returning a new tree. `root` is left untouched.
///
/// Raw text is matched against `needle` as-is. Pre-escaped markup is matched
/// against the escaped form of `needle`, so a literal `<b>` only matches
/// markup that displays as `<b>`, never an actual `<b>` tag. Tags and
/// attributes are never matched. An empty `needle` matches nothing.
///
/// ```rust
/// use tagtree::{attrs, replace_all, text};
/// use tagtree::tags::b;
///
/// let given = text("hello world");
/// let replaced = replace_all(&given, "world", &b(attrs![], [text("universe")]));
/// assert_eq!(replaced.to_html(), "hello <b>universe</b>");
/// assert_eq!(given.to_html(), "hello world");
/// ```
pub fn replace_all(root: &Node, needle: &str, replacement: &Node) -> Node {
    Replacer::new(needle, replacement).apply(root)
}

impl Node {
    /// See [`replace_all`].
    pub fn replace_all(&self, needle: &str, replacement: &Node) -> Node {
        replace_all(self, needle, replacement)
    }
}

/// A prepared replacement: the needle, its escaped form, and the rendered
/// replacement markup, computed once and reusable across trees.
#[derive(Debug, Clone)]
pub struct Replacer {
    needle: Stem,
    escaped_needle: Stem,
    replacement: Stem,
}

impl Replacer {
    /// Prepare a replacement, rendering `replacement` with default options.
    pub fn new(needle: &str, replacement: &Node) -> Self {
        Self::with_options(needle, replacement, &SerializeOptions::default())
    }

    /// Prepare a replacement, rendering `replacement` with `opts`.
    pub fn with_options(needle: &str, replacement: &Node, opts: &SerializeOptions) -> Self {
        let replacement = Stem::from(replacement.to_html_with_options(opts));
        trace!(needle, replacement = %replacement, "prepared replacement");
        Self {
            needle: needle.into(),
            escaped_needle: escape_html(needle).into(),
            replacement,
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// The markup spliced in at every match.
    pub fn replacement_markup(&self) -> &str {
        &self.replacement
    }

    /// Apply the replacement to `root`, returning a new tree.
    pub fn apply(&self, root: &Node) -> Node {
        if self.needle.is_empty() {
            return root.clone();
        }
        self.replace_node(root)
    }

    fn replace_node(&self, node: &Node) -> Node {
        match node {
            Node::Text(text) => match self.replace_in_text(text) {
                Some(markup) => Node::Markup(markup),
                None => node.clone(),
            },
            Node::Markup(markup) => match self.replace_in_markup(markup) {
                Some(markup) => Node::Markup(markup),
                None => node.clone(),
            },
            Node::Element(elem) => Node::Element(self.replace_element(elem)),
            Node::Fragment(children) => Node::Fragment(self.replace_children(children)),
        }
    }

    fn replace_element(&self, elem: &Element) -> Element {
        let content = match &elem.content {
            Content::Text(text) => match self.replace_in_text(text) {
                Some(markup) => Content::Markup(markup),
                None => elem.content.clone(),
            },
            Content::Markup(markup) => match self.replace_in_markup(markup) {
                Some(markup) => Content::Markup(markup),
                None => elem.content.clone(),
            },
            Content::Children(children) => Content::Children(self.replace_children(children)),
        };
        Element {
            tag: elem.tag.clone(),
            kind: elem.kind,
            attrs: elem.attrs.clone(),
            content,
        }
    }

    fn replace_children(&self, children: &[Node]) -> Vec<Node> {
        children.iter().map(|child| self.replace_node(child)).collect()
    }

    /// Split raw text on the needle, escape each segment, and rejoin with the
    /// replacement markup. `None` if the needle does not occur.
    fn replace_in_text(&self, text: &str) -> Option<Stem> {
        if self.needle.is_empty() || !text.contains(self.needle.as_str()) {
            return None;
        }

        let mut out = Stem::new();
        for (i, segment) in text.split(self.needle.as_str()).enumerate() {
            if i > 0 {
                out.push_str(&self.replacement);
            }
            out.push_str(&escape_html(segment));
        }
        debug!(needle = %self.needle, before = text, after = %out, "replaced in text");
        Some(out)
    }

    /// Replace the escaped needle in markup. Segments between matches are
    /// already markup and are kept as they are.
    fn replace_in_markup(&self, markup: &str) -> Option<Stem> {
        if self.escaped_needle.is_empty() || !markup.contains(self.escaped_needle.as_str()) {
            return None;
        }

        let out = Stem::from(markup.replace(self.escaped_needle.as_str(), &self.replacement));
        debug!(needle = %self.needle, before = markup, after = %out, "replaced in markup");
        Some(out)
    }
}

// =============================================================================
// Tests
// =============================================================================
