//! One constructor per standard HTML and SVG tag.
//!
//! Every constructor is generated from the same table that backs [`TAGS`],
//! so the void flag of a tag is declared exactly once. Normal tags take
//! attributes and children; void tags take attributes only.
//!
//! ```rust
//! use tagtree::{SerializeOptions, VoidStyle, attrs, text};
//! use tagtree::tags::{br, div, input, strong};
//!
//! let form = div(
//!     attrs!["class" => "row"],
//!     [input(attrs!["name" => "q"]), br(attrs![]), strong(attrs![], [text("go")])],
//! );
//! assert_eq!(
//!     form.to_html_with_options(&SerializeOptions::new().void_style(VoidStyle::Html5)),
//!     r#"<div class="row"><input name="q"><br><strong>go</strong></div>"#
//! );
//! ```
//!
//! Names that are Rust keywords or clash with crate-level helpers carry a
//! suffix: [`use_`], [`text_svg`], [`foreign_object`].

use crate::{Attributes, Element, ElementKind, Node, element};

/// A row of the tag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    /// The tag name as rendered.
    pub name: &'static str,
    pub kind: ElementKind,
}

impl TagInfo {
    pub fn is_void(&self) -> bool {
        self.kind == ElementKind::Void
    }
}

macro_rules! tag_table {
    (
        normal { $($name:ident => $tag:literal,)* }
        void { $($void_name:ident => $void_tag:literal,)* }
    ) => {
        /// Every tag known to this module, normal tags first.
        pub const TAGS: &[TagInfo] = &[
            $(TagInfo { name: $tag, kind: ElementKind::Normal },)*
            $(TagInfo { name: $void_tag, kind: ElementKind::Void },)*
        ];

        $(
            #[doc = concat!("Build a `<", $tag, ">` element.")]
            pub fn $name(attrs: Attributes, children: impl IntoIterator<Item = Node>) -> Node {
                element($tag, attrs, children)
            }
        )*

        $(
            #[doc = concat!("Build a void `<", $void_tag, ">` element.")]
            pub fn $void_name(attrs: Attributes) -> Node {
                Element::void($void_tag).with_attrs(attrs).into()
            }
        )*
    };
}

tag_table! {
    normal {
        a => "a",
        abbr => "abbr",
        address => "address",
        article => "article",
        aside => "aside",
        audio => "audio",
        b => "b",
        bdi => "bdi",
        bdo => "bdo",
        blockquote => "blockquote",
        body => "body",
        button => "button",
        canvas => "canvas",
        caption => "caption",
        cite => "cite",
        code => "code",
        colgroup => "colgroup",
        data => "data",
        datalist => "datalist",
        dd => "dd",
        del => "del",
        details => "details",
        dfn => "dfn",
        dialog => "dialog",
        div => "div",
        dl => "dl",
        dt => "dt",
        em => "em",
        fieldset => "fieldset",
        figcaption => "figcaption",
        figure => "figure",
        footer => "footer",
        form => "form",
        h1 => "h1",
        h2 => "h2",
        h3 => "h3",
        h4 => "h4",
        h5 => "h5",
        h6 => "h6",
        head => "head",
        header => "header",
        html => "html",
        i => "i",
        iframe => "iframe",
        ins => "ins",
        kbd => "kbd",
        label => "label",
        legend => "legend",
        li => "li",
        main => "main",
        map => "map",
        mark => "mark",
        meter => "meter",
        nav => "nav",
        noscript => "noscript",
        object => "object",
        ol => "ol",
        optgroup => "optgroup",
        option => "option",
        output => "output",
        p => "p",
        picture => "picture",
        pre => "pre",
        progress => "progress",
        q => "q",
        rp => "rp",
        rt => "rt",
        ruby => "ruby",
        s => "s",
        samp => "samp",
        script => "script",
        section => "section",
        select => "select",
        small => "small",
        span => "span",
        strong => "strong",
        style => "style",
        sub => "sub",
        summary => "summary",
        sup => "sup",
        table => "table",
        tbody => "tbody",
        td => "td",
        template => "template",
        textarea => "textarea",
        tfoot => "tfoot",
        th => "th",
        thead => "thead",
        time => "time",
        title => "title",
        tr => "tr",
        u => "u",
        ul => "ul",
        var => "var",
        video => "video",
        // SVG
        svg => "svg",
        circle => "circle",
        ellipse => "ellipse",
        line => "line",
        path => "path",
        polygon => "polygon",
        polyline => "polyline",
        rect => "rect",
        text_svg => "text",
        tspan => "tspan",
        use_ => "use",
        view => "view",
        foreign_object => "foreignObject",
    }
    void {
        area => "area",
        base => "base",
        br => "br",
        col => "col",
        embed => "embed",
        hr => "hr",
        img => "img",
        input => "input",
        link => "link",
        meta => "meta",
        param => "param",
        source => "source",
        track => "track",
        wbr => "wbr",
    }
}

/// Look up a tag by its rendered name (case-sensitive, so `foreignObject`
/// must be spelled as in SVG).
pub fn lookup(name: &str) -> Option<&'static TagInfo> {
    TAGS.iter().find(|info| info.name == name)
}

/// Whether `name` is a known void tag.
pub fn is_void(name: &str) -> bool {
    lookup(name).is_some_and(TagInfo::is_void)
}
