use tagtree::tags::{a, blockquote, div, strong};
use tagtree::{
    AttrValue, Attribute, Content, Element, ElementKind, Node, attrs, attrs_from_pairs, element,
    join, markup, replace_all, text,
};

#[test]
fn test_end_to_end_document() {
    facet_testhelpers::setup();

    let tree = element(
        "div",
        attrs!["class" => "1 2 3", "data-foo" => r#"4<'"5"'>6"#],
        [
            text("<oops>789</oops>"),
            element("strong", attrs![], [text("10")]),
        ],
    );

    assert_eq!(
        tree.to_html(),
        r#"<div class="1 2 3" data-foo="4&lt;&#39;&#34;5&#34;&#39;&gt;6">&lt;oops&gt;789&lt;/oops&gt;<strong>10</strong></div>"#
    );
}

#[test]
fn test_builder_matches_literal_tree() {
    let built = div(
        attrs!["class" => "greeting", "style" => "color: red;"],
        [text("Hello, world!")],
    );
    let literal = Node::Element(Element {
        tag: "div".into(),
        kind: ElementKind::Normal,
        attrs: [
            Attribute {
                name: "class".into(),
                value: AttrValue::Text("greeting".into()),
            },
            Attribute {
                name: "style".into(),
                value: AttrValue::Text("color: red;".into()),
            },
        ]
        .into_iter()
        .collect(),
        content: Content::Children(vec![Node::Text("Hello, world!".into())]),
    });

    assert_eq!(built, literal);
    assert_eq!(built.to_html(), literal.to_html());
}

#[test]
fn test_runtime_attribute_pairs() {
    let pairs = vec!["href".to_string(), "https://google.com".to_string()];
    let attrs = attrs_from_pairs(&pairs).unwrap();
    assert_eq!(
        div(attrs, []).to_html(),
        r#"<div href="https://google.com"></div>"#
    );
}

#[test]
fn test_nested_elements() {
    let link = a(
        attrs!["href" => "https://google.com", "target" => "_blank"],
        [
            text("Goo<g>le"),
            blockquote(attrs![], [text("Google")]),
        ],
    );
    assert_eq!(
        link.to_html(),
        r#"<a href="https://google.com" target="_blank">Goo&lt;g&gt;le<blockquote>Google</blockquote></a>"#
    );
}

#[test]
fn test_streamed_output_matches_string() {
    let tree = join([
        strong(attrs!["class" => "x"], [text("a<b")]),
        markup("<hr>"),
    ]);
    let mut buf = Vec::new();
    tree.write_html(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), tree.to_html());
}

#[test]
fn test_replace_then_join() {
    let highlighted = replace_all(
        &text("find the needle in the haystack"),
        "needle",
        &strong(attrs![], [text("needle")]),
    );
    let page = div(attrs![], [join([text("Result: "), highlighted])]);
    assert_eq!(
        page.to_html(),
        "<div>Result: find the <strong>needle</strong> in the haystack</div>"
    );
}

#[test]
fn test_concurrent_serialization() {
    let tree = div(
        attrs!["id" => "shared"],
        (0..50).map(|i| strong(attrs![], [text(format!("<{i}>"))])),
    );
    let expected = tree.to_html();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| tree.to_html())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_json_roundtrip() {
    let tree = div(
        attrs!["class" => "card"],
        [
            text("a < b"),
            markup("<br>"),
            Element::new("p").with_markup("<i>x</i>").into(),
            join([text("one"), text("two")]),
        ],
    );

    let json = facet_json::to_string(&tree).expect("serialization should work");
    assert!(json.contains("card"));

    let back: Node = facet_json::from_str(&json).expect("deserialization should work");
    assert_eq!(back, tree);
}
