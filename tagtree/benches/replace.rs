use divan::{Bencher, black_box};
use tagtree::tags::{b, div, p};
use tagtree::{Node, Replacer, attrs, markup, text};

fn main() {
    divan::main();
}

fn article(paragraphs: usize) -> Node {
    div(
        attrs!["class" => "article"],
        (0..paragraphs).map(|i| {
            p(
                attrs![],
                [
                    text(format!("hello world, paragraph {i} <of> many")),
                    markup(", or <em>world</em>"),
                ],
            )
        }),
    )
}

#[divan::bench(args = [10, 100, 1000])]
fn replace_article(bencher: Bencher, paragraphs: usize) {
    let node = article(paragraphs);
    let replacer = Replacer::new("world", &b(attrs!["class" => "text-xs"], [text("universe")]));
    bencher.bench_local(|| {
        let replaced = replacer.apply(black_box(&node));
        black_box(replaced);
    });
}

#[divan::bench]
fn replace_no_match(bencher: Bencher) {
    let node = article(100);
    let replacer = Replacer::new("absent", &text("x"));
    bencher.bench_local(|| {
        let replaced = replacer.apply(black_box(&node));
        black_box(replaced);
    });
}
