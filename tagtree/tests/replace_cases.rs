//! Fixture-driven tests for `replace_all` using datatest-stable.
//!
//! Each test case is a file in `tests/replace-cases/` with format:
//! ```
//! <text | markup>
//! ===
//! <given payload>
//! ===
//! <needle>
//! ===
//! <expected HTML>
//! ```
//!
//! The replacement is always `<b class="text-xs">universe</b>`. The test
//! verifies the rendered result and that the input tree is unchanged.

use std::path::Path;
use tagtree::tags::b;
use tagtree::{attrs, markup, replace_all, text};

fn run_replace_case(path: &Path) -> datatest_stable::Result<()> {
    facet_testhelpers::setup();

    let content = std::fs::read_to_string(path)?;
    let parts: Vec<&str> = content.split("\n===\n").collect();

    let [kind, given, needle, want] = parts.as_slice() else {
        return Err(format!(
            "Test file must have exactly three '===' separators, found {} parts",
            parts.len()
        )
        .into());
    };
    let want = want.strip_suffix('\n').unwrap_or(*want);

    let given = match kind.trim() {
        "text" => text(*given),
        "markup" => markup(*given),
        other => return Err(format!("unknown payload kind {other:?}").into()),
    };
    let before = given.to_html();

    let replacement = b(attrs!["class" => "text-xs"], [text("universe")]);
    let result = replace_all(&given, needle, &replacement).to_html();

    if result != want {
        return Err(format!(
            "Replace failed!\nGiven: {before}\nNeedle: {needle}\nResult: {result}\nExpected: {want}"
        )
        .into());
    }
    if given.to_html() != before {
        return Err("replace_all modified its input".into());
    }

    Ok(())
}

datatest_stable::harness! {
    { test = run_replace_case, root = "tests/replace-cases", pattern = r".*\.txt$" },
}
