//! Fixture tests for the whole pipeline.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

mod invariants;

use crate::{PurifyError, PurifyOptions, purify, purify_document};

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_challenge_scopes() {
    assert_fixture("challenge_scopes");
}

#[test]
fn fixture_lesson() {
    assert_fixture("lesson");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let purified = purify_document(&md, &PurifyOptions::default()).unwrap();
    invariants::check(&purified.lines);

    let output = purified.to_text();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, output);
    });
}

/// Front matter is skipped and counted.
#[test]
fn lesson_stats() {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/lesson.md")).unwrap();

    let stats = purify_document(&md, &PurifyOptions::default())
        .unwrap()
        .stats;
    assert_eq!(stats.front_matter_lines, 4);
    assert_eq!(stats.headings, 4);
    assert_eq!(stats.challenges, 1);
    assert_eq!(stats.code_blocks, 3);
    assert_eq!(stats.links, 2);
    assert_eq!(stats.omitted_lines, 5);
}

#[test]
fn empty_document_is_just_the_header() {
    let out = purify("", &PurifyOptions::default()).unwrap();
    assert_eq!(
        out,
        "# This file is generated from the corresponding .Rmd file\n\n\n"
    );
}

#[test]
fn empty_document_without_header_is_empty() {
    let out = purify("", &PurifyOptions::default().without_header()).unwrap();
    assert_eq!(out, "");
}

#[test]
fn front_matter_only() {
    let out = purify("---\ntitle: x\n---\n", &PurifyOptions::default().without_header()).unwrap();
    assert_eq!(out, "");
}

/// A second `---` later in the body is ordinary prose.
#[test]
fn later_delimiters_are_prose() {
    let out = purify("text\n---\n", &PurifyOptions::default().without_header()).unwrap();
    assert_eq!(out, "\n# text\n\n# ---\n");
}

#[test]
fn structural_error_yields_no_output() {
    let result = purify("# Title\n\nprose\n\n```{r}\nx\n", &PurifyOptions::default());
    assert_eq!(
        result,
        Err(PurifyError::UnterminatedFence {
            line: 5,
            marker_len: 3,
        })
    );
}

#[test]
fn width_is_configurable() {
    let options = PurifyOptions::default().without_header().with_width(12);
    let out = purify("alpha beta gamma delta", &options).unwrap();
    assert_eq!(out, "\n# alpha beta\n# gamma delta\n");
}
