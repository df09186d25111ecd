use pinruler::headings::{number_headings, process_page, Document};

#[test]
fn numbers_nested_headings() {
    let input = "# Intro\ntext\n## Scope\n### Detail\n## Goals\n# Design\n## Model\n";
    let expected =
        "# 1. Intro\ntext\n## 1.1 Scope\n### 1.1.1 Detail\n## 1.2 Goals\n# 2. Design\n## 2.1 Model\n";
    assert_eq!(number_headings(input), expected);
}

#[test]
fn deeper_counters_reset_and_missing_levels_are_zero() {
    let input = "### Orphan\n# A\n###### Six\n## B\n###### Six again";
    let expected = "### 0.0.1 Orphan\n# 1. A\n###### 1.0.0.0.0.1 Six\n## 1.1 B\n###### 1.1.0.0.0.1 Six again";
    assert_eq!(number_headings(input), expected);
}

#[test]
fn already_numbered_headings_are_left_alone() {
    let input = "# 1. Intro\n# Next\n## 2.1 Kept\n## Fresh";
    assert_eq!(number_headings(input), "# 1. Intro\n# 1. Next\n## 2.1 Kept\n## 1.1 Fresh");
}

#[test]
fn non_headings_pass_through() {
    let input = "#hashtag\n####### seven\nplain # text\n\n    # indented\r\n";
    assert_eq!(number_headings(input), input);
}

#[test]
fn titles_are_trimmed() {
    assert_eq!(number_headings("##   Spaced out   \n"), "## 0.1 Spaced out\n");
}

#[test]
fn front_matter_gates_numbering() {
    let page = "---\ntitle: Notes\nauto_number_headers: true\n---\n# Intro\n## Part\n";
    assert_eq!(
        process_page(page).unwrap(),
        "---\ntitle: Notes\nauto_number_headers: true\n---\n# 1. Intro\n## 1.1 Part\n"
    );

    let off = "---\nauto_number_headers: false\n---\n# Intro\n";
    assert_eq!(process_page(off).unwrap(), off);

    let quoted = "---\nauto_number_headers: \"true\"\n---\n# Intro\n";
    assert_eq!(process_page(quoted).unwrap(), quoted);

    let none = "# Intro\n";
    assert_eq!(process_page(none).unwrap(), none);
}

#[test]
fn document_exposes_front_matter() {
    let doc = Document::parse("---\nauto_number_headers: true\nlayout: post\n---\nbody\n").unwrap();
    assert!(doc.wants_numbering());
    assert_eq!(doc.content, "body\n");
    assert_eq!(
        doc.data.get("layout").and_then(|v| v.as_str()),
        Some("post")
    );
}

#[test]
fn malformed_front_matter_is_an_error() {
    assert!(Document::parse("---\nkey: [unclosed\n---\n# A\n").is_err());
}

#[test]
fn crlf_page_without_numbering_round_trips() {
    let page = "---\r\ntitle: x\r\nauto_number_headers: false\r\n---\r\n# A\r\n";
    assert_eq!(process_page(page).unwrap(), page);
}

#[test]
fn closing_fence_without_newline_round_trips() {
    let page = "---\ntitle: x\n---";
    assert_eq!(process_page(page).unwrap(), page);
}

#[test]
fn heading_lines_keep_crlf() {
    assert_eq!(number_headings("# A\r\ntext\r\n"), "# 1. A\r\ntext\r\n");

    let page = "---\r\nauto_number_headers: true\r\n---\r\n# A\r\n## B\r\n";
    assert_eq!(
        process_page(page).unwrap(),
        "---\r\nauto_number_headers: true\r\n---\r\n# 1. A\r\n## 1.1 B\r\n"
    );
}
