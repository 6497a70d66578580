use crate::models::{Inline, Node, Translation};

/// Panics if the translation breaks a structural invariant.
///
/// `line_count` is the number of physical input lines.
pub fn check(translation: &Translation, line_count: usize) {
    for node in &translation.nodes {
        match node {
            Node::Heading { level, text } => {
                assert!(
                    matches!(level, 1 | 2),
                    "heading level out of range: {level}"
                );
                assert_escaped(text);
            }
            Node::Paragraph(paragraph) => {
                assert!(
                    !paragraph.children.is_empty(),
                    "empty paragraph emitted: {paragraph:?}"
                );
                check_fragments(&paragraph.children);
            }
            Node::DefinitionList { entries } => {
                assert!(!entries.is_empty(), "definition list without entries");
                for entry in entries {
                    check_fragments(&entry.term);
                    check_fragments(&entry.body.children);
                }
            }
            Node::LineBreak | Node::RawText { .. } => {}
        }
    }

    for diagnostic in &translation.diagnostics {
        assert!(
            (1..=line_count).contains(&diagnostic.line),
            "diagnostic points outside the input: {diagnostic}"
        );
    }
}

fn check_fragments(fragments: &[Inline]) {
    for pair in fragments.windows(2) {
        assert!(
            !matches!(pair, [Inline::Text(_), Inline::Text(_)]),
            "adjacent text fragments were not merged: {pair:?}"
        );
    }
    for fragment in fragments {
        if let Inline::Text(text) | Inline::Styled { text, .. } = fragment {
            assert!(!text.is_empty(), "empty fragment: {fragment:?}");
            assert_escaped(text);
        }
    }
}

fn assert_escaped(text: &str) {
    assert!(
        !text.contains(['<', '>']),
        "unescaped markup in output text: {text:?}"
    );
    assert!(
        !text.contains(['\u{2212}', '\u{2006}']),
        "special character left unescaped: {text:?}"
    );
}
