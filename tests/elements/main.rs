//! Integration tests for the element tree and its visitor.
//!
//! Parses real USFM sources and checks the shape of the resulting tree
//! through [`ElementVisitor`] traversals: ordering, enter/exit pairing, and
//! accumulation over leaves.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use usfm::document::{
    ChapterNumber, ElementVisitor, Footnote, FormattedText, Heading, Paragraph, Text, Whitespace,
    walk_document, walk_element,
};
use usfm::parse;

/// Counts whitespace-separated words across every text leaf.
#[derive(Default)]
struct WordCounter(usize);

impl ElementVisitor for WordCounter {
    fn visit_text(&mut self, text: &Text) {
        self.0 += text.content.split_whitespace().count();
    }
}

/// Records the traversal as a flat list of hook names.
#[derive(Default)]
struct Tracer(Vec<String>);

impl ElementVisitor for Tracer {
    fn enter_paragraph(&mut self, _: &Paragraph) {
        self.0.push("enter_paragraph".into());
    }
    fn exit_paragraph(&mut self, _: &Paragraph) {
        self.0.push("exit_paragraph".into());
    }
    fn enter_formatted_text(&mut self, _: &FormattedText) {
        self.0.push("enter_formatted".into());
    }
    fn exit_formatted_text(&mut self, _: &FormattedText) {
        self.0.push("exit_formatted".into());
    }
    fn visit_text(&mut self, text: &Text) {
        self.0.push(format!("text:{}", text.content));
    }
    fn visit_whitespace(&mut self, _: &Whitespace) {
        self.0.push("whitespace".into());
    }
}

/// Tallies enter and exit calls per container kind.
#[derive(Default)]
struct Balance {
    entered: usize,
    exited: usize,
    depth: usize,
    max_depth: usize,
}

impl Balance {
    fn enter(&mut self) {
        self.entered += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn exit(&mut self) {
        self.exited += 1;
        self.depth -= 1;
    }
}

impl ElementVisitor for Balance {
    fn enter_paragraph(&mut self, _: &Paragraph) {
        self.enter();
    }
    fn exit_paragraph(&mut self, _: &Paragraph) {
        self.exit();
    }
    fn enter_formatted_text(&mut self, _: &FormattedText) {
        self.enter();
    }
    fn exit_formatted_text(&mut self, _: &FormattedText) {
        self.exit();
    }
    fn enter_heading(&mut self, _: &Heading) {
        self.enter();
    }
    fn exit_heading(&mut self, _: &Heading) {
        self.exit();
    }
    fn enter_chapter_number(&mut self, _: &ChapterNumber) {
        self.enter();
    }
    fn exit_chapter_number(&mut self, _: &ChapterNumber) {
        self.exit();
    }
    fn enter_footnote(&mut self, _: &Footnote) {
        self.enter();
    }
    fn exit_footnote(&mut self, _: &Footnote) {
        self.exit();
    }
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn traversal_follows_source_order() {
    let document = parse("\\p a \\bd b\\bd* c").unwrap();
    let mut tracer = Tracer::default();
    walk_document(&mut tracer, &document);
    assert_eq!(
        tracer.0,
        vec![
            "enter_paragraph",
            "text: a ",
            "enter_formatted",
            "text:b",
            "exit_formatted",
            "text: c\n",
            "exit_paragraph",
        ]
    );
}

#[test]
fn enters_and_exits_pair_up_over_a_full_book_fragment() {
    let source = "\\h Genesis\n\
                  \\mt1 The First Book\n\
                  \\c 1\n\
                  \\p \\v 1 In the beginning \\f + \\fr 1:1 \\ft a note\\f* God\n\
                  \\q1 a line of poetry\n\
                  \\b\n\
                  \\q2 a deeper line\n";
    let document = parse(source).unwrap();
    let mut balance = Balance::default();
    walk_document(&mut balance, &document);
    assert_eq!(balance.entered, balance.exited);
    assert_eq!(balance.depth, 0);
    // footnote spans nest inside the footnote inside a paragraph
    assert!(balance.max_depth >= 3);
}

#[test]
fn whitespace_elements_are_visited_as_leaves() {
    let document = parse("\\p one\n\\pb\n\\p two").unwrap();
    let mut tracer = Tracer::default();
    walk_document(&mut tracer, &document);
    assert!(tracer.0.contains(&"whitespace".to_string()));
}

// =============================================================================
// Accumulation
// =============================================================================

#[test]
fn word_count_over_a_parsed_document() {
    let document = parse("\\s2 Two Words\n\\p alpha beta gamma\n").unwrap();
    let mut counter = WordCounter::default();
    walk_document(&mut counter, &document);
    assert_eq!(counter.0, 5);
}

#[test]
fn traversal_is_repeatable() {
    let document = parse("\\p alpha beta\n\\p gamma\n").unwrap();
    let mut counter = WordCounter::default();
    walk_document(&mut counter, &document);
    walk_document(&mut counter, &document);
    assert_eq!(counter.0, 6);
}

#[test]
fn word_count_descends_into_nested_spans() {
    let document = parse("\\p one \\bd two \\it three four\\it*\\bd* five").unwrap();
    let mut counter = WordCounter::default();
    walk_document(&mut counter, &document);
    assert_eq!(counter.0, 5);
}

// =============================================================================
// Tree Shape
// =============================================================================

#[test]
fn children_accessor_matches_walked_leaves() {
    let document = parse("\\p head \\bd middle\\bd* tail").unwrap();
    let paragraph = &document.elements[0];
    let children = paragraph.children().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].as_text(), Some(" head "));
    assert!(children[1].children().is_some());
    assert_eq!(children[2].as_text(), Some(" tail\n"));
}

#[test]
fn parsed_documents_compare_equal() {
    let source = "\\c 1\n\\p \\v 1 In the beginning\n";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn walking_a_cloned_element_matches_the_original() {
    let document = parse("\\p some words here").unwrap();
    let element = document.elements[0].clone();
    let mut original = WordCounter::default();
    let mut cloned = WordCounter::default();
    walk_element(&mut original, &document.elements[0]);
    walk_element(&mut cloned, &element);
    assert_eq!(original.0, cloned.0);
}

// =============================================================================
// Generated Documents
// =============================================================================

proptest! {
    /// The visitor's word count equals the word count of the source lines.
    #[test]
    fn word_count_matches_the_source(
        lines in prop::collection::vec(
            prop::collection::vec("[a-z]{1,8}", 1..10),
            1..10,
        )
    ) {
        let source: String = lines
            .iter()
            .map(|words| format!("\\p {}\n", words.join(" ")))
            .collect();
        let expected: usize = lines.iter().map(Vec::len).sum();

        let document = parse(&source).unwrap();
        let mut counter = WordCounter::default();
        walk_document(&mut counter, &document);
        prop_assert_eq!(counter.0, expected);
    }

    /// Every traversal leaves the enter/exit depth balanced.
    #[test]
    fn traversal_depth_always_balances(
        lines in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,4}", 1..15)
    ) {
        let source: String = lines
            .iter()
            .enumerate()
            .map(|(index, line)| match index % 4 {
                0 => format!("\\p {line}\n"),
                1 => format!("\\q2 {line}\n"),
                2 => format!("\\p \\bd {line}\\bd*\n"),
                _ => format!("\\s1 {line}\n\\p follows\n"),
            })
            .collect();

        let document = parse(&source).unwrap();
        let mut balance = Balance::default();
        walk_document(&mut balance, &document);
        prop_assert_eq!(balance.entered, balance.exited);
        prop_assert_eq!(balance.depth, 0);
    }
}
