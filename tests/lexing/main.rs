//! Integration tests for the USFM lexer.
//!
//! Tests tokenization across the whole marker catalogue, position tracking,
//! the footnote-label sub-mode, and lexical error reporting.

use pretty_assertions::assert_eq;
use usfm::parser::{LexRule, Lexer, Position, Token, TokenKind, MARKERS};

/// Lexes a complete source text, panicking on lexical errors.
fn tokenize_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new();
    lexer.input(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.token().expect(source) {
        tokens.push(token);
    }
    tokens
}

/// A canonical source line exercising the given marker.
fn sample_source(spelling: &str, rule: LexRule) -> String {
    match rule {
        LexRule::Standalone => format!("\\{spelling} some text\n"),
        LexRule::NumericSuffix => format!("\\{spelling}2 some text\n"),
        LexRule::SuffixedLine => format!("\\{spelling}3 A Line Of Text\n"),
        LexRule::RestOfLine | LexRule::IgnoredLine => {
            format!("\\{spelling} rest of the line\n")
        }
        LexRule::OneWord => format!("\\{spelling} 4\n"),
        LexRule::OpenClose => format!("\\{spelling} inner\\{spelling}*\n"),
        LexRule::NoteOpenClose => format!("\\{spelling} + inner\\{spelling}*\n"),
        LexRule::UntilNextMarker => format!("\\{spelling} payload text\n"),
    }
}

// =============================================================================
// Catalogue Coverage
// =============================================================================

#[test]
fn every_marker_lexes_its_canonical_form() {
    for (spelling, marker) in &MARKERS {
        let source = sample_source(spelling, marker.rule);
        tokenize_all(&source);
    }
}

#[test]
fn ignored_markers_produce_only_eof() {
    for (spelling, marker) in &MARKERS {
        if marker.rule != LexRule::IgnoredLine {
            continue;
        }
        let tokens = tokenize_all(&format!("\\{spelling} discard me\n"));
        assert_eq!(tokens.len(), 1, "{spelling}");
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}

#[test]
fn open_close_markers_produce_matching_halves() {
    for (spelling, marker) in &MARKERS {
        if marker.rule != LexRule::OpenClose {
            continue;
        }
        let tokens = tokenize_all(&format!("\\{spelling} inner\\{spelling}*"));
        assert_eq!(tokens[0].kind, TokenKind::Open(marker), "{spelling}");
        assert_eq!(tokens[1].kind, TokenKind::Text("inner".into()), "{spelling}");
        assert_eq!(tokens[2].kind, TokenKind::Close(marker), "{spelling}");
    }
}

#[test]
fn suffixed_markers_decode_their_number() {
    for (spelling, marker) in &MARKERS {
        let expected = match marker.rule {
            LexRule::NumericSuffix => TokenKind::ScaledFlag(marker, 5),
            LexRule::SuffixedLine => TokenKind::Line {
                marker,
                number: 5,
                text: "tail".into(),
            },
            _ => continue,
        };
        let tokens = tokenize_all(&format!("\\{spelling}5 tail\n"));
        assert_eq!(tokens[0].kind, expected, "{spelling}");
    }
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn positions_are_one_indexed_and_line_accurate() {
    let tokens = tokenize_all("\\p first line\n\\q2 second\n\\c 3\n");
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 3)); // " first line\n"
    assert_eq!(tokens[2].position, Position::new(2, 1));
    assert_eq!(tokens[3].position, Position::new(2, 4)); // " second\n"
    assert_eq!(tokens[4].position, Position::new(3, 1));
}

#[test]
fn end_of_input_token_sits_past_the_final_newline() {
    let tokens = tokenize_all("\\p one\n\\p two\n");
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.position, Position::new(3, 1));
}

#[test]
fn missing_trailing_newline_is_supplied() {
    let with = tokenize_all("\\p text\n");
    let without = tokenize_all("\\p text");
    assert_eq!(with, without);
}

// =============================================================================
// Footnote-label Sub-mode
// =============================================================================

#[test]
fn footnote_label_variants() {
    use usfm::document::FootnoteLabel;

    for (source, expected) in [
        ("\\f + note\\f*", FootnoteLabel::Automatic),
        ("\\f - note\\f*", FootnoteLabel::NoLabel),
        ("\\f 4a note\\f*", FootnoteLabel::Custom("4a".into())),
    ] {
        let tokens = tokenize_all(source);
        assert_eq!(tokens[1].kind, TokenKind::Label(expected), "{source}");
    }
}

#[test]
fn footnote_label_may_follow_extra_whitespace() {
    let tokens = tokenize_all("\\f \n  + note\\f*");
    assert!(matches!(tokens[1].kind, TokenKind::Label(_)));
    assert_eq!(tokens[1].position, Position::new(2, 3));
}

#[test]
fn marker_in_place_of_footnote_label_is_a_lexical_error() {
    let mut lexer = Lexer::new();
    lexer.input("\\f \\ft text\\f*");
    lexer.token().unwrap(); // open
    let error = lexer.token().unwrap_err();
    assert_eq!(error.to_string(), "Expected a footnote label at line: 1, col: 4");
}

// =============================================================================
// Lexical Errors
// =============================================================================

#[test]
fn unrecognized_marker_reports_its_starting_column() {
    let mut lexer = Lexer::new();
    lexer.input("\\p some text\n\\unknown more\n");
    lexer.token().unwrap(); // \p
    lexer.token().unwrap(); // text
    let error = lexer.token().unwrap_err();
    assert_eq!(error.position(), Position::new(2, 1));
    assert_eq!(
        error.to_string(),
        "Unrecognized token: \"\\unknown more\" at line: 2, col: 1"
    );
}

#[test]
fn marker_fused_to_a_word_is_unrecognized() {
    for source in ["\\p2 text", "\\bdx text", "\\vx 4"] {
        let mut lexer = Lexer::new();
        lexer.input(source);
        assert!(lexer.token().is_err(), "{source}");
    }
}

#[test]
fn chapter_without_a_number_is_a_lexical_error() {
    let mut lexer = Lexer::new();
    lexer.input("\\c \\p text");
    assert!(lexer.token().is_err());
}

#[test]
fn literal_prefix_in_text_round_trips_through_error_previews() {
    let mut lexer = Lexer::new();
    lexer.input("\\qqq a \\ b");
    let error = lexer.token().unwrap_err();
    assert_eq!(
        error.to_string(),
        "Unrecognized token: \"\\qqq a \\ b\" at line: 1, col: 1"
    );
}

// =============================================================================
// Payload Shapes
// =============================================================================

#[test]
fn heading_payload_drops_marker_word_keeps_rest_verbatim() {
    let tokens = tokenize_all("\\mt2   Spaced  Out Title \n");
    let TokenKind::Line { number, text, .. } = &tokens[0].kind else {
        panic!("expected a line token");
    };
    assert_eq!(*number, 2);
    assert_eq!(text, "Spaced  Out Title ");
}

#[test]
fn until_next_marker_payload_stops_at_the_next_marker() {
    let tokens = tokenize_all("\\fr 3:2 \\ft note text\\f*");
    let TokenKind::Span { text, .. } = &tokens[0].kind else {
        panic!("expected a span token");
    };
    assert_eq!(text, "3:2 ");
    let TokenKind::Span { text, .. } = &tokens[1].kind else {
        panic!("expected a span token");
    };
    assert_eq!(text, "note text");
}

#[test]
fn verse_argument_is_a_single_word() {
    let tokens = tokenize_all("\\v 12b rest of verse");
    assert!(matches!(
        &tokens[0].kind,
        TokenKind::Word { word, .. } if word == "12b"
    ));
    assert_eq!(tokens[1].kind, TokenKind::Text(" rest of verse\n".into()));
}
