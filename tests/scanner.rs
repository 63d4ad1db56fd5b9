//! Scanner edge cases.

use notesyms::{Scanner, TokenKind, tokenize};

// -----------------------------------------------------------
// Runs.
// -----------------------------------------------------------

#[test]
fn scan_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn scan_repeated_runs_are_one_token() {
    for (input, kind) in [
        ("#", TokenKind::Hash),
        ("#####", TokenKind::Hash),
        ("    ", TokenKind::Whitespace),
        ("\t\t\t", TokenKind::Whitespace),
        ("abc", TokenKind::Text),
    ] {
        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 1, "{input:?}");
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].length, input.len());
    }
}

#[test]
fn scan_text_never_overruns() {
    for delimiter in ["[", "]", "(", ")", "#", "`", " ", "\t", "\n", "\r"] {
        let input = format!("word{delimiter}");
        let tokens = tokenize(&input);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].literal, "word", "overran into {delimiter:?}");
        assert_eq!(tokens[1].literal, delimiter);
    }
}

#[test]
fn scan_hash_stops_at_text() {
    let tokens = tokenize("##heading");
    assert_eq!(tokens[0].literal, "##");
    assert_eq!(tokens[1].literal, "heading");
}

#[test]
fn scan_whitespace_stops_at_newline() {
    let tokens = tokenize("  \n");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].literal, "  ");
    assert_eq!(tokens[1].kind, TokenKind::Newline);
}

// -----------------------------------------------------------
// Line endings.
// -----------------------------------------------------------

#[test]
fn scan_mixed_line_endings() {
    let tokens = tokenize("a\r\nb\nc\rd");
    let newlines: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Newline)
        .map(|t| t.literal.as_str())
        .collect();
    assert_eq!(newlines, vec!["\r\n", "\n", "\r"]);
    let d = tokens.last().unwrap();
    assert_eq!(d.literal, "d");
    assert_eq!(d.line, 3);
    assert_eq!(d.column, 0);
    assert_eq!(d.offset, 7);
}

#[test]
fn scan_crlf_crlf_is_two_lines() {
    let tokens = tokenize("\r\n\r\nx");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].line, 2);
}

// -----------------------------------------------------------
// Positions.
// -----------------------------------------------------------

#[test]
fn scan_positions_are_ordered() {
    let input = "# Title\n[link](http://x.org) [[wiki]]\n\t#[[tag]] done\n";
    let tokens = tokenize(input);
    for pair in tokens.windows(2) {
        assert!(
            (pair[0].line, pair[0].column) < (pair[1].line, pair[1].column),
            "{:?} then {:?}",
            pair[0],
            pair[1]
        );
        assert_eq!(pair[0].offset + pair[0].length, pair[1].offset);
    }
}

#[test]
fn scan_literals_rebuild_input() {
    let input = "## héllo [w](u) `x` #[t]\r\n\n";
    let rebuilt: String = tokenize(input).iter().map(|t| t.literal.as_str()).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn scan_no_adjacent_runs_of_same_kind() {
    let input = "a  b##c\t\td ,.-_ e";
    let tokens = tokenize(input);
    for pair in tokens.windows(2) {
        if pair[0].kind.is_run() {
            assert_ne!(pair[0].kind, pair[1].kind, "{pair:?}");
        }
    }
}

// -----------------------------------------------------------
// Illegal characters and end of input.
// -----------------------------------------------------------

#[test]
fn scan_illegal_characters_are_single() {
    let tokens = tokenize("::");
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Illegal));
}

#[test]
fn scan_unicode_is_illegal() {
    let tokens = tokenize("日本");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].literal, "日");
    assert_eq!(tokens[0].length, 1);
    assert_eq!(tokens[1].offset, 1);
}

#[test]
fn scan_eof_repeats() {
    let mut scanner = Scanner::new("#");
    assert_eq!(scanner.scan().kind, TokenKind::Hash);
    let first = scanner.scan();
    let second = scanner.scan();
    assert_eq!(first, second);
    assert!(first.is_eof());
}

#[test]
fn scanner_iterates_until_eof() {
    let literals: Vec<_> = Scanner::new("[a]")
        .into_iter()
        .map(|t| t.literal)
        .collect();
    assert_eq!(literals, vec!["[", "a", "]"]);
}
