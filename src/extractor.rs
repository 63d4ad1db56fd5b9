//! Token-level symbol extraction.
//!
//! The extractor pulls tokens from a [`Scanner`] one at a time. A hash run
//! or an opening bracket starts a symbol; the matching sub-parser then
//! absorbs tokens until its construct closes. Each sub-parser is a small
//! state struct with a single `step` function. Every other token passes
//! through as an `Other` symbol, so no input character is lost.

use crate::config::ExtractOptions;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::scanner::Scanner;
use crate::symbol::{Symbol, SymbolKind, SymbolTable};
use crate::token::{Token, TokenKind};

/// Extract every symbol from a document using default options.
#[must_use]
pub fn extract(input: &str) -> SymbolTable {
    extract_with(input, &ExtractOptions::default())
}

/// Extract every symbol from a document.
#[must_use]
pub fn extract_with(input: &str, options: &ExtractOptions) -> SymbolTable {
    Extractor::with_options(input, *options).extract()
}

/// Streaming symbol extractor over one document.
///
/// Iterating yields every symbol in document order, `Other` included.
/// [`Extractor::extract`] collects them into a [`SymbolTable`] instead.
pub struct Extractor<'a> {
    scanner: Scanner<'a>,
    /// Token read by a sub-parser but not absorbed by it.
    peeked: Option<Token>,
    options: ExtractOptions,
}

impl<'a> Extractor<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ExtractOptions::default())
    }

    #[must_use]
    pub fn with_options(input: &'a str, options: ExtractOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            peeked: None,
            options,
        }
    }

    /// Create an extractor whose scanner reports diagnostics to `sink`.
    #[must_use]
    pub fn with_sink(
        input: &'a str,
        options: ExtractOptions,
        sink: impl DiagnosticSink + 'a,
    ) -> Self {
        Self {
            scanner: Scanner::with_sink(input, sink),
            peeked: None,
            options,
        }
    }

    /// Run to the end of input and file every symbol into a table.
    #[must_use]
    pub fn extract(mut self) -> SymbolTable {
        let mut table = SymbolTable::default();
        while let Some(symbol) = self.next_symbol() {
            table.insert(symbol, self.options.title_policy);
        }
        table
    }

    /// Produce the next symbol, or `None` once the input is exhausted.
    pub fn next_symbol(&mut self) -> Option<Symbol> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Hash => Some(self.parse_hash_start(&token)),
            TokenKind::LeftBracket => Some(self.run(LinkState::new(&token))),
            TokenKind::EndOfInput => None,
            TokenKind::Text
            | TokenKind::Whitespace
            | TokenKind::Newline
            | TokenKind::RightBracket
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Tick
            | TokenKind::Illegal => Some(SymbolBuilder::passthrough(&token)),
        }
    }

    fn next_token(&mut self) -> Token {
        self.peeked.take().unwrap_or_else(|| self.scanner.scan())
    }

    fn parse_hash_start(&mut self, hash: &Token) -> Symbol {
        if hash.length == 1 {
            let next = self.next_token();
            if next.kind == TokenKind::LeftBracket {
                return self.run(TagState::new(hash, &next));
            }
            self.peeked = Some(next);
        }
        self.run(HeadingState::new(hash))
    }

    /// Feed tokens to a sub-parser until it completes or input runs out.
    fn run<P: SubParser>(&mut self, mut parser: P) -> Symbol {
        loop {
            let token = self.next_token();
            if token.is_eof() {
                break;
            }
            match parser.step(&token) {
                Step::Continue => {}
                Step::Done => return parser.finish(),
                Step::Stop => {
                    self.peeked = Some(token);
                    break;
                }
            }
        }

        if parser.is_open() {
            let symbol = parser.symbol();
            self.scanner.report(Diagnostic::Unterminated {
                kind: symbol.kind,
                line: symbol.line_no,
                column: symbol.column,
            });
        }
        parser.finish()
    }
}

impl Iterator for Extractor<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        self.next_symbol()
    }
}

/// Outcome of feeding one token to a sub-parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Token absorbed; the symbol needs more.
    Continue,
    /// Token absorbed; the symbol is complete.
    Done,
    /// Token not absorbed; the symbol is complete without it.
    Stop,
}

trait SubParser {
    fn step(&mut self, token: &Token) -> Step;
    /// Whether the construct still waits for a closing delimiter.
    fn is_open(&self) -> bool;
    fn symbol(&self) -> &SymbolBuilder;
    fn finish(self) -> Symbol;
}

/// Accumulates literal, value and span for one symbol.
#[derive(Debug, Clone)]
struct SymbolBuilder {
    kind: SymbolKind,
    literal: String,
    value: String,
    char_start: usize,
    char_end: usize,
    line_no: usize,
    column: usize,
}

impl SymbolBuilder {
    fn start(kind: SymbolKind, token: &Token) -> Self {
        let char_start = token.offset + 1;
        Self {
            kind,
            literal: token.literal.clone(),
            value: String::new(),
            char_start,
            char_end: char_start + token.length,
            line_no: token.line,
            column: token.column,
        }
    }

    fn passthrough(token: &Token) -> Symbol {
        let mut symbol = Self::start(SymbolKind::Other, token);
        symbol.value.push_str(&token.literal);
        symbol.build()
    }

    /// Absorb a token into the source span only.
    fn delimiter(&mut self, token: &Token) {
        self.literal.push_str(&token.literal);
        self.char_end += token.length;
    }

    /// Absorb a token into both the source span and the value.
    fn content(&mut self, token: &Token) {
        self.delimiter(token);
        self.value.push_str(&token.literal);
    }

    fn build(self) -> Symbol {
        Symbol {
            kind: self.kind,
            literal: self.literal,
            value: self.value,
            char_start: self.char_start,
            char_end: self.char_end,
            line_no: self.line_no,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingPhase {
    /// Right after the hash run; a whitespace run here is the separator.
    Separator,
    Body,
}

/// `#`, `##` or longer hash run up to the end of the line.
#[derive(Debug)]
struct HeadingState {
    symbol: SymbolBuilder,
    phase: HeadingPhase,
}

impl HeadingState {
    fn new(hash: &Token) -> Self {
        let kind = if hash.length == 2 {
            SymbolKind::Heading2
        } else {
            SymbolKind::Heading1
        };
        Self {
            symbol: SymbolBuilder::start(kind, hash),
            phase: HeadingPhase::Separator,
        }
    }
}

impl SubParser for HeadingState {
    fn step(&mut self, token: &Token) -> Step {
        match (token.kind, self.phase) {
            (TokenKind::Newline, _) => return Step::Stop,
            (TokenKind::Whitespace, HeadingPhase::Separator) => self.symbol.delimiter(token),
            _ => self.symbol.content(token),
        }
        self.phase = HeadingPhase::Body;
        Step::Continue
    }

    fn is_open(&self) -> bool {
        false
    }

    fn symbol(&self) -> &SymbolBuilder {
        &self.symbol
    }

    fn finish(self) -> Symbol {
        self.symbol.build()
    }
}

/// `#[name]` or `#[[name]]`.
///
/// Brackets only count depth. Whitespace at either end of the name is
/// kept out of the value.
#[derive(Debug)]
struct TagState {
    symbol: SymbolBuilder,
    depth: usize,
}

impl TagState {
    fn new(hash: &Token, bracket: &Token) -> Self {
        let mut symbol = SymbolBuilder::start(SymbolKind::Tag, hash);
        symbol.delimiter(bracket);
        Self { symbol, depth: 1 }
    }
}

impl SubParser for TagState {
    fn step(&mut self, token: &Token) -> Step {
        match token.kind {
            TokenKind::LeftBracket => {
                self.depth += 1;
                self.symbol.delimiter(token);
            }
            TokenKind::RightBracket => {
                self.depth -= 1;
                self.symbol.delimiter(token);
                if self.depth == 0 {
                    return Step::Done;
                }
            }
            TokenKind::Newline => return Step::Stop,
            TokenKind::Whitespace if self.symbol.value.is_empty() => {
                self.symbol.delimiter(token);
            }
            _ => self.symbol.content(token),
        }
        Step::Continue
    }

    fn is_open(&self) -> bool {
        self.depth > 0
    }

    fn symbol(&self) -> &SymbolBuilder {
        &self.symbol
    }

    fn finish(mut self) -> Symbol {
        let trimmed = self.symbol.value.trim_end_matches([' ', '\t']).len();
        self.symbol.value.truncate(trimmed);
        self.symbol.build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkPhase {
    /// Inside the brackets.
    Label,
    /// Link brackets closed; only `(` may continue the symbol.
    AfterLabel,
    /// Inside the parenthesized target.
    Target,
}

/// `[label](target)` or `[[target]]`.
#[derive(Debug)]
struct LinkState {
    symbol: SymbolBuilder,
    depth: usize,
    seen_close: bool,
    phase: LinkPhase,
}

impl LinkState {
    fn new(bracket: &Token) -> Self {
        Self {
            symbol: SymbolBuilder::start(SymbolKind::Link, bracket),
            depth: 1,
            seen_close: false,
            phase: LinkPhase::Label,
        }
    }

    fn step_label(&mut self, token: &Token) -> Step {
        match token.kind {
            TokenKind::LeftBracket => {
                if self.symbol.kind == SymbolKind::Link && self.depth == 1 && !self.seen_close {
                    self.symbol.kind = SymbolKind::WikiLink;
                }
                self.depth += 1;
                self.symbol.delimiter(token);
            }
            TokenKind::RightBracket => {
                self.seen_close = true;
                self.depth -= 1;
                self.symbol.delimiter(token);
                if self.depth == 0 {
                    if self.symbol.kind == SymbolKind::WikiLink {
                        return Step::Done;
                    }
                    self.phase = LinkPhase::AfterLabel;
                }
            }
            TokenKind::RightParen if self.symbol.kind == SymbolKind::Link => {
                self.symbol.delimiter(token);
                return Step::Done;
            }
            TokenKind::Newline => return Step::Stop,
            _ => self.symbol.content(token),
        }
        Step::Continue
    }

    fn step_after_label(&mut self, token: &Token) -> Step {
        if token.kind != TokenKind::LeftParen {
            return Step::Stop;
        }
        self.symbol.delimiter(token);
        self.symbol.value.clear();
        self.phase = LinkPhase::Target;
        Step::Continue
    }

    fn step_target(&mut self, token: &Token) -> Step {
        match token.kind {
            TokenKind::RightParen => {
                self.symbol.delimiter(token);
                Step::Done
            }
            TokenKind::Newline => Step::Stop,
            _ => {
                self.symbol.content(token);
                Step::Continue
            }
        }
    }
}

impl SubParser for LinkState {
    fn step(&mut self, token: &Token) -> Step {
        match self.phase {
            LinkPhase::Label => self.step_label(token),
            LinkPhase::AfterLabel => self.step_after_label(token),
            LinkPhase::Target => self.step_target(token),
        }
    }

    fn is_open(&self) -> bool {
        match self.phase {
            LinkPhase::Label => self.depth > 0,
            LinkPhase::AfterLabel => false,
            LinkPhase::Target => true,
        }
    }

    fn symbol(&self) -> &SymbolBuilder {
        &self.symbol
    }

    fn finish(self) -> Symbol {
        self.symbol.build()
    }
}
