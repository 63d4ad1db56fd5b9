use crate::diagnostic::{Diagnostic, DiagnosticSink, NoopSink};
use crate::token::{Token, TokenKind};

/// Tokenize a document into its full token sequence.
///
/// The trailing `EndOfInput` token is not included.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).into_iter().collect()
}

/// On-demand tokenizer over one document.
///
/// Each [`Scanner::scan`] call returns exactly one token. Once the input
/// is exhausted every further call returns `EndOfInput` and changes
/// nothing.
pub struct Scanner<'a> {
    input: &'a str,
    /// Byte index of the next unread character.
    pos: usize,
    line: usize,
    col: usize,
    /// Character index of the next unread character.
    offset: usize,
    sink: Box<dyn DiagnosticSink + 'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner that discards diagnostics.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_sink(input, NoopSink)
    }

    /// Create a scanner reporting illegal characters to `sink`.
    #[must_use]
    pub fn with_sink(input: &'a str, sink: impl DiagnosticSink + 'a) -> Self {
        Self {
            input,
            pos: 0,
            line: 0,
            col: 0,
            offset: 0,
            sink: Box::new(sink),
        }
    }

    /// Scan the next token.
    pub fn scan(&mut self) -> Token {
        let Some(ch) = self.peek() else {
            return self.make_token(TokenKind::EndOfInput, self.pos);
        };

        let start = self.pos;
        let kind = match ch {
            '[' => {
                self.bump();
                TokenKind::LeftBracket
            }
            ']' => {
                self.bump();
                TokenKind::RightBracket
            }
            c if is_text(c) => {
                self.eat_while(is_text);
                TokenKind::Text
            }
            c if is_whitespace(c) => {
                self.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            '\r' => {
                self.bump();
                if self.peek() == Some('\n') {
                    self.bump();
                }
                TokenKind::Newline
            }
            '\n' => {
                self.bump();
                TokenKind::Newline
            }
            '#' => {
                self.eat_while(|c| c == '#');
                TokenKind::Hash
            }
            '`' => {
                self.bump();
                TokenKind::Tick
            }
            '(' => {
                self.bump();
                TokenKind::LeftParen
            }
            ')' => {
                self.bump();
                TokenKind::RightParen
            }
            _ => {
                self.bump();
                self.sink.report(Diagnostic::IllegalCharacter {
                    ch,
                    line: self.line,
                    column: self.col,
                });
                TokenKind::Illegal
            }
        };

        self.make_token(kind, start)
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    /// Consume characters while `pred` holds. The first character that
    /// fails is left unread.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Build the token spanning `start..self.pos` and move the position
    /// counters past it.
    fn make_token(&mut self, kind: TokenKind, start: usize) -> Token {
        let literal = &self.input[start..self.pos];
        let length = literal.chars().count();
        let token = Token {
            kind,
            literal: literal.to_string(),
            line: self.line,
            column: self.col,
            offset: self.offset,
            length,
        };

        if kind == TokenKind::Newline {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += length;
        }
        self.offset += length;

        token
    }
}

/// Iterator over a scanner's tokens, stopping before `EndOfInput`.
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.scanner.scan();
        (!token.is_eof()).then_some(token)
    }
}

impl<'a> IntoIterator for Scanner<'a> {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        Tokens { scanner: self }
    }
}

const fn is_text(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | ',' | '-' | '_')
}

const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}
