use std::fmt;

use serde::{Deserialize, Serialize};

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Run of letters, digits, `.`, `,`, `-` and `_`.
    Text,
    /// Run of spaces and tabs.
    Whitespace,
    /// One line ending: `\n`, `\r` or `\r\n`.
    Newline,
    /// Run of `#`.
    Hash,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `` ` ``
    Tick,
    /// End of input. Returned forever once reached.
    EndOfInput,
    /// Character that cannot start any other token.
    Illegal,
}

impl TokenKind {
    /// Whether consecutive characters of this kind merge into one token.
    #[must_use]
    pub const fn is_run(self) -> bool {
        matches!(self, Self::Text | Self::Whitespace | Self::Hash)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "TEXT",
            Self::Whitespace => "WHITESPACE",
            Self::Newline => "NEWLINE",
            Self::Hash => "HASH",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Tick => "TICK",
            Self::EndOfInput => "END_OF_INPUT",
            Self::Illegal => "ILLEGAL",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, text, and source location.
///
/// `line` and `column` are 0-based; `column` counts characters from the
/// start of the line. `offset` is the 0-based character offset from the
/// start of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    /// Number of characters in `literal`.
    pub length: usize,
}

impl Token {
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}
