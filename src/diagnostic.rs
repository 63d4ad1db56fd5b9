//! Diagnostics emitted while scanning and extracting.
//!
//! Extraction never fails, but it can notice things a caller may want to
//! hear about: characters no token class accepts and constructs cut off by
//! a line ending or the end of input. These are handed to a
//! [`DiagnosticSink`] injected at construction. The default sink drops
//! everything, so extraction has no side effects unless asked for them.

use std::fmt;

use crate::symbol::SymbolKind;

/// Something worth reporting that did not stop extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A character that starts no token class; scanned as `Illegal`.
    IllegalCharacter {
        ch: char,
        line: usize,
        column: usize,
    },
    /// A tag, link or wiki-link that ended before its closing delimiter.
    Unterminated {
        kind: SymbolKind,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter { ch, line, column } => {
                write!(f, "illegal character {ch:?} at line {line}, column {column}")
            }
            Self::Unterminated { kind, line, column } => {
                write!(f, "unterminated {kind} at line {line}, column {column}")
            }
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing`.
///
/// Illegal characters are frequent in ordinary prose (`:`, `/`, `!` ...)
/// and go out at `TRACE`; unterminated constructs go out at `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::IllegalCharacter { ch, line, column } => {
                tracing::trace!(?ch, line, column, "illegal character");
            }
            Diagnostic::Unterminated { kind, line, column } => {
                tracing::debug!(%kind, line, column, "unterminated construct");
            }
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_in_order() {
        let mut sink = Vec::new();
        sink.report(Diagnostic::IllegalCharacter {
            ch: ':',
            line: 0,
            column: 4,
        });
        sink.report(Diagnostic::Unterminated {
            kind: SymbolKind::Tag,
            line: 1,
            column: 0,
        });
        assert_eq!(sink.len(), 2);
        assert!(matches!(
            sink[0],
            Diagnostic::IllegalCharacter { ch: ':', .. }
        ));
    }

    #[test]
    fn borrowed_sink_forwards() {
        fn feed(mut sink: impl DiagnosticSink) {
            sink.report(Diagnostic::IllegalCharacter {
                ch: '!',
                line: 0,
                column: 0,
            });
        }

        let mut collected: Vec<Diagnostic> = Vec::new();
        feed(&mut collected);
        feed(&mut collected);
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn display_includes_location() {
        let d = Diagnostic::Unterminated {
            kind: SymbolKind::WikiLink,
            line: 3,
            column: 7,
        };
        assert_eq!(d.to_string(), "unterminated wikilink at line 3, column 7");
    }
}
