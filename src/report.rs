//! Plain-text rendering of a symbol table.
//!
//! One line per symbol in document order:
//!
//! ```text
//! heading1  0:1-8    Title
//! wikilink  1:9-18   notes
//! ```
//!
//! Columns are kind, `line:start-end` (0-based line, 1-based character
//! positions) and the value.

use std::fmt::Write;

use crate::symbol::{Symbol, SymbolTable};

const KIND_WIDTH: usize = 10;
const SPAN_WIDTH: usize = 9;

/// Render every symbol of `table`, one per line.
#[must_use]
pub fn render(table: &SymbolTable) -> String {
    let mut out = String::new();
    for symbol in table.symbols() {
        render_symbol(&mut out, symbol);
    }
    out
}

fn render_symbol(out: &mut String, symbol: &Symbol) {
    let span = format!(
        "{}:{}-{}",
        symbol.line_no, symbol.char_start, symbol.char_end
    );
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:<KIND_WIDTH$}{:<SPAN_WIDTH$}{}",
        symbol.kind.to_string(),
        span,
        escape(&symbol.value)
    );
}

/// Keep each symbol on one line even if its value holds control characters.
fn escape(value: &str) -> String {
    value.replace('\t', "\\t")
}
