#![allow(dead_code)]

use notesyms::{Symbol, SymbolTable};

/// The characters of `input` covered by the symbol's span.
pub fn source_of(input: &str, symbol: &Symbol) -> String {
    let range = symbol.char_range();
    input.chars().skip(range.start).take(range.len()).collect()
}

/// Assert that every symbol in `table` points back at its own literal.
pub fn assert_spans_match(input: &str, table: &SymbolTable) {
    for symbol in table.symbols() {
        assert_eq!(
            symbol.char_end - symbol.char_start,
            symbol.literal.chars().count(),
            "span length mismatch for {symbol:?}"
        );
        assert_eq!(
            source_of(input, symbol),
            symbol.literal,
            "span does not cover literal\n--- input ---\n{input}\n--- symbol ---\n{symbol:?}"
        );
    }
}
