//! Symbol extraction for markdown-like notes.
//!
//! Pulls the title, section headings, wiki-links, links and tags out of a
//! note, with exact source positions for each so editors and indexers can
//! jump to them. Everything else in the document is ignored.
//!
//! # Quick start
//!
//! ```
//! use notesyms::extract;
//!
//! let table = extract("# Reading list\n[[rust-book]] #[[todo]]\n");
//! assert_eq!(table.title.as_ref().map(|t| t.value.as_str()), Some("Reading list"));
//! assert_eq!(table.wikilinks[0].value, "rust-book");
//! assert_eq!(table.tags[0].value, "todo");
//! ```
//!
//! ## Tokens
//!
//! ```
//! use notesyms::{tokenize, TokenKind};
//!
//! let tokens = tokenize("## a");
//! assert_eq!(tokens[0].kind, TokenKind::Hash);
//! assert_eq!(tokens[0].length, 2);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod config;
pub mod diagnostic;
pub mod extractor;
pub mod report;
pub mod scanner;
pub mod symbol;
pub mod token;

use std::path::{Path, PathBuf};

pub use config::{ExtractOptions, OptionsError, TitlePolicy};
pub use diagnostic::{Diagnostic, DiagnosticSink, NoopSink, TracingSink};
pub use extractor::{Extractor, extract, extract_with};
pub use report::render;
pub use scanner::{Scanner, Tokens, tokenize};
pub use symbol::{Symbol, SymbolKind, SymbolTable};
pub use token::{Token, TokenKind};

/// Unified error type for the crate's fallible helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An option could not be parsed.
    #[error("{0}")]
    Options(#[from] OptionsError),
    /// A document could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a UTF-8 document from disk.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read document");
    Ok(text)
}

/// Read a document from disk and extract its symbols.
pub fn read_and_extract(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<SymbolTable, Error> {
    let text = read_document(path)?;
    Ok(extract_with(&text, options))
}
