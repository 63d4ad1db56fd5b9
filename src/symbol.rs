use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::config::TitlePolicy;

/// Symbol kinds recognized by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// `# Title`
    Heading1,
    /// `## Section`
    Heading2,
    /// `[[target]]`
    WikiLink,
    /// `[text](url)`
    Link,
    /// `#[[name]]` or `#[name]`
    Tag,
    /// Any token outside the constructs above.
    Other,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::WikiLink => "wikilink",
            Self::Link => "link",
            Self::Tag => "tag",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// One recognized construct and where it sits in the document.
///
/// `char_start` and `char_end` are 1-based absolute character positions;
/// `char_end` is exclusive, so `char_end - char_start` is always the
/// character count of `literal`. `line_no` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Source text including delimiters.
    pub literal: String,
    /// Heading text, link target, wiki-link target or tag name.
    pub value: String,
    pub char_start: usize,
    pub char_end: usize,
    pub line_no: usize,
}

impl Symbol {
    /// 0-based character range of the symbol within the document.
    ///
    /// A hand-built symbol with a zero or reversed span yields an empty
    /// range rather than underflowing.
    ///
    /// ```
    /// let text = "see [[notes]]";
    /// let table = notesyms::extract(text);
    /// let link = &table.wikilinks[0];
    /// let range = link.char_range();
    /// let source: String = text.chars().skip(range.start).take(range.len()).collect();
    /// assert_eq!(source, link.literal);
    /// ```
    #[must_use]
    pub const fn char_range(&self) -> Range<usize> {
        let start = self.char_start.saturating_sub(1);
        start..start + self.len()
    }

    /// Character count of the symbol's source span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.char_end.saturating_sub(self.char_start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything one extraction pass found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    pub title: Option<Symbol>,
    pub headings: Vec<Symbol>,
    pub wikilinks: Vec<Symbol>,
    pub links: Vec<Symbol>,
    pub tags: Vec<Symbol>,
}

impl SymbolTable {
    /// File a finished symbol under its kind. `Other` symbols are dropped.
    pub(crate) fn insert(&mut self, symbol: Symbol, policy: TitlePolicy) {
        match symbol.kind {
            SymbolKind::Heading1 => match policy {
                TitlePolicy::First => {
                    if self.title.is_none() {
                        self.title = Some(symbol);
                    }
                }
                TitlePolicy::Last => self.title = Some(symbol),
            },
            SymbolKind::Heading2 => self.headings.push(symbol),
            SymbolKind::WikiLink => self.wikilinks.push(symbol),
            SymbolKind::Link => self.links.push(symbol),
            SymbolKind::Tag => self.tags.push(symbol),
            SymbolKind::Other => {}
        }
    }

    /// Number of symbols held, title included.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.title.is_some())
            + self.headings.len()
            + self.wikilinks.len()
            + self.links.len()
            + self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every held symbol in document order.
    #[must_use]
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut all: Vec<&Symbol> = self
            .title
            .iter()
            .chain(&self.headings)
            .chain(&self.wikilinks)
            .chain(&self.links)
            .chain(&self.tags)
            .collect();
        all.sort_by_key(|s| s.char_start);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(kind: SymbolKind, value: &str, char_start: usize) -> Symbol {
        Symbol {
            kind,
            literal: value.to_string(),
            value: value.to_string(),
            char_start,
            char_end: char_start + value.chars().count(),
            line_no: 0,
        }
    }

    #[test]
    fn first_title_wins() {
        let mut table = SymbolTable::default();
        table.insert(symbol(SymbolKind::Heading1, "one", 1), TitlePolicy::First);
        table.insert(symbol(SymbolKind::Heading1, "two", 10), TitlePolicy::First);
        assert_eq!(table.title.map(|t| t.value), Some("one".to_string()));
    }

    #[test]
    fn last_title_wins() {
        let mut table = SymbolTable::default();
        table.insert(symbol(SymbolKind::Heading1, "one", 1), TitlePolicy::Last);
        table.insert(symbol(SymbolKind::Heading1, "two", 10), TitlePolicy::Last);
        assert_eq!(table.title.map(|t| t.value), Some("two".to_string()));
    }

    #[test]
    fn other_is_not_stored() {
        let mut table = SymbolTable::default();
        table.insert(symbol(SymbolKind::Other, "x", 1), TitlePolicy::First);
        assert!(table.is_empty());
    }

    #[test]
    fn symbols_in_document_order() {
        let mut table = SymbolTable::default();
        table.insert(symbol(SymbolKind::Tag, "t", 20), TitlePolicy::First);
        table.insert(symbol(SymbolKind::Link, "l", 5), TitlePolicy::First);
        table.insert(symbol(SymbolKind::Heading1, "h", 1), TitlePolicy::First);
        let starts: Vec<_> = table.symbols().iter().map(|s| s.char_start).collect();
        assert_eq!(starts, vec![1, 5, 20]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn char_range_is_zero_based() {
        let s = symbol(SymbolKind::WikiLink, "[[a]]", 1);
        assert_eq!(s.char_range(), 0..5);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn malformed_span_is_empty() {
        let mut s = symbol(SymbolKind::Link, "x", 0);
        s.char_end = 0;
        assert!(s.is_empty());
        assert_eq!(s.char_range(), 0..0);

        let mut reversed = symbol(SymbolKind::Link, "x", 9);
        reversed.char_end = 3;
        assert_eq!(reversed.len(), 0);
        assert!(reversed.char_range().is_empty());
    }
}
