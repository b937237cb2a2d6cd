use crate::types::{PageIndex, RawText};

/// Where in a page a candidate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSourceKind {
    TextBlock,
    TableCell,
}

/// Location of a table cell within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    /// Index of the table within the page.
    pub table: usize,
    pub row: usize,
    pub column: usize,
}

/// A substring of source text suspected of representing a number.
///
/// `raw_text` is treated as opaque by everything downstream of the producer
/// that captured it; it is never re-scanned or re-split.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub raw_text: RawText,
    pub source_kind: CandidateSourceKind,
    pub page_index: PageIndex,
    pub cell_position: Option<CellPosition>,
}

impl Candidate {
    pub fn from_text_block(raw_text: RawText, page_index: PageIndex) -> Self {
        Self {
            raw_text,
            source_kind: CandidateSourceKind::TextBlock,
            page_index,
            cell_position: None,
        }
    }

    pub fn from_table_cell(
        raw_text: RawText,
        page_index: PageIndex,
        cell_position: CellPosition,
    ) -> Self {
        Self {
            raw_text,
            source_kind: CandidateSourceKind::TableCell,
            page_index,
            cell_position: Some(cell_position),
        }
    }
}

/// A validated candidate together with its numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedNumber {
    pub value: f64,
    pub origin: Candidate,
}
