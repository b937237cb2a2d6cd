// Types listed here are either shared across multiple files and/or exposed via the library.

/// The exact substring a candidate was captured from, as an owned `String`.
pub type RawText = String;

/// Borrowed view of a candidate's raw text.
pub type RawTextRef = str;

/// Zero-based index of a page within a document.
pub type PageIndex = usize;

/// A single table cell. `None` represents a cell the ingestion layer could
/// not fill (merged or empty cells).
pub type TableCell = Option<String>;

/// A row of table cells, left to right.
pub type TableRow = Vec<TableCell>;

/// A table as a row-major grid of cells.
pub type Table = Vec<TableRow>;

/// The multiplier applied for a magnitude suffix (e.g. `1_000.0` for "k").
pub type Multiplier = f64;

/// A lowercase magnitude suffix token such as "k" or "billion".
pub type MagnitudeToken = String;
