pub mod numeric_span;
pub mod read_document_pages;
pub mod strip_to_numeric;

pub use numeric_span::numeric_span;
pub use read_document_pages::{read_pages_from_csv, read_pages_from_text};
pub use strip_to_numeric::strip_to_numeric;
