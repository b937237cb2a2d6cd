use crate::constants::PAGE_SEPARATOR;
use crate::models::Page;
use crate::types::{Table, TableRow};
use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;

/// Splits plain text into pages on form feed characters.
///
/// A trailing form feed (as emitted after the last page by most PDF text
/// dumpers) does not produce an extra empty page.
pub fn read_pages_from_text(text: &str) -> Vec<Page> {
    let mut segments: Vec<&str> = text.split(PAGE_SEPARATOR).collect();

    if segments.len() > 1 && segments.last().is_some_and(|last| last.trim().is_empty()) {
        segments.pop();
    }

    segments.into_iter().map(Page::from_text).collect()
}

/// Reads a CSV grid as a single page holding one table with no free text.
///
/// Empty fields become absent cells. Rows may differ in length.
pub fn read_pages_from_csv(csv: &str) -> Result<Vec<Page>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(csv));

    let mut table = Table::new();

    for record in reader.records() {
        let record = record?;

        let row: TableRow = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();

        table.push(row);
    }

    Ok(vec![Page::new("", vec![table])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pages_from_text_splits_on_form_feed() {
        let pages = read_pages_from_text("first\x0csecond\x0c");

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text, "first");
        assert_eq!(pages[1].text, "second");
    }

    #[test]
    fn test_read_pages_from_text_single_page() {
        let pages = read_pages_from_text("only page");

        assert_eq!(pages, vec![Page::from_text("only page")]);
    }

    #[test]
    fn test_read_pages_from_csv() {
        let pages = read_pages_from_csv("Item,Amount\nWidgets,\"1,200\"\nGadgets,\n").unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0].tables[0],
            vec![
                vec![Some("Item".to_string()), Some("Amount".to_string())],
                vec![Some("Widgets".to_string()), Some("1,200".to_string())],
                vec![Some("Gadgets".to_string()), None],
            ]
        );
    }
}
