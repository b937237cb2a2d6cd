use number_sniffer::{
    find_largest_number_parallel, find_largest_number_with_custom_config, BestResult,
    Error as LibError, Page, PageIndex, SnifferConfig, TableRow,
};
use std::{fs, path::Path};
pub mod constants;
use constants::{
    COMMENT_DIRECTIVE, EXPECTED_FAILURE_DIRECTIVE, EXPECTED_PAGE_DIRECTIVE,
    EXPECTED_TEXT_DIRECTIVE, EXPECTED_VALUE_DIRECTIVE, PAGE_BREAK_DIRECTIVE, TABLE_ROW_DIRECTIVE,
};

/// A fixture document along with what scanning it should produce.
#[derive(Debug, Default)]
pub struct TestDocument {
    pub pages: Vec<Page>,
    pub expected_value: Option<f64>,
    pub expected_text: Option<String>,
    pub expected_page: Option<PageIndex>,
    pub expected_failure: Option<String>,
}

// Helper function to read the value following a directive, if the line has one
fn directive_value<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    line.strip_prefix(directive).map(|value| value.trim())
}

fn parse_table_row(row: &str) -> TableRow {
    row.split('|')
        .map(|cell| {
            let cell = cell.trim();
            if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            }
        })
        .collect()
}

// Helper function to close the current page and start a new one
fn flush_page(pages: &mut Vec<Page>, text_lines: &mut Vec<&str>, table_rows: &mut Vec<TableRow>) {
    let tables = if table_rows.is_empty() {
        vec![]
    } else {
        vec![std::mem::take(table_rows)]
    };

    pages.push(Page::new(&text_lines.join("\n"), tables));
    text_lines.clear();
}

/// Parses fixture text into pages and expectations.
///
/// `PAGE_BREAK` lines separate pages, `TABLE_ROW:` lines (cells separated
/// by `|`) build the page's table, and `EXPECTED_*:` / `COMMENT:` lines
/// are never part of the document.
pub fn parse_test_document(raw_text: &str) -> TestDocument {
    let mut document = TestDocument::default();

    let mut text_lines: Vec<&str> = Vec::new();
    let mut table_rows: Vec<TableRow> = Vec::new();

    for line in raw_text.lines() {
        let trimmed = line.trim();

        if trimmed == PAGE_BREAK_DIRECTIVE {
            flush_page(&mut document.pages, &mut text_lines, &mut table_rows);
        } else if let Some(row) = directive_value(trimmed, TABLE_ROW_DIRECTIVE) {
            table_rows.push(parse_table_row(row));
        } else if let Some(value) = directive_value(trimmed, EXPECTED_VALUE_DIRECTIVE) {
            document.expected_value = Some(
                value
                    .parse::<f64>()
                    .expect("EXPECTED_VALUE must be a number"),
            );
        } else if let Some(value) = directive_value(trimmed, EXPECTED_TEXT_DIRECTIVE) {
            document.expected_text = Some(value.to_string());
        } else if let Some(value) = directive_value(trimmed, EXPECTED_PAGE_DIRECTIVE) {
            document.expected_page = Some(
                value
                    .parse::<PageIndex>()
                    .expect("EXPECTED_PAGE must be a page index"),
            );
        } else if let Some(value) = directive_value(trimmed, EXPECTED_FAILURE_DIRECTIVE) {
            document.expected_failure = Some(value.to_string());
        } else if trimmed.starts_with(COMMENT_DIRECTIVE) {
            continue;
        } else {
            text_lines.push(line);
        }
    }

    flush_page(&mut document.pages, &mut text_lines, &mut table_rows);

    document
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(
    test_file_path: &Path,
    sniffer_config: &SnifferConfig,
) -> Result<BestResult, LibError> {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let document = parse_test_document(&raw_text);

    let result = find_largest_number_with_custom_config(&document.pages, sniffer_config);

    // The parallel scan must agree with the sequential one on every fixture
    let parallel_result = find_largest_number_parallel(&document.pages, sniffer_config);
    match (&result, &parallel_result) {
        (Ok(sequential), Ok(parallel)) => assert_eq!(
            sequential, parallel,
            "{:?} - Parallel scan disagrees with sequential scan",
            test_file_path
        ),
        (Err(sequential), Err(parallel)) => assert_eq!(
            sequential.to_string(),
            parallel.to_string(),
            "{:?} - Parallel scan failed differently",
            test_file_path
        ),
        _ => panic!(
            "{:?} - Sequential result {:?} but parallel result {:?}",
            test_file_path, result, parallel_result
        ),
    }

    if let Some(expected_failure) = &document.expected_failure {
        match &result {
            Ok(best) => panic!(
                "{:?} - Expected failure '{}', but found {:?}",
                test_file_path, expected_failure, best
            ),
            Err(err) => assert_eq!(
                expected_failure,
                &err.to_string(),
                "{:?} - Failure reason mismatch",
                test_file_path
            ),
        }

        return result;
    }

    let best = match &result {
        Ok(best) => best,
        Err(err) => panic!("{:?} - Unexpected error: {}", test_file_path, err),
    };

    if let Some(expected_value) = document.expected_value {
        assert_eq!(
            best.value, expected_value,
            "{:?} - Expected value {}, but got {}",
            test_file_path, expected_value, best.value
        );
    }

    if let Some(expected_text) = &document.expected_text {
        assert_eq!(
            &best.text, expected_text,
            "{:?} - Expected text {:?}, but got {:?}",
            test_file_path, expected_text, best.text
        );
    }

    if let Some(expected_page) = document.expected_page {
        assert_eq!(
            best.page_index, expected_page,
            "{:?} - Expected page {}, but got {}",
            test_file_path, expected_page, best.page_index
        );
    }

    result
}
