use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_DATA_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files"));

pub const PAGE_BREAK_DIRECTIVE: &str = "PAGE_BREAK";
pub const TABLE_ROW_DIRECTIVE: &str = "TABLE_ROW:";
pub const EXPECTED_VALUE_DIRECTIVE: &str = "EXPECTED_VALUE:";
pub const EXPECTED_TEXT_DIRECTIVE: &str = "EXPECTED_TEXT:";
pub const EXPECTED_PAGE_DIRECTIVE: &str = "EXPECTED_PAGE:";
pub const EXPECTED_FAILURE_DIRECTIVE: &str = "EXPECTED_FAILURE:";
pub const COMMENT_DIRECTIVE: &str = "COMMENT:";
