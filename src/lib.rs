mod config;
pub use config::DEFAULT_SNIFFER_CONFIG;
pub mod constants;
pub use constants::{
    DEFAULT_LARGEST_NUMBER_PROMPT, LARGEST_NUMBER_PROMPT_BASIC, LARGEST_NUMBER_PROMPT_EXTENDED,
    LARGEST_NUMBER_PROMPT_FEW_SHOT,
};
pub mod models;
pub use models::{
    AnswerModel, BestResult, Candidate, CandidateProducer, CandidateScanner,
    CandidateSourceKind, CandidateValidator, CellPosition, DocumentAggregator, Error,
    FalsePositiveFilter, MagnitudeEntry, MagnitudeTable, NormalizedNumber, NumberNormalizer,
    Page, QuestionAnsweringProducer, RegexCandidateProducer, SnifferConfig,
};
pub mod types;
pub mod utils;
pub use types::{PageIndex, RawText, Table, TableCell, TableRow};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Finds the largest number in a document using the default configuration.
///
/// Every page's table cells are scanned before its free text.
///
/// # Example
/// ```
/// use number_sniffer::{find_largest_number, Page};
///
/// let pages = vec![
///     Page::from_text("Revenue was $4 million"),
///     Page::new("", vec![vec![vec![Some("12,345,678".to_string())]]]),
/// ];
///
/// let best = find_largest_number(&pages).unwrap();
/// assert_eq!(best.value, 12_345_678.0);
/// assert_eq!(best.text, "12,345,678");
/// assert_eq!(best.page_index, 1);
/// ```
pub fn find_largest_number(pages: &[Page]) -> Result<BestResult, Error> {
    find_largest_number_with_custom_config(pages, &DEFAULT_SNIFFER_CONFIG)
}

pub fn find_largest_number_with_custom_config(
    pages: &[Page],
    sniffer_config: &SnifferConfig,
) -> Result<BestResult, Error> {
    let aggregator = DocumentAggregator::with_regex_producer(sniffer_config)?;

    aggregator.find_largest(pages)
}

/// Same result as `find_largest_number_with_custom_config`, with pages
/// scanned in parallel.
pub fn find_largest_number_parallel(
    pages: &[Page],
    sniffer_config: &SnifferConfig,
) -> Result<BestResult, Error> {
    let aggregator = DocumentAggregator::with_regex_producer(sniffer_config)?;

    aggregator.find_largest_parallel(pages)
}

/// Treats `text` as a single page with no tables.
pub fn find_largest_number_in_text(text: &str) -> Result<BestResult, Error> {
    find_largest_number(&[Page::from_text(text)])
}

/// Asks `model` for the largest number on each page and keeps the largest
/// valid answer.
pub fn find_largest_number_with_model<M: AnswerModel>(
    pages: &[Page],
    model: &M,
    prompt: &str,
) -> Result<BestResult, Error> {
    let producer = QuestionAnsweringProducer::new(model, prompt);
    let aggregator = DocumentAggregator::new(producer, &DEFAULT_SNIFFER_CONFIG)?;

    aggregator.find_largest(pages)
}
