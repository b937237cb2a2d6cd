use crate::models::{
    Candidate, CandidateScanner, CellPosition, FalsePositiveFilter, MagnitudeTable, Page,
};
use crate::types::PageIndex;
use crate::Error;

/// A source of candidate strings for one page.
///
/// Every producer feeds the same validation and normalization stages, so
/// implementations only decide *where* candidates come from.
pub trait CandidateProducer {
    /// Returns the page's candidates in the order they should be compared.
    fn produce(&self, page_index: PageIndex, page: &Page) -> Result<Vec<Candidate>, Error>;
}

/// Scans every table cell, then the free text, for number-like substrings.
#[derive(Debug, Clone)]
pub struct RegexCandidateProducer {
    filter: FalsePositiveFilter,
    scanner: CandidateScanner,
}

impl RegexCandidateProducer {
    pub fn new(magnitude_table: &MagnitudeTable) -> Result<Self, Error> {
        Ok(Self {
            filter: FalsePositiveFilter::new(),
            scanner: CandidateScanner::new(magnitude_table)?,
        })
    }

    fn scan(&self, text: &str) -> Vec<String> {
        self.scanner.scan(&self.filter.filter(text))
    }
}

impl CandidateProducer for RegexCandidateProducer {
    /// Tables come before text, so a value repeated in both is attributed
    /// to the table.
    fn produce(&self, page_index: PageIndex, page: &Page) -> Result<Vec<Candidate>, Error> {
        let mut candidates = Vec::new();

        for (table, row, column, cell_text) in page.table_cells() {
            let cell_position = CellPosition { table, row, column };

            candidates.extend(
                self.scan(cell_text)
                    .into_iter()
                    .map(|raw_text| Candidate::from_table_cell(raw_text, page_index, cell_position)),
            );
        }

        candidates.extend(
            self.scan(&page.text)
                .into_iter()
                .map(|raw_text| Candidate::from_text_block(raw_text, page_index)),
        );

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateSourceKind;

    fn producer() -> RegexCandidateProducer {
        RegexCandidateProducer::new(&MagnitudeTable::default()).unwrap()
    }

    #[test]
    fn test_tables_come_before_text() {
        let page = Page::new(
            "Text mentions 10 and 20",
            vec![vec![
                vec![Some("30".to_string()), None],
                vec![None, Some("$40 million".to_string())],
            ]],
        );

        let candidates = producer().produce(2, &page).unwrap();
        let raw: Vec<&str> = candidates.iter().map(|c| c.raw_text.as_str()).collect();

        assert_eq!(raw, vec!["30", "$40 million", "10", "20"]);
        assert_eq!(candidates[0].source_kind, CandidateSourceKind::TableCell);
        assert_eq!(
            candidates[1].cell_position,
            Some(CellPosition {
                table: 0,
                row: 1,
                column: 1
            })
        );
        assert_eq!(candidates[2].source_kind, CandidateSourceKind::TextBlock);
        assert!(candidates.iter().all(|c| c.page_index == 2));
    }

    #[test]
    fn test_false_positives_are_filtered_first() {
        let page = Page::from_text("Call 555-123-4567 on 12/31/2024 about 7 units");

        let candidates = producer().produce(0, &page).unwrap();
        let raw: Vec<&str> = candidates.iter().map(|c| c.raw_text.as_str()).collect();

        assert_eq!(raw, vec!["7"]);
    }

    #[test]
    fn test_empty_page() {
        assert!(producer().produce(0, &Page::default()).unwrap().is_empty());
    }
}
