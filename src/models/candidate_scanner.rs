use crate::constants::CURRENCY_SYMBOLS;
use crate::models::MagnitudeTable;
use crate::types::RawText;
use crate::Error;
use log::trace;
use regex::Regex;

/// Extracts every substring that looks like a number, with an optional
/// leading `-`/currency marker and an optional trailing magnitude suffix.
///
/// Digit grouping is not checked here; `CandidateValidator` rejects
/// malformed candidates.
#[derive(Debug, Clone)]
pub struct CandidateScanner {
    pattern: Regex,
}

impl CandidateScanner {
    /// Compiles the scanning pattern for the given suffix vocabulary.
    pub fn new(magnitude_table: &MagnitudeTable) -> Result<Self, Error> {
        let currency_pattern = CURRENCY_SYMBOLS
            .iter()
            .map(|symbol| regex::escape(&symbol.to_string()))
            .collect::<Vec<String>>()
            .join("|");

        let pattern = Regex::new(&format!(
            r"(?P<number>-?(?:{})?[0-9]+(?:[, ][0-9]{{3}})*(?:\.[0-9]+)?)(?: ?(?P<suffix>{}))?",
            currency_pattern,
            magnitude_table.alternation_pattern()
        ))?;

        Ok(Self { pattern })
    }

    /// Returns every candidate in `text`, left to right, as lowercased
    /// substrings.
    pub fn scan(&self, text: &str) -> Vec<RawText> {
        let text = text.to_lowercase();
        let mut candidates = Vec::new();

        for captures in self.pattern.captures_iter(&text) {
            let (Some(whole), Some(number)) = (captures.get(0), captures.name("number")) else {
                continue;
            };

            let mut end = whole.end();

            if let Some(suffix) = captures.name("suffix") {
                let is_abbreviation = suffix.as_str().chars().count() == 1;
                let followed_by_letter = text[suffix.end()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphabetic());

                // "5 kg" is five of something, not five thousand
                if is_abbreviation && followed_by_letter {
                    end = number.end();
                }
            }

            let candidate = &text[whole.start()..end];

            trace!("Scanned candidate: {:?}", candidate);

            candidates.push(candidate.to_string());
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<String> {
        CandidateScanner::new(&MagnitudeTable::default())
            .unwrap()
            .scan(text)
    }

    #[test]
    fn test_scans_plain_numbers() {
        assert_eq!(scan("We sold 48200 units and 12 more"), vec!["48200", "12"]);
    }

    #[test]
    fn test_scans_grouped_and_decimal_numbers() {
        assert_eq!(
            scan("Totals: 1,363,021 and 2 500 000 and 3.75"),
            vec!["1,363,021", "2 500 000", "3.75"]
        );
    }

    #[test]
    fn test_scans_currency_and_sign() {
        assert_eq!(
            scan("Costs -$40 and €12 and £7 and ¥9 and ₣3 and ₹5"),
            vec!["-$40", "€12", "£7", "¥9", "₣3", "₹5"]
        );
    }

    #[test]
    fn test_scans_magnitude_words() {
        assert_eq!(
            scan("Revenue was $4 Million and 23.53 million and 7 thousands"),
            vec!["$4 million", "23.53 million", "7 thousands"]
        );
    }

    #[test]
    fn test_scans_abbreviations_with_boundary() {
        assert_eq!(scan("100K users"), vec!["100k"]);
        assert_eq!(scan("$3b, then 2 m."), vec!["$3b", "2 m"]);
        assert_eq!(scan("ends with 9t"), vec!["9t"]);
    }

    #[test]
    fn test_abbreviation_followed_by_letter_is_dropped() {
        assert_eq!(scan("5 kg of flour"), vec!["5"]);
        assert_eq!(scan("12mb file"), vec!["12"]);
        assert_eq!(scan("3 tons"), vec!["3"]);
    }

    #[test]
    fn test_prefers_longest_magnitude_word() {
        assert_eq!(scan("2 trillion"), vec!["2 trillion"]);
        assert_eq!(scan("2 billions"), vec!["2 billions"]);
    }

    #[test]
    fn test_mixed_grouping_is_captured_whole() {
        // Rejected later by the validator, never split here
        assert_eq!(scan("3131 313 31"), vec!["3131 313", "31"]);
        assert_eq!(scan("1 363,021 388,333"), vec!["1 363,021 388,333"]);
    }

    #[test]
    fn test_no_candidates() {
        assert!(scan("no digits here").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_custom_vocabulary() {
        let table = MagnitudeTable::from_pairs(&[("lakh", 100_000.0)]).unwrap();
        let scanner = CandidateScanner::new(&table).unwrap();

        assert_eq!(scanner.scan("5 lakh and 6 million"), vec!["5 lakh", "6"]);
    }
}
