use crate::types::RawTextRef;
use crate::utils::{numeric_span, strip_to_numeric};
use log::debug;

/// Grouping separators a candidate may use between thousands-groups.
const GROUP_SEPARATORS: [char; 2] = [' ', ','];

/// Rejects candidates whose digit grouping or decimal structure could not
/// belong to a real number.
///
/// Shape is judged on the digits-and-decimal-point stripped form; grouping
/// is judged on the raw text between its first and last digit, so currency
/// markers and magnitude suffixes never count as a group.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateValidator;

impl CandidateValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if `raw_text` is structurally a number.
    ///
    /// Any violated rule rejects the candidate as a whole; it is never
    /// truncated to a valid prefix.
    pub fn is_valid(&self, raw_text: &RawTextRef) -> bool {
        match self.rejection_reason(raw_text) {
            Some(reason) => {
                debug!("Rejected candidate {:?}: {}", raw_text, reason);
                false
            }
            None => true,
        }
    }

    fn rejection_reason(&self, raw_text: &RawTextRef) -> Option<&'static str> {
        let stripped = strip_to_numeric(raw_text);

        if stripped.is_empty() {
            return Some("no digits");
        }

        if stripped.matches('.').count() > 1 {
            return Some("more than one decimal point");
        }

        let Some(span) = numeric_span(raw_text) else {
            return Some("no digits");
        };

        if !span
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || GROUP_SEPARATORS.contains(&c))
        {
            return Some("non-numeric characters between digits");
        }

        let (integer_part, fractional_part) = match span.split_once('.') {
            Some((integer_part, fractional_part)) => (integer_part, Some(fractional_part)),
            None => (span, None),
        };

        if fractional_part.is_some_and(|fraction| !fraction.chars().all(|c| c.is_ascii_digit())) {
            return Some("grouped digits after the decimal point");
        }

        for separator in GROUP_SEPARATORS {
            if !has_valid_grouping(integer_part, separator) {
                return Some("inconsistent digit grouping");
            }
        }

        None
    }
}

/// Every group after the first holds exactly three digits; the first holds
/// at most three unless it is the only group.
fn has_valid_grouping(integer_part: &str, separator: char) -> bool {
    let groups: Vec<usize> = integer_part
        .split(separator)
        .map(|group| group.chars().filter(|c| c.is_ascii_digit()).count())
        .collect();

    let is_grouped = groups.len() > 1;

    groups.iter().enumerate().all(|(index, &digit_count)| {
        if index == 0 {
            !is_grouped || digit_count <= 3
        } else {
            digit_count == 3
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(raw_text: &str) -> bool {
        CandidateValidator::new().is_valid(raw_text)
    }

    #[test]
    fn test_accepts_well_formed_numbers() {
        assert!(is_valid("1,363,021"));
        assert!(is_valid("48200"));
        assert!(is_valid("2 500 000"));
        assert!(is_valid("12.75"));
        assert!(is_valid("1,000.5"));
        assert!(is_valid("0"));
    }

    #[test]
    fn test_accepts_markers_and_suffixes() {
        assert!(is_valid("$321 billion"));
        assert!(is_valid("-$1,200"));
        assert!(is_valid("23.53 million"));
        assert!(is_valid("100k"));
        assert!(is_valid("€ 7"));
    }

    #[test]
    fn test_rejects_malformed_space_grouping() {
        assert!(!is_valid("3131 31 31"));
        assert!(!is_valid("3131 313"));
        assert!(!is_valid("12 3456"));
    }

    #[test]
    fn test_rejects_malformed_comma_grouping() {
        assert!(!is_valid("1234,567"));
        assert!(!is_valid("1,23"));
        assert!(!is_valid("1,2345"));
    }

    #[test]
    fn test_rejects_mixed_grouping() {
        assert!(!is_valid("1 363,021 388,333"));
    }

    #[test]
    fn test_rejects_multiple_decimal_points() {
        assert!(!is_valid("12.3123.14"));
        assert!(!is_valid("1.2.3"));
    }

    #[test]
    fn test_rejects_text_without_digits() {
        assert!(!is_valid(""));
        assert!(!is_valid("million"));
        assert!(!is_valid(", ,"));
    }

    #[test]
    fn test_rejects_words_between_digits() {
        assert!(!is_valid("12 apples and 3"));
        assert!(!is_valid("4 to 5 million"));
        assert!(!is_valid("12abc3"));
    }

    #[test]
    fn test_rejects_grouped_fraction() {
        assert!(!is_valid("1.234,5"));
    }

    #[test]
    fn test_trailing_decimal_point_is_tolerated() {
        assert!(is_valid("42."));
    }
}
