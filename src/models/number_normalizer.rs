use crate::models::{Candidate, MagnitudeTable, NormalizedNumber};
use crate::types::{Multiplier, RawTextRef};
use crate::utils::strip_to_numeric;
use crate::Error;
use regex::Regex;

/// Converts a validated candidate's literal text into a comparable value.
#[derive(Debug, Clone)]
pub struct NumberNormalizer {
    magnitude_table: MagnitudeTable,
    magnitude_pattern: Regex,
    apply_negative_sign: bool,
}

impl NumberNormalizer {
    /// Builds a normalizer for the given suffix vocabulary.
    ///
    /// With `apply_negative_sign` unset, a leading `-` is captured but
    /// ignored and every value is a magnitude.
    pub fn new(magnitude_table: &MagnitudeTable, apply_negative_sign: bool) -> Result<Self, Error> {
        // Whole-token match: no letter on either side of the suffix
        let magnitude_pattern = Regex::new(&format!(
            r"(?i)(?:^|[^\p{{Alphabetic}}])(?P<token>{})(?:[^\p{{Alphabetic}}]|$)",
            magnitude_table.alternation_pattern()
        ))?;

        Ok(Self {
            magnitude_table: magnitude_table.clone(),
            magnitude_pattern,
            apply_negative_sign,
        })
    }

    /// Parses `raw_text` and applies its magnitude multiplier, if any.
    ///
    /// # Errors
    /// `Error::MalformedCandidate` when nothing parseable remains after
    /// stripping everything but digits and the decimal point.
    pub fn normalize(&self, raw_text: &RawTextRef) -> Result<f64, Error> {
        let stripped = strip_to_numeric(raw_text);

        let mut value = stripped
            .parse::<f64>()
            .map_err(|_| Error::MalformedCandidate(raw_text.to_string()))?;

        if let Some(multiplier) = self.find_multiplier(raw_text) {
            value *= multiplier;
        }

        if self.apply_negative_sign && raw_text.trim_start().starts_with('-') {
            value = -value;
        }

        Ok(value)
    }

    pub fn normalize_candidate(&self, candidate: Candidate) -> Result<NormalizedNumber, Error> {
        let value = self.normalize(&candidate.raw_text)?;

        Ok(NormalizedNumber {
            value,
            origin: candidate,
        })
    }

    fn find_multiplier(&self, raw_text: &RawTextRef) -> Option<Multiplier> {
        let captures = self.magnitude_pattern.captures(raw_text)?;
        let token = captures.name("token")?;

        self.magnitude_table.multiplier(token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> NumberNormalizer {
        NumberNormalizer::new(&MagnitudeTable::default(), false).unwrap()
    }

    #[test]
    fn test_normalizes_magnitude_words() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize("$321 billion").unwrap(), 321_000_000_000.0);
        assert_eq!(normalizer.normalize("23.53 million").unwrap(), 23_530_000.0);
        assert_eq!(normalizer.normalize("7 thousands").unwrap(), 7_000.0);
        assert_eq!(normalizer.normalize("2 Trillion").unwrap(), 2_000_000_000_000.0);
    }

    #[test]
    fn test_normalizes_abbreviations() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize("100k").unwrap(), 100_000.0);
        assert_eq!(normalizer.normalize("$3b").unwrap(), 3_000_000_000.0);
        assert_eq!(normalizer.normalize("2 m").unwrap(), 2_000_000.0);
        assert_eq!(normalizer.normalize("100K").unwrap(), 100_000.0);
    }

    #[test]
    fn test_normalizes_grouped_numbers() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize("1,363,021").unwrap(), 1_363_021.0);
        assert_eq!(normalizer.normalize("2 500 000").unwrap(), 2_500_000.0);
        assert_eq!(normalizer.normalize("48200").unwrap(), 48_200.0);
        assert_eq!(normalizer.normalize("1,000.5").unwrap(), 1_000.5);
        assert_eq!(normalizer.normalize("42.").unwrap(), 42.0);
    }

    #[test]
    fn test_negative_sign_is_ignored_by_default() {
        assert_eq!(normalizer().normalize("-$40").unwrap(), 40.0);
    }

    #[test]
    fn test_negative_sign_can_be_applied() {
        let normalizer = NumberNormalizer::new(&MagnitudeTable::default(), true).unwrap();

        assert_eq!(normalizer.normalize("-$40").unwrap(), -40.0);
        assert_eq!(normalizer.normalize("-2k").unwrap(), -2_000.0);
        assert_eq!(normalizer.normalize("40").unwrap(), 40.0);
    }

    #[test]
    fn test_malformed_candidates() {
        let normalizer = normalizer();

        assert!(matches!(
            normalizer.normalize(", ,"),
            Err(Error::MalformedCandidate(_))
        ));
        assert!(matches!(
            normalizer.normalize("million"),
            Err(Error::MalformedCandidate(_))
        ));
        assert!(matches!(
            normalizer.normalize("1.2.3"),
            Err(Error::MalformedCandidate(_))
        ));
    }

    #[test]
    fn test_magnitude_letter_inside_word_is_ignored() {
        // "mb" is not a whole "m" token
        assert_eq!(normalizer().normalize("12 mb").unwrap(), 12.0);
    }

    #[test]
    fn test_normalize_candidate_keeps_origin() {
        let candidate = Candidate::from_text_block("5k".to_string(), 3);
        let number = normalizer().normalize_candidate(candidate.clone()).unwrap();

        assert_eq!(number.value, 5_000.0);
        assert_eq!(number.origin, candidate);
    }
}
