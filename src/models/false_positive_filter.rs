use crate::constants::{DATE_PATTERN, PHONE_NUMBER_PATTERNS};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    /// Dates like `12/31/2024` and the common North-American phone shapes.
    static ref RE_FALSE_POSITIVES: Regex = Regex::new(&format!(
        "{}|{}",
        DATE_PATTERN,
        PHONE_NUMBER_PATTERNS.join("|")
    ))
    .unwrap();
}

/// Strips date-like and phone-like substrings before any numeric scan.
///
/// Only the most obvious shapes are removed; other date or phone formats
/// pass through, and a legitimate number that happens to look like one of
/// these shapes is removed as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct FalsePositiveFilter;

impl FalsePositiveFilter {
    pub fn new() -> Self {
        Self
    }

    /// Removes every match, replacing it with the empty string.
    ///
    /// Removal repeats until nothing matches, so the result is a fixed point:
    /// filtering it again is a no-op.
    pub fn filter(&self, text: &str) -> String {
        let mut filtered = text.to_string();

        // Every pass that matches shortens the text.
        while RE_FALSE_POSITIVES.is_match(&filtered) {
            let next = RE_FALSE_POSITIVES.replace_all(&filtered, "").into_owned();

            trace!("Removed false positives: {:?} -> {:?}", filtered, next);

            filtered = next;
        }

        filtered
    }
}
