use crate::constants::DEFAULT_MAGNITUDE_ENTRIES;
use crate::types::{MagnitudeToken, Multiplier};
use crate::Error;
use std::collections::HashMap;

/// A single suffix token and the multiplier it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeEntry {
    pub token: MagnitudeToken,
    pub multiplier: Multiplier,
}

/// Read-only mapping from lowercase suffix token to multiplier.
///
/// The table is injected into the scanner and the normalizer so alternate
/// vocabularies can be swapped in without touching either component.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeTable {
    entries: Vec<MagnitudeEntry>,
    multipliers: HashMap<MagnitudeToken, Multiplier>,
}

impl MagnitudeTable {
    /// Builds a table, rejecting vocabularies the scanner could not use.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfiguration` if `entries` is empty, if a
    /// token is empty, not lowercase alphabetic, or duplicated, or if a
    /// multiplier is not a finite positive number.
    pub fn new(entries: Vec<MagnitudeEntry>) -> Result<Self, Error> {
        if entries.is_empty() {
            return Err(Error::InvalidConfiguration(
                "Magnitude table must contain at least one entry".to_string(),
            ));
        }

        let mut multipliers = HashMap::with_capacity(entries.len());

        for entry in &entries {
            if entry.token.is_empty()
                || !entry
                    .token
                    .chars()
                    .all(|c| c.is_alphabetic() && c.is_lowercase())
            {
                return Err(Error::InvalidConfiguration(format!(
                    "Magnitude token {:?} must be lowercase alphabetic",
                    entry.token
                )));
            }

            if !entry.multiplier.is_finite() || entry.multiplier <= 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "Multiplier for {:?} must be finite and positive, got {}",
                    entry.token, entry.multiplier
                )));
            }

            if multipliers
                .insert(entry.token.clone(), entry.multiplier)
                .is_some()
            {
                return Err(Error::InvalidConfiguration(format!(
                    "Duplicate magnitude token {:?}",
                    entry.token
                )));
            }
        }

        Ok(Self {
            entries,
            multipliers,
        })
    }

    /// Builds a table from `(token, multiplier)` pairs.
    pub fn from_pairs(pairs: &[(&str, Multiplier)]) -> Result<Self, Error> {
        Self::new(
            pairs
                .iter()
                .map(|(token, multiplier)| MagnitudeEntry {
                    token: token.to_string(),
                    multiplier: *multiplier,
                })
                .collect(),
        )
    }

    /// Looks up a token case-insensitively.
    pub fn multiplier(&self, token: &str) -> Option<Multiplier> {
        self.multipliers.get(&token.to_lowercase()).copied()
    }

    pub fn entries(&self) -> &[MagnitudeEntry] {
        &self.entries
    }

    /// Tokens ordered longest first, so an alternation built from them
    /// prefers "thousands" over "thousand" over "t".
    pub fn tokens_longest_first(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.entries.iter().map(|e| e.token.as_str()).collect();

        tokens.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        tokens
    }

    /// Regex alternation (without surrounding group) matching any token.
    pub fn alternation_pattern(&self) -> String {
        self.tokens_longest_first()
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<String>>()
            .join("|")
    }
}

impl Default for MagnitudeTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_MAGNITUDE_ENTRIES)
            .expect("Default magnitude entries must form a valid table")
    }
}
