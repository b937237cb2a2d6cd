use crate::models::MagnitudeTable;

/// Tunables for a document scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SnifferConfig {
    /// Suffix vocabulary shared by the scanner and the normalizer.
    pub magnitude_table: MagnitudeTable,

    /// Negate values whose raw text starts with `-`.
    ///
    /// Off by default: results are unsigned magnitudes, and consumers may
    /// depend on that. Turning it on changes which value counts as largest.
    pub apply_negative_sign: bool,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            magnitude_table: MagnitudeTable::default(),
            apply_negative_sign: false,
        }
    }
}
