use crate::types::Multiplier;

/// Default magnitude vocabulary. Tokens are lowercase; single letters are
/// the abbreviated forms.
pub const DEFAULT_MAGNITUDE_ENTRIES: &[(&str, Multiplier)] = &[
    ("k", 1_000.0),
    ("m", 1_000_000.0),
    ("b", 1_000_000_000.0),
    ("t", 1_000_000_000_000.0),
    ("thousand", 1_000.0),
    ("million", 1_000_000.0),
    ("billion", 1_000_000_000.0),
    ("trillion", 1_000_000_000_000.0),
    ("thousands", 1_000.0),
    ("millions", 1_000_000.0),
    ("billions", 1_000_000_000.0),
    ("trillions", 1_000_000_000_000.0),
];

/// Currency symbols accepted directly in front of a number.
pub const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₣', '₹'];

pub const DATE_PATTERN: &str = r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}";

pub const PHONE_NUMBER_PATTERNS: &[&str] = &[
    r"[1-9][0-9]{2}-[0-9]{3}-[0-9]{4}",
    r"\([0-9]{3}\)\s?[0-9]{3}-[0-9]{4}",
    r"[1-9][0-9]{2}\.[0-9]{3}\.[0-9]{4}",
];

pub const LARGEST_NUMBER_PROMPT_BASIC: &str = "What is the largest number in this document?";

/// Few-shot prompt. Performs best in practice; more examples tend to bias
/// the model toward "million".
pub const LARGEST_NUMBER_PROMPT_FEW_SHOT: &str =
    "Find the biggest value. For example, $321 billion, or 293, or $23 million.";

pub const LARGEST_NUMBER_PROMPT_EXTENDED: &str =
    "Find the biggest value. For example, $321 billion, 84 million, 100K, 293, or $23.53 million.";

pub const DEFAULT_LARGEST_NUMBER_PROMPT: &str = LARGEST_NUMBER_PROMPT_FEW_SHOT;

/// Separates pages in plain-text input, as emitted by common PDF text dumpers.
pub const PAGE_SEPARATOR: char = '\x0c';
