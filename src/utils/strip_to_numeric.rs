/// Keeps only ASCII digits and decimal points, then trims any trailing
/// decimal point left behind once suffixes and markers are gone.
///
/// # Example
/// ```
/// use number_sniffer::utils::strip_to_numeric;
///
/// assert_eq!(strip_to_numeric("$1,234.50 million"), "1234.50");
/// assert_eq!(strip_to_numeric("42."), "42");
/// assert_eq!(strip_to_numeric("n/a"), "");
/// ```
pub fn strip_to_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .trim_end_matches('.')
        .to_string()
}
