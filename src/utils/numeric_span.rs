/// Returns the slice of `text` from its first ASCII digit through its last,
/// or `None` if it contains no digits.
///
/// # Example
/// ```
/// use number_sniffer::utils::numeric_span;
///
/// assert_eq!(numeric_span("-$1,200 million"), Some("1,200"));
/// assert_eq!(numeric_span("about 4 to 5"), Some("4 to 5"));
/// assert_eq!(numeric_span("none"), None);
/// ```
pub fn numeric_span(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let end = text.rfind(|c: char| c.is_ascii_digit())?;

    // Digits are single-byte, so `end + 1` is a char boundary.
    Some(&text[start..=end])
}
