/// Collapse each run of whitespace into a single `-`.
///
/// Nothing else is touched: punctuation, case, and leading or trailing
/// characters are preserved.
///
/// # Example
///
/// ```
/// use gedname::sanitize_for_filename;
///
/// assert_eq!(sanitize_for_filename("JOHNSON, Alice  M"), "JOHNSON,-Alice-M");
/// ```
pub fn sanitize_for_filename(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_whitespace = false;

    for c in value.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('-');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }

    result
}
