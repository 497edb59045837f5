//! Escaping utilities for safe output generation.
//!
//! Field values come straight from schematic data and may contain
//! delimiters, markup, or characters that are invalid in XML names.
//! Every renderer routes cell text through the matching function here.

/// Quote a CSV field per RFC 4180.
///
/// Fields containing the delimiter, a double quote, or a line break are
/// wrapped in double quotes with embedded quotes doubled; anything else
/// passes through unchanged.
///
/// # Examples
///
/// ```
/// use bomgen::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv("10K"), "10K");
/// assert_eq!(escape_csv("1,5mm"), "\"1,5mm\"");
/// assert_eq!(escape_csv("5\" header"), "\"5\"\" header\"");
/// ```
pub fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Escape a string for safe inclusion in HTML content.
///
/// # Examples
///
/// ```
/// use bomgen::reports::escape::escape_html;
///
/// assert_eq!(escape_html("R<10K>"), "R&lt;10K&gt;");
/// assert_eq!(escape_html("safe text"), "safe text");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Sanitize a column name into a valid XML tag name.
///
/// Spaces become underscores, quote characters are stripped, and `#`
/// becomes `_num`; a leading character that cannot start an XML name is
/// prefixed with an underscore. Consumers must look tags up by sanitized
/// name, not by position.
///
/// # Examples
///
/// ```
/// use bomgen::reports::escape::sanitize_xml_name;
///
/// assert_eq!(sanitize_xml_name("Quantity Per PCB"), "Quantity_Per_PCB");
/// assert_eq!(sanitize_xml_name("digikey#"), "digikey_num");
/// ```
pub fn sanitize_xml_name(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ' ' => result.push('_'),
            '"' | '\'' => {}
            '#' => result.push_str("_num"),
            _ => result.push(c),
        }
    }
    let starts_valid = result
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if starts_valid {
        result
    } else {
        format!("_{result}")
    }
}
