//! Text escaping for iCalendar free-text values (RFC 5545 §3.3.11).

/// Escape a free-text value for use in SUMMARY, DESCRIPTION, etc.
///
/// Backslash is escaped first so later replacements can't double-escape.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Inverse of [`escape_text`]. Unknown escape sequences are kept verbatim.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_in_correct_order() {
        assert_eq!(escape_text(r"a\b"), r"a\\b");
        assert_eq!(escape_text("a;b,c"), r"a\;b\,c");
        assert_eq!(escape_text("line1\nline2"), r"line1\nline2");
        // A backslash followed by a semicolon must not be double-escaped.
        assert_eq!(escape_text(r"\;"), r"\\\;");
    }

    #[test]
    fn test_round_trip_reconstructs_original() {
        let original = "Lab, Block-2; note\\here\nbring kit";
        assert_eq!(unescape_text(&escape_text(original)), original);
    }

    #[test]
    fn test_unescape_leaves_unknown_sequences() {
        assert_eq!(unescape_text(r"a\tb"), r"a\tb");
        assert_eq!(unescape_text(r"trailing\"), r"trailing\");
    }
}
