//! Question identifier parsing
//!
//! Callers pass question identifiers in decorated forms: `"2.6"`,
//! `"2.6 Does the organization..."`, `"2.6-eu"`. The canonical key is the
//! leading `"<section>.<index>"` token; everything after it is decoration.

/// A question identifier as supplied by callers (possibly decorated)
pub type QuestionId = String;

/// Extract the canonical `"<section>.<index>"` key from an identifier.
///
/// Returns `None` when the identifier does not start with a numeric
/// section-dot-index token.
///
/// # Example
///
/// ```
/// use assess_domain::question_key;
///
/// assert_eq!(question_key("2.6 Does the org process EU data?"), Some("2.6"));
/// assert_eq!(question_key("intro"), None);
/// ```
pub fn question_key(id: &str) -> Option<&str> {
    let s = id.trim_start();

    let section_len = leading_digits(s);
    if section_len == 0 {
        return None;
    }
    if s.as_bytes().get(section_len) != Some(&b'.') {
        return None;
    }

    let rest = &s[section_len + 1..];
    let index_len = leading_digits(rest);
    if index_len == 0 {
        return None;
    }

    Some(&s[..section_len + 1 + index_len])
}

/// Extract the numeric section prefix of an identifier.
///
/// The prefix is the digit run before the first dot. Returns `None` when
/// the identifier has no such prefix or the number does not fit a section
/// code.
pub fn section_prefix(id: &str) -> Option<u8> {
    let s = id.trim_start();

    let section_len = leading_digits(s);
    if section_len == 0 {
        return None;
    }
    if s.as_bytes().get(section_len) != Some(&b'.') {
        return None;
    }

    s[..section_len].parse().ok()
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key() {
        assert_eq!(question_key("2.6"), Some("2.6"));
        assert_eq!(question_key("13.12"), Some("13.12"));
    }

    #[test]
    fn test_decorated_key() {
        assert_eq!(question_key("2.6 Does the org process EU data?"), Some("2.6"));
        assert_eq!(question_key("2.6-eu-processing"), Some("2.6"));
        assert_eq!(question_key("  7.3\ttransfers"), Some("7.3"));
    }

    #[test]
    fn test_nested_numbering_truncates() {
        // Only the first two levels form the key
        assert_eq!(question_key("2.6.1"), Some("2.6"));
    }

    #[test]
    fn test_malformed_identifiers() {
        assert_eq!(question_key(""), None);
        assert_eq!(question_key("intro"), None);
        assert_eq!(question_key("Q2.6"), None);
        assert_eq!(question_key("2"), None);
        assert_eq!(question_key("2."), None);
        assert_eq!(question_key(".6"), None);
        assert_eq!(question_key("2 .6"), None);
    }

    #[test]
    fn test_section_prefix() {
        assert_eq!(section_prefix("7.3"), Some(7));
        assert_eq!(section_prefix("13.1 Audits performed?"), Some(13));
        assert_eq!(section_prefix("appendix"), None);
        assert_eq!(section_prefix("7"), None);
    }

    #[test]
    fn test_section_prefix_overflow() {
        // A prefix that does not fit the section code range is not a section
        assert_eq!(section_prefix("999.1"), None);
    }
}
