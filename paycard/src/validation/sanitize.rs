// paycard/src/validation/sanitize.rs

/// Strip the separators people type into card numbers.
///
/// Only whitespace and dashes are removed; any other character is kept so a
/// genuinely malformed number still fails checksum validation instead of
/// being silently "repaired".
pub fn sanitize_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Trim surrounding whitespace from free-text fields (holder names, CVV).
pub fn sanitize_text(raw: &str) -> &str {
    raw.trim()
}
