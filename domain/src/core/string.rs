//! String utilities for the domain layer.
//!
//! Message length limits are expressed in characters, not bytes, so every
//! helper here counts Unicode scalar values.

/// Number of characters (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to at most `max_chars` characters, ending with `...`
/// when anything was cut. Limits too small for the ellipsis cut bare.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if char_len(s) <= max_chars {
        return s.to_string();
    }
    if max_chars < 3 {
        return s.chars().take(max_chars).collect();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
