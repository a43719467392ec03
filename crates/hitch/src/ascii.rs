//! Single-byte ASCII classification and case folding.
//!
//! Folding is ASCII-only by design: bytes outside `A-Z`/`a-z` pass through
//! untouched.

/// ASCII whitespace: space, tab, LF, CR, vertical tab, form feed.
pub(crate) const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Folds `A-Z` to `a-z`; every other byte is returned unchanged.
pub(crate) const fn to_lower(b: u8) -> u8 {
    if b.is_ascii_uppercase() { b + 0x20 } else { b }
}

/// Folds `a-z` to `A-Z`; every other byte is returned unchanged.
pub(crate) const fn to_upper(b: u8) -> u8 {
    if b.is_ascii_lowercase() { b - 0x20 } else { b }
}
