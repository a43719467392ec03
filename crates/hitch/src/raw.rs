//! Slice-level comparison and literal substring search.
//!
//! These primitives operate on plain `&[u8]` so they work against any byte
//! storage; [`Hitch`](crate::Hitch) methods delegate here. Search is literal:
//! an exact byte sequence, no wildcards or pattern syntax.

use core::cmp::Ordering;

use crate::ascii;

/// Lexicographic comparison over the first `min(a.len(), b.len())` bytes.
///
/// A buffer that is a strict prefix of a longer buffer compares `Equal`
/// under this primitive. Callers that need shorter-sorts-first semantics
/// must compare lengths as well; [`Hitch`](crate::Hitch)'s `Ord` impl does
/// exactly that.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    a[..n].cmp(&b[..n])
}

/// ASCII case-insensitive equality: identical length, and contents equal
/// after folding `A-Z`/`a-z`. Non-letter bytes compare exactly.
#[must_use]
pub fn eq_caseless(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(&x, &y)| ascii::to_lower(x) == ascii::to_lower(y))
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0 unconditionally.
#[must_use]
pub fn first_of(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    let first = needle[0];
    let last_start = haystack.len() - needle.len();
    let mut at = 0;
    while at <= last_start {
        // cheap first-byte filter before the full window comparison
        if haystack[at] == first && haystack[at..at + needle.len()] == *needle {
            return Some(at);
        }
        at += 1;
    }
    None
}

/// Like [`first_of`], but scanning starts at `offset`. The returned offset
/// is relative to the start of `haystack`; an offset past the end finds
/// nothing.
#[must_use]
pub fn first_of_from(haystack: &[u8], offset: usize, needle: &[u8]) -> Option<usize> {
    if offset > haystack.len() {
        return None;
    }
    first_of(&haystack[offset..], needle).map(|at| at + offset)
}

/// Byte offset of the last occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0 unconditionally.
#[must_use]
pub fn last_of(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    let first = needle[0];
    let mut at = haystack.len() - needle.len();
    loop {
        if haystack[at] == first && haystack[at..at + needle.len()] == *needle {
            return Some(at);
        }
        if at == 0 {
            return None;
        }
        at -= 1;
    }
}

/// True when `needle` occurs anywhere in `haystack`.
#[must_use]
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    first_of(haystack, needle).is_some()
}

/// Does `needle` match at position `at`, optionally ignoring ASCII case?
pub(crate) fn matches_at(haystack: &[u8], at: usize, needle: &[u8], ignore_case: bool) -> bool {
    if needle.is_empty() || at > haystack.len() || needle.len() > haystack.len() - at {
        return false;
    }
    let window = &haystack[at..at + needle.len()];
    if ignore_case {
        eq_caseless(window, needle)
    } else {
        window == needle
    }
}

/// Case-aware variant of [`first_of_from`], used by find/replace.
pub(crate) fn first_match_from(
    haystack: &[u8],
    offset: usize,
    needle: &[u8],
    ignore_case: bool,
) -> Option<usize> {
    if !ignore_case {
        return first_of_from(haystack, offset, needle);
    }
    if needle.is_empty() {
        return Some(offset.min(haystack.len()));
    }
    if offset > haystack.len() || needle.len() > haystack.len() - offset {
        return None;
    }
    let first = ascii::to_lower(needle[0]);
    let last_start = haystack.len() - needle.len();
    let mut at = offset;
    while at <= last_start {
        if ascii::to_lower(haystack[at]) == first
            && eq_caseless(&haystack[at..at + needle.len()], needle)
        {
            return Some(at);
        }
        at += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_min_length() {
        assert_eq!(compare(b"abc", b"abd"), Ordering::Less);
        assert_eq!(compare(b"abd", b"abc"), Ordering::Greater);
        assert_eq!(compare(b"abc", b"abc"), Ordering::Equal);
        // prefix quirk: only min(len) bytes participate
        assert_eq!(compare(b"ab", b"abc"), Ordering::Equal);
        assert_eq!(compare(b"", b"anything"), Ordering::Equal);
    }

    #[test]
    fn caseless_equality() {
        assert!(eq_caseless(b"Hello", b"hELLO"));
        assert!(eq_caseless(b"", b""));
        assert!(!eq_caseless(b"hello", b"hello "));
        assert!(!eq_caseless(b"he11o", b"He1lo"));
        // high bytes compare exactly
        assert!(eq_caseless(&[0xc3, 0xa9], &[0xc3, 0xa9]));
        assert!(!eq_caseless(&[0xc3], &[0xe3]));
    }

    #[test]
    fn first_and_last_of() {
        assert_eq!(first_of(b"foobarfoo", b"foo"), Some(0));
        assert_eq!(last_of(b"foobarfoo", b"foo"), Some(6));
        assert_eq!(first_of(b"foobarfoo", b"bar"), Some(3));
        assert_eq!(last_of(b"foobarfoo", b"bar"), Some(3));
        assert_eq!(first_of(b"foobarfoo", b"baz"), None);
        assert_eq!(last_of(b"foobarfoo", b"baz"), None);
        // needle longer than haystack
        assert_eq!(first_of(b"ab", b"abc"), None);
        assert_eq!(last_of(b"ab", b"abc"), None);
        // match at the very end
        assert_eq!(first_of(b"abc", b"c"), Some(2));
        assert_eq!(last_of(b"abc", b"abc"), Some(0));
    }

    #[test]
    fn empty_needle_matches_at_zero() {
        assert_eq!(first_of(b"abc", b""), Some(0));
        assert_eq!(last_of(b"abc", b""), Some(0));
        assert_eq!(first_of(b"", b""), Some(0));
        assert!(contains(b"", b""));
    }

    #[test]
    fn offset_search() {
        assert_eq!(first_of_from(b"foobarfoo", 1, b"foo"), Some(6));
        assert_eq!(first_of_from(b"foobarfoo", 6, b"foo"), Some(6));
        assert_eq!(first_of_from(b"foobarfoo", 7, b"foo"), None);
        assert_eq!(first_of_from(b"foo", 99, b"f"), None);
        assert_eq!(first_of_from(b"foo", 3, b""), Some(3));
    }

    #[test]
    fn case_aware_scan() {
        assert_eq!(first_match_from(b"xxFOOxx", 0, b"foo", true), Some(2));
        assert_eq!(first_match_from(b"xxFOOxx", 0, b"foo", false), None);
        assert_eq!(first_match_from(b"xxFOOxx", 3, b"foo", true), None);
        assert!(matches_at(b"aBc", 0, b"abc", true));
        assert!(!matches_at(b"aBc", 0, b"abc", false));
        assert!(!matches_at(b"abc", 2, b"cd", false));
    }
}
