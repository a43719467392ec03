use alloc::vec::Vec;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::Hitch;

#[quickcheck]
fn from_bytes_roundtrip(bytes: Vec<u8>) -> bool {
    let h = Hitch::from_bytes(&bytes);
    h.len() == bytes.len() && h.as_bytes() == &bytes[..]
}

#[quickcheck]
fn trim_is_idempotent(bytes: Vec<u8>) -> bool {
    let mut once = Hitch::from_bytes(&bytes);
    once.trim();
    let mut twice = once.clone();
    twice.trim();
    once == twice
}

#[quickcheck]
fn uppercase_is_a_fixed_point_of_itself(bytes: Vec<u8>) -> bool {
    let mut h = Hitch::from_bytes(&bytes);
    h.uppercase();
    let upper = h.clone();
    h.uppercase();
    h == upper
}

#[quickcheck]
fn folding_pure_letters_round_trips(seed: Vec<u8>) -> bool {
    // map arbitrary bytes onto A-Z so the whole buffer is uppercase letters
    let letters: Vec<u8> = seed.iter().map(|b| b'A' + b % 26).collect();
    let original = Hitch::from_bytes(&letters);
    let mut h = original.clone();
    h.lowercase();
    h.uppercase();
    h == original
}

#[quickcheck]
fn replace_without_occurrences_is_noop(bytes: Vec<u8>, find: Vec<u8>) -> TestResult {
    if find.is_empty() || crate::contains(&bytes, &find) {
        return TestResult::discard();
    }
    let mut h = Hitch::from_bytes(&bytes);
    h.replace(&find, b"some replacement", false);
    TestResult::from_bool(h.as_bytes() == &bytes[..])
}

#[quickcheck]
fn insert_then_remove_span_restores_original(
    bytes: Vec<u8>,
    inserted: Vec<u8>,
    position: usize,
) -> bool {
    let original = Hitch::from_bytes(&bytes);
    let at = position % (bytes.len() + 1);

    let mut h = original.clone();
    #[allow(clippy::cast_possible_wrap)]
    h.insert_bytes(at as isize, &inserted);

    // cut the inserted span back out via substring + append
    let mut restored = h.substring(0, at);
    restored.append(&h.substring(at + inserted.len(), h.len()));
    restored == original
}

#[quickcheck]
fn first_and_last_agree_for_unique_needles(bytes: Vec<u8>, needle: Vec<u8>) -> TestResult {
    if needle.is_empty() {
        return TestResult::discard();
    }
    let h = Hitch::from_bytes(&bytes);

    // count every occurrence, overlapping included
    let mut occurrences = 0;
    let mut at = 0;
    while let Some(found) = h.first_of_from(at, &needle) {
        occurrences += 1;
        at = found + 1;
    }
    if occurrences != 1 {
        return TestResult::discard();
    }
    TestResult::from_bool(h.first_of(&needle) == h.last_of(&needle))
}

#[quickcheck]
fn compare_matches_slice_ordering_over_shared_prefix(a: Vec<u8>, b: Vec<u8>) -> bool {
    let n = a.len().min(b.len());
    crate::compare(&a, &b) == a[..n].cmp(&b[..n])
}

#[quickcheck]
fn substring_concat_identity(bytes: Vec<u8>, split: usize) -> bool {
    let h = Hitch::from_bytes(&bytes);
    let at = split % (bytes.len() + 1);
    let mut rebuilt = h.substring(0, at);
    rebuilt.append(&h.substring(at, h.len()));
    rebuilt == h
}

#[quickcheck]
fn replace_growth_produces_exact_length(bytes: Vec<u8>) -> bool {
    let mut h = Hitch::from_bytes(&bytes);
    let matches = bytes.iter().filter(|&&b| b == b'a').count();
    h.replace(b"a", b"bb", false);
    h.len() == bytes.len() + matches
}

#[quickcheck]
fn eq_caseless_agrees_with_folded_equality(a: Vec<u8>, b: Vec<u8>) -> bool {
    let mut fa = Hitch::from_bytes(&a);
    let mut fb = Hitch::from_bytes(&b);
    let caseless = fa.eq_caseless(&fb);
    fa.lowercase();
    fb.lowercase();
    caseless == (fa == fb)
}
