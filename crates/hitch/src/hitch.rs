//! The [`Hitch`] byte buffer: construction, capacity management, in-place
//! mutation, and byte-exact queries.

use alloc::vec::Vec;
use core::{cmp::Ordering, ffi::CStr, fmt, ops::Deref};

use bstr::BStr;

use crate::{TimestampError, ascii, epoch, raw};

/// A growable, explicitly capacity-tracked byte buffer.
///
/// A `Hitch` exclusively owns its backing storage. [`len`](Hitch::len)
/// counts the logically valid bytes; [`capacity`](Hitch::capacity) the bytes
/// currently allocated for them. Every mutator that needs more room computes
/// the exact new requirement and grows to that size, never speculatively
/// (see [`reserve_capacity`](Hitch::reserve_capacity)).
///
/// `Hitch` derefs to `[u8]`, so slice queries (`starts_with`, `iter`,
/// indexing, ...) work directly on it.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hitch {
    data: Vec<u8>,
}

impl Hitch {
    /// An empty buffer. Performs no allocation.
    #[must_use]
    pub const fn new() -> Self {
        Hitch { data: Vec::new() }
    }

    /// An empty buffer with storage for at least `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Hitch {
            data: Vec::with_capacity(capacity),
        }
    }

    /// A buffer holding a copy of `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Hitch {
            data: bytes.to_vec(),
        }
    }

    /// A buffer holding a copy of a NUL-terminated C string's contents,
    /// excluding the terminator.
    #[must_use]
    pub fn from_cstr(s: &CStr) -> Self {
        Hitch::from_bytes(s.to_bytes())
    }

    /// A new buffer copied from the byte range `lo..hi` of this one.
    ///
    /// Degenerate requests (`hi <= lo`, or either bound past
    /// [`len`](Hitch::len)) yield an empty buffer with no allocation rather
    /// than an error.
    #[must_use]
    pub fn substring(&self, lo: usize, hi: usize) -> Hitch {
        if hi <= lo || lo > self.data.len() || hi > self.data.len() {
            return Hitch::new();
        }
        Hitch::from_bytes(&self.data[lo..hi])
    }

    /// Number of logically valid bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no bytes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes currently allocated for storage. Always `>= len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The valid bytes as a slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Grows storage so that `capacity() >= min`, preserving contents.
    ///
    /// This is the crate's entire growth policy: grow to exactly the
    /// requested size (the allocator may round up), never speculatively.
    /// That trades amortized-append throughput for memory exactness;
    /// callers building a buffer incrementally can pre-reserve.
    pub fn reserve_capacity(&mut self, min: usize) {
        if self.data.capacity() < min {
            self.data.reserve_exact(min - self.data.len());
        }
    }

    /// Sets the logical length to `len`, growing storage first if needed.
    ///
    /// Bytes past the old length are zero-filled.
    pub fn resize(&mut self, len: usize) {
        self.reserve_capacity(len);
        self.data.resize(len, 0);
    }

    /// Sets the length to zero, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Frees the backing storage and resets to the empty state.
    ///
    /// Idempotent: releasing an already-empty buffer is a no-op. Dropping a
    /// `Hitch` releases it implicitly; this exists for reusing a long-lived
    /// handle without dropping it.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }

    /// In-place ASCII lowercasing of every stored byte. Bytes outside
    /// `A-Z` are untouched.
    pub fn lowercase(&mut self) {
        for b in &mut self.data {
            *b = ascii::to_lower(*b);
        }
    }

    /// In-place ASCII uppercasing of every stored byte. Bytes outside
    /// `a-z` are untouched.
    pub fn uppercase(&mut self) {
        for b in &mut self.data {
            *b = ascii::to_upper(*b);
        }
    }

    /// Removes leading and trailing ASCII whitespace (space, tab, LF, CR,
    /// VT, FF), shifting the surviving bytes to the front. An all-whitespace
    /// buffer becomes empty.
    pub fn trim(&mut self) {
        let Some(start) = self.data.iter().position(|&b| !ascii::is_whitespace(b)) else {
            self.data.clear();
            return;
        };
        let end = self
            .data
            .iter()
            .rposition(|&b| !ascii::is_whitespace(b))
            .unwrap_or(start);
        self.data.copy_within(start..=end, 0);
        self.data.truncate(end - start + 1);
    }

    /// Appends another buffer's bytes.
    pub fn append(&mut self, other: &Hitch) {
        self.append_bytes(&other.data);
    }

    /// Appends a run of bytes. Appending zero bytes is a no-op.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.reserve_capacity(self.data.len() + bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Appends a NUL-terminated C string's contents, excluding the
    /// terminator.
    pub fn append_cstr(&mut self, s: &CStr) {
        self.append_bytes(s.to_bytes());
    }

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) {
        self.reserve_capacity(self.data.len() + 1);
        self.data.push(byte);
    }

    /// Appends `bytes`, truncating embedded fractional runs to at most
    /// `precision` digits.
    ///
    /// Every `.` with a decimal digit on both immediate sides is treated as
    /// a decimal point: the point is kept, up to `precision` following
    /// digits are copied, and the remainder of that digit run is dropped.
    /// This lets numeric text embedded in a larger record be copied with
    /// bounded fractional precision without parsing each number. With
    /// `precision` 0 the point itself is still kept (`"1.25"` becomes
    /// `"1."`).
    pub fn append_bytes_precision(&mut self, bytes: &[u8], precision: usize) {
        if bytes.is_empty() {
            return;
        }
        self.reserve_capacity(self.data.len() + bytes.len());

        // the first byte can't open a fractional run (no digit before it)
        self.data.push(bytes[0]);
        let mut at = 1;
        while at < bytes.len() {
            let b = bytes[at];
            if b == b'.'
                && bytes[at - 1].is_ascii_digit()
                && at + 1 < bytes.len()
                && bytes[at + 1].is_ascii_digit()
            {
                self.data.push(b'.');
                at += 1;
                let mut left = precision;
                while at < bytes.len() && left > 0 && bytes[at].is_ascii_digit() {
                    self.data.push(bytes[at]);
                    at += 1;
                    left -= 1;
                }
                if left == 0 {
                    while at < bytes.len() && bytes[at].is_ascii_digit() {
                        at += 1;
                    }
                }
            } else {
                self.data.push(b);
                at += 1;
            }
        }
    }

    /// Inserts another buffer's bytes at `index`.
    pub fn insert(&mut self, index: isize, other: &Hitch) {
        self.insert_bytes(index, &other.data);
    }

    /// Inserts a run of bytes at `index`.
    ///
    /// Negative indices clamp to 0; an index at or past the end appends.
    /// The tail is shifted right before the new bytes are written, so the
    /// overlapping source and destination ranges never corrupt unread data.
    pub fn insert_bytes(&mut self, index: isize, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let at = usize::try_from(index).unwrap_or(0);
        if at >= self.data.len() {
            return self.append_bytes(bytes);
        }
        let old_len = self.data.len();
        self.reserve_capacity(old_len + bytes.len());
        self.data.resize(old_len + bytes.len(), 0);
        self.data.copy_within(at..old_len, at + bytes.len());
        self.data[at..at + bytes.len()].copy_from_slice(bytes);
    }

    /// Inserts a NUL-terminated C string's contents at `index`.
    pub fn insert_cstr(&mut self, index: isize, s: &CStr) {
        self.insert_bytes(index, s.to_bytes());
    }

    /// Inserts a single byte at `index`.
    pub fn insert_byte(&mut self, index: isize, byte: u8) {
        self.insert_bytes(index, &[byte]);
    }

    /// Inserts the decimal text of `value` at `index`, with a leading `-`
    /// for negative values.
    pub fn insert_int(&mut self, index: isize, value: i64) {
        // single digits skip the scratch conversion entirely
        if (0..=9).contains(&value) {
            return self.insert_byte(index, b'0' + value as u8);
        }

        // "-9223372036854775808" is the longest rendering
        let mut scratch = [0u8; 20];
        let mut at = scratch.len();
        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();
        while magnitude > 0 {
            at -= 1;
            scratch[at] = b'0' + (magnitude % 10) as u8;
            magnitude /= 10;
        }
        if negative {
            at -= 1;
            scratch[at] = b'-';
        }
        self.insert_bytes(index, &scratch[at..]);
    }

    /// Replaces every non-overlapping occurrence of `find` with
    /// `replacement`, scanning left to right.
    ///
    /// With `ignore_case`, matching folds ASCII case; the replacement is
    /// written verbatim either way. An empty `find` leaves the buffer
    /// unchanged.
    ///
    /// When the replacement is no longer than the pattern the rewrite is a
    /// single forward pass within the existing storage. When it is longer,
    /// a forward scan first collects every match so the exact final length
    /// is known, storage grows once, and the rewrite then runs back to
    /// front so writes never overwrite source bytes that haven't been read
    /// yet.
    pub fn replace(&mut self, find: &[u8], replacement: &[u8], ignore_case: bool) {
        if find.is_empty() {
            return;
        }
        if replacement.len() <= find.len() {
            let mut read = 0;
            let mut write = 0;
            while read < self.data.len() {
                if raw::matches_at(&self.data, read, find, ignore_case) {
                    self.data[write..write + replacement.len()].copy_from_slice(replacement);
                    write += replacement.len();
                    read += find.len();
                } else {
                    self.data[write] = self.data[read];
                    write += 1;
                    read += 1;
                }
            }
            self.data.truncate(write);
        } else {
            let mut offsets: Vec<usize> = Vec::new();
            let mut at = 0;
            while let Some(found) = raw::first_match_from(&self.data, at, find, ignore_case) {
                offsets.push(found);
                at = found + find.len();
            }
            if offsets.is_empty() {
                return;
            }
            let old_len = self.data.len();
            let new_len = old_len + (replacement.len() - find.len()) * offsets.len();
            self.resize(new_len);

            let mut read = old_len;
            let mut write = new_len;
            for &found in offsets.iter().rev() {
                let tail = found + find.len()..read;
                write -= tail.len();
                self.data.copy_within(tail, write);
                write -= replacement.len();
                self.data[write..write + replacement.len()].copy_from_slice(replacement);
                read = found;
            }
            // the head before the first match never moves
            debug_assert_eq!(write, read);
        }
    }

    /// Lexicographic comparison over the first `min(len)` bytes of the two
    /// buffers. A strict prefix compares `Equal`; see [`crate::compare`].
    /// `Ord` gives the conventional total order instead.
    #[must_use]
    pub fn compare(&self, other: &Hitch) -> Ordering {
        raw::compare(&self.data, &other.data)
    }

    /// ASCII case-insensitive equality with another buffer.
    #[must_use]
    pub fn eq_caseless(&self, other: &Hitch) -> bool {
        raw::eq_caseless(&self.data, &other.data)
    }

    /// True when `needle` occurs anywhere in this buffer.
    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        raw::contains(&self.data, needle)
    }

    /// Byte offset of the first occurrence of `needle`, if any. An empty
    /// needle matches at offset 0.
    #[must_use]
    pub fn first_of(&self, needle: &[u8]) -> Option<usize> {
        raw::first_of(&self.data, needle)
    }

    /// Like [`first_of`](Hitch::first_of), scanning from `offset`.
    #[must_use]
    pub fn first_of_from(&self, offset: usize, needle: &[u8]) -> Option<usize> {
        raw::first_of_from(&self.data, offset, needle)
    }

    /// Byte offset of the last occurrence of `needle`, if any.
    #[must_use]
    pub fn last_of(&self, needle: &[u8]) -> Option<usize> {
        raw::last_of(&self.data, needle)
    }

    /// Strict decimal parse of the entire buffer as a signed integer.
    ///
    /// Accepts an optional leading `-` followed by one or more ASCII
    /// digits; anything else, including an empty buffer or overflow, is
    /// `None`.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let (negative, digits) = match self.data.split_first() {
            Some((&b'-', rest)) => (true, rest),
            _ => (false, &self.data[..]),
        };
        if digits.is_empty() {
            return None;
        }
        // accumulate negated so i64::MIN parses without overflow
        let mut value = 0i64;
        for &b in digits {
            if !b.is_ascii_digit() {
                return None;
            }
            value = value
                .checked_mul(10)?
                .checked_sub(i64::from(b - b'0'))?;
        }
        if negative { Some(value) } else { value.checked_neg() }
    }

    /// Parses this buffer's contents as a `"M/D/Y H:MM:SS AM|PM"` timestamp
    /// in UTC, returning seconds since the Unix epoch. Reads the bytes
    /// directly; never mutates the buffer. See [`TimestampError`] for the
    /// failure modes.
    ///
    /// ```
    /// use hitch::Hitch;
    ///
    /// let ts = Hitch::from("4/30/2021 8:19:27 AM");
    /// assert_eq!(ts.to_epoch(), Ok(1_619_770_767));
    /// ```
    pub fn to_epoch(&self) -> Result<i64, TimestampError> {
        epoch::parse(&self.data)
    }
}

impl Deref for Hitch {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Hitch {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for Hitch {
    fn from(bytes: &[u8]) -> Self {
        Hitch::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for Hitch {
    fn from(bytes: &[u8; N]) -> Self {
        Hitch::from_bytes(bytes)
    }
}

impl From<&str> for Hitch {
    fn from(s: &str) -> Self {
        Hitch::from_bytes(s.as_bytes())
    }
}

impl From<Vec<u8>> for Hitch {
    fn from(data: Vec<u8>) -> Self {
        Hitch { data }
    }
}

impl From<&CStr> for Hitch {
    fn from(s: &CStr) -> Self {
        Hitch::from_cstr(s)
    }
}

impl PartialEq<[u8]> for Hitch {
    fn eq(&self, other: &[u8]) -> bool {
        self.data == other
    }
}

impl PartialEq<&[u8]> for Hitch {
    fn eq(&self, other: &&[u8]) -> bool {
        self.data == *other
    }
}

impl PartialEq<str> for Hitch {
    fn eq(&self, other: &str) -> bool {
        self.data == other.as_bytes()
    }
}

impl PartialEq<&str> for Hitch {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}

impl fmt::Debug for Hitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(&self.data), f)
    }
}

impl fmt::Display for Hitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(&self.data), f)
    }
}

impl Extend<u8> for Hitch {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl FromIterator<u8> for Hitch {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Hitch {
            data: Vec::from_iter(iter),
        }
    }
}
