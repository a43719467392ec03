//! A growable, explicitly capacity-tracked byte string.
//!
//! The [`Hitch`] type owns a heap-allocated run of bytes and mutates it in
//! place: ASCII case folding, trimming, insertion, concatenation, and
//! find/replace, alongside byte-exact comparison and literal substring
//! search. Storage grows to exactly the size an operation needs rather than
//! speculatively; see [`Hitch::reserve_capacity`].
//!
//! Slice-level search and comparison primitives are exported at the crate
//! root ([`first_of`], [`last_of`], [`compare`], ...) so they can be used
//! against any byte storage, not just a [`Hitch`].
//!
//! One fixed-format timestamp parser rides along: [`Hitch::to_epoch`]
//! converts `"M/D/Y H:MM:SS AM|PM"` text into seconds since the Unix epoch.
//!
//! ```
//! use hitch::Hitch;
//!
//! let mut h = Hitch::from("Hello World");
//! h.lowercase();
//! assert_eq!(h, "hello world");
//!
//! h.replace(b"world", b"hitch", false);
//! assert_eq!(h, "hello hitch");
//! assert_eq!(h.first_of(b"hitch"), Some(6));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod ascii;
mod epoch;
mod hitch;
mod raw;

#[cfg(test)]
mod tests;

pub use epoch::TimestampError;
pub use hitch::Hitch;
pub use raw::{compare, contains, eq_caseless, first_of, first_of_from, last_of};
