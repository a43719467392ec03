//! Fixed-format timestamp parsing.
//!
//! Exactly one textual layout is understood: `M/D/Y H:MM:SS AM` (or `PM`),
//! always interpreted as UTC regardless of any embedded timezone text. The
//! day-count conversion applies the Gregorian 4/100/400 leap rule directly,
//! with no platform calendar or timezone database, so output is identical
//! across environments.

use thiserror::Error;

/// Ways a timestamp can fail to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// The text did not contain exactly six numeric fields
    /// (month, day, year, hour, minute, second).
    #[error("expected 6 numeric fields, found {0}")]
    FieldCount(usize),
    /// A separator byte was not the one the fixed layout requires at that
    /// position (`/`, `/`, space, `:`, `:`).
    #[error("expected {expected:?} at byte {at}")]
    BadSeparator {
        /// The separator the layout calls for.
        expected: char,
        /// Byte offset of the mismatch.
        at: usize,
    },
    /// No trailing `AM` or `PM` marker.
    #[error("missing AM/PM marker")]
    MissingMeridiem,
    /// The month field was outside 1-12.
    #[error("month {0} out of range")]
    MonthOutOfRange(i64),
}

/// Days before the first of each month, non-leap year.
const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Parses `M/D/Y H:MM:SS AM|PM` into seconds since the Unix epoch.
///
/// Hour 12 normalizes to 0 before the PM adjustment adds 12, so `12:00:00
/// AM` is midnight and `12:00:00 PM` is noon. The six-field shape and the
/// separators between fields (`/`, `/`, space, `:`, `:`) are enforced; day,
/// hour, minute, and second values are otherwise taken as given, and only
/// the month is range-checked.
pub(crate) fn parse(bytes: &[u8]) -> Result<i64, TimestampError> {
    let pm = if bytes.ends_with(b"AM") {
        false
    } else if bytes.ends_with(b"PM") {
        true
    } else {
        return Err(TimestampError::MissingMeridiem);
    };

    // M/D/Y H:MM:SS, each field a digit run, each separator a fixed byte
    const SEPARATORS: [u8; 5] = [b'/', b'/', b' ', b':', b':'];

    let mut fields = [0i64; 6];
    let mut at = 0;
    for (index, field) in fields.iter_mut().enumerate() {
        let run_start = at;
        let mut value = 0i64;
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(bytes[at] - b'0'));
            at += 1;
        }
        if at == run_start {
            return Err(TimestampError::FieldCount(index));
        }
        // clamped so the epoch arithmetic below cannot overflow
        *field = value.min(999_999_999);

        if index < SEPARATORS.len() {
            let expected = SEPARATORS[index];
            if at >= bytes.len() || bytes[at] != expected {
                return Err(TimestampError::BadSeparator {
                    expected: expected as char,
                    at,
                });
            }
            at += 1;
        }
    }

    // any digit run after the seconds field is a seventh field
    let mut extra = 0;
    while at < bytes.len() {
        if bytes[at].is_ascii_digit() {
            extra += 1;
            while at < bytes.len() && bytes[at].is_ascii_digit() {
                at += 1;
            }
        } else {
            at += 1;
        }
    }
    if extra > 0 {
        return Err(TimestampError::FieldCount(6 + extra));
    }

    let [month, day, year, mut hour, minute, second] = fields;
    if !(1..=12).contains(&month) {
        return Err(TimestampError::MonthOutOfRange(month));
    }
    if hour == 12 {
        hour = 0;
    }
    if pm {
        hour += 12;
    }

    let month0 = (month - 1) as usize;
    let mut days = (year - 1970) * 365 + CUMULATIVE_DAYS[month0];
    days += (year - 1968) / 4;
    days -= (year - 1900) / 100;
    days += (year - 1600) / 400;
    // the current year's Feb 29 hasn't happened yet in Jan/Feb
    if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) && month0 < 2 {
        days -= 1;
    }
    days += day - 1;

    Ok(((days * 24 + hour) * 60 + minute) * 60 + second)
}
