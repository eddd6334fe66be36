//! `Range` header interpretation for single byte ranges.
//!
//! [`RangeHeader::parse`] turns a raw header value and a known file size into
//! one of three outcomes: no range requested, a validated [`ByteRange`], or a
//! [`RangeError`] that tells the HTTP layer whether to answer 400 or 416.
//! Pure string and integer work; no I/O.

// ---------------------------------------------------------------------------
// ByteRange
// ---------------------------------------------------------------------------

/// An inclusive byte interval validated against a file size.
///
/// Invariant: `0 <= start <= end < size` for the size it was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte offset, inclusive.
    pub start: u64,
    /// Last byte offset, inclusive.
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the range.
    pub fn length(&self) -> u64 {
        self.end - self.start + 1
    }
}

// ---------------------------------------------------------------------------
// RangeHeader
// ---------------------------------------------------------------------------

/// Why a present `Range` header could not be honored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The value does not follow the `bytes=start-[end]` form this server
    /// supports. Surfaced as 400.
    Malformed(String),
    /// The syntax is fine but the offsets fall outside `[0, size)`.
    /// Surfaced as 416.
    Unsatisfiable,
}

/// Outcome of interpreting an optional `Range` header against a file size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeHeader {
    /// No header was present; the whole file is wanted.
    Absent,
    /// A single satisfiable range.
    Valid(ByteRange),
    /// A header was present but cannot be honored.
    Invalid(RangeError),
}

impl RangeHeader {
    /// Interpret an optional raw `Range` header value against `size`.
    ///
    /// Accepted syntax is `bytes=<start>-[<end>]` with both offsets
    /// inclusive; an omitted end means `size - 1`. Suffix ranges
    /// (`bytes=-500`), multiple comma-separated ranges, non-`bytes` units,
    /// and unparsable offsets are all [`RangeError::Malformed`]. Offsets at
    /// or past `size`, and `start > end`, are [`RangeError::Unsatisfiable`].
    pub fn parse(header: Option<&str>, size: u64) -> Self {
        let Some(value) = header else {
            return RangeHeader::Absent;
        };

        let Some(rest) = value.strip_prefix("bytes=") else {
            return Self::malformed(format!("expected bytes unit in {value:?}"));
        };

        if rest.contains(',') {
            return Self::malformed("multiple ranges are not supported");
        }

        let Some((start_str, end_str)) = rest.split_once('-') else {
            return Self::malformed(format!("missing '-' in {value:?}"));
        };
        let start_str = start_str.trim();
        let end_str = end_str.trim();

        if start_str.is_empty() {
            return Self::malformed("suffix ranges are not supported");
        }

        let Ok(start) = start_str.parse::<u64>() else {
            return Self::malformed(format!("invalid start offset {start_str:?}"));
        };

        let end = if end_str.is_empty() {
            None
        } else {
            match end_str.parse::<u64>() {
                Ok(end) => Some(end),
                Err(_) => {
                    return Self::malformed(format!("invalid end offset {end_str:?}"));
                }
            }
        };

        if start >= size {
            return RangeHeader::Invalid(RangeError::Unsatisfiable);
        }
        if let Some(end) = end {
            if end >= size || start > end {
                return RangeHeader::Invalid(RangeError::Unsatisfiable);
            }
        }

        RangeHeader::Valid(ByteRange {
            start,
            end: end.unwrap_or(size - 1),
        })
    }

    fn malformed(reason: impl Into<String>) -> Self {
        RangeHeader::Invalid(RangeError::Malformed(reason.into()))
    }
}
