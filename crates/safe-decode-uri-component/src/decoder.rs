//! In-place decoding of percent-escaped UTF-8 in a UTF-16 buffer.
//!
//! The buffer is walked with four cursors:
//!
//! - `scan`: the `%` of the triplet being consumed.
//! - `octet_start`: the `%` that opened the current escape series.
//! - `chars_start`: the first unit not yet copied to its final place.
//! - `insertion`: where the next copied or decoded unit is written.
//!
//! `insertion <= octet_start <= scan` holds throughout. Every escape series
//! that decodes shrinks from at least three units to at most two, so the
//! write cursor never catches up with unread input and compaction can happen
//! in the same buffer.

use crate::{
    buffer::{PERCENT, compact, find_percent},
    hex,
    utf8::{State, Utf8Decoder},
};

/// Decodes every valid percent-escaped UTF-8 sequence in `buffer`, in place.
///
/// Decoding starts at the first `%` at or after `hint`; units before that are
/// never modified. `hint` may be anything: past the end, on a plain
/// character, or on an escape that does not decode. A hint on a unit other
/// than `%` is never read as the start of an escape, so `"a41"` with hint `0`
/// stays as it is.
///
/// Malformed escapes (non-hex digits, invalid or overlong UTF-8, encoded
/// surrogates, values above U+10FFFF, sequences cut short) are left in the
/// buffer as literal text. Code points above U+FFFF are written as surrogate
/// pairs.
///
/// Returns the decoded length; the result is `buffer[..len]` and the rest of
/// the buffer is unspecified. Returns `0` if no escape decoded, in which case
/// the buffer is unchanged.
///
/// # Examples
///
/// ```rust
/// use safe_decode_uri_component::decode_in_place;
///
/// let mut buf: Vec<u16> = "a%20b%zz".encode_utf16().collect();
/// let len = decode_in_place(&mut buf, 1);
/// assert_eq!(String::from_utf16_lossy(&buf[..len]), "a b%zz");
///
/// let mut untouched: Vec<u16> = "100%".encode_utf16().collect();
/// assert_eq!(decode_in_place(&mut untouched, 3), 0);
/// ```
#[must_use]
pub fn decode_in_place(buffer: &mut [u16], hint: usize) -> usize {
    let end = buffer.len();

    let mut scan = find_percent(buffer, hint, end);
    let mut octet_start = scan;
    let mut chars_start = 0;
    let mut insertion = 0;
    let mut decoder = Utf8Decoder::new();
    let mut decoded_any = false;

    // A triplet needs `%` plus two digits.
    while scan + 2 < end {
        debug_assert_eq!(buffer[scan], PERCENT);
        debug_assert!(insertion <= octet_start && octet_start <= scan);

        let byte = hex::byte(buffer[scan + 1], buffer[scan + 2]);
        let accepted = match decoder.step(byte) {
            State::Accept => decoder.scalar(),
            State::Reject => None,
            _ => {
                scan += 3;
                if buffer.get(scan) == Some(&PERCENT) {
                    continue;
                }
                None
            }
        };

        match accepted {
            Some(ch) => {
                insertion = compact(buffer, insertion, chars_start, octet_start);
                insertion += ch.encode_utf16(&mut buffer[insertion..]).len();
                decoded_any = true;

                chars_start = scan + 3;
                scan = find_percent(buffer, chars_start, end);
                octet_start = scan;
            }
            None => {
                log::trace!("rejected escape series at {octet_start}..{}", scan.min(end));
                scan = find_percent(buffer, octet_start + 1, end);
                octet_start = scan;
            }
        }
        decoder.reset();
    }

    if !decoded_any {
        return 0;
    }
    compact(buffer, insertion, chars_start, end)
}
