//! Copying front ends over [`decode_in_place`] for callers that hold
//! immutable text.
//!
//! Each helper locates the first `%`, decodes a single scratch copy of the
//! input as UTF-16, and hands back the original when nothing decoded.

use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::{HintError, buffer::PERCENT, decode_in_place};

/// Decodes percent-escaped UTF-8 in a UTF-16 slice.
///
/// Returns `Cow::Borrowed(input)` when there is no `%` or no escape decodes.
///
/// ```rust
/// use std::borrow::Cow;
/// use safe_decode_uri_component::decode_utf16;
///
/// let input: Vec<u16> = "%F0%9F%98%80".encode_utf16().collect();
/// assert_eq!(decode_utf16(&input), Cow::<[u16]>::Owned(vec![0xD83D, 0xDE00]));
///
/// let plain: Vec<u16> = "no escapes".encode_utf16().collect();
/// assert!(matches!(decode_utf16(&plain), Cow::Borrowed(_)));
/// ```
#[must_use]
pub fn decode_utf16(input: &[u16]) -> Cow<'_, [u16]> {
    let Some(first_percent) = input.iter().position(|&unit| unit == PERCENT) else {
        return Cow::Borrowed(input);
    };

    let mut scratch = input.to_vec();
    match decode_in_place(&mut scratch, first_percent) {
        0 => Cow::Borrowed(input),
        len => {
            log::debug!("decoded {} code units into {len}", input.len());
            scratch.truncate(len);
            Cow::Owned(scratch)
        }
    }
}

/// Decodes percent-escaped UTF-8 in a string.
///
/// Malformed escapes stay as literal text and never cause an error. Returns
/// `Cow::Borrowed(input)` when nothing decodes.
///
/// ```rust
/// use safe_decode_uri_component::decode;
///
/// assert_eq!(decode("caf%C3%A9%20au%20lait"), "café au lait");
/// assert_eq!(decode("100%"), "100%");
/// assert_eq!(decode("%C0%80%E2%82%AC"), "%C0%80€");
/// ```
#[must_use]
pub fn decode(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }

    let mut scratch: Vec<u16> = input.encode_utf16().collect();
    let first_percent = scratch
        .iter()
        .position(|&unit| unit == PERCENT)
        .unwrap_or(scratch.len());
    match decode_in_place(&mut scratch, first_percent) {
        0 => Cow::Borrowed(input),
        len => {
            log::debug!("decoded {} code units into {len}", scratch.len());
            // Input has no lone surrogates and the decoder never emits one,
            // so nothing is replaced here.
            Cow::Owned(String::from_utf16_lossy(&scratch[..len]))
        }
    }
}

/// [`decode_in_place`] with the first-percent index as a host runtime passes
/// it: a signed 64-bit integer.
///
/// # Errors
///
/// Returns [`HintError`] if `first_percent` is negative or does not fit in
/// `usize`. The buffer is left untouched in that case.
///
/// ```rust
/// use safe_decode_uri_component::{HintError, decode_in_place_at};
///
/// let mut buf: Vec<u16> = "x%3Dy".encode_utf16().collect();
/// assert_eq!(decode_in_place_at(&mut buf, 1), Ok(3));
/// assert_eq!(decode_in_place_at(&mut buf, -1), Err(HintError::Negative(-1)));
/// ```
pub fn decode_in_place_at(buffer: &mut [u16], first_percent: i64) -> Result<usize, HintError> {
    if first_percent < 0 {
        return Err(HintError::Negative(first_percent));
    }
    let hint = usize::try_from(first_percent).map_err(|_| HintError::OutOfRange(first_percent))?;
    Ok(decode_in_place(buffer, hint))
}
