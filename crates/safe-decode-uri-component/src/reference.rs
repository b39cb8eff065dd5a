//! A slow, allocating decoder with the same observable behaviour as
//! [`decode_in_place`](crate::decode_in_place), used as a test oracle.
//!
//! It validates with `core::str::from_utf8` instead of the automaton and
//! copies into a fresh vector instead of compacting, so the two share no code
//! beyond the `%` constant.

use alloc::vec::Vec;

use crate::buffer::PERCENT;

/// Decodes `input` starting at the first `%` at or after `hint`.
///
/// Returns `None` where `decode_in_place` would return `0`.
#[must_use]
pub fn decode(input: &[u16], hint: usize) -> Option<Vec<u16>> {
    let start = input
        .iter()
        .enumerate()
        .skip(hint)
        .find(|&(_, &unit)| unit == PERCENT)
        .map_or(input.len(), |(i, _)| i);

    let mut out = input[..start].to_vec();
    let mut decoded_any = false;
    let mut i = start;
    while i < input.len() {
        if let Some((ch, consumed)) = escape_at(input, i) {
            let mut pair = [0_u16; 2];
            out.extend_from_slice(ch.encode_utf16(&mut pair));
            decoded_any = true;
            i += consumed;
        } else {
            out.push(input[i]);
            i += 1;
        }
    }
    decoded_any.then_some(out)
}

/// The character encoded by the escape series starting at `at`, and the
/// number of units it spans.
fn escape_at(input: &[u16], at: usize) -> Option<(char, usize)> {
    let lead = escaped_byte(input, at)?;
    let len = match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };

    let mut bytes = [lead, 0, 0, 0];
    for (k, byte) in bytes.iter_mut().enumerate().take(len).skip(1) {
        *byte = escaped_byte(input, at + 3 * k)?;
    }
    let ch = core::str::from_utf8(&bytes[..len]).ok()?.chars().next()?;
    Some((ch, 3 * len))
}

fn escaped_byte(input: &[u16], at: usize) -> Option<u8> {
    if *input.get(at)? != PERCENT {
        return None;
    }
    let digit = |offset: usize| {
        let unit = *input.get(at + offset)?;
        char::from_u32(u32::from(unit))?.to_digit(16)
    };
    let value = (digit(1)? << 4) | digit(2)?;
    u8::try_from(value).ok()
}
