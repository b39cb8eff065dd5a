//! Hexadecimal digit decoding for percent-escape triplets.
//!
//! Invalid digits are not reported through a flag. Instead they decode to
//! [`INVALID`], a sentinel that survives any bitwise OR with another nibble and
//! lands in a UTF-8 byte class that every automaton state rejects. The caller
//! can therefore combine two nibbles unconditionally and let the automaton do
//! the validation.

/// Value returned for a code unit that is not an ASCII hex digit.
///
/// `INVALID | x == INVALID` for every `x: u8`, and the byte `0xFF` can never
/// appear in well-formed UTF-8, so an escape containing a non-hex digit is
/// always rejected.
pub const INVALID: u8 = 0xFF;

/// Shift that places a nibble in the high half of a byte.
pub const HIGH: u32 = 4;

/// Shift that leaves a nibble in the low half of a byte.
pub const LOW: u32 = 0;

/// Decodes one UTF-16 code unit as a hex digit and shifts it left by `shift`.
///
/// Upper and lower case letters are accepted. Any other unit, including
/// non-ASCII ones, yields [`INVALID`].
#[must_use]
#[inline]
pub fn nibble(unit: u16, shift: u32) -> u8 {
    let value = match unit {
        0x30..=0x39 => unit - 0x30,
        0x41..=0x46 => unit - 0x41 + 10,
        0x61..=0x66 => unit - 0x61 + 10,
        _ => return INVALID,
    };
    // `value <= 15`, so both the narrowing and the shift stay within a byte.
    #[allow(clippy::cast_possible_truncation)]
    let value = value as u8;
    value << shift
}

/// Decodes the two hex digits following a `%` into a single byte.
///
/// Returns [`INVALID`] if either digit is not hexadecimal.
#[must_use]
#[inline]
pub fn byte(high: u16, low: u16) -> u8 {
    nibble(high, HIGH) | nibble(low, LOW)
}
