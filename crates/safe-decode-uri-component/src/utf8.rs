//! Table-driven UTF-8 validation.
//!
//! This is Bjoern Hoehrmann's DFA decoder
//! (<https://bjoern.hoehrmann.de/utf-8/decoder/dfa/>), Copyright (c) 2008-2009
//! Bjoern Hoehrmann, MIT licensed. The class, transition and mask tables are
//! the canonical ones; only the state encoding differs. Offsets into a flat
//! table are replaced by the [`State`] enum and a `[state][class]` matrix.
//!
//! The exact rejection boundaries are the point of the tables:
//!
//! - `C0`, `C1`, `E0 80..9F` and `F0 80..8F` start overlong forms.
//! - `ED A0..BF` encodes a UTF-16 surrogate.
//! - `F4 90..BF` and `F5..FF` encode values above U+10FFFF.
//! - Continuation bytes are only accepted where a leading byte announced them.

/// Position of the automaton inside a UTF-8 sequence.
///
/// `Accept` and `Reject` end a sequence. The remaining states name how many
/// continuation bytes are still expected and, where the leading byte narrows
/// it, the range the next one must fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// The bytes seen so far can never form a valid sequence.
    Reject = 0,
    /// A complete code point has been read (also the initial state).
    Accept = 1,
    /// One continuation byte `80..BF` left.
    Need1 = 2,
    /// Two left after `E0`; the next must be `A0..BF`.
    Need2AfterE0 = 3,
    /// Two continuation bytes `80..BF` left.
    Need2 = 4,
    /// Two left after `ED`; the next must be `80..9F`.
    Need2AfterEd = 5,
    /// Three continuation bytes `80..BF` left.
    Need3 = 6,
    /// Three left after `F0`; the next must be `90..BF`.
    Need3AfterF0 = 7,
    /// Three left after `F4`; the next must be `80..8F`.
    Need3AfterF4 = 8,
}

/// Maps each byte to one of twelve character classes.
#[rustfmt::skip]
const CLASS: [u8; 256] = [
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,  0, 0, 0, 0,   0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1,  1, 1, 1, 1,   1, 1, 1, 1, 1, 1, 1, 1,
    2, 2, 2, 2,  2, 2, 2, 2,   2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3,  3, 3, 3, 3,   3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3,  3, 3, 3, 3,   3, 3, 3, 3, 3, 3, 3, 3,
    4, 4, 5, 5,  5, 5, 5, 5,   5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5,  5, 5, 5, 5,   5, 5, 5, 5, 5, 5, 5, 5,
    6, 7, 7, 7,  7, 7, 7, 7,   7, 7, 7, 7, 7, 8, 7, 7,
   10, 9, 9, 9, 11, 4, 4, 4,   4, 4, 4, 4, 4, 4, 4, 4,
];

/// Bits of the byte that carry payload, per class.
const MASK: [u8; 12] = [
    0x7F, 0x3F, 0x3F, 0x3F, 0x00, 0x1F, 0x0F, 0x0F, 0x0F, 0x07, 0x07, 0x07,
];

use State::{
    Accept as A, Need1 as N1, Need2 as N2, Need2AfterE0 as E0, Need2AfterEd as ED, Need3 as N3,
    Need3AfterF0 as F0, Need3AfterF4 as F4, Reject as R,
};

/// Next state, indexed by `[state as usize][class]`.
#[rustfmt::skip]
const NEXT: [[State; 12]; 9] = [
    // Reject
    [R,  R,  R,  R,  R,  R,  R,  R,  R,  R,  R,  R],
    // Accept
    [A,  R,  R,  R,  R,  N1, E0, N2, ED, N3, F0, F4],
    // Need1
    [R,  A,  A,  A,  R,  R,  R,  R,  R,  R,  R,  R],
    // Need2AfterE0
    [R,  R,  R,  N1, R,  R,  R,  R,  R,  R,  R,  R],
    // Need2
    [R,  N1, N1, N1, R,  R,  R,  R,  R,  R,  R,  R],
    // Need2AfterEd
    [R,  N1, N1, R,  R,  R,  R,  R,  R,  R,  R,  R],
    // Need3
    [R,  N2, N2, N2, R,  R,  R,  R,  R,  R,  R,  R],
    // Need3AfterF0
    [R,  R,  N2, N2, R,  R,  R,  R,  R,  R,  R,  R],
    // Need3AfterF4
    [R,  N2, R,  R,  R,  R,  R,  R,  R,  R,  R,  R],
];

/// Incremental UTF-8 decoder holding the automaton state and the code point
/// accumulated so far.
#[derive(Clone, Copy, Debug)]
pub struct Utf8Decoder {
    state: State,
    codepoint: u32,
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8Decoder {
    /// A decoder at the start of a sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Accept,
            codepoint: 0,
        }
    }

    /// Returns to the initial state, discarding any partial sequence.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Consumes one byte and returns the new state.
    #[inline]
    pub fn step(&mut self, byte: u8) -> State {
        let class = usize::from(CLASS[usize::from(byte)]);
        self.state = NEXT[self.state as usize][class];
        self.codepoint = (self.codepoint << 6) | u32::from(byte & MASK[class]);
        self.state
    }

    /// Current automaton state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// The accumulated code point. Meaningful once [`State::Accept`] has been
    /// reached after at least one byte.
    #[must_use]
    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// The accumulated code point as a `char`, if the last step accepted.
    #[must_use]
    pub fn scalar(&self) -> Option<char> {
        match self.state {
            State::Accept => char::from_u32(self.codepoint),
            _ => None,
        }
    }
}
