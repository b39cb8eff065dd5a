#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use safe_decode_uri_component::{
    decode_in_place, reference,
    utf8::{State, Utf8Decoder},
};

const PERCENT: u16 = 0x25;

/// Building blocks biased towards escapes; raw random units almost never
/// form one.
#[derive(Arbitrary, Debug)]
enum Piece {
    /// Any code unit, including lone surrogates.
    Unit(u16),
    /// `%XX` with upper- or lowercase digits.
    Escape { byte: u8, lowercase: bool },
    /// `%` followed by up to two arbitrary units.
    Percent(Vec<u16>),
    /// Every UTF-8 byte of a character, escaped.
    Char(char),
}

#[derive(Arbitrary, Debug)]
struct Input {
    hint: u16,
    pieces: Vec<Piece>,
    raw: [u8; 4],
    raw_len: u8,
}

const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";
const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";

fn push_escape(out: &mut Vec<u16>, byte: u8, lowercase: bool) {
    let digits = if lowercase { DIGITS_LOWER } else { DIGITS_UPPER };
    out.push(PERCENT);
    out.push(u16::from(digits[usize::from(byte >> 4)]));
    out.push(u16::from(digits[usize::from(byte & 0xF)]));
}

fn build(pieces: &[Piece]) -> Vec<u16> {
    let mut out = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Unit(unit) => out.push(*unit),
            Piece::Escape { byte, lowercase } => push_escape(&mut out, *byte, *lowercase),
            Piece::Percent(tail) => {
                out.push(PERCENT);
                out.extend(tail.iter().take(2));
            }
            Piece::Char(c) => {
                let mut buf = [0_u8; 4];
                for &b in c.encode_utf8(&mut buf).as_bytes() {
                    push_escape(&mut out, b, false);
                }
            }
        }
    }
    out
}

fn check_decoder(input: &Input) {
    let original = build(&input.pieces);
    let hint = usize::from(input.hint) % (original.len() + 2);

    let mut buf = original.clone();
    let len = decode_in_place(&mut buf, hint);
    assert!(len <= original.len());

    match reference::decode(&original, hint) {
        Some(expected) => assert_eq!(&buf[..len], &expected[..]),
        None => {
            assert_eq!(len, 0);
            assert_eq!(buf, original);
        }
    }
}

fn check_automaton(raw: &[u8]) {
    let mut decoder = Utf8Decoder::new();
    let mut state = State::Accept;
    let mut consumed = 0;
    for &b in raw {
        state = decoder.step(b);
        consumed += 1;
        if matches!(state, State::Accept | State::Reject) {
            break;
        }
    }

    match core::str::from_utf8(&raw[..consumed]) {
        Ok(s) if !s.is_empty() => {
            assert_eq!(state, State::Accept);
            assert_eq!(decoder.scalar(), s.chars().next());
        }
        Ok(_) => {}
        Err(e) if e.error_len().is_some() => assert_eq!(state, State::Reject),
        Err(_) => assert!(!matches!(state, State::Accept | State::Reject)),
    }
}

fuzz_target!(|input: Input| {
    check_decoder(&input);
    let raw_len = usize::from(input.raw_len % 5);
    check_automaton(&input.raw[..raw_len]);
});
