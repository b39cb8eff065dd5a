use alloc::{string::String, vec::Vec};

use insta::assert_snapshot;
use rstest::rstest;

use crate::decode_in_place;

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Decodes from the first `%`, the way a host would pick the hint, and
/// renders what the host would hand back.
fn host_decode(input: &str) -> String {
    let mut buf = units(input);
    let hint = buf.iter().position(|&u| u == 0x25).unwrap_or(buf.len());
    match decode_in_place(&mut buf, hint) {
        0 => String::from(input),
        len => String::from_utf16(&buf[..len]).unwrap(),
    }
}

#[rstest]
#[case::bad_hex("%zz")]
#[case::overlong_nul("%C0%80")]
#[case::truncated_tail("abc%E2%82")]
#[case::encoded_surrogate("%ED%B2%80")]
#[case::above_unicode("%F4%90%80%80")]
#[case::percent_at_end("abc%")]
#[case::one_digit("%4")]
fn malformed_input_is_returned_as_is(#[case] input: &str) {
    let mut buf = units(input);
    assert_eq!(decode_in_place(&mut buf, 0), 0);
    assert_eq!(buf, units(input));
}

#[rstest]
#[case("%4A")]
#[case("%4a")]
fn hex_case_does_not_matter(#[case] input: &str) {
    assert_eq!(host_decode(input), "J");
}

#[test]
fn supplementary_plane_becomes_surrogate_pair() {
    let mut buf = units("%F0%9F%98%80");
    let len = decode_in_place(&mut buf, 0);
    assert_eq!(len, 2);
    assert_eq!(&buf[..len], &[0xD83D, 0xDE00]);
}

#[test]
fn malformed_and_valid_escapes_interleave() {
    assert_snapshot!(host_decode("%E0%80%AF/%E0%A4%85/%zz/%F0%90%8D%88/%ED%A0%80"), @"%E0%80%AF/अ/%zz/𐍈/%ED%A0%80");
}

#[test]
fn shifts_plain_runs_between_escapes() {
    assert_snapshot!(host_decode("one%20two%20three%20%E2%9C%93 done"), @"one two three ✓ done");
}

#[test]
fn decoded_percent_is_not_decoded_again() {
    assert_snapshot!(host_decode("%2520%25%32%30"), @"%20%20");
}

#[test]
fn escape_after_broken_sequence_is_found() {
    // `%C3` expects a continuation but `%41` is ASCII; the scan resumes inside
    // the rejected series and decodes `%41` on its own.
    assert_snapshot!(host_decode("%C3%41%C3%A9"), @"%C3Aé");
}

#[test]
fn non_escape_after_lead_byte_rejects_series() {
    assert_snapshot!(host_decode("%C3x%C3%A9"), @"%C3xé");
}

#[test]
fn wrong_hint_on_hex_text_is_not_decoded() {
    let mut buf = units("41%42");
    let len = decode_in_place(&mut buf, 0);
    assert_eq!(String::from_utf16(&buf[..len]).unwrap(), "41B");

    let mut buf = units("x4142");
    assert_eq!(decode_in_place(&mut buf, 1), 0);
}

#[test]
fn empty_and_short_buffers() {
    for input in ["", "%", "%%", "ab"] {
        let mut buf = units(input);
        assert_eq!(decode_in_place(&mut buf, 0), 0, "{input:?}");
    }
}

#[test]
fn long_runs_compact_correctly() {
    let input: String = core::iter::repeat_n("%C3%A9abc", 1_000).collect();
    let expected: String = core::iter::repeat_n("éabc", 1_000).collect();
    assert_eq!(host_decode(&input), expected);
}
