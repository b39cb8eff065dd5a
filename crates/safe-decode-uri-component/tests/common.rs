#![allow(missing_docs, dead_code)]

pub fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Percent-escapes every UTF-8 byte of `s` with uppercase digits.
pub fn escape_all(s: &str) -> String {
    s.bytes().map(|b| format!("%{b:02X}")).collect()
}
