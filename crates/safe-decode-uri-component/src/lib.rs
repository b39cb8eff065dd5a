//! A non-throwing decoder for percent-escaped UTF-8 embedded in UTF-16 text.
//!
//! [`decode_in_place`] rewrites a `[u16]` buffer in place: each `%XX` series
//! that forms one well-formed UTF-8 character collapses into that character,
//! and everything else, including malformed escapes, stays as literal text.
//! Overlong forms, encoded surrogates, values above U+10FFFF, bad hex digits
//! and sequences cut off by the end of input are never decoded and never cause
//! an error.
//!
//! [`decode`] and [`decode_utf16`] wrap it for callers holding immutable
//! text, returning the input unchanged (and unallocated) when nothing
//! decodes.
//!
//! ```rust
//! use safe_decode_uri_component::decode;
//!
//! assert_eq!(decode("%F0%9F%98%80%20%zz"), "😀 %zz");
//! ```
//!
//! `+` is not treated as a space, and no URI syntax is checked beyond the
//! escapes themselves.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod decoder;
mod error;
pub mod hex;
mod text;
pub mod utf8;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod reference;

#[cfg(test)]
mod tests;

pub use decoder::decode_in_place;
pub use error::HintError;
pub use text::{decode, decode_in_place_at, decode_utf16};
