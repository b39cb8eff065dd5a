use thiserror::Error;

/// A host-supplied first-percent index that cannot be used as a hint.
///
/// Only the conversion from the host's signed integer can fail. Any
/// non-negative index that fits in `usize` is accepted, even one past the end
/// of the buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintError {
    /// The index was negative, e.g. a `-1` "not found" result.
    #[error("index of the first percent must be non-negative, got {0}")]
    Negative(i64),
    /// The index does not fit in `usize` on this platform. Only reachable on
    /// targets where `usize` is narrower than 64 bits.
    #[error("index of the first percent {0} does not fit in usize")]
    OutOfRange(i64),
}
