//! Cursor helpers over a UTF-16 buffer that is edited in place.

/// The `%` code unit.
pub(crate) const PERCENT: u16 = 0x25;

/// Index of the first `%` in `buffer[start..end]`.
///
/// Returns `end` when there is none, including when `start >= end`, so callers
/// compare against `end` instead of handling a separate "not found" case.
#[inline]
pub(crate) fn find_percent(buffer: &[u16], start: usize, end: usize) -> usize {
    buffer
        .get(start..end)
        .and_then(|window| window.iter().position(|&unit| unit == PERCENT))
        .map_or(end, |offset| start + offset)
}

/// Moves `buffer[src..src_end]` down to `dest` and returns the index just past
/// the moved run.
///
/// Requires `dest <= src <= src_end <= buffer.len()`. The ranges may overlap.
/// Nothing is copied when `dest == src`.
#[inline]
pub(crate) fn compact(buffer: &mut [u16], dest: usize, src: usize, src_end: usize) -> usize {
    debug_assert!(dest <= src && src <= src_end && src_end <= buffer.len());
    if dest < src {
        buffer.copy_within(src..src_end, dest);
    }
    dest + (src_end - src)
}
