use std::ops;


// Same contract as the unstable `slice::range` in `core::slice::index`.
/// Normalizes any `RangeBounds<usize>` against a length of `bounds.end`.
///
/// Panics when the range is reversed or reaches past the length.
#[inline]
pub(crate) fn slice_range<R>(range: R, bounds: ops::RangeTo<usize>) -> ops::Range<usize>
where
    R: ops::RangeBounds<usize>,
{
    let len = bounds.end;

    let start = match range.start_bound() {
        ops::Bound::Included(&start) => start,
        ops::Bound::Excluded(start) => start.checked_add(1)
            .expect("attempted to index slice from after maximum usize"),
        ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        ops::Bound::Included(end) => end.checked_add(1)
            .expect("attempted to index slice up to maximum usize"),
        ops::Bound::Excluded(&end) => end,
        ops::Bound::Unbounded => len,
    };

    if start > end {
        panic!("slice index starts at {start} but ends at {end}")
    }

    if end > len {
        panic!("range end index {end} out of range for slice of length {len}")
    }

    ops::Range { start, end }
}
