use std::{fmt, iter::FusedIterator, marker::PhantomData, mem, ptr::{self, NonNull}, slice};

use super::{DynArray, RawBuf};


/// An iterator that moves out of a [`DynArray`].
///
/// Created by the `into_iter` method on [`DynArray`] (provided by the
/// [`IntoIterator`] trait). Elements that are never yielded are dropped along
/// with the iterator.
pub struct IntoIter<T> {
    _buf: RawBuf<T>,
    start: *const T,
    end: *const T,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {

    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(super) fn new(array: DynArray<T>) -> Self {
        let (buf, len) = array.into_raw_parts();
        let start: *const T = buf.ptr().as_ptr();
        Self {
            start,
            end: match (Self::IS_ZST, len) {
                (true, count) => start.wrapping_byte_add(count),
                (_, 0) => start,
                (_, count) => unsafe { start.add(count) }
            },
            _buf: buf,
            _owns: PhantomData,
        }
    }

    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.start, self.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match (self.start == self.end, Self::IS_ZST) {
            (true, _) => None,
            (_, true) => unsafe {
                self.end = self.end.wrapping_byte_sub(1);
                Some(NonNull::<T>::dangling().read())
            },
            (_, false) => unsafe {
                let item = self.start.read();
                self.start = self.start.add(1);
                Some(item)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end as usize - self.start as usize)
            / mem::size_of::<T>().max(1);
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        match (self.start == self.end, Self::IS_ZST) {
            (true, _) => None,
            (_, true) => unsafe {
                self.end = self.end.wrapping_byte_sub(1);
                Some(NonNull::<T>::dangling().read())
            },
            (_, false) => unsafe {
                self.end = self.end.sub(1);
                Some(self.end.read())
            }
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // The remaining elements are dropped in place, `_buf` frees the block.
        let remaining = ptr::slice_from_raw_parts_mut(self.start as *mut T, self.len());
        unsafe { ptr::drop_in_place(remaining) }
    }
}
