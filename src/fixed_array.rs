//! An inline array of exactly `N` elements.

use std::{
    array,
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::{self, SliceIndex},
};

use crate::errors::OutOfRange;

/// A fixed-size array stored inline, written `FixedArray<T, N>`.
///
/// Shares the access, iteration and comparison surface of
/// [`DynArray`](crate::DynArray) but never allocates, grows or shrinks.
///
/// # Examples
///
/// ```
/// use stlkit::FixedArray;
///
/// let mut array = FixedArray::from([3, 1, 2]);
/// assert_eq!(array.len(), 3);
/// assert_eq!(array.at(1), Ok(&1));
/// assert!(array.at(3).is_err());
///
/// array.sort();
/// assert_eq!(array, [1, 2, 3]);
///
/// array.fill(&0);
/// assert_eq!(array, [0, 0, 0]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize> {
    elems: [T; N],
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.elems, f)
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self { Self { elems: array::from_fn(|_| T::default()) } }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { &self.elems }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.elems }
}

impl<T, const N: usize, I: SliceIndex<[T]>> Index<I> for FixedArray<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&self.elems[..], index)
    }
}

impl<T, const N: usize, I: SliceIndex<[T]>> IndexMut<I> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut self.elems[..], index)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] { &self.elems }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.elems }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] { &self.elems }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] { &mut self.elems }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for FixedArray<T, N> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool { self.elems[..] == other[..] }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U]> for FixedArray<T, N> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool { self.elems[..] == other[..] }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self { Self { elems } }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    #[inline]
    fn from(array: FixedArray<T, N>) -> Self { array.elems }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.elems.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.elems.iter_mut() }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.elems.into_iter() }
}

impl<T, const N: usize> FixedArray<T, N> {

    /// Wraps an array by value.
    #[inline]
    pub const fn new(elems: [T; N]) -> Self { Self { elems } }

    /// Unwraps the inner array.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.elems }

    /// Always `N`.
    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Always `N`: a fixed array can never hold more.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    /// Returns a reference to the element at `pos`, or [`OutOfRange`] when
    /// `pos >= N`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, OutOfRange> {
        self.elems.get(pos).ok_or(OutOfRange::new(pos, N))
    }

    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, OutOfRange> {
        self.elems.get_mut(pos).ok_or(OutOfRange::new(pos, N))
    }

    /// Returns a reference to element `I`, checked at compile time.
    ///
    /// ```
    /// use stlkit::FixedArray;
    ///
    /// let array = FixedArray::from([1, 2, 3]);
    /// assert_eq!(*array.get::<2>(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use stlkit::FixedArray;
    ///
    /// let array = FixedArray::from([1, 2, 3]);
    /// let _ = array.get::<3>();
    /// ```
    #[inline]
    pub const fn get<const I: usize>(&self) -> &T {
        const { assert!(I < N, "index out of bounds") };
        &self.elems[I]
    }

    #[inline]
    pub const fn get_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "index out of bounds") };
        &mut self.elems[I]
    }

    /// Returns the first element, or `None` when `N == 0`.
    #[inline]
    pub const fn front(&self) -> Option<&T> { self.elems.first() }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> { self.elems.first_mut() }

    /// Returns the last element, or `None` when `N == 0`.
    #[inline]
    pub const fn back(&self) -> Option<&T> { self.elems.last() }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> { self.elems.last_mut() }

    #[inline]
    pub const fn as_ptr(&self) -> *const T { self.elems.as_ptr() }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T { self.elems.as_mut_ptr() }

    #[inline]
    pub const fn as_slice(&self) -> &[T] { &self.elems }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] { &mut self.elems }

    /// Assigns a clone of `value` to every slot.
    pub fn fill(&mut self, value: &T)
    where
        T: Clone,
    {
        self.elems.iter_mut().for_each(|slot| slot.clone_from(value));
    }

    /// Exchanges contents element by element.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`N`) time: there is no indirection to swap.
    ///
    /// ```
    /// use stlkit::FixedArray;
    ///
    /// let mut a = FixedArray::from([1, 2, 3]);
    /// let mut b = FixedArray::from([4, 5, 6]);
    /// a.swap(&mut b);
    /// assert_eq!((a, b), (FixedArray::from([4, 5, 6]), FixedArray::from([1, 2, 3])));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.elems.swap_with_slice(&mut other.elems)
    }
}

/// Copies each element of `elems` into a new [`FixedArray`], in order.
///
/// Pass the array by value with [`FixedArray::from`] to move instead.
pub fn to_array<T: Clone, const N: usize>(elems: &[T; N]) -> FixedArray<T, N> {
    FixedArray { elems: elems.clone() }
}

/// Exchanges the contents of `a` and `b`. Same as [`FixedArray::swap`].
#[inline]
pub fn swap<T, const N: usize>(a: &mut FixedArray<T, N>, b: &mut FixedArray<T, N>) { a.swap(b) }
