//! The heap-backed growable array and its free-function companions.

mod raw_buf;
mod into_iter;

use std::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{self, Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

use crate::{errors::{AllocErr, OutOfRange, infallible}, range::slice_range};
use raw_buf::RawBuf;
pub use into_iter::IntoIter;

/// Factor applied to the capacity when an insertion overflows it.
pub const GROWTH_FACTOR: usize = 2;

/// Smallest capacity allocated by implicit growth from an empty array.
pub const MIN_NON_ZERO_CAP: usize = 1;

/// A contiguous growable array type, written `DynArray<T>`.
///
/// # Examples
///
/// ```
/// use stlkit::DynArray;
///
/// let mut array = DynArray::new();
/// array.push_back(1);
/// array.push_back(2);
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array[0], 1);
///
/// assert_eq!(array.pop_back(), Some(2));
/// assert_eq!(array.len(), 1);
///
/// array[0] = 7;
/// assert_eq!(array[0], 7);
///
/// array.extend([1, 2, 3]);
/// for x in &array {
///     println!("{x}");
/// }
/// assert_eq!(array, [7, 1, 2, 3]);
/// ```
///
/// # Indexing
///
/// Indexing with `[]` is asserted and panics when out of bounds. The checked
/// form is [`at`](DynArray::at), which reports an [`OutOfRange`] error, and
/// the unchecked form is the `unsafe` [`get_unchecked`](slice::get_unchecked)
/// inherited from slices.
///
/// ```should_panic
/// use stlkit::DynArray;
///
/// let array = DynArray::from([1, 2, 3]);
/// println!("{}", array[3]); // Panics!
/// ```
///
/// # Capacity and reallocation
///
/// The capacity is the number of slots allocated; the length is the number
/// of live elements. When an insertion needs more room than the capacity the
/// array reallocates to `max(needed, 2 * capacity)` slots (at least one), so
/// [`push_back`](DynArray::push_back) is amortized *O*(1). The capacity never
/// shrinks on its own; see [`shrink_to_fit`](DynArray::shrink_to_fit).
///
/// Raw pointers obtained through [`as_ptr`](DynArray::as_ptr) are invalidated
/// by any reallocation, and positions at or after an insertion or erasure
/// point shift.
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for DynArray<T> {
    /// The copy is allocated tight: its capacity equals `self.len()`.
    fn clone(&self) -> Self { Self::from_slice(self) }

    fn clone_from(&mut self, source: &Self) { self.assign_slice(source) }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl<T> DerefMut for DynArray<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { self.as_mut_slice() }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] { self }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] { self }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] { self }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] { self }
}

impl<T: PartialEq<U>, U> PartialEq<DynArray<U>> for DynArray<T> {
    #[inline]
    fn eq(&self, other: &DynArray<U>) -> bool { self[..] == other[..] }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynArray<T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool { self[..] == other[..] }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<&[U; N]> for DynArray<T> {
    #[inline]
    fn eq(&self, other: &&[U; N]) -> bool { self[..] == other[..] }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynArray<T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool { self[..] == other[..] }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynArray<T> {
    #[inline]
    fn eq(&self, other: &&[U]) -> bool { self[..] == other[..] }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for DynArray<T> {
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool { self[..] == other[..] }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialOrd> PartialOrd for DynArray<T> {
    /// Lexicographic: the first differing element decides, and an exhausted
    /// prefix orders before the longer array.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Ord> Ord for DynArray<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering { Ord::cmp(&**self, &**other) }
}

impl<T: Hash> Hash for DynArray<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) { Hash::hash(&**self, state) }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { IntoIter::new(self) }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        array.append_range(iter);
        array
    }
}

impl<T> Extend<T> for DynArray<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) { self.append_range(iter) }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_range(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {

    /// Builds an array holding exactly the elements of `arr`, in order, with a
    /// capacity of `N`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let array = DynArray::from([10, 20, 30, 40]);
    /// assert_eq!(array.len(), 4);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    fn from(arr: [T; N]) -> Self {
        let arr = ManuallyDrop::new(arr);
        let mut array = Self::with_capacity(N);

        unsafe { ptr::copy_nonoverlapping(arr.as_ptr(), array.ptr(), N) }
        array.len = N;
        array
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut array = Self::with_capacity(len);

        unsafe {
            ptr::copy_nonoverlapping(vec.as_ptr(), array.ptr(), len);
            vec.set_len(0);
        }
        array.len = len;
        array
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    #[inline]
    fn from(items: &[T]) -> Self { Self::from_slice(items) }
}

impl<T> From<DynArray<T>> for Vec<T> {
    fn from(array: DynArray<T>) -> Self { array.into_iter().collect() }
}

impl<T> DynArray<T> {

    /// Constructs a new, empty `DynArray<T>`.
    ///
    /// Nothing is allocated until elements are pushed.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let array = DynArray::<i32>::new();
    /// assert_eq!(array.capacity(), 0);
    /// assert!(array.as_ptr().is_null());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { buf: RawBuf::new(), len: 0 }
    }

    /// Constructs a new, empty `DynArray<T>` with room for exactly `capacity`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: RawBuf::with_capacity(capacity), len: 0 }
    }

    /// Constructs an array of `len` default values.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let array = DynArray::<i32>::with_len(5);
    /// assert_eq!(array, [0; 5]);
    /// assert_eq!(array.capacity(), 5);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len);
        array.resize_with(len, T::default);
        array
    }

    /// Constructs an array of `len` clones of `value`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let array = DynArray::from_elem(3, 42);
    /// assert_eq!(array, [42, 42, 42]);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len);
        array.extend_with(len, value);
        array
    }

    /// Constructs an array by cloning every element of `items`, preserving
    /// order. The capacity equals `items.len()`.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(items.len());
        array.extend_from_slice(items);
        array
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` if the array holds no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of elements the array can hold without
    /// reallocating.
    #[inline(always)]
    pub const fn capacity(&self) -> usize { self.buf.cap() }

    /// Returns the largest length an array of `T` could theoretically reach.
    pub const fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Ensures the capacity is at least `capacity`.
    ///
    /// Does nothing when the capacity is already large enough; otherwise
    /// reallocates to exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 2, 3]);
    /// array.reserve(100);
    /// assert_eq!(array.capacity(), 100);
    ///
    /// array.reserve(10);
    /// assert_eq!(array.capacity(), 100);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        infallible(self.try_reserve(capacity))
    }

    /// Fallible form of [`reserve`](DynArray::reserve).
    ///
    /// # Examples
    /// ```
    /// use stlkit::{AllocErr, DynArray};
    ///
    /// let mut array = DynArray::<u64>::new();
    /// assert_eq!(array.try_reserve(usize::MAX), Err(AllocErr::Overflow));
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), AllocErr> {
        if capacity <= self.capacity() { return Ok(()) }
        self.buf.try_resize(capacity, self.len)
    }

    /// Reallocates so that the capacity equals the length.
    ///
    /// An empty array releases its buffer entirely.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::with_capacity(10);
    /// array.extend([1, 2, 3]);
    /// array.shrink_to_fit();
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            log::debug!("shrinking capacity {} to length {}", self.capacity(), self.len);
            infallible(self.buf.try_resize(self.len, self.len));
        }
    }

    /// Returns a reference to the element at `pos`, or [`OutOfRange`] when
    /// `pos >= len()`. The array is never modified.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let array = DynArray::from([10, 20, 30]);
    /// assert_eq!(array.at(1), Ok(&20));
    /// assert!(array.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, OutOfRange> {
        self.as_slice().get(pos).ok_or(OutOfRange::new(pos, self.len))
    }

    /// Mutable form of [`at`](DynArray::at).
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice().get_mut(pos).ok_or(OutOfRange::new(pos, len))
    }

    /// Returns the first element, or `None` if the array is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> { self.as_slice().first() }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> { self.as_mut_slice().first_mut() }

    /// Returns the last element, or `None` if the array is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> { self.as_slice().last() }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> { self.as_mut_slice().last_mut() }

    /// Returns the base pointer of the buffer, or null when nothing is
    /// allocated.
    ///
    /// The pointer is invalidated by any operation that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.buf.is_allocated() {
            true => self.ptr(),
            false => ptr::null(),
        }
    }

    /// Mutable form of [`as_ptr`](DynArray::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.buf.is_allocated() {
            true => self.ptr(),
            false => ptr::null_mut(),
        }
    }

    /// Extracts a slice containing the entire array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Slots below `len` are initialized.
        unsafe { slice::from_raw_parts(self.ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr(), self.len) }
    }

    /// Appends an element to the back of the array.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// array.push_back(1);
    /// assert_eq!((array.len(), array.capacity()), (1, 1));
    /// array.push_back(1);
    /// assert_eq!((array.len(), array.capacity()), (2, 2));
    /// array.push_back(1);
    /// assert_eq!((array.len(), array.capacity()), (3, 4));
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() { self.grow_for(1) }
        unsafe { self.push_unchecked(value) }
    }

    /// Appends the value produced by `make` and returns a reference to it.
    ///
    /// `make` runs before any reallocation, so a panic inside it leaves the
    /// array untouched.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// let pushed = array.emplace_back(|| String::from("hello"));
    /// pushed.push('!');
    /// assert_eq!(array[0], "hello!");
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        let value = make();
        self.push_back(value);
        unsafe { &mut *self.ptr().add(self.len - 1) }
    }

    /// Removes the last element and returns it, or `None` if the array is
    /// empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len == 0 {
            true => None,
            false => unsafe {
                self.len -= 1;
                Some(self.ptr().add(self.len).read())
            }
        }
    }

    /// Inserts `value` at `pos`, shifting all elements after it to the right.
    /// Returns `pos`, the index of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 3]);
    /// let at = array.insert(1, 2);
    /// assert_eq!(at, 1);
    /// assert_eq!(array, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - pos`) time.
    pub fn insert(&mut self, pos: usize, value: T) -> usize {
        self.assert_insert_pos(pos);
        self.grow_for(1);

        unsafe {
            let at = self.ptr().add(pos);
            ptr::copy(at, at.add(1), self.len - pos);
            at.write(value);
        }
        self.len += 1;
        pos
    }

    /// Inserts `count` clones of `value` at `pos`. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 4]);
    /// array.insert_n(1, 2, 0);
    /// assert_eq!(array, [1, 0, 0, 4]);
    /// ```
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.assert_insert_pos(pos);
        self.splice_in(pos, Self::from_elem(count, value))
    }

    /// Inserts clones of `items` at `pos`, preserving their order. Returns
    /// `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn insert_slice(&mut self, pos: usize, items: &[T]) -> usize
    where
        T: Clone,
    {
        self.assert_insert_pos(pos);
        self.splice_in(pos, Self::from_slice(items))
    }

    /// Inserts every item produced by `items` at `pos`, preserving their
    /// order. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([0, 5]);
    /// array.insert_range(1, 1..5);
    /// assert_eq!(array, [0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, pos: usize, items: I) -> usize {
        self.assert_insert_pos(pos);
        self.splice_in(pos, items.into_iter().collect())
    }

    /// Inserts the value produced by `make` at `pos`. Returns `pos`.
    ///
    /// The position is validated before `make` runs.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn emplace<F: FnOnce() -> T>(&mut self, pos: usize, make: F) -> usize {
        self.assert_insert_pos(pos);
        self.insert(pos, make())
    }

    /// Removes the element at `pos`, shifting all elements after it to the
    /// left. Returns `pos`, now the index of the element that followed the
    /// removed one (equal to `len()` if the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 2, 3, 4]);
    /// let next = array.erase(1);
    /// assert_eq!(array, [1, 3, 4]);
    /// assert_eq!(array[next], 3);
    /// ```
    #[inline]
    pub fn erase(&mut self, pos: usize) -> usize {
        drop(self.remove(pos));
        pos
    }

    /// Removes and returns the element at `pos`, shifting all elements after
    /// it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    pub fn remove(&mut self, pos: usize) -> T {
        let len = self.len;
        assert!(pos < len, "removal index (is {pos}) should be < len (is {len})");

        unsafe {
            let at = self.ptr().add(pos);
            let removed = at.read();
            ptr::copy(at.add(1), at, len - pos - 1);
            self.len -= 1;
            removed
        }
    }

    /// Removes the elements in `range`, shifting the tail left to close the
    /// gap. Returns the start of the range, which now indexes the first
    /// element after the removed ones (or `len()`).
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or ends past `len`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([10, 20, 30, 40, 50]);
    /// let next = array.erase_range(1..4);
    /// assert_eq!(array, [10, 50]);
    /// assert_eq!(array[next], 50);
    /// ```
    pub fn erase_range<R: ops::RangeBounds<usize>>(&mut self, range: R) -> usize {
        let len = self.len;
        let ops::Range { start, end } = slice_range(range, ..len);

        unsafe {
            // A panicking destructor leaks the tail instead of dropping twice.
            self.len = start;
            let base = self.ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
            ptr::copy(base.add(end), base.add(start), len - end);
        }
        self.len = len - (end - start);
        start
    }

    /// Shortens the array to `len` elements, dropping the rest. Does nothing
    /// if `len` is not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return }

        let tail = ptr::slice_from_raw_parts_mut(
            unsafe { self.ptr().add(len) },
            self.len - len
        );
        self.len = len;
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) { self.truncate(0) }

    /// Appends every item of `items`, in order.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 2]);
    /// array.append_range(vec![3, 4, 5]);
    /// assert_eq!(array, [1, 2, 3, 4, 5]);
    /// ```
    pub fn append_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        self.grow_for(items.size_hint().0);
        items.for_each(|value| self.push_back(value));
    }

    /// Clones and appends every element of `items`.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.grow_for(items.len());
        for value in items {
            unsafe { self.push_unchecked(value.clone()) }
        }
    }

    /// Appends clones of the elements in `range` of this same array.
    ///
    /// This is the self-append: the buffer is grown before anything is read,
    /// so the source elements are never read from freed memory.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or ends past `len`.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 2, 3]);
    /// array.append_from_within(..);
    /// assert_eq!(array, [1, 2, 3, 1, 2, 3]);
    /// ```
    pub fn append_from_within<R: ops::RangeBounds<usize>>(&mut self, range: R)
    where
        T: Clone,
    {
        let ops::Range { start, end } = slice_range(range, ..self.len);
        self.grow_for(end - start);

        for i in start..end {
            unsafe {
                let value = (*self.ptr().add(i)).clone();
                self.push_unchecked(value);
            }
        }
    }

    /// Resizes the array to `len`, cloning `value` into new slots or dropping
    /// surplus elements.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// array.resize(3, 7);
    /// assert_eq!(array, [7, 7, 7]);
    ///
    /// array.resize(1, 9);
    /// assert_eq!(array, [7]);
    /// ```
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        match len > self.len {
            true => self.extend_with(len - self.len, value),
            false => self.truncate(len),
        }
    }

    /// Resizes the array to `len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }

    /// Resizes the array to `len`, filling new slots with values returned by
    /// `make`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut make: F) {
        if len <= self.len { return self.truncate(len) }

        self.grow_for(len - self.len);
        while self.len < len {
            unsafe { self.push_unchecked(make()) }
        }
    }

    /// Replaces the contents with `count` clones of `value`.
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.clear();
        self.extend_with(count, value);
    }

    /// Replaces the contents with clones of `items`.
    pub fn assign_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.clear();
        self.extend_from_slice(items);
    }

    /// Replaces the contents with the items of `items`.
    pub fn assign_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.clear();
        self.append_range(items);
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order. Returns the number of elements removed.
    ///
    /// # Examples
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(array.retain(|x| x % 2 == 1), 3);
    /// assert_eq!(array, [1, 3, 5]);
    /// ```
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) -> usize {

        struct BackshiftOnDrop<'a, T> {
            array: &'a mut DynArray<T>,
            processed: usize,
            deleted: usize,
            original_len: usize,
        }

        impl<T> Drop for BackshiftOnDrop<'_, T> {
            fn drop(&mut self) {
                if self.deleted > 0 {
                    unsafe {
                        let base = self.array.ptr();
                        ptr::copy(
                            base.add(self.processed),
                            base.add(self.processed - self.deleted),
                            self.original_len - self.processed
                        );
                    }
                }
                self.array.len = self.original_len - self.deleted;
            }
        }

        let original_len = self.len;
        // Hides every element while holes exist, in case `keep` panics.
        self.len = 0;

        let mut guard = BackshiftOnDrop { array: self, processed: 0, deleted: 0, original_len };

        while guard.processed != original_len {
            let cur = unsafe { guard.array.ptr().add(guard.processed) };

            if !keep(unsafe { &*cur }) {
                guard.processed += 1;
                guard.deleted += 1;
                unsafe { ptr::drop_in_place(cur) };
                continue;
            }
            if guard.deleted > 0 {
                unsafe { ptr::copy_nonoverlapping(cur, cur.sub(guard.deleted), 1) };
            }
            guard.processed += 1;
        }

        guard.deleted
    }

    /// Exchanges the contents of two arrays in *O*(1), without touching any
    /// element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) { mem::swap(self, other) }

    /// Returns a displayable dump of the contents, length and capacity:
    ///
    /// ```
    /// use stlkit::DynArray;
    ///
    /// let mut array = DynArray::from([1, 2]);
    /// array.reserve(4);
    /// assert_eq!(array.summary().to_string(), "[1, 2]\nSize: 2 Capacity: 4\n");
    /// ```
    #[inline]
    pub fn summary(&self) -> Summary<'_, T> { Summary { array: self } }

    #[inline(always)]
    fn ptr(&self) -> *mut T { self.buf.ptr().as_ptr() }

    /// # Safety
    ///
    /// `len` must be below the capacity.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        unsafe { self.ptr().add(self.len).write(value) }
        self.len += 1;
    }

    #[inline]
    fn assert_insert_pos(&self, pos: usize) {
        let len = self.len;
        assert!(pos <= len, "insertion index (is {pos}) should be <= len (is {len})");
    }

    /// Makes room for `additional` more elements, following the doubling
    /// policy.
    #[inline]
    fn grow_for(&mut self, additional: usize) {
        let required = infallible(self.len
            .checked_add(additional)
            .ok_or(AllocErr::Overflow));
        if required > self.capacity() { self.grow_amortized(required) }
    }

    #[cold]
    fn grow_amortized(&mut self, required: usize) {
        let doubled = self.capacity()
            .saturating_mul(GROWTH_FACTOR)
            .max(MIN_NON_ZERO_CAP);
        infallible(self.buf.try_resize(required.max(doubled), self.len));
    }

    fn extend_with(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        if count == 0 { return }

        self.grow_for(count);
        for _ in 1..count {
            unsafe { self.push_unchecked(value.clone()) }
        }
        unsafe { self.push_unchecked(value) }
    }

    /// Moves every element of `block` into the gap opened at `pos`.
    ///
    /// No user code runs between opening and filling the gap.
    fn splice_in(&mut self, pos: usize, mut block: Self) -> usize {
        let count = block.len;
        if count == 0 { return pos }

        self.grow_for(count);
        unsafe {
            let at = self.ptr().add(pos);
            ptr::copy(at, at.add(count), self.len - pos);
            ptr::copy_nonoverlapping(block.ptr(), at, count);
            block.len = 0;
        }
        self.len += count;
        pos
    }

    fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let me = ManuallyDrop::new(self);
        (unsafe { ptr::read(&me.buf) }, me.len)
    }
}


/// Displays a [`DynArray`] as `[e0, e1, ...]` followed by a
/// `Size: s Capacity: c` line. Created by [`DynArray::summary`].
pub struct Summary<'a, T> {
    array: &'a DynArray<T>,
}

impl<T: fmt::Display> fmt::Display for Summary<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.array.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{value}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Size: {} Capacity: {}", self.array.len(), self.array.capacity())
    }
}


/// Exchanges the contents of `a` and `b`. Same as [`DynArray::swap`].
#[inline]
pub fn swap<T>(a: &mut DynArray<T>, b: &mut DynArray<T>) { a.swap(b) }

/// Removes every element equal to `value`, preserving the order of the rest.
/// Returns the number removed.
///
/// ```
/// use stlkit::{DynArray, dyn_array};
///
/// let mut array = DynArray::from([1, 2, 3, 2, 4]);
/// assert_eq!(dyn_array::erase(&mut array, &2), 2);
/// assert_eq!(array, [1, 3, 4]);
/// ```
pub fn erase<T: PartialEq<U>, U: ?Sized>(array: &mut DynArray<T>, value: &U) -> usize {
    array.retain(|x| x != value)
}

/// Removes every element for which `pred` returns `true`, preserving the
/// order of the rest. Returns the number removed.
pub fn erase_if<T, F: FnMut(&T) -> bool>(array: &mut DynArray<T>, mut pred: F) -> usize {
    array.retain(|x| !pred(x))
}
