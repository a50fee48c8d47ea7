use std::{fmt, ops::{AddAssign, Index, IndexMut}, str::{self, Utf8Error}};

use crate::{DynArray, OutOfRange, errors::{AllocErr, infallible}};


/// A growable string of raw bytes.
///
/// No terminator is stored; [`as_bytes`](ByteString::as_bytes) is exactly the
/// content. Appending past the capacity grows it to twice the new length.
///
/// ```
/// use stlkit::ByteString;
///
/// let mut s = ByteString::from("hello");
/// assert_eq!(s.capacity(), 5);
///
/// s += ", world";
/// assert_eq!(s, *"hello, world");
/// assert_eq!(s.capacity(), 24);
/// assert_eq!(s[0], b'h');
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString {
    bytes: DynArray<u8>,
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self { Self::from(s.as_bytes()) }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self { Self { bytes: DynArray::from_slice(bytes) } }
}

impl AddAssign<&str> for ByteString {
    fn add_assign(&mut self, rhs: &str) { self.push_str(rhs) }
}

impl AddAssign<&[u8]> for ByteString {
    fn add_assign(&mut self, rhs: &[u8]) { self.push_bytes(rhs) }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool { self.as_bytes() == other.as_bytes() }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool { self.as_bytes() == other.as_bytes() }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool { self.as_bytes() == other }
}

impl Index<usize> for ByteString {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 { &self.bytes[index] }
}

impl IndexMut<usize> for ByteString {
    fn index_mut(&mut self, index: usize) -> &mut u8 { &mut self.bytes[index] }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl ByteString {

    pub const fn new() -> Self { Self { bytes: DynArray::new() } }

    #[inline]
    pub const fn len(&self) -> usize { self.bytes.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[inline]
    pub const fn capacity(&self) -> usize { self.bytes.capacity() }

    /// Grows the capacity to exactly `capacity` bytes unless it is already at
    /// least that large.
    pub fn reserve(&mut self, capacity: usize) { self.bytes.reserve(capacity) }

    pub fn at(&self, index: usize) -> Result<u8, OutOfRange> {
        self.bytes.at(index).copied()
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8, OutOfRange> {
        self.bytes.at_mut(index)
    }

    pub fn push_str(&mut self, s: &str) { self.push_bytes(s.as_bytes()) }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let new_len = infallible(self.len().checked_add(bytes.len()).ok_or(AllocErr::Overflow));
        if new_len > self.capacity() {
            self.reserve(infallible(new_len.checked_mul(2).ok_or(AllocErr::Overflow)));
        }
        self.bytes.extend_from_slice(bytes);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] { self.bytes.as_slice() }

    /// The content as `&str`, if it is valid UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> { str::from_utf8(self.as_bytes()) }

    pub fn clear(&mut self) { self.bytes.clear() }

    pub fn into_bytes(self) -> DynArray<u8> { self.bytes }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let s = ByteString::new();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert!(s.is_empty());
        assert_eq!(s, *"");
        assert_eq!(s.to_string(), "");
    }

    #[test]
    fn from_str_fits_exactly() {
        let s = ByteString::from("hello");
        assert_eq!(s.len(), 5);
        assert_eq!(s.capacity(), 5);
        assert_eq!(s.to_str(), Ok("hello"));
    }

    #[test]
    fn reserve_is_exact_and_never_shrinks() {
        let mut s = ByteString::from("abc");
        s.reserve(40);
        assert_eq!(s.capacity(), 40);
        s.reserve(10);
        assert_eq!(s.capacity(), 40);
        assert_eq!(s, "abc");
    }

    #[test]
    fn append_doubles_new_length() {
        let mut s = ByteString::from("Hello");
        s += " World";
        assert_eq!(s.len(), 11);
        assert_eq!(s.capacity(), 22);

        s += "!";
        assert_eq!(s.capacity(), 22);
        assert_eq!(s, "Hello World!");

        let mut empty = ByteString::new();
        empty.push_str("");
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn checked_access() {
        let mut s = ByteString::from("abc");
        assert_eq!(s.at(1), Ok(b'b'));
        assert_eq!(s.at(3), Err(OutOfRange { index: 3, len: 3 }));
        *s.at_mut(0).unwrap() = b'x';
        s[2] = b'z';
        assert_eq!(s, "xbz");
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let s = ByteString::from("abc");
        let _ = s[3];
    }

    #[test]
    fn invalid_utf8() {
        let mut s = ByteString::from("ok");
        s.push_bytes(&[0xff]);
        assert!(s.to_str().is_err());
        assert_eq!(s.to_string(), "ok\u{FFFD}");
        assert_eq!(format!("{s:?}"), r#""ok\xff""#);
    }
}
