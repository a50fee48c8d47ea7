use std::{fmt, iter::FusedIterator, ops::{Index, IndexMut}};

use crate::errors::OutOfRange;


type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list.
///
/// Front operations are *O*(1); anything addressed by index, including
/// [`push_back`](List::push_back) and [`back`](List::back), walks the chain.
///
/// ```
/// use stlkit::List;
///
/// let mut list = List::new();
/// list.push_back(10);
/// list.push_back(20);
/// list.push_front(5);
///
/// assert_eq!(list.to_string(), "(5 -> 10 -> 20)");
/// assert_eq!(list.pop_front(), Some(5));
/// assert_eq!(list.erase(1), Ok(20));
/// assert!(list.erase(1).is_err());
/// ```
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Drop for List<T> {
    fn drop(&mut self) { self.clear() }
}

impl<T> Default for List<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // `len` counts each node as soon as it is linked.
        let Self { head, len } = self;
        let mut link = walk(head, *len);
        for value in iter {
            let node = link.insert(Box::new(Node { value, next: None }));
            link = &mut node.next;
            *len += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { IntoIter { list: self } }
}

impl<T> List<T> {

    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub const fn len(&self) -> usize { self.len }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        *self.link_mut(self.len) = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// Fails without modifying the list when `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.len { return Err(OutOfRange::new(index, self.len)) }

        let link = self.link_mut(index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let value = unlink(&mut self.head)?;
        self.len -= 1;
        Some(value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => self.erase(len - 1).ok(),
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// Fails without modifying the list when `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        if index >= self.len { return Err(OutOfRange::new(index, self.len)) }

        let value = unlink(self.link_mut(index)).ok_or(OutOfRange::new(index, self.len))?;
        self.len -= 1;
        Ok(value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn back(&self) -> Option<&T> { self.iter().last() }

    pub fn back_mut(&mut self) -> Option<&mut T> { self.iter_mut().last() }

    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.iter().nth(index).ok_or(OutOfRange::new(index, len))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.iter_mut().nth(index).ok_or(OutOfRange::new(index, len))
    }

    /// Drops every node, front to back, without recursing.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref(), len: self.len }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { next: self.head.as_deref_mut(), len: self.len }
    }

    /// The link that holds (or would hold) the node at `index`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        debug_assert!(index <= self.len);
        walk(&mut self.head, index)
    }
}

fn walk<T>(head: &mut Link<T>, steps: usize) -> &mut Link<T> {
    let mut link = head;
    for _ in 0..steps {
        let Some(node) = link else { unreachable!("list shorter than its length") };
        link = &mut node.next;
    }
    link
}

fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?;
    let Node { value, next } = *node;
    *link = next;
    Some(value)
}

/// Writes `(a -> b -> c)`, or `()` when empty.
pub(crate) fn write_chain<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("(")?;
    for (i, value) in items.into_iter().enumerate() {
        if i > 0 { f.write_str(" -> ")?; }
        write!(f, "{value}")?;
    }
    f.write_str(")")
}


pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> { self.list.pop_front() }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.list.len, Some(self.list.len)) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    fn sample() -> List<i32> { [10, 20, 30].into_iter().collect() }

    #[test]
    fn default_is_empty() {
        let list = List::<i32>::default();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "()");
    }

    #[test]
    fn push_back_and_len() {
        let mut list = List::new();
        list.push_back(10);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        list.push_back(20);
        list.push_back(30);
        assert_eq!(list.len(), 3);
        assert_eq!(list, sample());
    }

    #[test]
    fn push_front() {
        let mut list = List::new();
        list.push_front(5);
        list.push_front(4);
        assert_eq!(list.front(), Some(&4));
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn front_back() {
        let mut list = sample();
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&30));

        *list.front_mut().unwrap() = 1;
        *list.back_mut().unwrap() = 3;
        assert_eq!(list.to_string(), "(1 -> 20 -> 3)");
    }

    #[test]
    fn pop_front_and_back() {
        let mut list = sample();
        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.len(), 2);
        assert_eq!(list.front(), Some(&20));

        assert_eq!(list.pop_back(), Some(30));
        assert_eq!(list.back(), Some(&20));
        assert_eq!(list.pop_back(), Some(20));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn insert() {
        let mut list: List<_> = [10, 20].into_iter().collect();
        assert_eq!(list.insert(1, 15), Ok(()));
        assert_eq!(list.len(), 3);
        assert_eq!((list[0], list[1], list[2]), (10, 15, 20));

        assert_eq!(list.insert(3, 25), Ok(()));
        assert_eq!(list.insert(0, 5), Ok(()));
        assert_eq!(list.to_string(), "(5 -> 10 -> 15 -> 20 -> 25)");
    }

    #[test]
    fn erase() {
        let mut list: List<_> = [10, 15, 20].into_iter().collect();
        assert_eq!(list.erase(1), Ok(15));
        assert_eq!(list.len(), 2);
        assert_eq!((list[0], list[1]), (10, 20));
        assert_eq!(list.erase(0), Ok(10));
        assert_eq!(list, [20].into_iter().collect());
    }

    #[test]
    fn failures_leave_list_untouched() {
        let mut list = List::<i32>::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.erase(0), Err(OutOfRange { index: 0, len: 0 }));
        assert_eq!(list.insert(1, 50), Err(OutOfRange { index: 1, len: 0 }));
        assert!(list.at(0).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn index() {
        let mut list = sample();
        list[1] = 25;
        assert_eq!(list[1], 25);
        assert_eq!(list.at(2), Ok(&30));
        *list.at_mut(0).unwrap() = 0;
        assert_eq!(list.to_string(), "(0 -> 25 -> 30)");
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let list = sample();
        let _ = list[3];
    }

    #[test]
    fn clear() {
        let mut list = sample();
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        list.push_back(1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn extend_panic_keeps_len_in_sync() {
        let mut list: List<i32> = [1].into_iter().collect();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            list.extend((0..5).map(|v| if v == 3 { panic!("source failure") } else { v }));
        }));
        assert!(result.is_err());

        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 0, 1, 2]);
        list.push_back(9);
        assert_eq!(list.to_string(), "(1 -> 0 -> 1 -> 2 -> 9)");
        assert_eq!(list.pop_back(), Some(9));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn long_list_drops_without_recursion() {
        let list: List<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test]
    fn iteration() {
        let mut list = sample();
        assert_eq!(list.iter().len(), 3);
        for v in &mut list { *v += 1 }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [11, 21, 31]);

        let mut extended = list.clone();
        extended.extend([41, 51]);
        assert_eq!(extended.into_iter().collect::<Vec<_>>(), [11, 21, 31, 41, 51]);
        assert_eq!(format!("{list:?}"), "[11, 21, 31]");
    }
}
