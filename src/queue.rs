use std::fmt;

use crate::{DynArray, list::write_chain};


/// A first-in first-out queue backed by a [`DynArray`].
///
/// `push` appends at the back. `pop` removes the front element and shifts
/// the rest down, so it is *O*(n).
///
/// ```
/// use stlkit::Queue;
///
/// let mut queue = Queue::new();
/// queue.push("a");
/// queue.push("b");
///
/// assert_eq!(queue.to_string(), "(a -> b)");
/// assert_eq!(queue.pop(), Some("a"));
/// assert_eq!(queue.front(), Some(&"b"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: DynArray<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.items.iter())
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: DynArray::from_iter(iter) }
    }
}

impl<T> Queue<T> {

    pub const fn new() -> Self { Self { items: DynArray::new() } }

    #[inline]
    pub fn push(&mut self, value: T) { self.items.push_back(value) }

    pub fn pop(&mut self) -> Option<T> {
        match self.items.is_empty() {
            true => None,
            false => Some(self.items.remove(0)),
        }
    }

    #[inline]
    pub fn front(&self) -> Option<&T> { self.items.front() }

    #[inline]
    pub fn back(&self) -> Option<&T> { self.items.back() }

    #[inline]
    pub const fn len(&self) -> usize { self.items.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.items.is_empty() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_back_pop() {
        let mut queue = Queue::new();
        queue.push(10);
        assert_eq!((queue.front(), queue.back()), (Some(&10), Some(&10)));
        queue.push(20);
        assert_eq!((queue.front(), queue.back()), (Some(&10), Some(&20)));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.pop(), Some(10));
        assert_eq!(queue.front(), Some(&20));
        assert_eq!(queue.pop(), Some(20));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty() {
        let mut queue = Queue::<String>::default();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert_eq!(queue.to_string(), "()");
    }

    #[test]
    fn owned_items_survive_shifting() {
        let mut queue: Queue<String> = ["x", "y", "z"].map(String::from).into_iter().collect();
        assert_eq!(queue.pop().as_deref(), Some("x"));
        queue.extend([String::from("w")]);
        assert_eq!(queue.to_string(), "(y -> z -> w)");
        assert_eq!(format!("{queue:?}"), r#"["y", "z", "w"]"#);
    }
}
