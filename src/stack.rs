use std::fmt;

use crate::{DynArray, list::write_chain};


/// A last-in first-out stack backed by a [`DynArray`].
///
/// The top of the stack is the back of the array, so `push` and `pop` are
/// amortized *O*(1).
///
/// ```
/// use stlkit::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.to_string(), "(3 -> 2 -> 1)");
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.top(), Some(&2));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: DynArray<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter().rev()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_chain(f, self.items.iter().rev())
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: DynArray::from_iter(iter) }
    }
}

impl<T> Stack<T> {

    pub const fn new() -> Self { Self { items: DynArray::new() } }

    #[inline]
    pub fn push(&mut self, value: T) { self.items.push_back(value) }

    #[inline]
    pub fn pop(&mut self) -> Option<T> { self.items.pop_back() }

    #[inline]
    pub fn top(&self) -> Option<&T> { self.items.back() }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> { self.items.back_mut() }

    #[inline]
    pub const fn len(&self) -> usize { self.items.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.items.is_empty() }
}
