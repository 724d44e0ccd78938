use crate::list::{element_of, next_of, prev_of, List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Borrowing iterator over a [`List`], created by [`List::iter`].
///
/// Yields the elements between `front` (inclusive) and `back_end`
/// (exclusive). Both ends move inward, and the iterator is exhausted once
/// they meet.
pub struct Iter<'a, T: 'a> {
    front: NonNull<Node<T>>,
    back_end: NonNull<Node<T>>,
    _marker: PhantomData<&'a List<T>>,
}

/// Mutably borrowing iterator over a [`List`], created by [`List::iter_mut`].
///
/// Every node is yielded at most once, so the returned references never
/// alias.
pub struct IterMut<'a, T: 'a> {
    front: NonNull<Node<T>>,
    back_end: NonNull<Node<T>>,
    _marker: PhantomData<&'a mut List<T>>,
}

/// Owning iterator over a [`List`]. Elements not yet yielded are released
/// along with the iterator.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            front: list.front_node(),
            back_end: list.ghost_node(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            front: list.front_node(),
            back_end: list.ghost_node(),
            _marker: PhantomData,
        }
    }
}

/// Formats the elements of `front..back_end` as fields of a tuple named
/// `name`.
///
/// It is unsafe because `front..back_end` must be a live range of a list.
unsafe fn debug_range<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    front: NonNull<Node<T>>,
    back_end: NonNull<Node<T>>,
) -> fmt::Result {
    let mut tuple = f.debug_tuple(name);
    let mut node = front;
    while node != back_end {
        tuple.field(element_of::<T>(node));
        node = next_of(node);
    }
    tuple.finish()
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: the range is borrowed from the list.
        unsafe { debug_range(f, "Iter", self.front, self.back_end) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: the range is borrowed from the list, and it no longer
        // covers any element already handed out.
        unsafe { debug_range(f, "IterMut", self.front, self.back_end) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back_end {
            return None;
        }
        let node = self.front;
        // SAFETY: `node` lies in the non-empty range, so it is not the ghost.
        unsafe {
            self.front = next_of(node);
            Some(element_of(node))
        }
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back_end {
            return None;
        }
        // SAFETY: see `next`.
        unsafe {
            self.back_end = prev_of(self.back_end);
            Some(element_of(self.back_end))
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back_end {
            return None;
        }
        let node = self.front;
        // SAFETY: see `Iter::next`; `node` leaves the range before it is
        // handed out.
        unsafe {
            self.front = next_of(node);
            Some(&mut (*node.as_ptr()).element)
        }
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.front == self.back_end {
            return None;
        }
        // SAFETY: see `next`.
        unsafe {
            self.back_end = prev_of(self.back_end);
            Some(&mut (*self.back_end.as_ptr()).element)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

// The iterators behave like `&List<T>` and `&mut List<T>` respectively.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
