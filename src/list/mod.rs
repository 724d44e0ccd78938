use std::alloc::{alloc, handle_alloc_error, Layout};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::QueueError;
use crate::{IntoIter, Iter, IterMut};

pub mod iterator;

mod algorithms;

/// A cyclic doubly-linked list that owns its nodes.
///
/// The only field is a pointer to the ghost node, whose `next` is the front
/// element and whose `prev` is the back element. An empty list is a ghost node
/// linked to itself. Both ends are reachable in *O*(1), and every structural
/// transformation relinks the existing nodes in place. The length is not
/// stored, [`List::len`] counts it.
///
/// Ranges of nodes are written `front..=back` (both ends included) or
/// `start..end` (end excluded, often the ghost node).
pub struct List<T> {
    ghost: NonNull<Node<Erased<T>>>,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Payload of the ghost node: no data, but the alignment of `T`, so the ghost
/// node can be read through a `Node<T>` pointer.
struct Erased<T> {
    _align: [T; 0],
}

/// An element detached from a list.
///
/// Removing an element from a [`List`] (see [`List::remove_front`] and
/// [`List::remove_back`]) unlinks its node and hands it over to the caller
/// without freeing anything. The node and its payload are released when the
/// `Element` is dropped (or explicitly with [`Element::release`]), or the node
/// can be linked into a list again with [`List::push_front_element`] and
/// [`List::push_back_element`], which never allocate.
///
/// # Examples
///
/// ```
/// use cyclic_queue::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let element = list.remove_front().unwrap();
/// assert_eq!(*element, 1);
///
/// list.push_back_element(element);
/// assert_eq!(Vec::from_iter(list), vec![2, 3, 1]);
/// ```
pub struct Element<T> {
    node: Box<Node<T>>,
}

/// A run of nodes `front..=back` cut out of a list and waiting to be spliced
/// into another. The outer links `front.prev` and `back.next` are stale.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    _marker: PhantomData<Box<Node<T>>>,
}

// Link helpers. They go through raw places instead of references because the
// ghost node has no `element` to cover.

/// Returns `node.next`.
///
/// It is unsafe because `node` must be a live node (or ghost node) of a list.
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Returns `node.prev`.
///
/// It is unsafe because `node` must be a live node (or ghost node) of a list.
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Returns the element of `node`.
///
/// It is unsafe because `node` must be a live node and must **NOT** be the
/// ghost node, and the caller picks the lifetime.
#[inline]
pub(crate) unsafe fn element_of<'a, T>(node: NonNull<Node<T>>) -> &'a T {
    &(*node.as_ptr()).element
}

#[inline]
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

/// Move the node `from` to the position right before `to`.
pub(crate) unsafe fn move_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    move_nodes(from, from, to);
}

/// Move the range `from_front..=from_back` to the position right before `to`.
///
/// It is unsafe because it does not check whether `from_front..=from_back`
/// is a valid range, or whether `to` lies outside of it. The range and `to`
/// may belong to different lists.
pub(crate) unsafe fn move_nodes<T>(
    from_front: NonNull<Node<T>>,
    from_back: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) {
    connect(prev_of(from_front), next_of(from_back));
    connect(prev_of(to), from_front);
    connect(from_back, to);
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { next_of(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { prev_of(self.ghost_node()) }
    }

    /// Unlinks `node` and takes ownership of its allocation.
    ///
    /// Unsafe: `node` must be a non-ghost node of this list.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        connect(prev_of(node), next_of(node));
        Box::from_raw(node.as_ptr())
    }

    /// Links the detached `node` between `prev` and `next`.
    ///
    /// Unsafe: `prev` and `next` must be adjacent nodes of this list. Debug
    /// builds check the adjacency.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Splices `detached` between `prev` and `next`.
    ///
    /// Unsafe: same contract as [`List::attach_node`].
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
    }

    /// Cuts every element out of the list at once, leaving it empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        let (front, back, ghost) = (self.front_node(), self.back_node(), self.ghost_node());
        // SAFETY: `front..=back` is the whole list, so reconnecting the ghost
        // node to itself leaves an empty but valid list.
        unsafe { connect(ghost, ghost) };
        Some(DetachedNodes::new(front, back))
    }

    /// Runs [`List::check_links`] after a structural transformation: in debug
    /// builds, or always with the `checked-links` feature.
    #[inline]
    pub(crate) fn assert_links(&self) {
        #[cfg(feature = "checked-links")]
        assert!(self.check_links(), "list links do not form a valid cycle");
        #[cfg(not(feature = "checked-links"))]
        debug_assert!(self.check_links(), "list links do not form a valid cycle");
    }
}

impl<T> List<T> {
    /// Creates an empty list: a single ghost node linked to itself.
    ///
    /// Aborts through [`handle_alloc_error`] if the ghost node cannot be
    /// allocated; [`List::try_new`] reports it instead.
    #[inline]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(list) => list,
            Err(_) => handle_alloc_error(Layout::new::<Node<Erased<T>>>()),
        }
    }

    /// Creates an empty list, or returns [`QueueError::NodeAllocation`] if the
    /// ghost node cannot be allocated.
    pub fn try_new() -> Result<Self, QueueError> {
        let ghost = Node::try_new_detached(Erased { _align: [] })?;
        Ok(Self {
            ghost,
            _marker: PhantomData,
        })
    }

    /// Returns `true` if the ghost node links to itself. *O*(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Counts the elements by walking once around the cycle. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.len(), 0);
    /// list.push_back("kiwi");
    /// list.push_front("lime");
    /// assert_eq!(list.len(), 2);
    /// assert!(!list.is_empty());
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Releases every element, keeping the ghost node.
    #[inline]
    pub fn clear(&mut self) {
        while self.remove_front().is_some() {}
    }

    /// The element right after the ghost node, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    /// list.push_back("head");
    /// list.push_back("tail");
    /// assert_eq!(list.front(), Some(&"head"));
    /// assert_eq!(list.back(), Some(&"tail"));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is not the ghost node.
        Some(unsafe { element_of(self.front_node()) })
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is not the ghost node,
        // and the list is borrowed mutably.
        Some(unsafe { &mut (*self.front_node().as_ptr()).element })
    }

    /// The element right before the ghost node, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is not the ghost node.
        Some(unsafe { element_of(self.back_node()) })
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: see `front_mut`.
        Some(unsafe { &mut (*self.back_node().as_ptr()).element })
    }

    /// Links a new node holding `elt` right after the ghost node.
    ///
    /// Aborts if the node cannot be allocated; see [`List::try_push_front`].
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the ghost node and the front node are adjacent nodes of this list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) }
    }

    /// Links a new node holding `elt` right before the ghost node.
    ///
    /// Aborts if the node cannot be allocated; see [`List::try_push_back`].
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the back node and the ghost node are adjacent nodes of this list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) }
    }

    /// Like [`List::push_front`], but reports a failed node allocation instead
    /// of aborting. The list is unchanged on error.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), QueueError> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: see `push_front`.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
        Ok(())
    }

    /// Like [`List::push_back`], but reports a failed node allocation instead
    /// of aborting. The list is unchanged on error.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), QueueError> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: see `push_back`.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
        Ok(())
    }

    /// Links a detached element first in the list. Never allocates.
    pub fn push_front_element(&mut self, element: Element<T>) {
        let node = element.into_node();
        // SAFETY: see `push_front`.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) }
    }

    /// Links a detached element last in the list. Never allocates.
    pub fn push_back_element(&mut self, element: Element<T>) {
        let node = element.into_node();
        // SAFETY: see `push_back`.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) }
    }

    /// Unlinks the first element and hands it over to the caller, or returns
    /// `None` if the list is empty. Nothing is freed. *O*(1).
    pub fn remove_front(&mut self) -> Option<Element<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list belongs to it and is not
        // the ghost node.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(Element { node })
    }

    /// Unlinks the last element and hands it over to the caller, or returns
    /// `None` if the list is empty. Nothing is freed. *O*(1).
    pub fn remove_back(&mut self) -> Option<Element<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: see `remove_front`.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(Element { node })
    }

    /// Unlinks the first element, frees its node and returns the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(String::from("first"));
    /// list.push_back(String::from("last"));
    /// assert_eq!(list.pop_back().as_deref(), Some("last"));
    /// assert_eq!(list.pop_front().as_deref(), Some("first"));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_front().map(Element::into_value)
    }

    /// Unlinks the last element, frees its node and returns the payload.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove_back().map(Element::into_value)
    }

    /// Iterates from the front element to the back element.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Like [`List::iter`], yielding mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Splices every node of `other` after the back of `self`, leaving `other`
    /// empty. Relinks four pointers; nothing is allocated or freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut morning = List::from_iter(["tea", "toast"]);
    /// let mut evening = List::from_iter(["soup"]);
    /// morning.append(&mut evening);
    /// assert!(evening.is_empty());
    /// assert_eq!(Vec::from_iter(morning), ["tea", "toast", "soup"]);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the back node and the ghost node are adjacent nodes of
            // this list.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Splices every node of `other` before the front of `self`, leaving
    /// `other` empty.
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the ghost node and the front node are adjacent nodes of
            // this list.
            unsafe { self.attach_nodes(self.ghost_node(), self.front_node(), detached) }
        }
    }

    /// Returns `true` if the links of the list form a valid cycle: for every
    /// node `a` reached from the ghost node, `a.next.prev == a`, and walking
    /// `next` comes back to the ghost node.
    ///
    /// A well-formed list always passes; this is a self-check for the
    /// structural transformations.
    pub fn check_links(&self) -> bool {
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            // SAFETY: `node` was reached through links that were already
            // checked to be symmetric, so it is a node of this list.
            unsafe {
                let next = next_of(node);
                if prev_of(next) != node {
                    return false;
                }
                node = next;
            }
            if node == ghost {
                return true;
            }
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a detached node holding `element`, linked to itself.
    ///
    /// On failure `element` is dropped and nothing else is touched.
    pub(crate) fn try_new_detached(element: T) -> Result<NonNull<Node<T>>, QueueError> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` holds two pointers, so `layout` is never zero-sized.
        let ptr = unsafe { alloc(layout) }.cast::<Node<T>>();
        let node = NonNull::new(ptr).ok_or(QueueError::NodeAllocation {
            size: layout.size(),
        })?;
        // SAFETY: `node` is freshly allocated with the layout of `Node<T>`, the
        // same layout `Box<Node<T>>` frees it with.
        unsafe {
            node.as_ptr().write(Node {
                next: node,
                prev: node,
                element,
            })
        };
        Ok(node)
    }

    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        match Self::try_new_detached(element) {
            Ok(node) => node,
            Err(_) => handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }
}

impl<T> Element<T> {
    /// Returns a reference to the payload.
    #[inline]
    pub fn value(&self) -> &T {
        &self.node.element
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.node.element
    }

    /// Consumes the element, freeing the node and returning the payload.
    pub fn into_value(self) -> T {
        let Node { element, .. } = *self.node;
        element
    }

    /// Frees the node together with its payload.
    ///
    /// Same as dropping the element.
    pub fn release(self) {}

    fn into_node(self) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(self.node))
    }
}

impl<T> Deref for Element<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T> DerefMut for Element<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T: Debug> Debug for Element<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Element").field(self.value()).finish()
    }
}

impl<T> DetachedNodes<T> {
    fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>) -> Self {
        Self {
            front,
            back,
            _marker: PhantomData,
        }
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost node was allocated with the layout of `Node<Erased<T>>`
        // by `Node::try_new_detached`, and it is no longer linked to anything.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) }
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

unsafe impl<T: Send> Send for Element<T> {}

unsafe impl<T: Sync> Sync for Element<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(list.check_links());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert!(list.check_links());

        let list = List::<String>::try_new().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn removed_element_is_not_released() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));

        let element = list.remove_back().unwrap();
        assert_eq!(element.value, 2);
        assert!(dropped.borrow().is_empty());

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        element.release();
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
    }

    #[test]
    fn both_ends_on_string_payloads() {
        let mut list: List<String> = List::new();
        assert!(list.remove_front().is_none());
        assert!(list.remove_back().is_none());
        assert_eq!(list.pop_back(), None);

        list.push_back("middle".to_string());
        list.try_push_front("front".to_string()).unwrap();
        list.try_push_back("back".to_string()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.front().map(String::as_str), Some("front"));
        assert_eq!(list.back().map(String::as_str), Some("back"));

        if let Some(s) = list.front_mut() {
            s.push_str("-edited");
        }
        if let Some(s) = list.back_mut() {
            s.clear();
        }
        assert_eq!(list.pop_front().as_deref(), Some("front-edited"));
        assert_eq!(list.pop_back().as_deref(), Some(""));
        assert_eq!(list.pop_back().as_deref(), Some("middle"));
        assert!(list.is_empty());
        assert!(list.check_links());
    }

    #[test]
    fn over_aligned_payloads() {
        #[repr(align(64))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        struct Wide(u8);

        let mut list = List::from_iter([Wide(3), Wide(1), Wide(2)]);
        assert_eq!(list.ghost_node().as_ptr() as usize % 64, 0);
        list.sort();
        assert_eq!(Vec::from_iter(list.iter().copied()), [Wide(1), Wide(2), Wide(3)]);
        list.reverse();
        list.push_front(Wide(4));
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            [Wide(4), Wide(3), Wide(2), Wide(1)]
        );
        assert!(list.iter().all(|w| w as *const Wide as usize % 64 == 0));
        assert!(list.check_links());
        assert_eq!(list.pop_back(), Some(Wide(1)));
    }

    #[test]
    fn element_relink() {
        let mut list = List::from_iter(0..4);
        let mut element = list.remove_back().unwrap();
        *element *= 10;
        list.push_front_element(element);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![30, 0, 1, 2]);

        let element = list.remove_front().unwrap();
        assert_eq!(format!("{:?}", element), "Element(30)");
        list.push_back_element(element);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2, 30]);
        assert!(list.check_links());
    }

    #[test]
    fn list_append_and_prepend() {
        let mut list = List::from_iter(0..3);
        let mut other = List::from_iter(3..5);
        list.append(&mut other);
        assert!(other.is_empty());
        assert!(other.check_links());
        assert_eq!(list, List::from_iter(0..5));

        let mut other = List::from_iter(-2..0);
        list.prepend(&mut other);
        assert!(other.is_empty());
        assert_eq!(list, List::from_iter(-2..5));
        assert_eq!(list.len(), 7);

        let mut empty = List::new();
        list.append(&mut empty);
        list.prepend(&mut empty);
        assert_eq!(list, List::from_iter(-2..5));

        let mut empty = List::new();
        empty.append(&mut list);
        assert!(list.is_empty());
        assert_eq!(empty, List::from_iter(-2..5));
        assert!(empty.check_links());
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..10);
        assert_eq!(list.len(), 10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.check_links());
    }
}
