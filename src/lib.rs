//! This crate provides a queue of strings built on a doubly-linked list with
//! owned nodes, implemented as a cyclic list, together with a set of in-place
//! list transformations: reversing (whole or by groups), swapping pairs,
//! deleting the middle element or runs of duplicates, filtering, merge sort,
//! and merging a chain of sorted queues.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut q = Queue::new();
//! for s in &["pear", "fig", "apple", "fig"] {
//!     q.insert_tail(s).unwrap();
//! }
//!
//! q.sort(); // [apple, fig, fig, pear]
//! q.delete_duplicates(); // [apple, pear]
//! q.reverse(); // [pear, apple]
//!
//! let element = q.remove_head(None).unwrap();
//! assert_eq!(element.as_str(), "pear");
//! assert_eq!(q.size(), 1);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T`, except the ghost node.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself. The list does not store its length: [`List::len`]
//! (and [`Queue::size`]) walk the cycle.
//!
//! # Ownership
//!
//! The list owns every linked node. Removing an element ([`List::remove_front`],
//! [`Queue::remove_head`], ...) unlinks the node and hands it to the caller as an
//! [`Element`], which releases the node and its payload when dropped. Deleting
//! operations ([`List::delete_middle`], [`List::delete_duplicates`],
//! [`List::filter_descending`], ...) release the nodes they unlink.
//!
//! A [`Queue`] is a `List<String>`: inserting a `&str` always stores an owned
//! copy of it.
//!
//! # Algorithms
//!
//! All transformations relink the existing nodes and never allocate:
//! - [`reverse`] and [`reverse_k_group`];
//! - [`swap_pairs`];
//! - [`delete_middle`] and [`delete_duplicates`];
//! - [`filter_descending`] and [`filter_ascending`];
//! - [`sort`], a stable merge sort;
//! - [`merge_sorted`], and [`Chain::merge_k_sorted`] over a chain of queues.
//!
//! The [`api`] module exposes the same operations for queues that may be
//! absent.
//!
//! [`reverse`]: crate::List::reverse
//! [`reverse_k_group`]: crate::List::reverse_k_group
//! [`swap_pairs`]: crate::List::swap_pairs
//! [`delete_middle`]: crate::List::delete_middle
//! [`delete_duplicates`]: crate::List::delete_duplicates
//! [`filter_descending`]: crate::List::filter_descending
//! [`filter_ascending`]: crate::List::filter_ascending
//! [`sort`]: crate::List::sort
//! [`merge_sorted`]: crate::List::merge_sorted

#[doc(inline)]
pub use chain::{Chain, QueueContext};
#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Element, List};
#[doc(inline)]
pub use queue::{Queue, QueueElement};

pub mod api;
pub mod chain;
pub mod list;
pub mod queue;

mod error;

#[cfg(test)]
mod test_utils;
