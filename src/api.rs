//! Entry points that accept an absent queue.
//!
//! Every function takes the queue as an `Option`. An absent queue is never an
//! error: it yields the neutral result (`false`, `None`, `0`) and nothing
//! happens. Fallible operations report failure as `false` and leave the queue
//! untouched.
//!
//! # Examples
//!
//! ```
//! use cyclic_queue::api;
//!
//! let mut q = api::new();
//! assert!(api::insert_tail(q.as_mut(), "b"));
//! assert!(api::insert_head(q.as_mut(), "a"));
//! assert_eq!(api::size(q.as_ref()), 2);
//!
//! let mut buf = [0u8; 8];
//! let element = api::remove_head(q.as_mut(), Some(&mut buf));
//! assert_eq!(&buf[..2], b"a\0");
//! api::release_element(element);
//!
//! assert!(!api::insert_head(None, "lost"));
//! assert_eq!(api::size(None), 0);
//! api::free(q);
//! ```

use crate::chain::Chain;
use crate::queue::{Queue, QueueElement};
use std::convert::TryFrom;

/// Creates an empty queue, or `None` if it cannot be allocated.
pub fn new() -> Option<Queue> {
    Queue::try_new().ok()
}

/// Releases the queue and every element still linked to it.
pub fn free(head: Option<Queue>) {
    drop(head);
}

/// Releases an element returned by [`remove_head`] or [`remove_tail`].
pub fn release_element(element: Option<QueueElement>) {
    if let Some(element) = element {
        element.release();
    }
}

pub fn insert_head(head: Option<&mut Queue>, s: &str) -> bool {
    head.map_or(false, |q| q.insert_head(s).is_ok())
}

pub fn insert_tail(head: Option<&mut Queue>, s: &str) -> bool {
    head.map_or(false, |q| q.insert_tail(s).is_ok())
}

pub fn remove_head(head: Option<&mut Queue>, sp: Option<&mut [u8]>) -> Option<QueueElement> {
    head?.remove_head(sp)
}

pub fn remove_tail(head: Option<&mut Queue>, sp: Option<&mut [u8]>) -> Option<QueueElement> {
    head?.remove_tail(sp)
}

pub fn size(head: Option<&Queue>) -> usize {
    head.map_or(0, Queue::size)
}

/// Returns `false` only for an absent queue.
pub fn delete_middle(head: Option<&mut Queue>) -> bool {
    head.map_or(false, Queue::delete_middle)
}

/// Returns `false` only for an absent queue.
pub fn delete_duplicates(head: Option<&mut Queue>) -> bool {
    head.map_or(false, Queue::delete_duplicates)
}

pub fn swap_pairs(head: Option<&mut Queue>) {
    if let Some(q) = head {
        q.swap_pairs();
    }
}

pub fn reverse(head: Option<&mut Queue>) {
    if let Some(q) = head {
        q.reverse();
    }
}

/// `k <= 0` leaves the queue unchanged.
pub fn reverse_k_group(head: Option<&mut Queue>, k: i32) {
    if let (Some(q), Ok(k)) = (head, usize::try_from(k)) {
        q.reverse_k_group(k);
    }
}

pub fn sort(head: Option<&mut Queue>) {
    if let Some(q) = head {
        q.sort();
    }
}

pub fn filter_descending(head: Option<&mut Queue>) -> usize {
    head.map_or(0, Queue::filter_descending)
}

pub fn filter_ascending(head: Option<&mut Queue>) -> usize {
    head.map_or(0, Queue::filter_ascending)
}

pub fn merge_k_sorted(chain: Option<&mut Chain>) -> usize {
    chain.map_or(0, Chain::merge_k_sorted)
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::Chain;

    fn contents(q: Option<&crate::Queue>) -> Vec<String> {
        q.map(|q| q.iter().cloned().collect()).unwrap_or_default()
    }

    #[test]
    fn absent_queue_is_neutral() {
        assert!(!api::insert_head(None, "a"));
        assert!(!api::insert_tail(None, "a"));
        assert!(api::remove_head(None, None).is_none());
        let mut buf = [7u8; 4];
        assert!(api::remove_tail(None, Some(&mut buf)).is_none());
        assert_eq!(buf, [7u8; 4]);
        assert_eq!(api::size(None), 0);
        assert!(!api::delete_middle(None));
        assert!(!api::delete_duplicates(None));
        api::swap_pairs(None);
        api::reverse(None);
        api::reverse_k_group(None, 2);
        api::sort(None);
        assert_eq!(api::filter_descending(None), 0);
        assert_eq!(api::filter_ascending(None), 0);
        assert_eq!(api::merge_k_sorted(None), 0);
        api::free(None);
        api::release_element(None);
    }

    #[test]
    fn empty_queue() {
        let mut q = api::new();
        assert!(q.is_some());
        assert!(api::remove_head(q.as_mut(), None).is_none());
        assert!(api::remove_tail(q.as_mut(), None).is_none());
        assert!(api::delete_middle(q.as_mut()));
        assert!(api::delete_duplicates(q.as_mut()));
        assert_eq!(api::filter_descending(q.as_mut()), 0);
        api::sort(q.as_mut());
        api::reverse(q.as_mut());
        assert_eq!(api::size(q.as_ref()), 0);
        api::free(q);
    }

    #[test]
    fn drive_a_queue() {
        let mut q = api::new();
        for s in &["05", "02", "13", "03", "08"] {
            assert!(api::insert_tail(q.as_mut(), s));
        }
        assert_eq!(api::filter_descending(q.as_mut()), 2);
        assert_eq!(contents(q.as_ref()), ["13", "08"]);

        for s in &["04", "03", "02", "01"] {
            assert!(api::insert_head(q.as_mut(), s));
        }
        assert_eq!(contents(q.as_ref()), ["01", "02", "03", "04", "13", "08"]);

        api::reverse_k_group(q.as_mut(), 0);
        api::reverse_k_group(q.as_mut(), -3);
        assert_eq!(contents(q.as_ref()), ["01", "02", "03", "04", "13", "08"]);
        api::reverse_k_group(q.as_mut(), 2);
        assert_eq!(contents(q.as_ref()), ["02", "01", "04", "03", "08", "13"]);

        api::swap_pairs(q.as_mut());
        assert_eq!(contents(q.as_ref()), ["01", "02", "03", "04", "13", "08"]);
        api::sort(q.as_mut());
        assert!(api::delete_middle(q.as_mut()));
        assert_eq!(contents(q.as_ref()), ["01", "02", "04", "08", "13"]);

        let element = api::remove_tail(q.as_mut(), None);
        assert_eq!(element.as_ref().map(|e| e.as_str()), Some("13"));
        api::release_element(element);
        assert_eq!(api::size(q.as_ref()), 4);
        api::free(q);
    }

    #[test]
    fn strings_compare_by_bytes() {
        let mut q = api::new();
        for s in &["5", "2", "13", "3", "8"] {
            assert!(api::insert_tail(q.as_mut(), s));
        }
        assert_eq!(api::filter_descending(q.as_mut()), 1);
        assert_eq!(contents(q.as_ref()), ["8"]);
    }

    #[test]
    fn merge_through_chain() {
        let mut chain = Chain::new();
        for values in &[&["1", "3", "5"][..], &["2", "4"], &["0", "6"]] {
            let id = chain.add_queue();
            let context = chain.get_mut(id).unwrap();
            for value in values.iter() {
                assert!(context.update(|q| api::insert_tail(Some(q), value)));
            }
        }
        assert_eq!(api::merge_k_sorted(Some(&mut chain)), 7);
    }
}
