use crate::list::{element_of, move_nodes, next_of, prev_of, List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

impl<T> List<T> {
    /// Sort the list in ascending order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements). Strings
    /// are compared lexicographically by bytes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time. No node is
    /// allocated, the existing nodes are relinked.
    ///
    /// # Current Implementation
    ///
    /// A top-down merge sort: the range is split at its structural midpoint,
    /// both halves are sorted recursively and then merged in place. There is
    /// no extra temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }
}

fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (start, end) = (list.front_node(), list.ghost_node());
    // SAFETY: `start..end` is the whole list.
    unsafe {
        if start != end && next_of(start) != end {
            merge_sort_range(start, end, &mut less);
        }
    }
    list.assert_links();
}

/// Returns the first node of the second half of `start..end`.
///
/// It equals `start` if and only if the range holds less than two nodes.
unsafe fn mid_of_range<T>(mut start: NonNull<Node<T>>, end: NonNull<Node<T>>) -> NonNull<Node<T>> {
    let mut mid = start;
    while start != end {
        start = next_of(start);
        if start != end {
            start = next_of(start);
            mid = next_of(mid);
        }
    }
    mid
}

/// Sort `start..end` and return its new first node.
unsafe fn merge_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut mid = mid_of_range(start, end);
    if mid == start {
        return start;
    }
    // Sorting a half only relinks nodes inside it, so `mid` and `end` stay
    // valid boundaries.
    if next_of(start) != mid {
        start = merge_sort_range(start, mid, less);
    }
    if next_of(mid) != end {
        mid = merge_sort_range(mid, end, less);
    }
    merge_range(start, mid, end, less)
}

unsafe fn merge_range<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // This algorithm first logically partitions the range into
    // two sub-range, both of which are internal sorted:
    // - merged range: `start..mid`,
    // - unmerged range: `mid..end`.
    //
    // Then merge the nodes in the unmerged range run by run
    // into the merged range.
    let (mut merged, merged_back, mut to_merge) = (start, prev_of(mid), mid);
    // If the back of merged range <= the front of unmerged range,
    // it is fully sorted, the algorithm stops here.
    while to_merge != end && less(element_of(to_merge), element_of(merged_back)) {
        // Find a position of `merged` in the merged range,
        // where the element of the current node to merge < `*merged`.
        while merged != to_merge && !less(element_of(to_merge), element_of(merged)) {
            merged = next_of(merged);
        }
        if merged == to_merge {
            break;
        }

        // Find a sub-range `to_merge..next_to_merge` in the unmerged range,
        // where all the element in it is < `*merged`.
        let mut next_to_merge = next_of(to_merge);
        while next_to_merge != end && less(element_of(next_to_merge), element_of(merged)) {
            next_to_merge = next_of(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        // Move the sub-range `to_merge..next_to_merge` to the
        // node before `merged`.
        move_nodes(to_merge, prev_of(next_to_merge), merged);
        to_merge = next_to_merge;
    }
    start
}
