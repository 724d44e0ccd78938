use crate::list::{element_of, move_node, next_of, prev_of, List};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Releases the middle element of the list.
    ///
    /// The middle is found with a slow/fast walk: the fast node moves two
    /// links per step and the slow one moves one link, so the slow node stops
    /// at index `(n - 1) / 2`. For an even length this is the earlier of the
    /// two middles.
    ///
    /// Returns `true`; an empty list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// assert!(list.delete_middle());
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 3, 4]);
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        if self.is_empty() {
            return true;
        }
        let ghost = self.ghost_node();
        let (mut slow, mut fast) = (self.front_node(), self.front_node());
        // SAFETY: every node visited is reached from the front node of a
        // non-empty list and the walk stops before the ghost node.
        unsafe {
            loop {
                let next = next_of(fast);
                if next == ghost || next_of(next) == ghost {
                    break;
                }
                fast = next_of(next);
                slow = next_of(slow);
            }
            drop(self.detach_node(slow));
        }
        self.assert_links();
        true
    }

    /// Releases every element that belongs to a run of adjacent equal
    /// elements, keeping only the elements that are not equal to a neighbour.
    ///
    /// On a sorted list this removes every value that occurs more than once.
    /// On an unsorted list only adjacent runs are considered, e.g.
    /// `[a, a, b, a]` becomes `[b, a]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["a", "a", "b", "c", "c", "c"]);
    /// assert!(list.delete_duplicates());
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["b"]);
    /// ```
    pub fn delete_duplicates(&mut self) -> bool
    where
        T: PartialEq,
    {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        // SAFETY: `node` and `next` always belong to `start..end` of this list,
        // and a node is only read before it is released.
        unsafe {
            while node != ghost {
                let mut next = next_of(node);
                while next != ghost && element_of(next) == element_of(node) {
                    next = next_of(next);
                }
                if next_of(node) != next {
                    // Release the whole run `node..next`.
                    while node != next {
                        let following = next_of(node);
                        drop(self.detach_node(node));
                        node = following;
                    }
                }
                node = next;
            }
        }
        self.assert_links();
        true
    }

    /// Swaps every two adjacent elements: 1st with 2nd, 3rd with 4th, and so
    /// on. A trailing unpaired element stays where it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=5);
    /// list.swap_pairs();
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut first = self.front_node();
        // SAFETY: `first` and `second` are adjacent nodes of this list.
        unsafe {
            while first != ghost {
                let second = next_of(first);
                if second == ghost {
                    break;
                }
                let after = next_of(second);
                move_node(second, first);
                first = after;
            }
        }
        self.assert_links();
    }

    /// Reverses the list in place by swapping the links of every node,
    /// including the ghost node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=3);
    /// list.reverse();
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        // SAFETY: the walk visits every node of the cycle exactly once,
        // following the old `next` link (the new `prev`).
        unsafe {
            loop {
                let links = node.as_ptr();
                std::mem::swap(&mut (*links).next, &mut (*links).prev);
                node = (*links).prev;
                if node == ghost {
                    break;
                }
            }
        }
        self.assert_links();
    }

    /// Reverses every consecutive group of exactly `k` elements, from left to
    /// right. A trailing group shorter than `k` is left as it is.
    ///
    /// `k == 0`, `k == 1` and `k` greater than the length leave the list
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_k_group(3);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_k_group(&mut self, k: usize) {
        if k < 2 {
            return;
        }
        let ghost = self.ghost_node();
        // The node right before the group being reversed.
        let mut before = ghost;
        // SAFETY: every node is reached from the ghost node by links of this
        // list, and `move_node` only moves nodes within the current group.
        unsafe {
            loop {
                let group_front = next_of(before);
                let mut ahead = group_front;
                let mut count = 0;
                while count < k && ahead != ghost {
                    ahead = next_of(ahead);
                    count += 1;
                }
                if count < k {
                    break;
                }
                // Move each following node of the group to its front; the old
                // front ends up at the back.
                for _ in 1..k {
                    move_node(next_of(group_front), next_of(before));
                }
                before = group_front;
            }
        }
        self.assert_links();
    }

    /// Releases every element that has a strictly greater element anywhere to
    /// its right, and returns the number of remaining elements.
    ///
    /// The list is scanned from right to left keeping the greatest element
    /// seen so far. Elements equal to it are kept, so the result is
    /// non-increasing from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 13, 3, 8]);
    /// assert_eq!(list.filter_descending(), 2);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![13, 8]);
    /// ```
    pub fn filter_descending(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_from_back(|elem, best| elem >= best)
    }

    /// Releases every element that has a strictly smaller element anywhere to
    /// its right, and returns the number of remaining elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 13, 3, 8]);
    /// assert_eq!(list.filter_ascending(), 3);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 3, 8]);
    /// ```
    pub fn filter_ascending(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_from_back(|elem, best| elem <= best)
    }

    /// Scan from right to left, keeping an element if `keep(elem, best)`
    /// holds for the last kept element `best`, and releasing it otherwise.
    /// The back element is always kept.
    fn retain_from_back<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.is_empty() {
            return 0;
        }
        let ghost = self.ghost_node();
        let mut best = self.back_node();
        let mut kept = 1;
        // SAFETY: `node` walks backward over nodes of this list that have not
        // been released yet, and `best` is never released.
        unsafe {
            let mut node = prev_of(best);
            while node != ghost {
                let prev = prev_of(node);
                if keep(element_of(node), element_of(best)) {
                    best = node;
                    kept += 1;
                } else {
                    drop(self.detach_node(node));
                }
                node = prev;
            }
        }
        self.assert_links();
        kept
    }

    /// Merges the ascending `other` into the ascending `self`, leaving `other`
    /// empty.
    ///
    /// Nodes are relinked and nothing is allocated. The merge is stable:
    /// among equal elements, those of `self` come first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 5]);
    /// let mut other = List::from_iter([2, 4, 6, 7]);
    /// list.merge_sorted(&mut other);
    /// assert!(other.is_empty());
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn merge_sorted(&mut self, other: &mut List<T>)
    where
        T: Ord,
    {
        self.merge_sorted_by(other, |a, b| a.cmp(b))
    }

    /// Like [`List::merge_sorted`], with both lists sorted by `compare`.
    pub fn merge_sorted_by<F>(&mut self, other: &mut List<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let ghost = self.ghost_node();
        let mut merged = self.front_node();
        // SAFETY: `merged` walks over `self`, and the front node of the
        // non-empty `other` is moved from `other` right before it.
        unsafe {
            while merged != ghost && !other.is_empty() {
                let incoming = other.front_node();
                if compare(element_of(incoming), element_of(merged)) == Ordering::Less {
                    move_node(incoming, merged);
                } else {
                    merged = next_of(merged);
                }
            }
        }
        self.append(other);
        self.assert_links();
        other.assert_links();
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    fn vec_of<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn delete_middle() {
        fn test_delete_middle(len: i32, removed: i32) {
            let mut list = List::from_iter(0..len);
            assert!(list.delete_middle());
            let expected: Vec<_> = (0..len).filter(|&x| x != removed).collect();
            assert_eq!(vec_of(&list), expected);
            assert!(list.check_links());
        }
        test_delete_middle(1, 0);
        test_delete_middle(2, 0);
        test_delete_middle(3, 1);
        test_delete_middle(4, 1);
        test_delete_middle(5, 2);
        test_delete_middle(6, 2);
        test_delete_middle(7, 3);

        let mut empty = List::<i32>::new();
        assert!(empty.delete_middle());
        assert!(empty.is_empty());
    }

    #[test]
    fn delete_duplicates() {
        fn test_delete_duplicates(input: &[&str], expected: &[&str]) {
            let mut list = List::from_iter(input.iter().map(|s| s.to_string()));
            assert!(list.delete_duplicates());
            assert_eq!(vec_of(&list), expected);
            assert!(list.check_links());
        }
        test_delete_duplicates(&["a", "a", "b", "c", "c", "c"], &["b"]);
        test_delete_duplicates(&["a", "b", "c"], &["a", "b", "c"]);
        test_delete_duplicates(&["a", "a"], &[]);
        test_delete_duplicates(&["a"], &["a"]);
        test_delete_duplicates(&[], &[]);
        test_delete_duplicates(&["a", "b", "b", "c"], &["a", "c"]);
        test_delete_duplicates(&["a", "a", "b", "b"], &[]);
        // Full string equality, not the first byte only.
        test_delete_duplicates(&["ab", "ac", "ac", "ad"], &["ab", "ad"]);
        // Unsorted input: only adjacent runs collapse.
        test_delete_duplicates(&["a", "a", "b", "a"], &["b", "a"]);
    }

    #[test]
    fn swap_pairs() {
        fn test_swap_pairs(len: i32, expected: &[i32]) {
            let mut list = List::from_iter(1..=len);
            list.swap_pairs();
            assert_eq!(vec_of(&list), expected);
            assert!(list.check_links());
        }
        test_swap_pairs(0, &[]);
        test_swap_pairs(1, &[1]);
        test_swap_pairs(2, &[2, 1]);
        test_swap_pairs(3, &[2, 1, 3]);
        test_swap_pairs(4, &[2, 1, 4, 3]);
        test_swap_pairs(5, &[2, 1, 4, 3, 5]);
    }

    #[test]
    fn reverse() {
        for len in 0..6 {
            let mut list = List::from_iter(0..len);
            list.reverse();
            assert_eq!(vec_of(&list), (0..len).rev().collect::<Vec<_>>());
            assert!(list.check_links());
            list.reverse();
            assert_eq!(list, List::from_iter(0..len));
        }
    }

    #[test]
    fn reverse_k_group() {
        fn test_reverse_k_group(len: i32, k: usize, expected: &[i32]) {
            let mut list = List::from_iter(1..=len);
            list.reverse_k_group(k);
            assert_eq!(vec_of(&list), expected);
            assert!(list.check_links());
        }
        test_reverse_k_group(5, 2, &[2, 1, 4, 3, 5]);
        test_reverse_k_group(6, 3, &[3, 2, 1, 6, 5, 4]);
        test_reverse_k_group(5, 5, &[5, 4, 3, 2, 1]);
        test_reverse_k_group(5, 6, &[1, 2, 3, 4, 5]);
        test_reverse_k_group(5, 1, &[1, 2, 3, 4, 5]);
        test_reverse_k_group(5, 0, &[1, 2, 3, 4, 5]);
        test_reverse_k_group(0, 2, &[]);
        test_reverse_k_group(7, 3, &[3, 2, 1, 6, 5, 4, 7]);
    }

    #[test]
    fn filter_descending() {
        fn test_filter_descending(input: &[i32], expected: &[i32]) {
            let mut list = List::from_iter(input.iter().copied());
            assert_eq!(list.filter_descending(), expected.len());
            assert_eq!(vec_of(&list), expected);
            assert!(list.check_links());
        }
        test_filter_descending(&[5, 2, 13, 3, 8], &[13, 8]);
        test_filter_descending(&[], &[]);
        test_filter_descending(&[1], &[1]);
        test_filter_descending(&[1, 2, 3], &[3]);
        test_filter_descending(&[3, 2, 1], &[3, 2, 1]);
        test_filter_descending(&[2, 2, 1, 2], &[2, 2, 2]);
    }

    #[test]
    fn filter_ascending() {
        let mut list = List::from_iter([3, 1, 2, 2, 5, 4]);
        assert_eq!(list.filter_ascending(), 4);
        assert_eq!(vec_of(&list), vec![1, 2, 2, 4]);
        assert!(list.check_links());
    }

    #[test]
    fn merge_sorted() {
        fn test_merge_sorted(a: &[i32], b: &[i32]) {
            let mut list = List::from_iter(a.iter().copied());
            let mut other = List::from_iter(b.iter().copied());
            list.merge_sorted(&mut other);
            let mut expected: Vec<_> = a.iter().chain(b).copied().collect();
            expected.sort_unstable();
            assert_eq!(vec_of(&list), expected);
            assert!(other.is_empty());
            assert!(other.check_links());
        }
        test_merge_sorted(&[1, 3, 5], &[2, 4]);
        test_merge_sorted(&[], &[2, 4]);
        test_merge_sorted(&[1, 3], &[]);
        test_merge_sorted(&[], &[]);
        test_merge_sorted(&[5, 6], &[0, 1]);
        test_merge_sorted(&[0, 1], &[5, 6]);
        test_merge_sorted(&[1, 1, 2], &[1, 2, 2]);
    }

    #[test]
    fn merge_sorted_is_stable() {
        let mut list = List::from_iter([(1, 'a'), (2, 'a')]);
        let mut other = List::from_iter([(1, 'b'), (2, 'b')]);
        list.merge_sorted_by(&mut other, |x, y| x.0.cmp(&y.0));
        assert_eq!(
            vec_of(&list),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
        );
    }

    #[test]
    fn list_eq_hash_clone() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let list = List::from_iter(0..5);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_eq!(hash_of(&list), hash_of(&cloned));
        assert!(List::from_iter(0..4) < list);
        assert!(list.contains(&3));
        assert!(!list.contains(&5));
    }
}
