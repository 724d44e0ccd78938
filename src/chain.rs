//! A chain of queues, used to merge several sorted queues into one.

use crate::list::iterator::Iter;
use crate::list::List;
use crate::queue::Queue;

/// One entry of a [`Chain`]: a queue, its id and its element count.
///
/// `size` is kept equal to the length of the queue: the queue can only be
/// mutated through [`QueueContext::update`], which recounts it.
#[derive(Debug)]
pub struct QueueContext {
    id: usize,
    queue: Queue,
    size: usize,
}

impl QueueContext {
    fn new(id: usize) -> Self {
        Self {
            id,
            queue: Queue::new(),
            size: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Runs `f` on the queue and recounts its size afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Chain;
    ///
    /// let mut chain = Chain::new();
    /// let id = chain.add_queue();
    /// let context = chain.get_mut(id).unwrap();
    /// context.update(|q| q.insert_tail("a")).unwrap();
    /// assert_eq!(context.size(), 1);
    /// ```
    pub fn update<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Queue) -> R,
    {
        let result = f(&mut self.queue);
        self.size = self.queue.len();
        result
    }
}

/// A cyclic list of queue contexts.
#[derive(Debug, Default)]
pub struct Chain {
    contexts: List<QueueContext>,
    next_id: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new empty queue to the chain and returns its id.
    pub fn add_queue(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.contexts.push_back(QueueContext::new(id));
        id
    }

    /// Number of queues in the chain.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&QueueContext> {
        self.contexts.iter().find(|context| context.id == id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut QueueContext> {
        self.contexts.iter_mut().find(|context| context.id == id)
    }

    pub fn iter(&self) -> Iter<'_, QueueContext> {
        self.contexts.iter()
    }

    /// Merges every queue of the chain into the first one.
    ///
    /// Each queue must already be sorted in ascending order. The nodes are
    /// relinked and nothing is allocated; the other queues stay in the chain,
    /// empty. Returns the size of the merged queue, or `0` for an empty chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Chain;
    ///
    /// let mut chain = Chain::new();
    /// for values in &[["1", "3"], ["0", "2"]] {
    ///     let id = chain.add_queue();
    ///     for value in values {
    ///         chain.get_mut(id).unwrap().update(|q| q.insert_tail(value)).unwrap();
    ///     }
    /// }
    ///
    /// assert_eq!(chain.merge_k_sorted(), 4);
    /// let merged: Vec<_> = chain.get(0).unwrap().queue().iter().cloned().collect();
    /// assert_eq!(merged, ["0", "1", "2", "3"]);
    /// assert_eq!(chain.get(1).unwrap().size(), 0);
    /// ```
    pub fn merge_k_sorted(&mut self) -> usize {
        let mut contexts = self.contexts.iter_mut();
        let first = match contexts.next() {
            Some(first) => first,
            None => return 0,
        };
        for context in contexts {
            first.queue.merge_sorted(&mut context.queue);
            context.size = 0;
        }
        first.size = first.queue.len();
        first.size
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a QueueContext;
    type IntoIter = Iter<'a, QueueContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
