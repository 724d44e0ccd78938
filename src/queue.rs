//! The string queue: a [`List`] of owned `String` payloads.

use crate::error::QueueError;
use crate::list::{Element, List};

/// A queue of strings. Every payload is a copy owned by the queue.
pub type Queue = List<String>;

/// A string element detached from a [`Queue`].
pub type QueueElement = Element<String>;

impl List<String> {
    /// Inserts a copy of `s` at the head of the queue.
    ///
    /// The queue never aliases the caller's buffer. If either the node or the
    /// copy cannot be allocated, the error is returned and the queue is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_head("world").unwrap();
    /// q.insert_head("hello").unwrap();
    /// assert_eq!(q.front().map(String::as_str), Some("hello"));
    /// ```
    pub fn insert_head(&mut self, s: &str) -> Result<(), QueueError> {
        self.try_push_front(copy_payload(s)?)
    }

    /// Inserts a copy of `s` at the tail of the queue.
    ///
    /// See [`Queue::insert_head`] for the failure behaviour.
    pub fn insert_tail(&mut self, s: &str) -> Result<(), QueueError> {
        self.try_push_back(copy_payload(s)?)
    }

    /// Unlinks the head element and returns it, or `None` if the queue is
    /// empty.
    ///
    /// If `sp` is given, the payload is copied into it as by
    /// [`QueueElement::copy_to`]. The element itself is not released: the caller
    /// owns it from now on.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.insert_tail("gerbil").unwrap();
    ///
    /// let mut buf = [0xffu8; 4];
    /// let element = q.remove_head(Some(&mut buf)).unwrap();
    /// assert_eq!(element.as_str(), "gerbil");
    /// assert_eq!(&buf, b"ger\0");
    /// assert!(q.remove_head(None).is_none());
    /// ```
    pub fn remove_head(&mut self, sp: Option<&mut [u8]>) -> Option<QueueElement> {
        let element = self.remove_front()?;
        if let Some(buf) = sp {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Unlinks the tail element and returns it, or `None` if the queue is
    /// empty.
    ///
    /// See [`Queue::remove_head`] for how `sp` is filled.
    pub fn remove_tail(&mut self, sp: Option<&mut [u8]>) -> Option<QueueElement> {
        let element = self.remove_back()?;
        if let Some(buf) = sp {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Returns the number of elements, counted by traversal.
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }
}

impl Element<String> {
    /// Returns the payload as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value().as_str()
    }

    /// Copies the payload into `buf` as a NUL-terminated byte string.
    ///
    /// At most `buf.len() - 1` payload bytes are copied, the rest of the buffer
    /// is filled with NUL bytes, so the last byte is always NUL. A zero-length
    /// buffer is left untouched. Returns the number of payload bytes copied.
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let capacity = match buf.len().checked_sub(1) {
            Some(capacity) => capacity,
            None => return 0,
        };
        let bytes = self.as_str().as_bytes();
        let copied = bytes.len().min(capacity);
        let (head, tail) = buf.split_at_mut(copied);
        head.copy_from_slice(&bytes[..copied]);
        tail.iter_mut().for_each(|byte| *byte = 0);
        copied
    }
}

fn copy_payload(s: &str) -> Result<String, QueueError> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}
