//! Two-stack FIFO queue driving breadth-first phases.
//!
//! `push_back` lands on the `tail` stack; `pop_front` serves from the `head`
//! stack. When `head` runs dry the `tail` stack is reversed into it, so each
//! element crosses once and both operations are amortized O(1).

/// FIFO built from two stacks.
#[derive(Clone, Debug)]
pub struct FifoQueue<T> {
    head: Vec<T>,
    tail: Vec<T>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            head: Vec::new(),
            tail: Vec::new(),
        }
    }

    /// Enqueue at the logical tail.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Dequeue from the logical head; `None` when empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_empty() {
            std::mem::swap(&mut self.head, &mut self.tail);
            self.head.reverse();
        }
        self.head.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.tail.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    pub fn clear(&mut self) {
        self.head.clear();
        self.tail.clear();
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tail.extend(iter);
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
