//! LRU List Module
//!
//! Ordered key-value storage where iteration order is recency order.

use std::collections::HashMap;

// == Node ==
#[derive(Debug)]
struct Node<T> {
    key: String,
    value: T,
    /// Next older node
    prev: Option<usize>,
    /// Next newer node
    next: Option<usize>,
}

// == LRU List ==
/// Hash map plus an intrusive doubly linked list over a slab.
///
/// - Head = least recently used (oldest)
/// - Tail = most recently used (newest)
///
/// Lookups, touches, removals and eviction of the oldest entry are all O(1).
/// Freed slab slots are recycled through a free list.
#[derive(Debug)]
pub struct LruList<T> {
    /// Slab of nodes, `None` for free slots
    nodes: Vec<Option<Node<T>>>,
    /// Indices of free slots
    free: Vec<usize>,
    /// Key to slab index
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for LruList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LruList<T> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    // == Length ==
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Get ==
    /// Returns the value for `key` without changing its position.
    pub fn get(&self, key: &str) -> Option<&T> {
        let idx = *self.index.get(key)?;
        self.node(idx).map(|node| &node.value)
    }

    // == Push Newest ==
    /// Inserts `key` at the newest end.
    ///
    /// An existing entry for `key` is removed first and its value returned, so
    /// overwriting always lands at the newest position.
    pub fn push_newest(&mut self, key: String, value: T) -> Option<T> {
        let previous = self.remove(&key);

        let node = Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        self.index.insert(key, idx);
        self.link_newest(idx);
        previous
    }

    // == Touch ==
    /// Marks `key` as most recently used.
    ///
    /// Returns false if the key is not present.
    pub fn touch(&mut self, key: &str) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };
        if self.tail != Some(idx) {
            self.unlink(idx);
            self.link_newest(idx);
        }
        true
    }

    // == Remove ==
    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let idx = self.index.remove(key)?;
        self.release(idx).map(|node| node.value)
    }

    // == Pop Oldest ==
    /// Removes and returns the least recently used entry.
    pub fn pop_oldest(&mut self) -> Option<(String, T)> {
        let idx = self.head?;
        let node = self.release(idx)?;
        self.index.remove(&node.key);
        Some((node.key, node.value))
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    // == Iter ==
    /// Iterates entries from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    // == Internals ==
    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    /// Detaches a node from the list and frees its slot.
    fn release(&mut self, idx: usize) -> Option<Node<T>> {
        self.unlink(idx);
        let node = self.nodes.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    fn unlink(&mut self, idx: usize) {
        let Some(node) = self.node_mut(idx) else {
            return;
        };
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev {
            Some(p) => {
                if let Some(prev_node) = self.node_mut(p) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(next_node) = self.node_mut(n) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn link_newest(&mut self, idx: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(idx) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(t) => {
                if let Some(tail_node) = self.node_mut(t) {
                    tail_node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }
}

// == Iterator ==
/// Iterator over `(key, value)` pairs, oldest first.
pub struct Iter<'a, T> {
    list: &'a LruList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key.as_str(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LruList<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
