//! Locked-queue backend with lazy deletion keyed by `(key, value)`.
//!
//! The backing structure is a mutex-guarded binary heap: a thread-safe
//! priority queue that could block producers/consumers in general use, but
//! is driven here exclusively in non-blocking "fail if empty" mode. On top
//! of it sits the same condemn-and-skip discipline as
//! [`BinaryQueue`](crate::BinaryQueue), except that condemned entries are
//! identified by the raw `(key, value)` pair rather than a stamp.
//!
//! Pair keying is approximate: if two live entries ever share both key and
//! value, removing one also condemns the other, and re-inserting a
//! condemned pair resurrects its stale twin. Searches never hold two live
//! entries for one vertex, so the ambiguity does not arise there.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

use crate::traits::{Node, PriorityQueue, QueueError};

/// Minimum-first queue safe for concurrent producers and consumers.
///
/// `get` is non-blocking and returns `None` on empty rather than waiting.
struct LockedHeap<T: Ord> {
    inner: Mutex<BinaryHeap<Reverse<T>>>,
}

impl<T: Ord> LockedHeap<T> {
    fn new() -> Self {
        Self {
            inner: Mutex::new(BinaryHeap::new()),
        }
    }

    fn put(&self, item: T) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Reverse(item));
    }

    fn get(&self) -> Option<T> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .map(|Reverse(item)| item)
    }
}

/// Lazy-deletion wrapper over a locked priority queue.
///
/// Entries are ordered by `(key, value)`, so `V` must be `Ord`: among
/// equal keys, smaller values surface first.
pub struct SyncQueue<K: Ord, V: Ord> {
    pq: LockedHeap<(K, V)>,
    removed: HashSet<(K, V)>,
    live: usize,
}

impl<K, V> Default for SyncQueue<K, V>
where
    K: Ord + Copy + Hash,
    V: Ord + Copy + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SyncQueue<K, V>
where
    K: Ord + Copy + Hash,
    V: Ord + Copy + Hash,
{
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pq: LockedHeap::new(),
            removed: HashSet::new(),
            live: 0,
        }
    }

    /// Condemn `node`'s entry without extracting it.
    pub fn remove(&mut self, node: &Node<K, V>) -> Result<(), QueueError> {
        if !self.removed.insert((node.key, node.value)) {
            return Err(QueueError::InvalidHandle);
        }
        self.live = self.live.saturating_sub(1);
        Ok(())
    }
}

impl<K, V> PriorityQueue<K, V> for SyncQueue<K, V>
where
    K: Ord + Copy + Hash,
    V: Ord + Copy + Hash,
{
    fn len(&self) -> usize {
        self.live
    }

    fn insert(&mut self, key: K, value: V) -> Node<K, V> {
        let entry = (key, value);
        // Re-inserting a condemned pair clears its mark (and thereby
        // resurrects the stale physical twin).
        self.removed.remove(&entry);
        self.pq.put(entry);
        self.live += 1;
        Node {
            key,
            value,
            slot: usize::MAX,
            stamp: 0,
        }
    }

    /// Extract-then-reinsert, bypassing the live count and the condemned
    /// set: the same physical entry goes straight back, so no twin is
    /// created. Stale entries surfacing on the way are purged.
    fn minimum(&mut self) -> Result<Node<K, V>, QueueError> {
        loop {
            let (key, value) = self.pq.get().ok_or(QueueError::Empty)?;
            if self.removed.remove(&(key, value)) {
                continue;
            }
            self.pq.put((key, value));
            return Ok(Node {
                key,
                value,
                slot: usize::MAX,
                stamp: 0,
            });
        }
    }

    fn remove_minimum(&mut self) -> Result<Node<K, V>, QueueError> {
        loop {
            let (key, value) = self.pq.get().ok_or(QueueError::Empty)?;
            if self.removed.remove(&(key, value)) {
                continue;
            }
            // Saturating: a resurrected twin can surface after the live
            // count already reached zero.
            self.live = self.live.saturating_sub(1);
            return Ok(Node {
                key,
                value,
                slot: usize::MAX,
                stamp: 0,
            });
        }
    }

    fn decrease_key(&mut self, node: &mut Node<K, V>, new_key: K) -> Result<(), QueueError> {
        if self.removed.contains(&(node.key, node.value)) {
            return Err(QueueError::InvalidHandle);
        }
        if new_key >= node.key {
            return Err(QueueError::KeyNotDecreased);
        }
        self.remove(node)?;
        self.insert(new_key, node.value);
        node.key = new_key;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_drain() {
        let mut q = SyncQueue::new();
        for k in [5, 3, 7, 1, 4] {
            q.insert(k, k * 10);
        }
        let mut keys = Vec::new();
        while !q.is_empty() {
            keys.push(q.remove_minimum().unwrap().key());
        }
        assert_eq!(keys, vec![1, 3, 4, 5, 7]);
        assert_eq!(q.remove_minimum().unwrap_err(), QueueError::Empty);
    }

    #[test]
    fn equal_keys_order_by_value() {
        let mut q = SyncQueue::new();
        q.insert(1, 'c');
        q.insert(1, 'a');
        q.insert(1, 'b');
        assert_eq!(q.remove_minimum().unwrap().value(), 'a');
        assert_eq!(q.remove_minimum().unwrap().value(), 'b');
        assert_eq!(q.remove_minimum().unwrap().value(), 'c');
    }

    #[test]
    fn minimum_keeps_live_count() {
        let mut q = SyncQueue::new();
        q.insert(2, 'b');
        q.insert(1, 'a');
        let min = q.minimum().unwrap();
        assert_eq!((min.key(), min.value()), (1, 'a'));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn decrease_key_supersedes_old_entry() {
        let mut q = SyncQueue::new();
        let mut h = q.insert(10, 'a');
        q.insert(5, 'b');
        q.decrease_key(&mut h, 2).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(q.remove_minimum().unwrap().value(), 'a');
        assert_eq!(q.remove_minimum().unwrap().value(), 'b');
        assert!(q.is_empty());
        assert_eq!(q.remove_minimum().unwrap_err(), QueueError::Empty);
    }

    #[test]
    fn remove_condemns_by_pair() {
        let mut q = SyncQueue::new();
        let a = q.insert(1, 'a');
        q.insert(2, 'b');
        q.remove(&a).unwrap();
        assert_eq!(q.len(), 1);
        // Condemning the same pair twice is an invalid handle.
        assert_eq!(q.remove(&a).unwrap_err(), QueueError::InvalidHandle);
        assert_eq!(q.remove_minimum().unwrap().value(), 'b');
    }

    #[test]
    fn key_increase_rejected() {
        let mut q = SyncQueue::new();
        let mut h = q.insert(3, 'a');
        assert_eq!(
            q.decrease_key(&mut h, 4).unwrap_err(),
            QueueError::KeyNotDecreased
        );
        assert_eq!(
            q.decrease_key(&mut h, 3).unwrap_err(),
            QueueError::KeyNotDecreased
        );
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn reinsert_resurrects_condemned_twin() {
        // The documented pair-keying hazard: insert after remove clears the
        // mark, so the stale physical entry becomes extractable again.
        let mut q = SyncQueue::new();
        let a = q.insert(1, 'a');
        q.remove(&a).unwrap();
        q.insert(1, 'a');
        assert_eq!(q.len(), 1);
        assert_eq!(q.remove_minimum().unwrap().value(), 'a');
        // The twin surfaces as a second extraction of the same pair.
        assert_eq!(q.remove_minimum().unwrap().value(), 'a');
    }
}
