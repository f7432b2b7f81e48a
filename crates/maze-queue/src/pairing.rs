//! Pairing-heap backend with true decrease-key.
//!
//! A pairing heap is a heap-ordered multiway tree: insert and meld are
//! O(1), extract-min pays for them with a two-pass pairing merge of the
//! root's children (O(log n) amortized), and decrease-key cuts the entry's
//! subtree and melds it back with the root (O(1) amortized). No lazy
//! deletion is needed — entries move, they are never superseded.
//!
//! Nodes live in a slot arena indexed by `usize`, with a free list for
//! reuse. Every allocation gets a fresh stamp, so a handle to an extracted
//! entry is detected even after its slot has been recycled.

use crate::traits::{Node, PriorityQueue, QueueError};

struct Slot<K, V> {
    key: K,
    value: V,
    child: Option<usize>,
    sibling: Option<usize>,
    /// Parent if this is the first child, previous sibling otherwise.
    prev: Option<usize>,
    stamp: u64,
    live: bool,
}

/// Mergeable heap with O(1) amortized decrease-key.
pub struct PairingHeap<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    root: Option<usize>,
    len: usize,
    stamp: u64,
}

impl<K: Ord + Copy, V: Copy> Default for PairingHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy, V: Copy> PairingHeap<K, V> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            stamp: 0,
        }
    }

    /// Link two roots, returning the smaller-key one; ties keep `a` on top.
    fn meld(&mut self, a: usize, b: usize) -> usize {
        let (win, lose) = if self.slots[a].key <= self.slots[b].key {
            (a, b)
        } else {
            (b, a)
        };
        let first = self.slots[win].child;
        self.slots[lose].sibling = first;
        self.slots[lose].prev = Some(win);
        if let Some(c) = first {
            self.slots[c].prev = Some(lose);
        }
        self.slots[win].child = Some(lose);
        win
    }

    /// Two-pass pairing merge of a sibling list: pair left to right, then
    /// fold the pairs right to left.
    fn merge_pairs(&mut self, first: usize) -> usize {
        let mut pairs: Vec<usize> = Vec::new();
        let mut cur = Some(first);
        while let Some(a) = cur {
            let next_a = self.slots[a].sibling;
            self.slots[a].sibling = None;
            self.slots[a].prev = None;
            match next_a {
                Some(b) => {
                    let next = self.slots[b].sibling;
                    self.slots[b].sibling = None;
                    self.slots[b].prev = None;
                    pairs.push(self.meld(a, b));
                    cur = next;
                }
                None => {
                    pairs.push(a);
                    cur = None;
                }
            }
        }
        let mut root = match pairs.pop() {
            Some(r) => r,
            None => first,
        };
        while let Some(p) = pairs.pop() {
            root = self.meld(p, root);
        }
        root
    }

    /// Detach `i` from its parent's child list.
    fn cut(&mut self, i: usize) {
        let Some(p) = self.slots[i].prev else { return };
        let sib = self.slots[i].sibling;
        if self.slots[p].child == Some(i) {
            self.slots[p].child = sib;
        } else {
            self.slots[p].sibling = sib;
        }
        if let Some(s) = sib {
            self.slots[s].prev = Some(p);
        }
        self.slots[i].prev = None;
        self.slots[i].sibling = None;
    }

    fn check_handle(&self, node: &Node<K, V>) -> Result<(), QueueError> {
        let i = node.slot;
        if i >= self.slots.len() || !self.slots[i].live || self.slots[i].stamp != node.stamp {
            return Err(QueueError::InvalidHandle);
        }
        Ok(())
    }
}

impl<K: Ord + Copy, V: Copy> PriorityQueue<K, V> for PairingHeap<K, V> {
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, key: K, value: V) -> Node<K, V> {
        self.stamp += 1;
        let stamp = self.stamp;
        let slot = Slot {
            key,
            value,
            child: None,
            sibling: None,
            prev: None,
            stamp,
            live: true,
        };
        let i = match self.free.pop() {
            Some(i) => {
                self.slots[i] = slot;
                i
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        self.root = Some(match self.root {
            Some(r) => self.meld(r, i),
            None => i,
        });
        self.len += 1;
        Node {
            key,
            value,
            slot: i,
            stamp,
        }
    }

    fn minimum(&mut self) -> Result<Node<K, V>, QueueError> {
        let r = self.root.ok_or(QueueError::Empty)?;
        let s = &self.slots[r];
        Ok(Node {
            key: s.key,
            value: s.value,
            slot: r,
            stamp: s.stamp,
        })
    }

    fn remove_minimum(&mut self) -> Result<Node<K, V>, QueueError> {
        let r = self.root.ok_or(QueueError::Empty)?;
        let node = Node {
            key: self.slots[r].key,
            value: self.slots[r].value,
            slot: r,
            stamp: self.slots[r].stamp,
        };
        let child = self.slots[r].child;
        self.slots[r].child = None;
        self.slots[r].live = false;
        self.free.push(r);
        self.root = match child {
            Some(c) => Some(self.merge_pairs(c)),
            None => None,
        };
        self.len -= 1;
        Ok(node)
    }

    fn decrease_key(&mut self, node: &mut Node<K, V>, new_key: K) -> Result<(), QueueError> {
        self.check_handle(node)?;
        let i = node.slot;
        if new_key >= self.slots[i].key {
            return Err(QueueError::KeyNotDecreased);
        }
        self.slots[i].key = new_key;
        node.key = new_key;
        if self.root != Some(i) {
            self.cut(i);
            self.root = Some(match self.root {
                Some(r) => self.meld(r, i),
                None => i,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_drain() {
        let mut heap = PairingHeap::new();
        for k in [5, 3, 7, 1, 4] {
            heap.insert(k, k * 10);
        }
        assert_eq!(heap.len(), 5);
        let mut keys = Vec::new();
        while !heap.is_empty() {
            keys.push(heap.remove_minimum().unwrap().key());
        }
        assert_eq!(keys, vec![1, 3, 4, 5, 7]);
        assert_eq!(heap.remove_minimum().unwrap_err(), QueueError::Empty);
    }

    #[test]
    fn minimum_is_a_peek() {
        let mut heap = PairingHeap::new();
        heap.insert(2, 'b');
        heap.insert(1, 'a');
        let min = heap.minimum().unwrap();
        assert_eq!((min.key(), min.value()), (1, 'a'));
        assert_eq!(heap.len(), 2);
        // Still extractable afterwards.
        assert_eq!(heap.remove_minimum().unwrap().key(), 1);
    }

    #[test]
    fn decrease_key_reorders() {
        let mut heap = PairingHeap::new();
        let mut h = heap.insert(10, 'a');
        heap.insert(5, 'b');
        heap.decrease_key(&mut h, 1).unwrap();
        assert_eq!(h.key(), 1);
        let min = heap.remove_minimum().unwrap();
        assert_eq!((min.key(), min.value()), (1, 'a'));
        assert_eq!(heap.remove_minimum().unwrap().value(), 'b');
    }

    #[test]
    fn decrease_key_on_root() {
        let mut heap = PairingHeap::new();
        let mut h = heap.insert(3, 'a');
        heap.insert(7, 'b');
        heap.decrease_key(&mut h, 1).unwrap();
        assert_eq!(heap.minimum().unwrap().key(), 1);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn key_increase_rejected() {
        let mut heap = PairingHeap::new();
        let mut h = heap.insert(3, 'a');
        assert_eq!(
            heap.decrease_key(&mut h, 5).unwrap_err(),
            QueueError::KeyNotDecreased
        );
        // Equal keys are rejected too.
        assert_eq!(
            heap.decrease_key(&mut h, 3).unwrap_err(),
            QueueError::KeyNotDecreased
        );
        assert_eq!(h.key(), 3);
    }

    #[test]
    fn stale_handle_detected() {
        let mut heap = PairingHeap::new();
        let mut h = heap.insert(1, 'a');
        heap.remove_minimum().unwrap();
        assert_eq!(
            heap.decrease_key(&mut h, 0).unwrap_err(),
            QueueError::InvalidHandle
        );
    }

    #[test]
    fn recycled_slot_rejects_old_handle() {
        let mut heap = PairingHeap::new();
        let mut old = heap.insert(1, 'a');
        heap.remove_minimum().unwrap();
        // Reuses the freed slot but with a fresh stamp.
        let fresh = heap.insert(2, 'b');
        assert_eq!(fresh.slot, old.slot);
        assert_eq!(
            heap.decrease_key(&mut old, 0).unwrap_err(),
            QueueError::InvalidHandle
        );
        assert_eq!(heap.minimum().unwrap().value(), 'b');
    }

    #[test]
    fn deep_decrease_key_chain() {
        // Exercise cut paths: build a non-trivial tree, then promote a leaf.
        let mut heap = PairingHeap::new();
        let mut handles: Vec<_> = (0..32).map(|k| heap.insert(k + 100, k)).collect();
        // Pop a few to force child merging.
        for _ in 0..4 {
            heap.remove_minimum().unwrap();
        }
        let mut h = handles.pop().unwrap();
        heap.decrease_key(&mut h, 0).unwrap();
        let min = heap.remove_minimum().unwrap();
        assert_eq!((min.key(), min.value()), (0, 31));
    }
}
