//! **maze-queue** — min-priority queues with decrease-key support.
//!
//! Three interchangeable backends implement the same [`PriorityQueue`]
//! contract over `(key, value)` entries:
//!
//! | Backend | Strategy | decrease-key | extract-min |
//! |---|---|---|---|
//! | [`PairingHeap`] | heap-ordered tree, arena slots | O(1) amortized (cut + meld) | O(log n) amortized |
//! | [`BinaryQueue`] | binary heap + lazy deletion by insertion stamp | O(log n) (mark + reinsert) | O(log n) amortized |
//! | [`SyncQueue`] | locked binary heap + lazy deletion by `(key, value)` | O(log n) (mark + reinsert) | O(log n) amortized |
//!
//! The lazy backends never physically delete a superseded entry: it is
//! condemned in a side set and discarded when it resurfaces during
//! extraction. Either way, a value has at most one logically live entry at
//! any time, and superseded entries are never observable through the trait.
//!
//! Entries are handed back as [`Node`] handles. A handle is an index into
//! the backend's bookkeeping, not a reference: passing it to
//! [`decrease_key`](PriorityQueue::decrease_key) updates both the queue and
//! the handle's own key, and a handle whose entry is gone fails with
//! [`QueueError::InvalidHandle`] instead of corrupting counts.

pub mod binary;
pub mod pairing;
pub mod sync;
pub mod traits;

pub use binary::BinaryQueue;
pub use pairing::PairingHeap;
pub use sync::SyncQueue;
pub use traits::{Node, PriorityQueue, QueueError};
