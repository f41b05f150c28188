//! Meldable priority queues
//!
//! This crate provides a family of tree-shaped min-heaps over a
//! caller-supplied strict weak order, sharing one topology toolkit:
//! meld, in-place node cut, subtree cut, pairing-phase and batch
//! builds, destructive shred cleanup, and (for the parent-linked
//! variants) handle-based traversal that survives mid-iteration
//! deletion.
//!
//! # Variants
//!
//! - [`LeftistHeap`]: two child links per node; O(log n) push, pop,
//!   and merge, O(N) batch build. No handles, no traversal.
//! - [`MinDistHeap`]: leaf-distance balanced tree with parent links;
//!   O(log n) operations plus `decrease`, `readjust`, in-place
//!   `remove`, and bidirectional cursors.
//! - [`PairingHeap`]: two links per node; O(1) push and merge,
//!   O(log n) amortized pop. No handles, no traversal.
//! - [`AddressablePairingHeap`]: three links per node; O(1) push,
//!   merge, and `decrease`, plus `readjust`, in-place `remove`, and
//!   bidirectional cursors.
//!
//! Every variant implements [`Heap`]; the two cursor-bearing variants
//! additionally implement [`AddressableHeap`].
//!
//! # Example
//!
//! ```rust
//! use meldable_heaps::{AddressableHeap, Heap, MinDistHeap};
//!
//! let mut heap = MinDistHeap::<i32>::new();
//! heap.bulk_push([5, 1, 3]);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! let handle = heap.push(7);
//! *heap.get_mut(handle).unwrap() = 0;
//! heap.decrease(handle);
//! assert_eq!(heap.pop(), Some(0));
//! assert_eq!(heap.pop(), Some(1));
//! ```
//!
//! # Ordering
//!
//! The order is supplied as a marker type implementing
//! [`Compare`]; [`NaturalOrder`] (ascending [`Ord`]) is the default.
//! Because a comparator is a type and never a value, two heaps of the
//! same type always agree on the order and melding needs no run-time
//! compatibility check.

pub mod addressable;
pub mod leftist;
pub mod mindist;
pub mod pairing;
pub mod pointer_set;
pub mod traits;

pub use addressable::AddressablePairingHeap;
pub use leftist::LeftistHeap;
pub use mindist::MinDistHeap;
pub use pairing::PairingHeap;
pub use traits::{AddressableHeap, Compare, Heap, HeapError, NaturalOrder};
