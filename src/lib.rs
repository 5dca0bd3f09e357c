//! A growable ring-buffer double-ended queue.
//!
//! [`Deque`] keeps its elements in a single contiguous backing buffer with
//! independent front and back cursors; logical content may wrap past the end
//! of the buffer back to index 0. Pushes and pops at both ends are amortized
//! O(1), and the buffer doubles in capacity whenever an insertion finds it
//! full, preserving logical order across the move. Capacity never shrinks.
//!
//! # Examples
//! ```
//! use ringdeque::Deque;
//!
//! let mut deque = Deque::with_capacity(2)?;
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_back(3); // forces one growth, to capacity 4
//! assert_eq!(deque.capacity(), 4);
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.pop_front(), Some(2));
//! assert_eq!(deque.pop_front(), Some(3));
//! assert!(deque.is_empty());
//! # Ok::<(), ringdeque::CapacityError>(())
//! ```
//!
//! # Feature flags
//! - `serde`: `Serialize` and `Deserialize` impls for [`Deque`].

mod deque;
mod iter;


pub use deque::{CapacityError, Deque};
pub use iter::{IntoIter, Iter, IterMut};
