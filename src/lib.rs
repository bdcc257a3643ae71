//! This crate provides a sequential list stored as a chain of blocks whose
//! capacities double, the [`DoublingList`].
//!
//! Elements are kept packed at the front of each block. Inserting into a
//! full block borrows a free slot from the nearest block that has one, so
//! only the elements between the insertion point and that block move. A new
//! block is allocated only when every block is full, and the chain shrinks
//! again once the list falls to a quarter of its capacity.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use doubling_list::DoublingList;
//! use std::iter::FromIterator;
//!
//! let mut list = DoublingList::from_iter(["A", "B", "C"]);
//! assert_eq!(list.block_count(), 2);
//!
//! list.insert(0, "X").unwrap(); // [X, A, B, C]
//! assert_eq!(list.block_count(), 3);
//! assert_eq!(list.get(1), Some(&"A"));
//!
//! assert_eq!(list.remove(2), Ok("B")); // [X, A, C]
//! assert_eq!(Vec::from_iter(list), vec!["X", "A", "C"]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    HEAD         block #0      block #1          block #2                TAIL
//! ╔════════╗    ┌──────────┐  ┌──────────┐  ┌──────────────────┐    ╔════════╗
//! ║  next  ║ ─→ │ A        │→ │ B  C     │→ │ D  E  F  —       │ ─→ ║        ║
//! ║        ║ ←─ │          │← │          │← │                  │ ←─ ║  prev  ║
//! ╚════════╝    └──────────┘  └──────────┘  └──────────────────┘    ╚════════╝
//!  capacity 0    capacity 1    capacity 2       capacity 4          capacity 0
//! ```
//! The `DoublingList` contains:
//! - an arena of blocks. The two sentinels `HEAD` and `TAIL` come first,
//!   followed by the real blocks in the order they were allocated;
//! - the number of elements `len`;
//! - the number of blocks `block_count` and the total number of slots
//!   `capacity`, which is always 2<sup>`block_count`</sup> - 1.
//!
//! Each block holds:
//! - a fixed array of 2<sup>*k*</sup> slots, where *k* is its position in the
//!   chain. The first `occupied` slots hold elements and the rest are empty;
//! - the ids of its neighbours `prev` and `next`.
//!
//! The sentinels have no slots, so they always look full to the shifting
//! algorithms and bound every walk along the chain.
//!
//! Initially, the chain has no real blocks and the sentinels point to each
//! other. Removing the last element returns the list to this state.
//!
//! In convention, in a list with length *n*, the elements are indexed by 0,
//! 1, ..., *n* - 1 in chain order, skipping empty slots.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended, exact-size and fused iterators. Blocks left empty by removals
//! are skipped. [`IterMut`] provides mutability of the elements (but not the
//! block structure of the list).
//!
//! ## Examples
//!
//! ```
//! use doubling_list::DoublingList;
//! use std::iter::FromIterator;
//!
//! let mut list = DoublingList::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] walk a list in
//! both directions. In a list with length *n*, there are *n* + 1 positions for
//! a cursor, indexed by 0, 1, ..., *n*. A cursor at position *i* sits between
//! elements *i* - 1 and *i*: [`next`] returns element *i* and moves forward,
//! [`previous`] moves backward and returns element *i* - 1.
//!
//! Both cursors borrow the list, so the list cannot change behind a cursor.
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] edits the list around its position.
//! - [`add`]: insert a new element in front of the cursor;
//! - [`remove`]: remove the element returned by the last move;
//! - [`set`]: replace the element returned by the last move.
//!
//! `remove` and `set` need a preceding [`next`] or [`previous`], and are
//! rejected with [`Error::IllegalState`] once `add` or `remove` has been
//! called after that move.
//!
//! ## Examples
//!
//! ```
//! use doubling_list::DoublingList;
//! use std::iter::FromIterator;
//!
//! let mut list = DoublingList::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_mut();
//!
//! cursor.add(5).unwrap(); // becomes [5, 1, 2, 3, 4], before 1
//! assert_eq!(cursor.next(), Ok(&1));
//! assert_eq!(cursor.next(), Ok(&2));
//!
//! assert_eq!(cursor.remove(), Ok(2)); // becomes [5, 1, 3, 4], before 3
//! assert!(cursor.remove().is_err());
//!
//! assert_eq!(cursor.next(), Ok(&3));
//! assert_eq!(cursor.set(6), Ok(3)); // becomes [5, 1, 6, 4]
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 6, 4]);
//! ```
//!
//! # Rendering
//!
//! With the `render` feature (enabled by default), [`DoublingList::render`]
//! prints the block layout for debugging:
//!
//! ```
//! # #[cfg(feature = "render")]
//! # {
//! use doubling_list::DoublingList;
//! use std::iter::FromIterator;
//!
//! let list = DoublingList::from_iter(["A", "B", "C", "D"]);
//! assert_eq!(list.render().to_string(), "[(A), (B, C), (D, —, —, —)]");
//! # }
//! ```
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`next`]: crate::list::cursor::CursorMut::next
//! [`previous`]: crate::list::cursor::CursorMut::previous
//! [`add`]: crate::list::cursor::CursorMut::add
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`set`]: crate::list::cursor::CursorMut::set

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[cfg(feature = "render")]
#[doc(inline)]
pub use list::render::Render;
#[doc(inline)]
pub use list::DoublingList;

mod error;
pub mod list;
