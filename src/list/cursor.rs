use crate::error::{Error, Result};
use crate::list::DoublingList;
#[cfg(feature = "render")]
use crate::list::render::Render;
use std::fmt;
use std::fmt::Formatter;

/// The direction of the last successful move of a cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    Next,
    Previous,
}

/// A read-only cursor over a `DoublingList`.
///
/// A cursor sits in a gap between two elements. In a list with length *n*
/// there are *n* + 1 gaps, indexed by 0, 1, ..., *n*; the cursor at gap *i*
/// returns element *i* on [`next`] and element *i* - 1 on [`previous`].
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The cursor is
/// denoted by `|`).
/// ```
/// use doubling_list::DoublingList;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C ]
/// let list = DoublingList::from_iter(['A', 'B', 'C']);
///
/// // Create a cursor at start: [|A B C ] (index = 0)
/// let mut cursor = list.cursor();
/// assert!(!cursor.has_previous());
///
/// // Move forward: [ A|B C ] (index = 1)
/// assert_eq!(cursor.next(), Ok(&'A'));
/// assert_eq!(cursor.next_index(), 1);
///
/// // Move backward, returning the same element: [|A B C ] (index = 0)
/// assert_eq!(cursor.previous(), Ok(&'A'));
/// assert_eq!(cursor.previous_index(), None);
/// ```
///
/// [`next`]: Cursor::next
/// [`previous`]: Cursor::previous
pub struct Cursor<'a, T: 'a> {
    list: &'a DoublingList<T>,
    index: usize,
    last_move: Option<Move>,
}

/// A cursor over a `DoublingList` with editing operations.
///
/// Besides moving like a [`Cursor`], it can [`add`] an element at its gap,
/// and [`remove`] or [`set`] the element returned by the last call to
/// [`next`] or [`previous`].
///
/// The cursor borrows the list mutably, so the list cannot be changed behind
/// its back while it is alive.
///
/// ```compile_fail
/// use doubling_list::DoublingList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublingList::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_mut();
/// list.push_back(4).unwrap();
/// cursor.next().unwrap();
/// ```
///
/// [`add`]: CursorMut::add
/// [`remove`]: CursorMut::remove
/// [`set`]: CursorMut::set
/// [`next`]: CursorMut::next
/// [`previous`]: CursorMut::previous
pub struct CursorMut<'a, T: 'a> {
    list: &'a mut DoublingList<T>,
    index: usize,
    last_move: Option<Move>,
    /// `add` or `remove` was called since the last move
    mutated: bool,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Step over the next element and return its index.
            fn step_next(&mut self) -> Result<usize> {
                if !self.has_next() {
                    return Err(Error::NoSuchElement("next"));
                }
                self.index += 1;
                self.moved(Move::Next);
                Ok(self.index - 1)
            }

            /// Step back over the previous element and return its index.
            fn step_previous(&mut self) -> Result<usize> {
                if !self.has_previous() {
                    return Err(Error::NoSuchElement("previous"));
                }
                self.index -= 1;
                self.moved(Move::Previous);
                Ok(self.index)
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if [`next`](Self::next) would return an element.
            pub fn has_next(&self) -> bool {
                self.index < self.list.len()
            }

            /// Returns `true` if [`previous`](Self::previous) would return an
            /// element.
            pub fn has_previous(&self) -> bool {
                self.index > 0
            }

            /// The index of the element the next call to `next` returns.
            pub fn next_index(&self) -> usize {
                self.index
            }

            /// The index of the element the next call to `previous` returns,
            /// or `None` at the front of the list.
            pub fn previous_index(&self) -> Option<usize> {
                self.index.checked_sub(1)
            }

            /// Temporarily borrow the underlying list.
            pub fn view(&self) -> &DoublingList<T> {
                self.list
            }

            /// Render the block layout of the list with the cursor position
            /// marked by `|`.
            #[cfg(feature = "render")]
            pub fn render(&self) -> Render<'_, T> {
                Render::with_marker(self.view(), self.index)
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.view())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            index: self.index,
            last_move: self.last_move,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a DoublingList<T>, index: usize) -> Self {
        Self {
            list,
            index,
            last_move: None,
        }
    }

    fn moved(&mut self, direction: Move) {
        self.last_move = Some(direction);
    }

    /// Returns the next element and moves the cursor forward.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the cursor is at the back of the list.
    pub fn next(&mut self) -> Result<&'a T> {
        let at = self.step_next()?;
        let list = self.list;
        list.get(at).ok_or(Error::NoSuchElement("next"))
    }

    /// Moves the cursor backward and returns the element it stepped over.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the cursor is at the front of the list.
    pub fn previous(&mut self) -> Result<&'a T> {
        let at = self.step_previous()?;
        let list = self.list;
        list.get(at).ok_or(Error::NoSuchElement("previous"))
    }

    /// The element returned by the last move, if any.
    pub fn last_returned(&self) -> Option<&'a T> {
        let list = self.list;
        match self.last_move? {
            Move::Next => list.get(self.index.checked_sub(1)?),
            Move::Previous => list.get(self.index),
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublingList<T>, index: usize) -> Self {
        Self {
            list,
            index,
            last_move: None,
            mutated: false,
        }
    }

    fn moved(&mut self, direction: Move) {
        self.last_move = Some(direction);
        self.mutated = false;
    }

    /// The index of the element returned by the last move, if it may still
    /// be removed or replaced.
    fn last_returned_index(&self) -> Result<usize> {
        match self.last_move {
            None => Err(Error::IllegalState(
                "next() or previous() must be called before mutating the last returned element",
            )),
            Some(_) if self.mutated => Err(Error::IllegalState(
                "add() or remove() was called since the last call to next() or previous()",
            )),
            Some(Move::Next) => Ok(self.index - 1),
            Some(Move::Previous) => Ok(self.index),
        }
    }

    /// Returns the next element and moves the cursor forward.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the cursor is at the back of the list.
    pub fn next(&mut self) -> Result<&T> {
        let at = self.step_next()?;
        self.list.get(at).ok_or(Error::NoSuchElement("next"))
    }

    /// Moves the cursor backward and returns the element it stepped over.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the cursor is at the front of the list.
    pub fn previous(&mut self) -> Result<&T> {
        let at = self.step_previous()?;
        self.list.get(at).ok_or(Error::NoSuchElement("previous"))
    }

    /// Removes the element returned by the last call to `next` or
    /// `previous`. The cursor keeps pointing at the same gap.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalState`] if neither `next` nor `previous` has been
    /// called, or if `add` or `remove` has been called after the last move.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::{DoublingList, Error};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter(['A', 'B', 'C']);
    /// let mut cursor = list.cursor_mut();
    /// assert!(matches!(cursor.remove(), Err(Error::IllegalState(_))));
    ///
    /// assert_eq!(cursor.next(), Ok(&'A'));
    /// assert_eq!(cursor.remove(), Ok('A'));
    /// assert_eq!(cursor.next_index(), 0);
    /// assert!(matches!(cursor.remove(), Err(Error::IllegalState(_))));
    /// assert_eq!(Vec::from_iter(list), vec!['B', 'C']);
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        let at = self.last_returned_index()?;
        let element = self.list.remove(at)?;
        self.mutated = true;
        if self.last_move == Some(Move::Next) {
            self.index -= 1;
        }
        Ok(element)
    }

    /// Replaces the element returned by the last call to `next` or
    /// `previous`, returning the old one. It may be called repeatedly.
    ///
    /// # Errors
    ///
    /// - [`Error::IllegalState`] under the same conditions as
    ///   [`remove`](CursorMut::remove);
    /// - [`Error::InvalidArgument`] if `element` is `None`.
    pub fn set(&mut self, element: impl Into<Option<T>>) -> Result<T> {
        let at = self.last_returned_index()?;
        self.list.set(at, element)
    }

    /// Inserts `element` at the gap of the cursor, in front of the element
    /// `next` would return. A subsequent `next` is unaffected, and a
    /// subsequent `previous` returns the new element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter(['A', 'B']);
    /// let mut cursor = list.cursor_mut();
    /// cursor.add('X').unwrap();
    /// assert_eq!(cursor.next(), Ok(&'A'));
    /// assert_eq!(cursor.previous(), Ok(&'A'));
    /// assert_eq!(cursor.previous(), Ok(&'X'));
    /// ```
    pub fn add(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.list.insert(self.index, element)?;
        self.index += 1;
        self.mutated = true;
        Ok(())
    }

    /// Downgrade into a read-only cursor at the same gap.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor {
            list: self.list,
            index: self.index,
            last_move: self.last_move,
        }
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}
