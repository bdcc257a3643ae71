use std::fmt::{Debug, Formatter};

use crate::error::{Error, Result};
use crate::list::block::{Block, BlockId, Locator};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;
#[cfg(feature = "render")]
pub mod render;

mod algorithms;
mod block;

/// The `DoublingList` is a sequential list stored in a chain of blocks,
/// where the *k*-th block ever allocated holds exactly 2<sup>*k*</sup>
/// slots.
///
/// Each block keeps its elements packed at the front of its slots. Inserting
/// into a full block borrows a free slot from the nearest block that has one,
/// shifting only the elements in between, so most insertions move a bounded
/// number of elements instead of the whole tail of the list.
///
/// The `DoublingList` contains:
/// - an arena `blocks` holding the two sentinels (head and tail) followed by
///   the real blocks in creation order, linked to their neighbours by
///   arena indices;
/// - the number of elements `len`;
/// - the total number of slots `capacity`, always 2<sup>`block_count`</sup> - 1.
///
/// Blocks are only appended in front of the tail sentinel and are all
/// dropped together on a reset, so the arena order of the real blocks is
/// also their chain order.
///
/// # Naming Conventions
///
/// - a *hole* is a slot that has been reserved (its block already counts it
///   as occupied) but not written yet;
/// - *room* is a block with at least one free slot.
pub struct DoublingList<T> {
    blocks: Vec<Block<T>>,
    len: usize,
    capacity: usize,
    block_count: usize,
}

// private methods
impl<T> DoublingList<T> {
    #[inline]
    pub(crate) fn block(&self, id: BlockId) -> &Block<T> {
        &self.blocks[id.0]
    }

    #[inline]
    fn block_mut(&mut self, id: BlockId) -> &mut Block<T> {
        &mut self.blocks[id.0]
    }

    #[inline]
    pub(crate) fn first_block(&self) -> BlockId {
        self.block(BlockId::HEAD).next
    }

    #[inline]
    pub(crate) fn last_block(&self) -> BlockId {
        self.block(BlockId::TAIL).prev
    }

    fn slot(&self, at: Locator) -> &Option<T> {
        &self.block(at.block).slots[at.offset]
    }

    fn slot_mut(&mut self, at: Locator) -> &mut Option<T> {
        &mut self.block_mut(at.block).slots[at.offset]
    }

    /// The real blocks, from the head to the tail.
    pub(crate) fn blocks(&self) -> impl Iterator<Item = &Block<T>> + '_ {
        std::iter::successors(Some(self.first_block()), move |&id| {
            Some(self.block(id).next)
        })
        .take_while(|&id| id != BlockId::TAIL)
        .map(move |id| self.block(id))
    }

    /// Drop every real block and return to the canonical empty chain.
    fn reset(&mut self) {
        self.blocks.truncate(2);
        self.block_mut(BlockId::HEAD).next = BlockId::TAIL;
        self.block_mut(BlockId::TAIL).prev = BlockId::HEAD;
        self.len = 0;
        self.capacity = 0;
        self.block_count = 0;
    }

    /// Allocate the next block, with capacity 2<sup>`block_count`</sup>, in
    /// front of the tail sentinel.
    fn grow(&mut self) -> BlockId {
        let id = BlockId(self.blocks.len());
        let prev = self.last_block();
        let capacity = 1 << self.block_count;
        self.blocks
            .push(Block::with_capacity(capacity, prev, BlockId::TAIL));
        self.block_mut(prev).next = id;
        self.block_mut(BlockId::TAIL).prev = id;
        self.block_count += 1;
        self.capacity = (1 << self.block_count) - 1;
        log::trace!(
            "allocated block #{} with {} slots, total capacity {}",
            self.block_count - 1,
            capacity,
            self.capacity
        );
        id
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Find the block and offset of the element at logical position `index`.
    ///
    /// This operation should compute in *O*(`block_count`) time.
    fn locate(&self, index: usize) -> Result<Locator> {
        self.check_index(index)?;
        let mut id = self.first_block();
        let mut preceding = 0;
        while id != BlockId::TAIL {
            let block = self.block(id);
            if preceding + block.occupied > index {
                return Ok(Locator::new(id, index - preceding));
            }
            preceding += block.occupied;
            id = block.next;
        }
        // `len` is the sum of all occupied counts, so the walk never gets here.
        Err(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// The nearest block before `id` with a free slot.
    fn room_before(&self, id: BlockId) -> Option<BlockId> {
        let mut id = self.block(id).prev;
        while id != BlockId::HEAD {
            let block = self.block(id);
            if !block.is_full() {
                return Some(id);
            }
            id = block.prev;
        }
        None
    }

    /// The nearest block after `id` with a free slot.
    fn room_after(&self, id: BlockId) -> Option<BlockId> {
        let mut id = self.block(id).next;
        while id != BlockId::TAIL {
            let block = self.block(id);
            if !block.is_full() {
                return Some(id);
            }
            id = block.next;
        }
        None
    }

    /// The last block holding at least one element, or the head sentinel.
    fn last_occupied(&self) -> BlockId {
        let mut id = self.last_block();
        while id != BlockId::HEAD && self.block(id).is_empty() {
            id = self.block(id).prev;
        }
        id
    }

    /// The slot following `at`, assuming `at` lies in a full block.
    fn advance(&self, at: Locator) -> Locator {
        let block = self.block(at.block);
        if at.offset + 1 < block.capacity() {
            Locator::new(at.block, at.offset + 1)
        } else {
            Locator::new(block.next, 0)
        }
    }

    /// The live slot preceding `at`.
    fn retreat(&self, at: Locator) -> Locator {
        if at.offset > 0 {
            return Locator::new(at.block, at.offset - 1);
        }
        let prev = self.block(at.block).prev;
        debug_assert!(!self.block(prev).is_empty(), "retreat into an empty block");
        Locator::new(prev, self.block(prev).occupied - 1)
    }

    /// Reserve the first free slot of `id`.
    fn claim(&mut self, id: BlockId) -> Locator {
        Locator::new(id, self.block_mut(id).claim())
    }

    /// Move every element from the first one after `origin` up to (not
    /// including) `until` one slot to the left, starting with the first free
    /// slot of `origin`.
    ///
    /// Every block strictly between `origin` and `until` must be full. The
    /// returned hole is the slot right before `until`: inside `until.block`
    /// if `until.offset > 0`, otherwise the last slot of the preceding block.
    fn shift_left(&mut self, origin: BlockId, until: Locator) -> Locator {
        let mut hole = self.claim(origin);
        let mut from = Locator::new(self.block(origin).next, 0);
        while from != until {
            let element = self.slot_mut(from).take();
            *self.slot_mut(hole) = element;
            hole = from;
            from = self.advance(from);
        }
        hole
    }

    /// Move every element from `target` up to the first free slot of `dest`
    /// one slot to the right.
    ///
    /// Every block from `target.block` up to (not including) `dest` must be
    /// full. The returned hole is `target` itself.
    fn shift_right(&mut self, dest: BlockId, target: Locator) -> Locator {
        let mut hole = self.claim(dest);
        while hole != target {
            let from = self.retreat(hole);
            let element = self.slot_mut(from).take();
            *self.slot_mut(hole) = element;
            hole = from;
        }
        hole
    }

    /// Open a hole right in front of the element at `target`.
    fn open_before(&mut self, target: Locator) -> Locator {
        let block = self.block_mut(target.block);
        if !block.is_full() {
            block.open_at(target.offset);
            return target;
        }
        if let Some(origin) = self.room_before(target.block) {
            return self.shift_left(origin, target);
        }
        // no room in front: take it from behind, growing the chain when every
        // block is full
        let dest = match self.room_after(target.block) {
            Some(dest) => dest,
            None => self.grow(),
        };
        self.shift_right(dest, target)
    }

    /// Open a hole right after the last element.
    fn open_back(&mut self) -> Locator {
        let last = self.last_occupied();
        if !self.block(last).is_full() {
            return self.claim(last);
        }
        let end = Locator::new(self.block(last).next, 0);
        if let Some(origin) = self.room_before(last) {
            return self.shift_left(origin, end);
        }
        // everything up to `last` is full and the blocks after it are empty
        let next = match end.block {
            BlockId::TAIL => self.grow(),
            next => next,
        };
        self.claim(next)
    }

    fn fill(&mut self, hole: Locator, element: T) {
        debug_assert!(self.slot(hole).is_none(), "filling a live slot");
        *self.slot_mut(hole) = Some(element);
        self.len += 1;
        debug_assert!(self.len <= self.capacity);
    }

    /// Insert without validation, `index <= len` is the caller's duty.
    fn insert_element(&mut self, index: usize, element: T) {
        let hole = match self.locate(index) {
            Ok(target) => self.open_before(target),
            Err(_) => self.open_back(),
        };
        self.fill(hole, element);
    }

    pub(crate) fn push_element(&mut self, element: T) {
        let hole = self.open_back();
        self.fill(hole, element);
    }

    /// The list is at most a quarter full once the two newest blocks could
    /// be dropped.
    fn should_compact(&self) -> bool {
        self.block_count >= 2 && self.len <= (1 << (self.block_count - 2)) - 1
    }

    /// Rebuild the chain from scratch with the surviving elements, then
    /// append one empty block as spare room.
    fn compact(&mut self) {
        let blocks_before = self.block_count;
        let survivors = std::mem::take(self);
        survivors
            .into_iter()
            .for_each(|element| self.push_element(element));
        self.grow();
        log::debug!(
            "compacted {} elements from {} blocks into {} blocks",
            self.len,
            blocks_before,
            self.block_count
        );
    }
}

fn require<T>(element: impl Into<Option<T>>) -> Result<T> {
    element.into().ok_or(Error::InvalidArgument)
}

impl<T> DoublingList<T> {
    /// Create an empty `DoublingList`. No block is allocated until the first
    /// insertion.
    ///
    /// # Examples
    /// ```
    /// use doubling_list::DoublingList;
    /// let list: DoublingList<u32> = DoublingList::new();
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        let blocks = vec![
            Block::sentinel(BlockId::HEAD, BlockId::TAIL),
            Block::sentinel(BlockId::HEAD, BlockId::TAIL),
        ];
        Self {
            blocks,
            len: 0,
            capacity: 0,
            block_count: 0,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of slots over all blocks,
    /// 2<sup>[`block_count`]</sup> - 1.
    ///
    /// [`block_count`]: DoublingList::block_count
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of blocks in the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    ///
    /// let mut list: DoublingList<char> = DoublingList::new();
    /// list.push_back('A').unwrap();
    /// list.push_back('B').unwrap();
    /// assert_eq!(list.block_count(), 2);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    #[inline]
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Removes all elements and releases every block.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter(0..10);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.block_count(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Inserts `element` at position `index`, shifting everything after it
    /// one position to the right.
    ///
    /// When the block at `index` is full, a free slot is borrowed from the
    /// nearest block in front of it (moving the elements in between to the
    /// left), or else from the nearest block behind it (moving them to the
    /// right). A new block, twice as large as the last one, is allocated
    /// only when every block is full.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `element` is `None`;
    /// - [`Error::IndexOutOfRange`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::{DoublingList, Error};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter(['A', 'B', 'C']);
    /// list.insert(0, 'X').unwrap();
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec!['X', 'A', 'B', 'C']);
    ///
    /// assert_eq!(list.insert(1, None), Err(Error::InvalidArgument));
    /// assert_eq!(
    ///     list.insert(9, 'Y'),
    ///     Err(Error::IndexOutOfRange { index: 9, len: 4 })
    /// );
    /// ```
    pub fn insert(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<()> {
        let element = require(element)?;
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.insert_element(index, element);
        Ok(())
    }

    /// Appends an element to the back of the list. It never moves an
    /// existing element unless the last block is full.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    ///
    /// let mut list: DoublingList<i32> = DoublingList::new();
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.push_element(require(element)?);
        Ok(())
    }

    /// Adds an element first in the list.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `element` is `None`.
    pub fn push_front(&mut self, element: impl Into<Option<T>>) -> Result<()> {
        self.insert(0, element)
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// The gap is closed inside its own block only. Removing the last
    /// element releases every block, and once the list falls to a quarter
    /// of its capacity the chain is rebuilt with fewer blocks.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter(['A', 'B', 'C']);
    /// assert_eq!(list.remove(1), Ok('B'));
    /// assert_eq!(list.remove(0), Ok('A'));
    /// assert_eq!(list.remove(0), Ok('C'));
    /// assert_eq!(list.block_count(), 0);
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let at = self.locate(index)?;
        let element = self
            .block_mut(at.block)
            .remove_at(at.offset)
            .expect("live slots always hold an element");
        self.len -= 1;
        if self.len == 0 {
            log::debug!("last element removed, releasing {} blocks", self.block_count);
            self.reset();
        } else if self.should_compact() {
            self.compact();
        }
        Ok(element)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0).ok()
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter([1, 2]);
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.remove(index).ok()
    }

    /// Provides a reference to the element at `index`, or `None` if it is
    /// out of bounds.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(log *n*) time.
    pub fn get(&self, index: usize) -> Option<&T> {
        let at = self.locate(index).ok()?;
        self.slot(at).as_ref()
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// it is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let at = self.locate(index).ok()?;
        self.slot_mut(at).as_mut()
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `element` is `None`;
    /// - [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublingList::from_iter(["a", "b"]);
    /// assert_eq!(list.set(1, "c"), Ok("b"));
    /// assert_eq!(list.get(1), Some(&"c"));
    /// ```
    pub fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<T> {
        let element = require(element)?;
        let at = self.locate(index)?;
        Ok(self
            .slot_mut(at)
            .replace(element)
            .expect("live slots always hold an element"))
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Provides a read-only cursor before the first element. Valid on an
    /// empty list.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Provides a read-only cursor whose first call to `next` returns the
    /// element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>> {
        self.check_index(index)?;
        Ok(Cursor::new(self, index))
    }

    /// Provides a cursor with editing operations before the first element.
    /// Valid on an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    ///
    /// let mut list: DoublingList<&str> = DoublingList::new();
    /// let mut cursor = list.cursor_mut();
    /// cursor.add("A").unwrap();
    /// cursor.add("B").unwrap();
    /// assert_eq!(cursor.next_index(), 2);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Provides a cursor with editing operations whose first call to `next`
    /// returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn cursor_mut_at(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        self.check_index(index)?;
        Ok(CursorMut::new(self, index))
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublingList::from_iter(0..3);
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.blocks[2..], self.len)
    }

    pub(crate) fn into_blocks(self) -> (Vec<Block<T>>, usize) {
        let DoublingList { mut blocks, len, .. } = self;
        (blocks.split_off(2), len)
    }
}

impl<T: Debug> Debug for DoublingList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoublingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `DoublingList` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: DoublingList<&'static str>) -> DoublingList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> DoublingList<T> {
    /// Check every structural invariant of the chain.
    pub(crate) fn assert_well_formed(&self) {
        let mut id = self.first_block();
        let mut prev = BlockId::HEAD;
        let mut k = 0;
        let mut len = 0;
        while id != BlockId::TAIL {
            let block = self.block(id);
            assert_eq!(block.prev, prev, "broken back link at block #{}", k);
            assert_eq!(block.capacity(), 1 << k, "block #{} has a wrong capacity", k);
            assert!(block.occupied <= block.capacity());
            assert!(
                block.slots[..block.occupied].iter().all(Option::is_some),
                "gap inside the packed prefix of block #{}",
                k
            );
            assert!(
                block.slots[block.occupied..].iter().all(Option::is_none),
                "element behind the packed prefix of block #{}",
                k
            );
            len += block.occupied;
            prev = id;
            id = block.next;
            k += 1;
        }
        assert_eq!(self.block(BlockId::TAIL).prev, prev);
        assert_eq!(k, self.block_count);
        assert_eq!(len, self.len);
        assert_eq!(self.capacity, (1 << self.block_count) - 1);
        assert!(self.len <= self.capacity);
    }
}
