/// Index of a block in the arena of a `DoublingList`.
///
/// Ids are stable for the lifetime of a chain: blocks are only ever appended
/// at the tail, and a reset drops every real block at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BlockId(pub(crate) usize);

impl BlockId {
    /// The head sentinel, in front of the first real block.
    pub(crate) const HEAD: BlockId = BlockId(0);
    /// The tail sentinel, behind the last real block.
    pub(crate) const TAIL: BlockId = BlockId(1);
}

/// A slot in the chain: the block holding it and the offset inside it.
///
/// Locators are recomputed by every operation and never stored across calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Locator {
    pub(crate) block: BlockId,
    pub(crate) offset: usize,
}

impl Locator {
    pub(crate) fn new(block: BlockId, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// A fixed-capacity array of slots.
///
/// Slots `[0, occupied)` always hold an element and slots
/// `[occupied, capacity)` are always empty, except for the single hole a
/// cross-block shift opens, which the caller fills before returning.
pub(crate) struct Block<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) occupied: usize,
    pub(crate) prev: BlockId,
    pub(crate) next: BlockId,
}

impl<T> Block<T> {
    pub(crate) fn with_capacity(capacity: usize, prev: BlockId, next: BlockId) -> Self {
        let slots = (0..capacity).map(|_| None).collect();
        Self {
            slots,
            occupied: 0,
            prev,
            next,
        }
    }

    /// A sentinel has no slots, so it always reports itself as full.
    pub(crate) fn sentinel(prev: BlockId, next: BlockId) -> Self {
        Self::with_capacity(0, prev, next)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// The packed prefix of live slots.
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[..self.occupied]
    }

    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots[..self.occupied]
    }

    /// Reserve the first free slot and return its offset.
    ///
    /// The slot stays empty until the caller writes into it.
    pub(crate) fn claim(&mut self) -> usize {
        debug_assert!(!self.is_full(), "cannot claim a slot in a full block");
        self.occupied += 1;
        self.occupied - 1
    }

    /// Shift `[offset, occupied)` one slot to the right, leaving a hole at
    /// `offset`.
    pub(crate) fn open_at(&mut self, offset: usize) {
        debug_assert!(!self.is_full(), "cannot open a slot in a full block");
        debug_assert!(offset <= self.occupied);
        // the empty slot at `occupied` rotates down to `offset`
        self.slots[offset..=self.occupied].rotate_right(1);
        self.occupied += 1;
    }

    /// Take the element at `offset` and repack the tail of the block so the
    /// live slots stay a contiguous prefix.
    pub(crate) fn remove_at(&mut self, offset: usize) -> Option<T> {
        debug_assert!(offset < self.occupied);
        let element = self.slots[offset].take();
        self.slots[offset..self.occupied].rotate_left(1);
        self.occupied -= 1;
        element
    }
}
