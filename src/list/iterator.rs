use crate::list::block::{Block, BlockId, Locator};
use crate::list::DoublingList;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::{slice, vec};

/// An iterator over the elements of a `DoublingList`.
///
/// It walks the block chain with a pair of slots `front..back`, where
/// `front` is inclusive and `back` is not. Blocks left empty by removals
/// are skipped.
///
/// # Examples
///
/// ```compile_fail
/// use doubling_list::DoublingList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublingList::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4).unwrap();
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a DoublingList<T>,
    front: Locator,
    back: Locator,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublingList<T>) -> Self {
        let last = list.last_block();
        Self {
            list,
            front: Locator::new(list.first_block(), 0),
            back: Locator::new(last, list.block(last).occupied),
            len: list.len(),
        }
    }

    fn block(&self, id: BlockId) -> &'a Block<T> {
        let list = self.list;
        list.block(id)
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let mut block = self.block(self.front.block);
        while self.front.offset == block.occupied {
            self.front = Locator::new(block.next, 0);
            block = self.block(self.front.block);
        }
        let element = block.live()[self.front.offset].as_ref();
        self.front.offset += 1;
        self.len -= 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        while self.back.offset == 0 {
            let prev = self.block(self.back.block).prev;
            self.back = Locator::new(prev, self.block(prev).occupied);
        }
        self.back.offset -= 1;
        self.len -= 1;
        self.block(self.back.block).live()[self.back.offset].as_ref()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `DoublingList`.
///
/// Real blocks sit in the arena in chain order, so it borrows the arena
/// as a slice and flattens the live slots of each block.
///
/// # Examples
///
/// `DoublingList` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use doubling_list::DoublingList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublingList::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    blocks: slice::IterMut<'a, Block<T>>,
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(blocks: &'a mut [Block<T>], len: usize) -> Self {
        let front: &'a mut [Option<T>] = &mut [];
        let back: &'a mut [Option<T>] = &mut [];
        Self {
            blocks: blocks.iter_mut(),
            front: front.iter_mut(),
            back: back.iter_mut(),
            len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let slot = loop {
            if let Some(slot) = self.front.next() {
                break slot;
            }
            match self.blocks.next() {
                Some(block) => self.front = block.live_mut().iter_mut(),
                None => break self.back.next()?,
            }
        };
        self.len -= 1;
        slot.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let slot = loop {
            if let Some(slot) = self.back.next_back() {
                break slot;
            }
            match self.blocks.next_back() {
                Some(block) => self.back = block.live_mut().iter_mut(),
                None => break self.front.next_back()?,
            }
        };
        self.len -= 1;
        slot.as_mut()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `DoublingList`.
///
/// This `struct` is created by the [`into_iter`] method on [`DoublingList`]
/// (provided by the `IntoIterator` trait). It takes the blocks apart one
/// by one, without rebalancing the chain the way `pop_front` would.
///
/// [`into_iter`]: DoublingList::into_iter
pub struct IntoIter<T> {
    blocks: vec::IntoIter<Block<T>>,
    front: vec::IntoIter<Option<T>>,
    back: vec::IntoIter<Option<T>>,
    len: usize,
}

impl<T> IntoIter<T> {
    fn new(list: DoublingList<T>) -> Self {
        let (blocks, len) = list.into_blocks();
        Self {
            blocks: blocks.into_iter(),
            front: Vec::new().into_iter(),
            back: Vec::new().into_iter(),
            len,
        }
    }
}

/// The live slots of a block, as an owned buffer.
fn live_slots<T>(block: Block<T>) -> vec::IntoIter<Option<T>> {
    let Block {
        slots, occupied, ..
    } = block;
    let mut slots = slots.into_vec();
    slots.truncate(occupied);
    slots.into_iter()
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.len).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let slot = loop {
            if let Some(slot) = self.front.next() {
                break slot;
            }
            match self.blocks.next() {
                Some(block) => self.front = live_slots(block),
                None => break self.back.next()?,
            }
        };
        self.len -= 1;
        slot
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let slot = loop {
            if let Some(slot) = self.back.next_back() {
                break slot;
            }
            match self.blocks.next_back() {
                Some(block) => self.back = live_slots(block),
                None => break self.front.next_back()?,
            }
        };
        self.len -= 1;
        slot
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublingList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for DoublingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublingList::new();
        list.extend(iter);
        list
    }
}

/// Appending goes through the same path as [`push_back`], so elements are
/// never shifted while every block but the last is full.
///
/// [`push_back`]: DoublingList::push_back
impl<T> Extend<T> for DoublingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(|element| self.push_element(element));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for DoublingList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::DoublingList;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident $(, $REV:ident)?) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = DoublingList::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )?.enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )? .take(mid).enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    let mut iter = iter.rev();
                    for (i, item) in vec.$ITER() $( .$REV() )? .skip(mid).rev().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - mid - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);
        test_iter!(test_back_iter, iter, rev);
        test_iter!(test_back_iter_mut, iter_mut, rev);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input.clone(), mid);
            test_back_iter(input.clone(), mid);
            test_back_iter_mut(input.clone(), mid);
        }
        test_case(0..20, 20);
        test_case(0..20, 11);
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 2);
        test_case(0..10, 0);
        test_case(0..2, 2);
        test_case(0..2, 1);
        test_case(0..2, 0);
        test_case(0..1, 1);
        test_case(0..1, 0);
        test_case(0..0, 0);
    }

    #[test]
    fn test_iter_skips_empty_blocks() {
        let mut list = DoublingList::from_iter(0..15);
        // empty out block #1 while keeping 4 blocks
        assert_eq!(list.remove(1), Ok(1));
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.block_count(), 4);
        let expected = Vec::from_iter((0..1).chain(3..15));

        assert_eq!(Vec::from_iter(list.iter().copied()), expected);
        assert_eq!(
            Vec::from_iter(list.iter().rev().copied()),
            Vec::from_iter(expected.iter().rev().copied())
        );
        list.iter_mut().for_each(|x| *x *= 2);
        assert_eq!(
            Vec::from_iter(list.iter_mut().rev().map(|x| *x)),
            Vec::from_iter(expected.iter().rev().map(|x| x * 2))
        );
        let mut into_iter = list.into_iter();
        assert_eq!(into_iter.next(), Some(0));
        assert_eq!(into_iter.next_back(), Some(28));
        assert_eq!(into_iter.len(), 11);
        assert_eq!(into_iter.next(), Some(6));
    }

    #[test]
    fn test_into_iter() {
        let list = DoublingList::from_iter(0..10);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(9));
        assert_eq!(Vec::from_iter(iter.by_ref().take(3)), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(iter.rev()), vec![8, 7, 6, 5, 4]);

        // dropping a partially consumed iterator drops the rest
        let list = DoublingList::from_iter((0..10).map(|i| i.to_string()));
        let mut iter = list.into_iter();
        assert_eq!(iter.next_back().as_deref(), Some("9"));
        drop(iter);
    }

    #[test]
    fn test_extend() {
        let mut list = DoublingList::from_iter([1, 2]);
        list.extend(&[3, 4]);
        list.extend(vec![5]);
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4, &5]);
        list.assert_well_formed();
        for x in &mut list {
            *x += 1;
        }
        assert_eq!(Vec::from_iter(list), vec![2, 3, 4, 5, 6]);
    }
}
