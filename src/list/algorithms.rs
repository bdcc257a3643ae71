use crate::list::DoublingList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for DoublingList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublingList<T> {}

impl<T: PartialOrd> PartialOrd for DoublingList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoublingList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Cloning appends the elements one by one, so the clone has the canonical
/// layout of its contents rather than the block layout of `self`.
impl<T: Clone> Clone for DoublingList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for DoublingList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> DoublingList<T> {
    /// Returns `true` if the `DoublingList` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    ///
    /// let mut list: DoublingList<i32> = DoublingList::new();
    ///
    /// list.push_back(0).unwrap();
    /// list.push_back(1).unwrap();
    /// list.push_back(2).unwrap();
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Copies the elements into a `Vec`, in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the elements into a `Vec`, in list order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for DoublingList<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DoublingList<T> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::DoublingList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq_ignores_layout() {
        // same contents, different block occupancy
        let appended = DoublingList::from_iter([0, 2, 3, 4, 5, 6]);
        let mut removed = DoublingList::from_iter(0..7);
        removed.remove(1).unwrap();
        assert_ne!(
            appended.blocks().map(|b| b.occupied).collect::<Vec<_>>(),
            removed.blocks().map(|b| b.occupied).collect::<Vec<_>>()
        );
        assert_eq!(appended, removed);
        assert_eq!(hash_of(&appended), hash_of(&removed));

        assert_ne!(appended, DoublingList::from_iter(0..5));
        assert_ne!(appended, DoublingList::from_iter(1..7));
    }

    #[test]
    fn test_ord() {
        let a = DoublingList::from([1, 2, 3]);
        let b = DoublingList::from([1, 2, 4]);
        let c = DoublingList::from([1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_clone() {
        let mut list = DoublingList::from(vec!["A", "B", "C", "D"]);
        list.remove(1).unwrap();
        let clone = list.clone();
        clone.assert_well_formed();
        assert_eq!(clone, list);
        assert_eq!(clone.to_vec(), vec!["A", "C", "D"]);
        assert_eq!(list.into_vec(), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_contains() {
        let list = DoublingList::from_iter((0..20).map(|i| i * 3));
        assert!(list.contains(&0));
        assert!(list.contains(&57));
        assert!(!list.contains(&58));
        assert!(!DoublingList::<i32>::new().contains(&0));
    }
}
