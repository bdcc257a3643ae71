//! A diagnostic view of the block layout of a `DoublingList`.
//!
//! Each block is printed as a parenthesized list of its slots, with `—`
//! standing for an empty slot:
//!
//! ```text
//! [(A), (B, —), (C, D, E, F)]
//! ```
//!
//! When rendered through a cursor, `| ` marks the element the next call to
//! `next` would return, and a trailing `|` marks a cursor at the back.
//! The format is a debugging aid only and may change between versions.

use crate::list::DoublingList;
use std::fmt;

const EMPTY_SLOT: &str = "—";

/// A [`Display`](fmt::Display) adapter printing the block layout of a list.
///
/// This `struct` is created by [`DoublingList::render`] and by the `render`
/// method of the cursors.
///
/// # Examples
///
/// ```
/// use doubling_list::DoublingList;
/// use std::iter::FromIterator;
///
/// let list = DoublingList::from_iter(['A', 'B', 'C', 'D']);
/// assert_eq!(list.render().to_string(), "[(A), (B, C), (D, —, —, —)]");
///
/// let mut cursor = list.cursor();
/// cursor.next().unwrap();
/// assert_eq!(cursor.render().to_string(), "[(A), (| B, C), (D, —, —, —)]");
/// ```
pub struct Render<'a, T> {
    list: &'a DoublingList<T>,
    marker: Option<usize>,
}

impl<'a, T> Render<'a, T> {
    pub(crate) fn new(list: &'a DoublingList<T>) -> Self {
        Self { list, marker: None }
    }

    pub(crate) fn with_marker(list: &'a DoublingList<T>, index: usize) -> Self {
        Self {
            list,
            marker: Some(index),
        }
    }
}

impl<'a, T: fmt::Display> fmt::Display for Render<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.list.is_empty() {
            return f.write_str("[]");
        }
        f.write_str("[")?;
        let mut index = 0;
        for (k, block) in self.list.blocks().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            for (offset, slot) in block.slots.iter().enumerate() {
                if offset > 0 {
                    f.write_str(", ")?;
                }
                match slot {
                    Some(element) => {
                        if self.marker == Some(index) {
                            f.write_str("| ")?;
                        }
                        write!(f, "{}", element)?;
                        index += 1;
                    }
                    None => f.write_str(EMPTY_SLOT)?,
                }
            }
            f.write_str(")")?;
        }
        if matches!(self.marker, Some(marker) if marker >= self.list.len()) {
            f.write_str("|")?;
        }
        f.write_str("]")
    }
}

impl<'a, T: fmt::Display> fmt::Debug for Render<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T> DoublingList<T> {
    /// Render the block layout of the list, showing empty slots as `—`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doubling_list::DoublingList;
    ///
    /// let mut list: DoublingList<&str> = DoublingList::new();
    /// assert_eq!(list.render().to_string(), "[]");
    /// list.push_back("A").unwrap();
    /// list.push_back("B").unwrap();
    /// assert_eq!(list.render().to_string(), "[(A), (B, —)]");
    /// ```
    pub fn render(&self) -> Render<'_, T> {
        Render::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::DoublingList;
    use std::iter::FromIterator;

    fn layout_eq(list: &DoublingList<&str>, expected: &str) {
        list.assert_well_formed();
        assert_eq!(list.render().to_string(), expected);
    }

    fn appended(elements: &[&'static str]) -> DoublingList<&'static str> {
        let mut list = DoublingList::new();
        for &element in elements {
            list.push_back(element).unwrap();
        }
        list
    }

    #[test]
    fn render_append_into_empty() {
        let mut list = DoublingList::new();
        layout_eq(&list, "[]");
        list.push_back("A").unwrap();
        layout_eq(&list, "[(A)]");
        list.push_back("B").unwrap();
        layout_eq(&list, "[(A), (B, —)]");
        list.push_back("C").unwrap();
        layout_eq(&list, "[(A), (B, C)]");
    }

    #[test]
    fn render_insert_into_block_with_room() {
        let mut list: DoublingList<&str> = DoublingList::new();
        for (i, &element) in ["A", "B", "C", "D", "E", "F", "G", "F", "G"].iter().enumerate() {
            list.insert(i, element).unwrap();
        }
        list.remove(5).unwrap();
        list.remove(5).unwrap();
        layout_eq(
            &list,
            "[(A), (B, C), (D, E, —, —), (F, G, —, —, —, —, —, —)]",
        );

        list.insert(3, "X").unwrap();
        layout_eq(
            &list,
            "[(A), (B, C), (X, D, E, —), (F, G, —, —, —, —, —, —)]",
        );
    }

    #[test]
    fn render_insert_shifts_left() {
        let mut list = appended(&[
            "A", "B", "B", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
        ]);
        layout_eq(
            &list,
            "[(A), (B, B), (B, C, D, E), (F, G, H, I, J, K, L, M)]",
        );
        list.remove(1).unwrap();
        list.remove(1).unwrap();
        layout_eq(
            &list,
            "[(A), (—, —), (B, C, D, E), (F, G, H, I, J, K, L, M)]",
        );

        list.insert(9, "X").unwrap();
        layout_eq(
            &list,
            "[(A), (B, —), (C, D, E, F), (G, H, I, X, J, K, L, M)]",
        );
    }

    #[test]
    fn render_insert_shifts_right() {
        let mut list = appended(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
        layout_eq(
            &list,
            "[(A), (B, C), (D, E, F, G), (H, I, —, —, —, —, —, —)]",
        );

        list.insert(2, "X").unwrap();
        layout_eq(
            &list,
            "[(A), (B, X), (C, D, E, F), (G, H, I, —, —, —, —, —)]",
        );
    }

    #[test]
    fn render_append_shifts_left() {
        let mut list = appended(&["B", "B", "B", "C", "D", "E", "E", "E"]);
        list.remove(1).unwrap();
        list.remove(1).unwrap();
        list.remove(4).unwrap();
        list.remove(4).unwrap();
        layout_eq(
            &list,
            "[(B), (—, —), (C, D, E, —), (—, —, —, —, —, —, —, —)]",
        );

        list.insert(4, "F").unwrap();
        layout_eq(
            &list,
            "[(B), (—, —), (C, D, E, F), (—, —, —, —, —, —, —, —)]",
        );
        list.insert(5, "G").unwrap();
        layout_eq(
            &list,
            "[(B), (C, —), (D, E, F, G), (—, —, —, —, —, —, —, —)]",
        );
        list.insert(6, "H").unwrap();
        layout_eq(
            &list,
            "[(B), (C, D), (E, F, G, H), (—, —, —, —, —, —, —, —)]",
        );
        // everything in front is full, the empty trailing block takes it
        list.insert(7, "I").unwrap();
        layout_eq(
            &list,
            "[(B), (C, D), (E, F, G, H), (I, —, —, —, —, —, —, —)]",
        );
    }

    #[test]
    fn render_append_allocates_block() {
        let mut list = appended(&["F", "I", "J", "M", "P", "Q", "R"]);
        layout_eq(&list, "[(F), (I, J), (M, P, Q, R)]");
        list.push_back("T").unwrap();
        layout_eq(
            &list,
            "[(F), (I, J), (M, P, Q, R), (T, —, —, —, —, —, —, —)]",
        );
    }

    #[test]
    fn render_remove_repacks_block() {
        let mut list = appended(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
        assert_eq!(list.remove(4), Ok("E"));
        layout_eq(
            &list,
            "[(A), (B, C), (D, F, G, —), (H, I, —, —, —, —, —, —)]",
        );
        assert_eq!(list.remove(1), Ok("B"));
        layout_eq(
            &list,
            "[(A), (C, —), (D, F, G, —), (H, I, —, —, —, —, —, —)]",
        );
    }

    #[test]
    fn render_remove_compacts() {
        let mut list = appended(&["A", "B", "B", "C", "D", "E", "E", "F"]);
        list.remove(1).unwrap();
        list.remove(1).unwrap();
        list.remove(3).unwrap();
        list.remove(3).unwrap();
        layout_eq(
            &list,
            "[(A), (—, —), (C, D, —, —), (F, —, —, —, —, —, —, —)]",
        );

        assert_eq!(list.remove(2), Ok("D"));
        layout_eq(&list, "[(A), (C, F), (—, —, —, —)]");
    }

    #[test]
    fn render_cursor_marker() {
        let list = DoublingList::from_iter(["A", "B", "C", "D", "E", "F", "G"]);
        let forward = [
            "[(| A), (B, C), (D, E, F, G)]",
            "[(A), (| B, C), (D, E, F, G)]",
            "[(A), (B, | C), (D, E, F, G)]",
            "[(A), (B, C), (| D, E, F, G)]",
            "[(A), (B, C), (D, | E, F, G)]",
            "[(A), (B, C), (D, E, | F, G)]",
            "[(A), (B, C), (D, E, F, | G)]",
            "[(A), (B, C), (D, E, F, G)|]",
        ];
        let mut cursor = list.cursor();
        for (i, &expected) in forward.iter().enumerate() {
            assert_eq!(cursor.render().to_string(), expected);
            if i < 7 {
                cursor.next().unwrap();
            }
        }

        let mut cursor = list.cursor_at(6).unwrap();
        for &expected in forward[..7].iter().rev() {
            assert_eq!(cursor.render().to_string(), expected);
            if cursor.has_previous() {
                cursor.previous().unwrap();
            }
        }
    }

    #[test]
    fn render_cursor_mut_marker() {
        let mut list: DoublingList<&str> = DoublingList::new();
        let mut cursor = list.cursor_mut();
        assert_eq!(cursor.render().to_string(), "[]");
        cursor.add("A").unwrap();
        cursor.add("B").unwrap();
        assert_eq!(cursor.render().to_string(), "[(A), (B, —)|]");
        cursor.previous().unwrap();
        assert_eq!(cursor.render().to_string(), "[(A), (| B, —)]");
        assert_eq!(format!("{:?}", list.render()), "[(A), (B, —)]");
    }
}
