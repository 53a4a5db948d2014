//! An in-order cursor that can remove the items it yields.

use super::error::CursorError;
use super::node::{Arena, Handle, Left, Right};

/// A cursor over an [`OrderedTree`](struct.OrderedTree.html) that yields its items in ascending
/// order and can remove the most recently yielded one.
///
/// The cursor borrows the tree mutably, so the tree cannot be changed by other means while the
/// cursor is alive.
///
/// Acquire through [`OrderedTree::cursor`](struct.OrderedTree.html#method.cursor).
///
/// # Examples
///
/// ```
/// use ordered_tree::{CursorError, OrderedTree};
///
/// let mut tree: OrderedTree<_> = [1, 3, 4, 7, 8, 9].into_iter().collect();
/// let mut seen = vec![];
///
/// {
///     let mut cursor = tree.cursor();
///     assert_eq!(cursor.remove(), Err(CursorError::NothingToRemove));
///
///     while let Ok(&item) = cursor.advance() {
///         seen.push(item);
///         if item == 4 { assert_eq!(cursor.remove(), Ok(4)); }
///     }
///
///     assert_eq!(cursor.advance(), Err(CursorError::Exhausted));
/// }
///
/// assert_eq!(seen, [1, 3, 4, 7, 8, 9]);
/// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [1, 3, 7, 8, 9]);
/// ```
pub struct Cursor<'a, T: 'a> {
    arena: &'a mut Arena<T>,
    next: Option<Handle>,
    current: Option<Handle>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(arena: &'a mut Arena<T>) -> Self {
        let next = arena.end::<Left>();
        Cursor { arena, next, current: None }
    }

    /// Checks if another item remains to be yielded.
    pub fn has_next(&self) -> bool { self.next.is_some() }

    /// Returns a reference to the item the next call to `advance` will yield, if any.
    pub fn peek(&self) -> Option<&T> { self.next.map(|node| self.arena.item(node)) }

    /// Returns a reference to the most recently yielded item, or `None` if nothing has been
    /// yielded yet or that item has been removed.
    pub fn current(&self) -> Option<&T> { self.current.map(|node| self.arena.item(node)) }

    /// Moves to the next item in ascending order and returns a reference to it.
    ///
    /// Returns `CursorError::Exhausted` once every item has been yielded.
    pub fn advance(&mut self) -> Result<&T, CursorError> {
        let node = self.next.ok_or(CursorError::Exhausted)?;
        self.next = self.arena.step::<Right>(node);
        self.current = Some(node);
        Ok(self.arena.item(node))
    }

    /// Removes the most recently yielded item from the tree and returns it.
    ///
    /// At most one removal is allowed per `advance`. Returns `CursorError::NothingToRemove` if no
    /// item has been yielded or the last one was already removed.
    pub fn remove(&mut self) -> Result<T, CursorError> {
        let node = self.current.take().ok_or(CursorError::NothingToRemove)?;
        let removed = self.arena.remove(node);

        // A junction node now holds its successor's item, which has not been yielded yet.
        self.next = match removed.refilled {
            Some(refilled) => Some(refilled),
            None => self.next.map(|next| removed.relocate(next)),
        };

        Ok(removed.item)
    }
}
