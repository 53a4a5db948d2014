//! An ordered set based on an unbalanced binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use super::cursor::Cursor;
use super::node::{Arena, Left, Right, Walk};

/// An ordered set based on an unbalanced binary search tree.
///
/// Items are kept in ascending order according to the tree's comparator, and two items that
/// compare equal are never both present. The tree is not rebalanced: inserting items in sorted
/// order produces a tree of linear height.
///
/// The behavior of this tree is undefined if an item's ordering relative to any other item changes
/// while the item is in the tree. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct OrderedTree<T, C = Natural<T>> where C: Compare<T> {
    arena: Arena<T>,
    cmp: C,
}

impl<T> OrderedTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { OrderedTree::with_cmp(compare::natural()) }
}

impl<T, C> OrderedTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = ordered_tree::OrderedTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { OrderedTree { arena: Arena::new(), cmp } }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.arena.root().is_none() }

    /// Returns the number of items in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.arena.len() }

    /// Returns a reference to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let tree = ordered_tree::OrderedTree::<i32>::new();
    /// assert!(tree.cmp().compares_lt(&1, &2));
    ///
    /// let tree: ordered_tree::OrderedTree<i32, _> =
    ///     ordered_tree::OrderedTree::with_cmp(natural().rev());
    /// assert!(tree.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.len(), 3);
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.arena.clear(); }

    /// Inserts an item into the tree, returning `true` if the tree did not already contain an item
    /// comparing equal to it.
    ///
    /// If such an item is present, the tree is left unchanged and the given item is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert!(!tree.contains(&1));
    /// assert!(tree.insert(1));
    /// assert!(tree.contains(&1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool { self.arena.insert(&self.cmp, item).is_some() }

    /// Removes the item comparing equal to the given key, returning `true` if the tree contained
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.remove(&2));
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.contains(&2));
    /// assert!(!tree.remove(&2));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool where C: Compare<Q, T> {
        match self.arena.find(&self.cmp, key) {
            Some(node) => { self.arena.remove(node); true }
            None => false,
        }
    }

    /// Returns a reference to the item comparing equal to the given key, or `None` if the tree
    /// contains no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree =
    ///     ordered_tree::OrderedTree::with_cmp(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    ///
    /// tree.insert((1, "one"));
    /// tree.insert((2, "two"));
    ///
    /// assert_eq!(tree.get(&(1, "")), Some(&(1, "one")));
    /// assert_eq!(tree.get(&(3, "")), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.arena.find(&self.cmp, key).map(|node| self.arena.item(node))
    }

    /// Checks if the tree contains an item comparing equal to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert!(!tree.contains(&1));
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, T> {
        self.get(key).is_some()
    }

    /// Returns a reference to the tree's smallest item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert_eq!(tree.first(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> { self.arena.end::<Left>().map(|node| self.arena.item(node)) }

    /// Returns a reference to the tree's largest item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert_eq!(tree.last(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> { self.arena.end::<Right>().map(|node| self.arena.item(node)) }

    /// Removes and returns the tree's smallest item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert_eq!(tree.pop_first(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.first(), Some(&2));
    /// ```
    pub fn pop_first(&mut self) -> Option<T> { self.arena.remove_end::<Left>() }

    /// Removes and returns the tree's largest item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    /// assert_eq!(tree.pop_last(), None);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.pop_last(), Some(3));
    /// assert_eq!(tree.last(), Some(&2));
    /// ```
    pub fn pop_last(&mut self) -> Option<T> { self.arena.remove_end::<Right>() }

    /// Returns a reference to the greatest item that is less than or equal to the given key, or
    /// `None` if there is no such item.
    ///
    /// The given key need not itself be present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(4);
    /// tree.insert(6);
    ///
    /// assert_eq!(tree.floor(&1), None);
    /// assert_eq!(tree.floor(&2), Some(&2));
    /// assert_eq!(tree.floor(&5), Some(&4));
    /// assert_eq!(tree.floor(&7), Some(&6));
    /// ```
    pub fn floor<Q: ?Sized>(&self, key: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.arena.closest::<Left, _, _>(&self.cmp, key).map(|node| self.arena.item(node))
    }

    /// Returns a reference to the smallest item that is greater than or equal to the given key, or
    /// `None` if there is no such item.
    ///
    /// The given key need not itself be present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(4);
    /// tree.insert(6);
    ///
    /// assert_eq!(tree.ceiling(&1), Some(&2));
    /// assert_eq!(tree.ceiling(&2), Some(&2));
    /// assert_eq!(tree.ceiling(&5), Some(&6));
    /// assert_eq!(tree.ceiling(&7), None);
    /// ```
    pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.arena.closest::<Right, _, _>(&self.cmp, key).map(|node| self.arena.item(node))
    }

    /// Returns an iterator over the tree.
    ///
    /// The iterator yields the items in ascending order according to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter { arena: &self.arena, walk: Walk::new(&self.arena) } }

    /// Returns a cursor over the tree that can remove items while traversing it.
    ///
    /// The cursor yields the items in ascending order according to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// {
    ///     let mut cursor = tree.cursor();
    ///     assert_eq!(cursor.advance(), Ok(&1));
    ///     assert_eq!(cursor.advance(), Ok(&2));
    ///     assert_eq!(cursor.remove(), Ok(2));
    ///     assert_eq!(cursor.advance(), Ok(&3));
    /// }
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, T> { Cursor::new(&mut self.arena) }

    /// Retains only the items for which the given predicate returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: ordered_tree::OrderedTree<_> = (1..10).collect();
    /// tree.retain(|&item| item % 3 == 0);
    /// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [3, 6, 9]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F) where F: FnMut(&T) -> bool {
        let mut cursor = self.cursor();

        while let Ok(item) = cursor.advance() {
            // `advance` just yielded this item, so removing it cannot fail.
            if !f(item) { cursor.remove().ok(); }
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_valid(&self) { self.arena.assert_valid(&self.cmp); }
}

impl<T, C> Debug for OrderedTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_set().entries(self).finish() }
}

impl<T, C> Default for OrderedTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { OrderedTree::with_cmp(C::default()) }
}

impl<T, C> Extend<T> for OrderedTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> iter::FromIterator<T> for OrderedTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree = OrderedTree::default();
        tree.extend(it);
        tree
    }
}

impl<T, C> Hash for OrderedTree<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for item in self { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for OrderedTree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    /// Returns an iterator that consumes the tree.
    ///
    /// The iterator yields the items in ascending order according to the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = ordered_tree::OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T, C> { IntoIter(self) }
}

impl<T, C> PartialEq for OrderedTree<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.len() == other.len() && self.iter().eq(other) }
}

impl<T, C> Eq for OrderedTree<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for OrderedTree<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.iter().partial_cmp(other) }
}

impl<T, C> Ord for OrderedTree<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering { Iterator::cmp(self.iter(), other) }
}

/// An iterator that consumes the tree.
///
/// The iterator yields the items in ascending order according to the tree's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut tree = ordered_tree::OrderedTree::new();
///
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// for item in tree {
///     println!("{:?}", item);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<T, C = Natural<T>>(OrderedTree<T, C>) where C: Compare<T>;

impl<T, C> Iterator for IntoIter<T, C> where C: Compare<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.pop_first() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len(), Some(self.0.len())) }
}

impl<T, C> DoubleEndedIterator for IntoIter<T, C> where C: Compare<T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.pop_last() }
}

impl<T, C> ExactSizeIterator for IntoIter<T, C> where C: Compare<T> {}

/// An iterator over the tree.
///
/// The iterator yields the items in ascending order according to the tree's comparator.
///
/// # Examples
///
/// Acquire through [`OrderedTree::iter`](struct.OrderedTree.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut tree = ordered_tree::OrderedTree::new();
///
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// for item in &tree {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a> {
    arena: &'a Arena<T>,
    walk: Walk,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { arena: self.arena, walk: self.walk.clone() } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        self.walk.next(arena).map(|node| arena.item(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.walk.len(), Some(self.walk.len())) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        self.walk.next_back(arena).map(|node| arena.item(node))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
