mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::{self, *};
use std::mem;

pub use self::iter::Walk;

/// The index of a node in its arena.
pub type Handle = usize;

/// A tree node.
///
/// `left` and `right` are the owning links: a node is reachable only through its parent's child
/// slot (or the arena's root). `parent` is a back-reference used for climbing and never implies
/// ownership.
#[derive(Clone, Debug)]
pub struct Node<T> {
    item: T,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<T> Node<T> {
    fn new(item: T, parent: Option<Handle>) -> Self {
        Node { item, parent, left: None, right: None }
    }

    fn is_junction(&self) -> bool { self.left.is_some() && self.right.is_some() }
}

/// The result of physically removing a node from an arena.
pub struct Removed<T> {
    /// The item that was removed.
    pub item: T,
    /// For a junction node, the handle that now holds the removed item's in-order successor.
    pub refilled: Option<Handle>,
    relocated: Option<(Handle, Handle)>,
}

impl<T> Removed<T> {
    /// Translates a handle taken before the removal into one valid after it.
    pub fn relocate(&self, node: Handle) -> Handle { relocate(self.relocated, node) }
}

fn relocate(relocated: Option<(Handle, Handle)>, node: Handle) -> Handle {
    match relocated {
        Some((from, to)) if from == node => to,
        _ => node,
    }
}

/// The nodes of a binary search tree, stored densely and linked by handle.
///
/// Every slot is reachable from the root, so the arena's length is the tree's size.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
    root: Option<Handle>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self { Arena::new() }
}

impl<T> Arena<T> {
    pub fn new() -> Self { Arena { nodes: Vec::new(), root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn root(&self) -> Option<Handle> { self.root }

    pub fn item(&self, node: Handle) -> &T { &self.nodes[node].item }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Descends from the root toward `key` until an exact match is found or the indicated child
    /// is missing.
    ///
    /// Returns the last node visited together with the ordering of `key` relative to that node's
    /// item. `Equal` means a match; otherwise the node is where `key` would be attached.
    pub fn locate<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<(Handle, Ordering)>
        where C: Compare<Q, T> {

        let mut node = self.root?;

        loop {
            let order = cmp.compare(key, &self.nodes[node].item);

            let child = match order {
                Equal => None,
                Less => self.nodes[node].left,
                Greater => self.nodes[node].right,
            };

            match child {
                Some(child) => node = child,
                None => return Some((node, order)),
            }
        }
    }

    /// Returns the node whose item compares equal to `key`, if any.
    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<Handle> where C: Compare<Q, T> {
        match self.locate(cmp, key) {
            Some((node, Equal)) => Some(node),
            _ => None,
        }
    }

    /// Links a new node holding `item` into the tree, returning its handle, or `None` if an equal
    /// item is already present.
    pub fn insert<C>(&mut self, cmp: &C, item: T) -> Option<Handle> where C: Compare<T> {
        let node = self.nodes.len();

        let parent = match self.locate(cmp, &item) {
            None => { self.root = Some(node); None }
            Some((_, Equal)) => return None,
            Some((parent, Less)) => { self.nodes[parent].left = Some(node); Some(parent) }
            Some((parent, Greater)) => { self.nodes[parent].right = Some(node); Some(parent) }
        };

        self.nodes.push(Node::new(item, parent));
        Some(node)
    }

    /// Follows `D` links from `node` as far as they go.
    pub fn extremum<D>(&self, mut node: Handle) -> Handle where D: Dir {
        while let Some(child) = D::forward(&self.nodes[node]) { node = child; }
        node
    }

    /// Returns the leftmost (`Left`) or rightmost (`Right`) node of the tree.
    pub fn end<D>(&self) -> Option<Handle> where D: Dir {
        self.root.map(|root| self.extremum::<D>(root))
    }

    /// Climbs from `node` while it is its parent's `D` child, returning the first ancestor reached
    /// from the opposite side. That ancestor is the nearest one lying in direction `D`.
    pub fn ancestor<D>(&self, mut node: Handle) -> Option<Handle> where D: Dir {
        loop {
            let parent = self.nodes[node].parent?;
            if D::forward(&self.nodes[parent]) != Some(node) { return Some(parent); }
            node = parent;
        }
    }

    /// Returns the in-order neighbor of `node` in direction `D`: the successor for `Right`, the
    /// predecessor for `Left`.
    pub fn step<D>(&self, node: Handle) -> Option<Handle> where D: Dir {
        match D::forward(&self.nodes[node]) {
            Some(child) => Some(self.extremum::<D::Opposite>(child)),
            None => self.ancestor::<D>(node),
        }
    }

    /// Returns the node closest to `key` that does not lie past it in direction `D::Opposite`:
    /// the ceiling for `Right`, the floor for `Left`.
    pub fn closest<D, C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<Handle>
        where D: Dir, C: Compare<Q, T> {

        let (node, order) = self.locate(cmp, key)?;
        if order == D::order() { self.ancestor::<D>(node) } else { Some(node) }
    }

    /// Removes `node` from the tree.
    ///
    /// A junction node takes over the item of its in-order successor, and the successor's node is
    /// spliced out instead. Any other node is spliced out directly.
    pub fn remove(&mut self, node: Handle) -> Removed<T> {
        let junction = self.nodes[node].is_junction();

        let victim = match self.nodes[node].right {
            Some(right) if junction => self.extremum::<Left>(right),
            _ => node,
        };

        self.splice(victim);
        let (mut item, relocated) = self.release(victim);

        let refilled = if junction {
            let node = relocate(relocated, node);
            mem::swap(&mut self.nodes[node].item, &mut item);
            Some(node)
        } else {
            None
        };

        Removed { item, refilled, relocated }
    }

    /// Removes the leftmost (`Left`) or rightmost (`Right`) item.
    pub fn remove_end<D>(&mut self) -> Option<T> where D: Dir {
        self.end::<D>().map(|node| self.remove(node).item)
    }

    // Unlinks a node with at most one child, handing the child to the node's parent.
    fn splice(&mut self, node: Handle) {
        debug_assert!(!self.nodes[node].is_junction());

        let parent = self.nodes[node].parent;
        let child = self.nodes[node].right.or(self.nodes[node].left);

        match parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.right == Some(node) { parent.right = child; } else { parent.left = child; }
            }
            None => self.root = child,
        }

        if let Some(child) = child { self.nodes[child].parent = parent; }
    }

    // Frees the slot of an unlinked node. The last node moves into the slot and the links that
    // pointed at it are rewritten.
    fn release(&mut self, node: Handle) -> (T, Option<(Handle, Handle)>) {
        let released = self.nodes.swap_remove(node);
        let moved = self.nodes.len();
        if moved == node { return (released.item, None); }

        let (parent, left, right) = {
            let n = &self.nodes[node];
            (n.parent, n.left, n.right)
        };

        match parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(moved) { parent.left = Some(node); }
                else { parent.right = Some(node); }
            }
            None => self.root = Some(node),
        }

        for child in left.into_iter().chain(right) { self.nodes[child].parent = Some(node); }

        (released.item, Some((moved, node)))
    }
}

/// A direction in the tree.
///
/// Operations that come in mirrored pairs (first/last, floor/ceiling, successor/predecessor) are
/// written once against this trait.
pub trait Dir {
    type Opposite: Dir<Opposite = Self>;

    /// The ordering of a key relative to a node when the key lies in this direction.
    fn order() -> Ordering;

    fn forward<T>(node: &Node<T>) -> Option<Handle>;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn order() -> Ordering { Less }

    fn forward<T>(node: &Node<T>) -> Option<Handle> { node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn order() -> Ordering { Greater }

    fn forward<T>(node: &Node<T>) -> Option<Handle> { node.right }
}
