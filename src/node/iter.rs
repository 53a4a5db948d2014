use super::{Arena, Dir, Handle, Left, Right};

/// In-order traversal state over an arena, consumable from both ends.
///
/// The walk holds handles only; the arena is passed to every step so that the borrow belongs to
/// the iterator wrapping it.
#[derive(Clone, Debug)]
pub struct Walk {
    front: Option<Handle>,
    back: Option<Handle>,
    len: usize,
}

impl Walk {
    pub fn new<T>(arena: &Arena<T>) -> Walk {
        Walk { front: arena.end::<Left>(), back: arena.end::<Right>(), len: arena.len() }
    }

    pub fn len(&self) -> usize { self.len }

    pub fn next<T>(&mut self, arena: &Arena<T>) -> Option<Handle> {
        Self::take::<Right, T>(&mut self.front, &mut self.len, arena)
    }

    pub fn next_back<T>(&mut self, arena: &Arena<T>) -> Option<Handle> {
        Self::take::<Left, T>(&mut self.back, &mut self.len, arena)
    }

    // The two ends meet when `len` runs out, so neither end is ever yielded twice.
    fn take<D, T>(end: &mut Option<Handle>, len: &mut usize, arena: &Arena<T>) -> Option<Handle>
        where D: Dir {

        if *len == 0 { return None; }
        let node = (*end)?;
        *end = arena.step::<D>(node);
        *len -= 1;
        Some(node)
    }
}
