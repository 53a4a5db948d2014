use compare::{Compare, natural};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use super::{Arena, Handle, Left, Right};

impl<T> Arena<T> {
    /// Panics unless every slot is reachable from the root, each child links back to its parent,
    /// and each item lies strictly between the bounds imposed by its ancestors.
    pub fn assert_valid<C>(&self, cmp: &C) where C: Compare<T> {
        fn check<T, C>(arena: &Arena<T>, cmp: &C, node: Handle, parent: Option<Handle>,
                       low: Option<Handle>, high: Option<Handle>) -> usize where C: Compare<T> {

            let n = &arena.nodes[node];
            assert!(n.parent == parent);
            if let Some(low) = low { assert!(cmp.compares_gt(&n.item, &arena.nodes[low].item)); }
            if let Some(high) = high { assert!(cmp.compares_lt(&n.item, &arena.nodes[high].item)); }

            1 + n.left.map_or(0, |left| check(arena, cmp, left, Some(node), low, Some(node)))
              + n.right.map_or(0, |right| check(arena, cmp, right, Some(node), Some(node), high))
        }

        let reachable = self.root.map_or(0, |root| check(self, cmp, root, None, None, None));
        assert_eq!(reachable, self.len());
    }
}

/// An operation on an `Arena`.
#[derive(Clone, Debug)]
enum Op<T> {
    /// Insert an item.
    Insert(T),
    /// Remove the node in slot `n % arena.len()`.
    Remove(usize),
}

impl<T> Arbitrary for Op<T> where T: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Op<T> {
        if bool::arbitrary(gen) {
            Op::Insert(T::arbitrary(gen))
        } else {
            Op::Remove(usize::arbitrary(gen))
        }
    }
}

impl<T> Op<T> where T: Ord {
    /// Perform the operation on the given arena.
    fn exec(self, arena: &mut Arena<T>) {
        match self {
            Op::Insert(item) => { arena.insert(&natural(), item); }
            Op::Remove(index) => if arena.len() > 0 { arena.remove(index % arena.len()); },
        }
    }
}

fn in_order<T>(arena: &Arena<T>) -> Vec<Handle> {
    let mut nodes = vec![];
    let mut next = arena.end::<Left>();

    while let Some(node) = next {
        nodes.push(node);
        next = arena.step::<Right>(node);
    }

    nodes
}

fn build(items: &[u8]) -> Arena<u8> {
    let mut arena = Arena::new();
    for &item in items { arena.insert(&natural(), item); }
    arena
}

#[test]
fn test_default_is_empty() {
    let mut arena = Arena::<u8>::default();
    assert_eq!(arena.len(), 0);
    assert_eq!(arena.root(), None);
    assert_eq!(arena.end::<Left>(), None);

    assert_eq!(arena.insert(&natural(), 1), Some(0));
    assert_eq!(arena.root(), Some(0));
    arena.assert_valid(&natural());
}

#[test]
fn test_structure() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut arena = Arena::new();
        for op in ops { op.exec(&mut arena); }
        arena.assert_valid(&natural());
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_step_back_and_forth() {
    fn check(items: Vec<u8>) -> bool {
        let arena = build(&items);
        let forward = in_order(&arena);

        let mut backward = vec![];
        let mut next = arena.end::<Right>();
        while let Some(node) = next {
            backward.push(node);
            next = arena.step::<Left>(node);
        }
        backward.reverse();

        forward.len() == arena.len() &&
        forward == backward &&
        forward.windows(2).all(|w| arena.item(w[0]) < arena.item(w[1]))
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_locate() {
    let arena = build(&[5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(arena.locate(&natural(), &4).map(|(node, _)| *arena.item(node)), Some(4));
    assert_eq!(arena.locate(&natural(), &6).map(|(node, _)| *arena.item(node)), Some(7));
    assert_eq!(arena.locate(&natural(), &10).map(|(node, _)| *arena.item(node)), Some(9));
    assert_eq!(arena.find(&natural(), &6), None);
    assert_eq!(build(&[]).locate(&natural(), &6), None);
}

#[test]
fn test_insert_duplicate() {
    let mut arena = build(&[2, 1, 3]);
    assert_eq!(arena.insert(&natural(), 2), None);
    assert_eq!(arena.insert(&natural(), 4), Some(3));
    assert_eq!(arena.len(), 4);
}

#[test]
fn test_remove_junction_refills() {
    let mut arena = build(&[5, 3, 8, 1, 4, 7, 9]);
    let root = arena.root().unwrap();

    let removed = arena.remove(root);
    assert_eq!(removed.item, 5);
    assert_eq!(removed.refilled, Some(root));
    assert_eq!(*arena.item(root), 7);
    arena.assert_valid(&natural());
}

#[test]
fn test_remove_relocates_last_slot() {
    let mut arena = build(&[2, 1, 3]);

    // Slot 2 holds 3 and moves into the slot freed by removing 1.
    let removed = arena.remove(1);
    assert_eq!(removed.item, 1);
    assert_eq!(removed.refilled, None);
    assert_eq!(removed.relocate(2), 1);
    assert_eq!(removed.relocate(0), 0);
    assert_eq!(*arena.item(1), 3);
    arena.assert_valid(&natural());

    let removed = arena.remove(0);
    assert_eq!(removed.item, 2);
    assert_eq!(arena.root(), Some(0));
    assert_eq!(*arena.item(0), 3);
    arena.assert_valid(&natural());
}

#[test]
fn test_closest() {
    let arena = build(&[10, 5, 15, 3, 7, 12, 20]);
    let floor = |key: u8| arena.closest::<Left, _, _>(&natural(), &key).map(|n| *arena.item(n));
    let ceiling = |key: u8| arena.closest::<Right, _, _>(&natural(), &key).map(|n| *arena.item(n));

    assert_eq!(floor(2), None);
    assert_eq!(floor(8), Some(7));
    assert_eq!(floor(11), Some(10));
    assert_eq!(floor(25), Some(20));
    assert_eq!(ceiling(2), Some(3));
    assert_eq!(ceiling(8), Some(10));
    assert_eq!(ceiling(13), Some(15));
    assert_eq!(ceiling(25), None);
}
