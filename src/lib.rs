//! An ordered set based on an unbalanced binary search tree.
//!
//! `OrderedTree` keeps its items sorted according to a comparator supplied at construction time
//! (the items' natural order by default). Besides membership it answers nearest-neighbor queries
//! (`first`, `last`, `floor`, `ceiling`) and supports removing items in the middle of an in-order
//! traversal through a [`Cursor`](struct.Cursor.html).
//!
//! The tree is never rebalanced, so inserting items in sorted order degrades it to a list.
//!
//! # Examples
//!
//! ```
//! let mut tree = ordered_tree::OrderedTree::new();
//!
//! for item in [5, 3, 8, 1, 4, 7, 9] { tree.insert(item); }
//!
//! assert_eq!(tree.floor(&6), Some(&5));
//! assert_eq!(tree.ceiling(&6), Some(&7));
//!
//! {
//!     let mut cursor = tree.cursor();
//!     while let Ok(&item) = cursor.advance() {
//!         if item % 2 == 0 { cursor.remove().unwrap(); }
//!     }
//! }
//!
//! assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [1, 3, 5, 7, 9]);
//! ```

#![deny(missing_docs)]

pub use cursor::Cursor;
pub use error::CursorError;
pub use tree::{IntoIter, Iter, OrderedTree};

mod cursor;
mod error;
mod node;
#[cfg(feature = "ordered_iter")] mod ordered_iter;
#[cfg(feature = "quickcheck")] mod quickcheck;
pub mod tree;
