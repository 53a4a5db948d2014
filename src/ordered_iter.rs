use ::ordered_iter::OrderedSetIterator;
use compare::Compare;
use super::tree::{IntoIter, Iter};

impl<T, C> OrderedSetIterator for IntoIter<T, C> where T: Ord, C: Compare<T> {}

impl<'a, T> OrderedSetIterator for Iter<'a, T> where T: Ord {}
