use super::iter::IterCursor;
use crate::adapter::{Adapter, IntoAdapter};
use crate::cursor::Cursor;
use std::collections::{
    BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque, btree_map, btree_set, hash_map,
    hash_set, linked_list, vec_deque,
};

/// Cursor over a borrowed collection whose iterator knows its length
///
/// Used for queues, linked lists, sets and maps: the element count is known
/// up front, positional reads are not offered.
pub struct CollectionCursor<I: Iterator> {
    inner: IterCursor<I>,
}

impl<I> CollectionCursor<I>
where
    I: ExactSizeIterator + Clone,
{
    pub fn new(iter: I) -> Self {
        CollectionCursor {
            inner: IterCursor::new(iter),
        }
    }
}

impl<I> Clone for CollectionCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        CollectionCursor {
            inner: self.inner.clone(),
        }
    }
}

impl<I: Iterator> std::fmt::Debug for CollectionCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CollectionCursor").field(&self.inner).finish()
    }
}

impl<I> Cursor for CollectionCursor<I>
where
    I: ExactSizeIterator + Clone,
    I::Item: Clone,
{
    type Element = I::Item;

    const HAS_COUNT: bool = true;

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn move_next(&mut self) -> bool {
        self.inner.move_next()
    }

    fn current(&self) -> Option<Self::Element> {
        self.inner.current()
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.inner.pristine().len())
    }
}

macro_rules! collection_adapter {
    ($collection:ty, $iter:ty, [$($generics:tt)*]) => {
        impl<'a, $($generics)*> IntoAdapter for &'a $collection {
            type Cursor = CollectionCursor<$iter>;

            fn into_adapter(self) -> Adapter<Self::Cursor> {
                Adapter::new(CollectionCursor::new(self.iter()))
            }
        }
    };
}

collection_adapter!(VecDeque<T>, vec_deque::Iter<'a, T>, [T]);
collection_adapter!(LinkedList<T>, linked_list::Iter<'a, T>, [T]);
collection_adapter!(HashSet<T, S>, hash_set::Iter<'a, T>, [T, S]);
collection_adapter!(BTreeSet<T>, btree_set::Iter<'a, T>, [T]);
collection_adapter!(HashMap<K, V, S>, hash_map::Iter<'a, K, V>, [K, V, S]);
collection_adapter!(BTreeMap<K, V>, btree_map::Iter<'a, K, V>, [K, V]);
