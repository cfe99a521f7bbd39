//! Three-way comparators supplied to [`OrderedList`](super::OrderedList).

use core::cmp::Ordering;

use crate::entity::Entity;

/// A total order over `T`, supplied to a collection from the outside.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders entities by [`Entity::key`], ignoring every other field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByKey;

impl<T: Entity + ?Sized> Comparator<T> for ByKey {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Ord::cmp(a.key(), b.key())
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
