//! Sorted, randomly indexable container.
//!
//! [`OrderedList`] keeps its elements in the order defined by a
//! [`Comparator`]. Lookup and insertion-point search are binary searches
//! (`O(log n)` comparisons); insert and remove shift the tail (`O(n)` moves),
//! which is the right trade for small, interactively edited lists.
//!
//! ## Invariant
//!
//! For every adjacent pair `(a, b)`, `compare(a, b) != Greater`. Duplicates
//! (elements comparing `Equal`) are permitted; uniqueness is a concern of
//! whoever owns the list.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::comparator::{Comparator, NaturalOrder};
use super::error::{CollectionError, CollectionResult};
use super::index_of;

/// A list kept sorted under comparator `C`, addressed by 1-based positions.
#[derive(Clone)]
pub struct OrderedList<T, C = NaturalOrder> {
    items: Vec<T>,
    comparator: C,
}

impl<T, C: Default> OrderedList<T, C> {
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Default> Default for OrderedList<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> OrderedList<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at a 1-based position.
    pub fn get(&self, position: usize) -> CollectionResult<&T> {
        let index = index_of(position, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Clear to empty.
    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, C: Comparator<T>> OrderedList<T, C> {
    /// Build a list from a vector that is already sorted under `comparator`.
    ///
    /// Fails with [`CollectionError::OutOfOrder`] naming the position of the
    /// first element that sorts before its predecessor.
    pub fn try_from_sorted(items: Vec<T>, comparator: C) -> CollectionResult<Self> {
        let list = Self { items, comparator };
        match list.first_out_of_order() {
            Some(position) => Err(CollectionError::OutOfOrder { position }),
            None => Ok(list),
        }
    }

    /// Binary search for `value`.
    ///
    /// Returns the position of the first element comparing equal to `value`
    /// when one exists; otherwise the position `value` would occupy once
    /// inserted, which is the first position holding a greater element, or
    /// `size() + 1` when there is none.
    pub fn locate_index(&self, value: &T) -> usize {
        self.items
            .partition_point(|probe| self.comparator.compare(probe, value) == Ordering::Less)
            + 1
    }

    /// Position of an element comparing equal to `value`, if any.
    ///
    /// `locate_index` always answers with *some* position, so the occupant is
    /// confirmed before it counts as a match.
    pub fn position_of(&self, value: &T) -> Option<usize> {
        let position = self.locate_index(value);
        let occupant = self.items.get(position - 1)?;
        (self.comparator.compare(occupant, value) == Ordering::Equal).then_some(position)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    /// Insert `value` at its located position; returns that position.
    pub fn sorted_add(&mut self, value: T) -> usize {
        let position = self.locate_index(&value);
        self.items.insert(position - 1, value);
        position
    }

    /// Remove the element comparing equal to `value`.
    ///
    /// A missing element is a no-op (`None`); callers that need to tell the
    /// two outcomes apart inspect the return value.
    pub fn sorted_remove(&mut self, value: &T) -> Option<T> {
        let position = self.position_of(value)?;
        Some(self.items.remove(position - 1))
    }

    /// Mutate the element at `position` in place.
    ///
    /// If the mutation changed how the element compares to its neighbours it is
    /// moved to its new sorted position, so the ordering invariant holds after
    /// every call.
    pub fn modify<R>(
        &mut self,
        position: usize,
        f: impl FnOnce(&mut T) -> R,
    ) -> CollectionResult<R> {
        let index = index_of(position, self.items.len())?;
        let out = f(&mut self.items[index]);

        if !self.is_seated(index) {
            let value = self.items.remove(index);
            let moved_to = self.sorted_add(value);
            tracing::trace!(from = position, to = moved_to, "re-seated modified element");
        }
        Ok(out)
    }

    /// Whether every adjacent pair respects the comparator.
    pub fn is_ordered(&self) -> bool {
        self.first_out_of_order().is_none()
    }

    fn is_seated(&self, index: usize) -> bool {
        let value = &self.items[index];
        let after_prev = index == 0
            || self.comparator.compare(&self.items[index - 1], value) != Ordering::Greater;
        let before_next = index + 1 >= self.items.len()
            || self.comparator.compare(value, &self.items[index + 1]) != Ordering::Greater;
        after_prev && before_next
    }

    fn first_out_of_order(&self) -> Option<usize> {
        self.items
            .windows(2)
            .position(|pair| self.comparator.compare(&pair[0], &pair[1]) == Ordering::Greater)
            .map(|index| index + 2)
    }
}

impl<T, C> Index<usize> for OrderedList<T, C> {
    type Output = T;

    /// Fail-fast positional access; use [`OrderedList::get`] for a checked read.
    fn index(&self, position: usize) -> &T {
        match self.get(position) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedList<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.sorted_add(value);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OrderedList<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedList<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C> IntoIterator for OrderedList<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: PartialEq, C> PartialEq for OrderedList<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, C> Eq for OrderedList<T, C> {}

/// Serialized as a plain sequence in list order.
impl<T: Serialize, C> Serialize for OrderedList<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// Rejects sequences that are not sorted under `C`.
impl<'de, T, C> Deserialize<'de> for OrderedList<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from_sorted(items, C::default()).map_err(D::Error::custom)
    }
}
