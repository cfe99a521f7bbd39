//! FIFO waiting queue with the same 1-based positional contract as
//! [`OrderedList`](super::OrderedList).

use std::collections::VecDeque;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::error::{CollectionError, CollectionResult};
use super::index_of;

/// Insertion-ordered sequence: append at the back, remove from the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn add_last(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the front element.
    pub fn remove_first(&mut self) -> CollectionResult<T> {
        self.items.pop_front().ok_or(CollectionError::EmptyQueue)
    }

    pub fn peek_first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Element at a 1-based position (`1` is the front).
    pub fn get(&self, position: usize) -> CollectionResult<&T> {
        let index = index_of(position, self.items.len())?;
        Ok(&self.items[index])
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Index<usize> for Queue<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        match self.get(position) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
