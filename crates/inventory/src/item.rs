use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, Queue};
use stockroom_parties::Person;

/// A title in the catalog together with its stock levels and waiting list.
///
/// `have` and `want` are independent counters; the fulfillment operations
/// push them toward each other. The title is the catalog key and cannot be
/// changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    title: String,
    have: u32,
    want: u32,
    waiting_list: Queue<Person>,
}

impl StockItem {
    /// A new title with nothing in stock.
    pub fn new(title: impl Into<String>, want: u32) -> Self {
        Self {
            title: title.into(),
            have: 0,
            want,
            waiting_list: Queue::new(),
        }
    }

    /// Search key for catalog lookups; only the title is meaningful.
    pub(crate) fn probe(title: &str) -> Self {
        Self::new(title, 0)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn have(&self) -> u32 {
        self.have
    }

    pub fn want(&self) -> u32 {
        self.want
    }

    pub fn set_have(&mut self, have: u32) {
        self.have = have;
    }

    pub fn set_want(&mut self, want: u32) {
        self.want = want;
    }

    pub fn waiting_list(&self) -> &Queue<Person> {
        &self.waiting_list
    }

    /// Append a person to the back of the waiting list; returns their position.
    pub fn add_to_waiting_list(&mut self, person: Person) -> usize {
        self.waiting_list.add_last(person);
        self.waiting_list.size()
    }

    /// Take the person at the front of the waiting list, if any.
    pub fn delete_from_waiting_list(&mut self) -> Option<Person> {
        if self.waiting_list.is_empty() {
            return None;
        }
        self.waiting_list.remove_first().ok()
    }
}

impl Entity for StockItem {
    type Key = str;

    fn key(&self) -> &str {
        &self.title
    }
}
