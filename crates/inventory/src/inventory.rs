use serde::{Deserialize, Serialize};

use stockroom_core::{ByKey, DomainError, DomainResult, OrderedList};
use stockroom_parties::Person;

use crate::item::StockItem;

/// Stock items ordered by title.
pub type Catalog = OrderedList<StockItem, ByKey>;

/// Customers ordered by `(last_name, first_name)`.
pub type CustomerList = OrderedList<Person>;

/// The whole inventory graph: catalog (with nested waiting lists) plus the
/// customer list.
///
/// ## Invariants
///
/// - No two catalog entries share a title.
/// - No two customers share a `(last_name, first_name)` pair.
///
/// Both are enforced on every mutation and re-checked when a persisted
/// record is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InventoryRecord")]
pub struct Inventory {
    catalog: Catalog,
    customers: CustomerList,
}

/// Unvalidated shape of a persisted inventory.
#[derive(Deserialize)]
struct InventoryRecord {
    catalog: Catalog,
    customers: CustomerList,
}

impl TryFrom<InventoryRecord> for Inventory {
    type Error = DomainError;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        let titles = record.catalog.as_slice();
        if let Some(pair) = titles.windows(2).find(|pair| pair[0].title() == pair[1].title()) {
            return Err(DomainError::invariant(format!(
                "duplicate title `{}` in catalog",
                pair[0].title()
            )));
        }

        let customers = record.customers.as_slice();
        if let Some(pair) = customers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DomainError::invariant(format!(
                "duplicate customer `{}`",
                pair[0]
            )));
        }

        Ok(Self {
            catalog: record.catalog,
            customers: record.customers,
        })
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the catalog, in title order.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the customer list, in `(last, first)` order.
    pub fn customers(&self) -> &CustomerList {
        &self.customers
    }

    /// Look up a title.
    pub fn find_stock_item(&self, title: &str) -> Option<&StockItem> {
        let position = self.position_of_title(title)?;
        self.catalog.get(position).ok()
    }

    /// Catalog position of `title`.
    ///
    /// `locate_index` always yields a position (possibly the `size + 1`
    /// boundary), so the occupant's title is confirmed before it counts.
    fn position_of_title(&self, title: &str) -> Option<usize> {
        let position = self.catalog.locate_index(&StockItem::probe(title));
        match self.catalog.get(position) {
            Ok(occupant) if occupant.title() == title => Some(position),
            _ => None,
        }
    }

    /// Insert an item into the catalog; returns its position.
    ///
    /// A title that is already present is rejected with `Conflict`.
    pub fn insert_stock_item(&mut self, item: StockItem) -> DomainResult<usize> {
        if self.position_of_title(item.title()).is_some() {
            return Err(DomainError::conflict(format!(
                "title `{}` already exists",
                item.title()
            )));
        }
        let position = self.catalog.sorted_add(item);
        tracing::debug!(position, size = self.catalog.size(), "stock item inserted");
        Ok(position)
    }

    /// Create a new title with `have = 0` and the given want value.
    pub fn add_title(&mut self, title: &str, want: u32) -> DomainResult<&StockItem> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        let position = self.insert_stock_item(StockItem::new(title, want))?;
        tracing::info!(title, want, "title added");
        Ok(self.catalog.get(position)?)
    }

    /// Remove the catalog entry with the same title as `item`.
    pub fn delete_stock_item(&mut self, item: &StockItem) -> DomainResult<StockItem> {
        self.catalog
            .sorted_remove(item)
            .ok_or_else(|| DomainError::not_found(format!("title `{}`", item.title())))
    }

    /// Remove a title from the catalog.
    pub fn delete_title(&mut self, title: &str) -> DomainResult<StockItem> {
        let removed = self.delete_stock_item(&StockItem::probe(title))?;
        tracing::info!(title, "title removed");
        Ok(removed)
    }

    /// Remove the entry for `title` (if any) and insert `new_item` in its place.
    ///
    /// Returns the replaced entry. If `new_item` carries a different title that
    /// already belongs to another entry, nothing changes and `Conflict` is
    /// returned.
    pub fn replace_stock_item(
        &mut self,
        title: &str,
        new_item: StockItem,
    ) -> DomainResult<Option<StockItem>> {
        if new_item.title() != title && self.position_of_title(new_item.title()).is_some() {
            return Err(DomainError::conflict(format!(
                "title `{}` already exists",
                new_item.title()
            )));
        }
        let replaced = self.catalog.sorted_remove(&StockItem::probe(title));
        self.catalog.sorted_add(new_item);
        Ok(replaced)
    }

    /// Change the want value of a title; returns the previous value.
    pub fn set_want(&mut self, title: &str, want: u32) -> DomainResult<u32> {
        let previous = self.modify_item(title, |item| {
            let previous = item.want();
            item.set_want(want);
            previous
        })?;
        tracing::info!(title, from = previous, to = want, "want value changed");
        Ok(previous)
    }

    /// Remove every title.
    pub fn remove_all(&mut self) {
        self.catalog.remove_all();
    }

    /// Apply `f` to the catalog entry for `title`.
    pub(crate) fn modify_item<R>(
        &mut self,
        title: &str,
        f: impl FnOnce(&mut StockItem) -> R,
    ) -> DomainResult<R> {
        let position = self
            .position_of_title(title)
            .ok_or_else(|| DomainError::not_found(format!("title `{title}`")))?;
        Ok(self.catalog.modify(position, f)?)
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Append `person` to the waiting list of `title`; returns their queue position.
    pub fn add_to_waiting_list(&mut self, title: &str, person: Person) -> DomainResult<usize> {
        self.modify_item(title, |item| item.add_to_waiting_list(person))
    }

    /// Take the front person off the waiting list of `title`.
    ///
    /// `Ok(None)` means the title exists but nobody is waiting.
    pub fn delete_from_waiting_list(&mut self, title: &str) -> DomainResult<Option<Person>> {
        self.modify_item(title, StockItem::delete_from_waiting_list)
    }

    /// Add `person` to the customer list unless an equal entry is already there.
    ///
    /// Returns whether the list changed.
    pub fn add_to_customer_list(&mut self, person: Person) -> bool {
        if self.customers.contains(&person) {
            return false;
        }
        tracing::debug!(customer = %person, "customer added");
        self.customers.sorted_add(person);
        true
    }

    /// Remove `person` from the customer list.
    pub fn delete_from_customer_list(&mut self, person: &Person) -> DomainResult<Person> {
        let removed = self
            .customers
            .sorted_remove(person)
            .ok_or_else(|| DomainError::not_found(format!("customer `{person}`")))?;
        tracing::info!(customer = %removed, "customer removed");
        Ok(removed)
    }

    /// Remove every customer.
    pub fn delete_all_from_customer_list(&mut self) {
        self.customers.remove_all();
    }

    /// Remove every title and every customer.
    pub fn clear(&mut self) {
        self.remove_all();
        self.delete_all_from_customer_list();
        tracing::info!("inventory cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn person(first: &str, last: &str) -> Person {
        Person::new(first, last)
    }

    fn titles(inventory: &Inventory) -> Vec<&str> {
        inventory.catalog().iter().map(StockItem::title).collect()
    }

    #[test]
    fn find_on_empty_catalog_is_not_found() {
        let inventory = Inventory::new();
        assert!(inventory.find_stock_item("Matrix").is_none());
    }

    #[test]
    fn catalog_is_kept_in_title_order() {
        let mut inventory = Inventory::new();
        for title in ["Vertigo", "Alien", "Matrix"] {
            inventory.add_title(title, 1).unwrap();
        }

        assert_eq!(titles(&inventory), ["Alien", "Matrix", "Vertigo"]);
        assert_eq!(inventory.find_stock_item("Matrix").map(StockItem::want), Some(1));
        assert!(inventory.find_stock_item("Matri").is_none());
        assert!(inventory.find_stock_item("Zardoz").is_none());
    }

    #[test]
    fn duplicate_titles_are_rejected() {
        let mut inventory = Inventory::new();
        inventory.add_title("Matrix", 1).unwrap();

        let err = inventory.insert_stock_item(StockItem::new("Matrix", 5)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(inventory.catalog().size(), 1);
        assert_eq!(inventory.find_stock_item("Matrix").map(StockItem::want), Some(1));
    }

    #[test]
    fn empty_title_is_invalid() {
        let mut inventory = Inventory::new();
        assert!(matches!(
            inventory.add_title("  ", 1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn deleting_a_missing_title_is_not_found() {
        let mut inventory = Inventory::new();
        inventory.add_title("Alien", 2).unwrap();

        let err = inventory.delete_title("Matrix").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(inventory.catalog().size(), 1);

        let removed = inventory.delete_title("Alien").unwrap();
        assert_eq!(removed.title(), "Alien");
        assert!(inventory.catalog().is_empty());
    }

    #[test]
    fn replace_swaps_the_entry_for_a_title() {
        let mut inventory = Inventory::new();
        inventory.add_title("Alien", 2).unwrap();
        inventory.add_title("Matrix", 3).unwrap();

        let mut updated = StockItem::new("Aliens", 4);
        updated.set_have(1);
        let replaced = inventory.replace_stock_item("Alien", updated).unwrap();

        assert_eq!(replaced.map(|item| item.want()), Some(2));
        assert_eq!(titles(&inventory), ["Aliens", "Matrix"]);

        let err = inventory
            .replace_stock_item("Aliens", StockItem::new("Matrix", 0))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(titles(&inventory), ["Aliens", "Matrix"]);
    }

    #[test]
    fn set_want_returns_previous_value() {
        let mut inventory = Inventory::new();
        inventory.add_title("Alien", 2).unwrap();

        assert_eq!(inventory.set_want("Alien", 7), Ok(2));
        assert_eq!(inventory.find_stock_item("Alien").map(StockItem::want), Some(7));
        assert!(inventory.set_want("Matrix", 1).unwrap_err().is_not_found());
    }

    #[test]
    fn waiting_list_helpers_resolve_the_title() {
        let mut inventory = Inventory::new();
        inventory.add_title("Alien", 0).unwrap();

        assert_eq!(inventory.add_to_waiting_list("Alien", person("Ellen", "Ripley")), Ok(1));
        assert_eq!(
            inventory.delete_from_waiting_list("Alien"),
            Ok(Some(person("Ellen", "Ripley")))
        );
        assert_eq!(inventory.delete_from_waiting_list("Alien"), Ok(None));
        assert!(inventory.delete_from_waiting_list("Matrix").unwrap_err().is_not_found());
    }

    #[test]
    fn customer_list_is_sorted_and_unique() {
        let mut inventory = Inventory::new();
        assert!(inventory.add_to_customer_list(person("Alan", "Turing")));
        assert!(inventory.add_to_customer_list(person("Ada", "Lovelace")));
        assert!(!inventory.add_to_customer_list(person("Ada", "Lovelace")));

        let names: Vec<String> = inventory.customers().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn deleting_an_unknown_customer_is_not_found() {
        let mut inventory = Inventory::new();
        inventory.add_to_customer_list(person("Ada", "Lovelace"));

        assert!(inventory
            .delete_from_customer_list(&person("Grace", "Hopper"))
            .unwrap_err()
            .is_not_found());
        assert_eq!(
            inventory.delete_from_customer_list(&person("Ada", "Lovelace")),
            Ok(person("Ada", "Lovelace"))
        );
        assert!(inventory.customers().is_empty());
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut inventory = Inventory::new();
        inventory.add_title("Alien", 1).unwrap();
        inventory.add_to_customer_list(person("Ada", "Lovelace"));

        inventory.clear();
        assert_eq!(inventory, Inventory::new());
    }

    #[test]
    fn deserializing_rejects_duplicate_keys() {
        let duplicate_titles = r#"{
            "catalog": [
                {"title": "Alien", "have": 0, "want": 0, "waiting_list": []},
                {"title": "Alien", "have": 1, "want": 1, "waiting_list": []}
            ],
            "customers": []
        }"#;
        let err = serde_json::from_str::<Inventory>(duplicate_titles).unwrap_err();
        assert!(err.to_string().contains("duplicate title"));

        let duplicate_customers = r#"{
            "catalog": [],
            "customers": [
                {"first_name": "Ada", "last_name": "Lovelace"},
                {"first_name": "Ada", "last_name": "Lovelace"}
            ]
        }"#;
        let err = serde_json::from_str::<Inventory>(duplicate_customers).unwrap_err();
        assert!(err.to_string().contains("duplicate customer"));
    }

    proptest! {
        /// Property: adding the same customer twice leaves the list size unchanged.
        #[test]
        fn add_to_customer_list_is_idempotent(
            names in prop::collection::vec(("[A-C]{1,2}", "[A-C]{1,2}"), 1..16),
        ) {
            let mut inventory = Inventory::new();
            for (first, last) in &names {
                inventory.add_to_customer_list(person(first, last));
                let size = inventory.customers().size();
                prop_assert!(!inventory.add_to_customer_list(person(first, last)));
                prop_assert_eq!(inventory.customers().size(), size);
            }
            prop_assert!(inventory.customers().is_ordered());
        }
    }
}
