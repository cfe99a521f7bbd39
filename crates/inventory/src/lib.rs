//! Inventory domain module.
//!
//! This crate contains the business rules for the stock catalog, the customer
//! list and the per-title waiting lists, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod fulfillment;
pub mod inventory;
pub mod item;
pub mod want;

pub use fulfillment::{DeliveryOutcome, OrderLine, Sale};
pub use inventory::{Catalog, CustomerList, Inventory};
pub use item::StockItem;
pub use want::parse_want;
