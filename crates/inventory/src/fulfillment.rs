//! Stock-level operations: purchase orders, return orders, sales, deliveries.
//!
//! `have` and `want` are independent counters; these operations are the only
//! ones that move `have`, and each moves it toward `want` or toward the
//! waiting customers.

use serde::{Deserialize, Serialize};

use stockroom_core::DomainResult;
use stockroom_parties::Person;

use crate::inventory::Inventory;
use crate::item::StockItem;

/// One line of a purchase or return order.
///
/// Lines are numbered from 1 in catalog (title) order; numbering restarts
/// with every order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub line: usize,
    pub title: String,
    pub quantity: u32,
}

/// Result of selling a title to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sale {
    /// A unit was handed over; `remaining` units are left in stock.
    Sold { remaining: u32 },
    /// Nothing was in stock; the buyer now waits at `position` in the queue.
    WaitListed { position: usize },
}

/// Result of delivering waiting-list orders for a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// `have` was zero; nothing changed.
    OutOfStock,
    /// The people served, front of the queue first (possibly nobody).
    Delivered(Vec<Person>),
}

impl Inventory {
    /// Raise `have` to `want` for every under-stocked title.
    pub fn purchase_order(&mut self) -> Vec<OrderLine> {
        let lines = self.rebalance(|item| item.want().checked_sub(item.have()));
        tracing::info!(lines = lines.len(), "purchase order processed");
        lines
    }

    /// Lower `have` to `want` for every over-stocked title.
    pub fn return_order(&mut self) -> Vec<OrderLine> {
        let lines = self.rebalance(|item| item.have().checked_sub(item.want()));
        tracing::info!(lines = lines.len(), "return order processed");
        lines
    }

    /// Visit titles in catalog order, set `have := want` wherever `gap` reports
    /// a positive quantity, and emit one numbered line per adjusted title.
    fn rebalance(&mut self, gap: impl Fn(&StockItem) -> Option<u32>) -> Vec<OrderLine> {
        let catalog = self.catalog_mut();
        let mut lines = Vec::new();

        for position in 1..=catalog.size() {
            let adjusted = catalog.modify(position, |item| -> Option<(String, u32)> {
                let quantity = gap(&*item).filter(|quantity| *quantity > 0)?;
                item.set_have(item.want());
                Some((item.title().to_owned(), quantity))
            });

            match adjusted {
                Ok(Some((title, quantity))) => lines.push(OrderLine {
                    line: lines.len() + 1,
                    title,
                    quantity,
                }),
                Ok(None) => {}
                Err(err) => {
                    tracing::error!(position, error = %err, "catalog position vanished mid-order");
                }
            }
        }
        lines
    }

    /// Sell one unit of `title` to `buyer`.
    ///
    /// The buyer is recorded on the customer list either way. When `have` is
    /// zero at the time of sale the buyer is appended to the title's waiting
    /// list instead.
    pub fn sell(&mut self, title: &str, buyer: Person) -> DomainResult<Sale> {
        let sale = self.modify_item(title, |item| match item.have() {
            0 => Sale::WaitListed {
                position: item.add_to_waiting_list(buyer.clone()),
            },
            have => {
                item.set_have(have - 1);
                Sale::Sold { remaining: have - 1 }
            }
        })?;

        match sale {
            Sale::Sold { remaining } => {
                tracing::info!(title, buyer = %buyer, remaining, "sold");
            }
            Sale::WaitListed { position } => {
                tracing::info!(title, buyer = %buyer, position, "sold out; buyer wait-listed");
            }
        }
        self.add_to_customer_list(buyer);
        Ok(sale)
    }

    /// Serve the waiting list of `title` from the front while stock lasts.
    pub fn deliver(&mut self, title: &str) -> DomainResult<DeliveryOutcome> {
        let outcome = self.modify_item(title, |item| {
            if item.have() == 0 {
                return DeliveryOutcome::OutOfStock;
            }

            let mut delivered = Vec::new();
            while item.have() > 0 {
                let Some(person) = item.delete_from_waiting_list() else {
                    break;
                };
                item.set_have(item.have() - 1);
                delivered.push(person);
            }
            DeliveryOutcome::Delivered(delivered)
        })?;

        if let DeliveryOutcome::Delivered(people) = &outcome {
            for person in people {
                tracing::info!(title, customer = %person, "delivered");
            }
        }
        Ok(outcome)
    }
}
