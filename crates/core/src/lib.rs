//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the keyed-entity marker, and the ordered collections the
//! catalog and customer list are built on.

pub mod collections;
pub mod entity;
pub mod error;

pub use collections::{
    ByKey, CollectionError, CollectionResult, Comparator, NaturalOrder, OrderedList, Queue,
};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
