//! Parties module: the people who buy titles and queue for them.
//!
//! Pure domain logic; no IO.

pub mod person;

pub use person::Person;
