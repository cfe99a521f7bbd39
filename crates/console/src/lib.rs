//! Console front-end for the stockroom inventory.
//!
//! A thin layer: it parses single-letter commands, calls into
//! [`stockroom_inventory::Inventory`], and renders the results as text.
//! Input and output are generic so sessions can be scripted in tests.

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, ParseError};
pub use session::Session;
