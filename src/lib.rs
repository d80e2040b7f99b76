//! Identifier XML flattener and table model.
//!
//! This crate reads an XML document of nested identifiers, flattens every
//! `<item>` element into a [`model::Record`], and collects the records in a
//! [`table::TableModel`] whose columns grow as new parameter names appear.
//!
//! The binary `idmanager` prints the table as text or JSON.

pub mod error;
pub mod load;
pub mod logging;
pub mod model;
pub mod parser;
pub mod print;
pub mod table;

// Optional GUI/egui functionality lives behind the `egui` feature flag.
// This module provides the editable table window opened by `idmanager --gui`.
#[cfg(feature = "egui")]
pub mod egui_app;

pub use error::LoadError;
pub use load::{LoadConfig, ReloadMode};
pub use model::Record;
pub use table::{TableEvent, TableModel};
