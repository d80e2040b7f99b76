#![cfg(feature = "egui")]

use anyhow::Context;

use crate::load::{LoadConfig, load_into};
use crate::table::{TableEvent, TableModel};

/// A cell currently open in the inline editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingCell {
    pub row: usize,
    pub column: usize,
    /// Text being typed by the user.
    pub buffer: String,
    /// Set once the text field has been given keyboard focus.
    pub focused: bool,
}

/// Window state: the table, where it is loaded from, and the inline editor.
pub struct IdManagerApp {
    pub config: LoadConfig,
    pub table: TableModel,
    pub editing: Option<EditingCell>,
    pub status: String,
}

impl IdManagerApp {
    pub fn new(config: LoadConfig) -> Self {
        let status = format!("Press Reload to load {}", config.xml_path);
        Self {
            config,
            table: TableModel::new(),
            editing: None,
            status,
        }
    }

    /// Re-read the configured file into the table.
    ///
    /// On failure the table keeps its previous contents.
    pub fn reload(&mut self) -> anyhow::Result<usize> {
        let added = load_into(&mut self.table, &self.config)
            .with_context(|| format!("Failed to load {}", self.config.xml_path))?;
        self.process_events();
        Ok(added)
    }

    /// [`Self::reload`], reporting the outcome in the status line.
    pub fn reload_and_report(&mut self) {
        match self.reload() {
            Ok(added) => {
                self.status = format!("Loaded {} items from {}", added, self.config.xml_path);
            }
            Err(e) => {
                tracing::error!("{e:#}");
                self.status = format!("{e:#}");
            }
        }
    }

    /// Open the inline editor on a cell, seeded with its current value.
    pub fn begin_edit(&mut self, row: usize, column: usize) {
        if !self.table.flags(row, column).editable {
            return;
        }
        let buffer = self
            .table
            .value_at_index(row, column)
            .unwrap_or_default()
            .to_string();
        self.editing = Some(EditingCell {
            row,
            column,
            buffer,
            focused: false,
        });
    }

    /// Write the editor buffer back into the table.
    ///
    /// Returns `false` when the table rejected the value (e.g. empty text).
    pub fn commit_edit(&mut self) -> bool {
        let Some(edit) = self.editing.take() else {
            return false;
        };
        let accepted = self
            .table
            .set_value_at_index(edit.row, edit.column, &edit.buffer);
        if !accepted {
            tracing::debug!(row = edit.row, column = edit.column, "edit rejected");
        }
        self.process_events();
        accepted
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Drain pending table notifications.
    pub fn process_events(&mut self) {
        for event in self.table.take_events() {
            tracing::trace!(?event, "table event");
            if event == TableEvent::Reset {
                self.editing = None;
            }
        }
    }
}
