//! In-memory row/column store that feeds [`Record`]s to a display grid.
//!
//! Columns are the ordered union of all parameter names seen so far. Structural
//! changes are queued as [`TableEvent`]s which the view drains once per frame.

use indexmap::IndexSet;

use crate::model::Record;

/// Structural or content change notification for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// Columns `first..=last` were appended.
    ColumnsInserted { first: usize, last: usize },
    /// Rows `first..=last` were appended.
    RowsInserted { first: usize, last: usize },
    /// A single cell value changed.
    CellChanged { row: usize, column: usize },
    /// All rows and columns were removed.
    Reset,
}

/// Interaction flags for a cell position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub selectable: bool,
    pub enabled: bool,
    pub editable: bool,
}

impl CellFlags {
    pub const ALL: CellFlags = CellFlags {
        selectable: true,
        enabled: true,
        editable: true,
    };
    pub const NONE: CellFlags = CellFlags {
        selectable: false,
        enabled: false,
        editable: false,
    };
}

#[derive(Debug, Default, Clone)]
pub struct TableModel {
    rows: Vec<Record>,
    headers: IndexSet<String>,
    events: Vec<TableEvent>,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` as a new row, growing the column set first if the
    /// record brings parameter names not seen before.
    pub fn add_record(&mut self, record: Record) {
        let first_new = self.headers.len();
        for name in record.header_names() {
            if !self.headers.contains(name) {
                self.headers.insert(name.to_string());
            }
        }
        if self.headers.len() > first_new {
            self.events.push(TableEvent::ColumnsInserted {
                first: first_new,
                last: self.headers.len() - 1,
            });
        }
        let row = self.rows.len();
        self.rows.push(record);
        self.events.push(TableEvent::RowsInserted {
            first: row,
            last: row,
        });
    }

    pub fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for rec in records {
            self.add_record(rec);
        }
    }

    /// Drop every row and column.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.headers.clear();
        self.events.push(TableEvent::Reset);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get_index(column).map(|s| s.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(|s| s.as_str())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.get_index_of(name)
    }

    pub fn record(&self, row: usize) -> Option<&Record> {
        self.rows.get(row)
    }

    pub fn records(&self) -> &[Record] {
        &self.rows
    }

    /// Value of `column_name` in `row`, or `None` when the record lacks it.
    pub fn value_at(&self, row: usize, column_name: &str) -> Option<&str> {
        self.rows.get(row)?.get(column_name)
    }

    pub fn value_at_index(&self, row: usize, column: usize) -> Option<&str> {
        self.value_at(row, self.header(column)?)
    }

    /// Update a single cell. Returns `false` without touching anything when
    /// `value` is empty or the position is out of range.
    pub fn set_value_at(&mut self, row: usize, column_name: &str, value: &str) -> bool {
        match self.column_index(column_name) {
            Some(column) => self.set_value_at_index(row, column, value),
            None => false,
        }
    }

    pub fn set_value_at_index(&mut self, row: usize, column: usize, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        let Some(name) = self.headers.get_index(column) else {
            return false;
        };
        let Some(record) = self.rows.get_mut(row) else {
            return false;
        };
        record.insert(name.as_str(), value);
        self.events.push(TableEvent::CellChanged { row, column });
        true
    }

    pub fn flags(&self, row: usize, column: usize) -> CellFlags {
        if row < self.rows.len() && column < self.headers.len() {
            CellFlags::ALL
        } else {
            CellFlags::NONE
        }
    }

    /// Take all pending notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }
}
