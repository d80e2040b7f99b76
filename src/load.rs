//! Loading an identifier XML file into a [`TableModel`].

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::Result;
use crate::model::Record;
use crate::parser::{ContentSource, FsSource, IdParser};
use crate::table::TableModel;

/// File name loaded from the working directory when none is given.
pub const DEFAULT_XML_FILE: &str = "kafka_unicode.xml";

/// What a reload does with rows already in the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadMode {
    /// Clear the table before adding the freshly parsed records.
    #[default]
    Replace,
    /// Keep existing rows and append the new ones after them.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub xml_path: Utf8PathBuf,
    pub reload_mode: ReloadMode,
}

impl LoadConfig {
    pub fn new(xml_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            xml_path: xml_path.into(),
            reload_mode: ReloadMode::default(),
        }
    }

    pub fn with_reload_mode(mut self, mode: ReloadMode) -> Self {
        self.reload_mode = mode;
        self
    }

    pub fn xml_path(&self) -> &Utf8Path {
        &self.xml_path
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_XML_FILE)
    }
}

/// Parse the configured file without touching any table.
pub fn load_records(config: &LoadConfig) -> Result<Vec<Record>> {
    load_records_from(FsSource, config)
}

pub fn load_records_from<S: ContentSource>(source: S, config: &LoadConfig) -> Result<Vec<Record>> {
    let mut parser = IdParser::new(source);
    let records = parser.parse_file(config.xml_path())?;
    tracing::info!(path = %config.xml_path, records = records.len(), "loaded identifiers");
    Ok(records)
}

/// Parse the configured file and feed its records into `table`.
///
/// The table is only modified once the whole document parsed successfully.
/// Returns the number of rows added.
pub fn load_into(table: &mut TableModel, config: &LoadConfig) -> Result<usize> {
    load_into_from(FsSource, table, config)
}

pub fn load_into_from<S: ContentSource>(
    source: S,
    table: &mut TableModel,
    config: &LoadConfig,
) -> Result<usize> {
    let records = load_records_from(source, config)?;
    if config.reload_mode == ReloadMode::Replace {
        table.clear();
    }
    let added = records.len();
    table.extend(records);
    Ok(added)
}
