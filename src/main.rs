use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
#[cfg(feature = "egui")]
use idmanager::load::ReloadMode;
use idmanager::load::{DEFAULT_XML_FILE, LoadConfig, load_into};
use idmanager::logging::init_logging;
use idmanager::print::{render_json, render_text_table};
use idmanager::table::TableModel;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Flatten an identifier XML file into a table",
    long_about = None
)]
struct Cli {
    /// Identifier XML file
    #[arg(value_name = "XML_FILE", default_value = DEFAULT_XML_FILE)]
    xml_file: Utf8PathBuf,

    /// Output format when printing to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Keep existing rows when reloading in the window (requires --gui)
    #[cfg(feature = "egui")]
    #[arg(long, requires = "gui")]
    append: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Open the editable table window instead of printing
    #[cfg(feature = "egui")]
    #[arg(long)]
    gui: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = LoadConfig::new(cli.xml_file.clone());

    #[cfg(feature = "egui")]
    if cli.gui {
        let mode = if cli.append {
            ReloadMode::Append
        } else {
            ReloadMode::Replace
        };
        return idmanager::egui_app::run(config.with_reload_mode(mode));
    }

    let mut table = TableModel::new();
    load_into(&mut table, &config)
        .with_context(|| format!("Failed to load {}", config.xml_path))?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text_table(&table)),
        OutputFormat::Json => println!("{}", render_json(&table)?),
    }
    Ok(())
}
