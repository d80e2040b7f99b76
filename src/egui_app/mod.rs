//! Egui-based table window for identifier records (feature = "egui").
//!
//! One window with an editable grid and a "Reload" button.

#![cfg(feature = "egui")]

mod state;
mod ui;

pub use state::{EditingCell, IdManagerApp};

use eframe::egui;

use crate::load::LoadConfig;

pub const WINDOW_TITLE: &str = "ID Manager";

/// Open the window and block until it is closed.
pub fn run(config: LoadConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([500.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(IdManagerApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
