#![cfg(feature = "egui")]

use eframe::egui::{self, Key, Sense};
use egui_extras::{Column, TableBuilder};

use super::state::{EditingCell, IdManagerApp};

/// What the user did to the grid during one frame.
enum CellAction {
    Begin(usize, usize),
    Commit,
    Cancel,
}

impl eframe::App for IdManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reload").clicked() {
                    self.reload_and_report();
                }
                ui.label(format!(
                    "{} rows × {} columns",
                    self.table.row_count(),
                    self.table.column_count()
                ));
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.table.column_count() == 0 {
                ui.centered_and_justified(|ui| {
                    ui.label("No identifiers loaded");
                });
                return;
            }
            if let Some(action) = show_table(ui, self) {
                match action {
                    CellAction::Begin(row, col) => {
                        if self.editing.is_some() {
                            self.commit_edit();
                        }
                        self.begin_edit(row, col);
                    }
                    CellAction::Commit => {
                        self.commit_edit();
                    }
                    CellAction::Cancel => self.cancel_edit(),
                }
            }
        });
    }
}

fn show_table(ui: &mut egui::Ui, app: &mut IdManagerApp) -> Option<CellAction> {
    let IdManagerApp { table, editing, .. } = app;
    let headers: Vec<String> = table.headers().map(str::to_owned).collect();
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 8.0;
    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), headers.len())
        .header(24.0, |mut header| {
            for name in &headers {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, table.row_count(), |mut row| {
                let r = row.index();
                for c in 0..headers.len() {
                    row.col(|ui| match editing.as_mut() {
                        Some(edit) if edit.row == r && edit.column == c => {
                            if let Some(a) = show_editor(ui, edit) {
                                action = Some(a);
                            }
                        }
                        _ => {
                            let value = table.value_at_index(r, c).unwrap_or_default();
                            let label = egui::Label::new(value).sense(Sense::click());
                            if ui.add(label).clicked() && table.flags(r, c).editable {
                                action = Some(CellAction::Begin(r, c));
                            }
                        }
                    });
                }
            });
        });
    action
}

fn show_editor(ui: &mut egui::Ui, edit: &mut EditingCell) -> Option<CellAction> {
    let resp = ui.add(egui::TextEdit::singleline(&mut edit.buffer).desired_width(f32::INFINITY));
    if !edit.focused {
        resp.request_focus();
        edit.focused = true;
    }
    if resp.lost_focus() {
        if ui.input(|i| i.key_pressed(Key::Escape)) {
            Some(CellAction::Cancel)
        } else {
            Some(CellAction::Commit)
        }
    } else {
        None
    }
}
