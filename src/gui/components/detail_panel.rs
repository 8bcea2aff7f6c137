// src/gui/components/detail_panel.rs
//
// Full view of one record, addressed by its permanent store id — the
// same id the card grid handed out, so the record shown here is the one
// that was clicked no matter how the list is filtered or sorted now.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::core::fields;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(id) = app.state.gui.open_card else { return };

    // Project into owned strings first; the store borrow must end before
    // the Back button can touch state.
    let detail = app.store.as_ref().and_then(|store| {
        let rec = store.record(id)?;
        let name = s!(fields::resolve(rec, fields::NAME).trim());
        let pairs: Vec<(String, String)> = rec.fields().map(|(h, v)| (s!(h), s!(v))).collect();
        Some((name, pairs))
    });

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            app.state.gui.open_card = None;
        }
        match &detail {
            Some((name, _)) if !name.is_empty() => ui.heading(name.as_str()),
            _ => ui.heading(format!("Recipe #{id}")),
        };
    });

    ui.separator();

    let Some((_, pairs)) = detail else {
        ui.label("Recipe not found — the sheet may have been reloaded.");
        return;
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(180.0))
                .column(Column::remainder())
                .body(|mut body| {
                    for (header, value) in &pairs {
                        body.row(20.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(header).strong());
                            });
                            row.col(|ui| {
                                ui.label(value);
                            });
                        });
                    }
                });
        });
}
