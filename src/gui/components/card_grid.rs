// src/gui/components/card_grid.rs
//
// Draws the current page of recipe cards. Cards are projected into owned
// strings first so the store borrow ends before any state mutation.

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::view::{self, Card};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cards: Vec<Card> = {
        let Some(store) = app.store.as_ref() else {
            ui.label("No recipes found.");
            return;
        };
        let paged = view::paginate(
            &app.view,
            app.state.gui.session.page(),
            app.state.options.page_size,
        );
        paged.ids.iter().filter_map(|&id| view::card(store, id)).collect()
    };

    if cards.is_empty() {
        ui.label("No recipes found.");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for card in &cards {
                if draw_card(ui, card) {
                    logd!("UI: open card {}", card.id);
                    app.state.gui.open_card = Some(card.id);
                }
                ui.add_space(6.0);
            }
        });
}

/// One card. Returns true when the user asks to open it.
fn draw_card(ui: &mut egui::Ui, card: &Card) -> bool {
    let mut open = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            let name = if card.name.is_empty() { "(Unnamed recipe)" } else { card.name.as_str() };
            ui.heading(name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                open = ui.button("Open").clicked();
                if !card.language.is_empty() {
                    ui.label(RichText::new(&card.language).weak().italics());
                }
            });
        });

        let by = if card.submitter.is_empty() { "Anonymous" } else { card.submitter.as_str() };
        ui.label(RichText::new(format!("Submitted by {by}")).weak());

        if !card.preview.is_empty() {
            ui.label(&card.preview);
        }
    });

    open
}
