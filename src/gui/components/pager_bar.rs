// src/gui/components/pager_bar.rs
//
// Previous / "Page X of Y" / Next. Hidden when everything fits on one
// page, buttons disabled at the ends. Only the page number changes here;
// the query (and therefore the view) stays put.

use eframe::egui;

use crate::gui::app::App;
use crate::view;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (current, total, count) = {
        let paged = view::paginate(
            &app.view,
            app.state.gui.session.page(),
            app.state.options.page_size,
        );
        (paged.current, paged.total, app.view.len())
    };

    if total <= 1 {
        ui.label(format!("{count} recipe(s)"));
        return;
    }

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 1, egui::Button::new("Previous")).clicked() {
            app.state.gui.session.set_page(current - 1);
        }

        ui.label(format!("Page {current} of {total}"));

        if ui.add_enabled(current < total, egui::Button::new("Next")).clicked() {
            app.state.gui.session.set_page(current + 1);
        }

        ui.separator();
        ui.label(format!("{count} recipe(s)"));
    });
}
