// src/gui/components/search_bar.rs
//
// Top control strip: search box, sort select, language select, Reload.
// Every change funnels through the Session so the page resets the same
// way for all three controls.

use eframe::egui;

use crate::config::consts::ALL_LANGUAGES;
use crate::gui::app::App;
use crate::view::SortMode;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text("name, submitter, ingredients, story")
                .desired_width(260.0),
        );
        if resp.changed() {
            app.state.gui.session.set_search(app.search_text.clone());
            app.recompute();
        }

        ui.separator();

        let prev_sort = app.state.gui.session.query().sort;
        let mut sort = prev_sort;
        egui::ComboBox::from_label("Sort")
            .selected_text(sort.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut sort, SortMode::None, SortMode::None.label());
                ui.selectable_value(&mut sort, SortMode::Name, SortMode::Name.label());
                ui.selectable_value(&mut sort, SortMode::Newest, SortMode::Newest.label());
            });
        if sort != prev_sort {
            logf!("UI: sort → {:?}", sort);
            app.state.gui.session.set_sort(sort);
            app.recompute();
        }

        let prev_lang = app.state.gui.session.query().language.clone();
        let mut lang = prev_lang.clone();
        egui::ComboBox::from_label("Language")
            .selected_text(if lang == ALL_LANGUAGES { s!("All") } else { lang.clone() })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut lang, s!(ALL_LANGUAGES), "All");
                for l in &app.languages {
                    ui.selectable_value(&mut lang, l.clone(), l.as_str());
                }
            });
        if lang != prev_lang {
            logf!("UI: language → {lang}");
            app.state.gui.session.set_language(lang);
            app.recompute();
        }

        ui.separator();

        if ui.button("Reload").clicked() {
            app.reload();
        }
    });
}
