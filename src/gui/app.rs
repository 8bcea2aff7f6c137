// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    store::{self, RecordStore},
    view::{self, View},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Recipe Cards",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Canonical data for the current load. Absent until the first
    /// successful cache read or fetch; the list renders empty then.
    pub store: Option<RecordStore>,

    /// Derived view for the current query — identities only, recomputed
    /// on every input change.
    pub view: View,

    /// Distinct language values for the filter control.
    pub languages: Vec<String>,

    /// Search box scratch text; pushed into the session on change.
    pub search_text: String,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            store: None,
            view: View::default(),
            languages: Vec::new(),
            search_text: s!(),
            status: s!("Idle"),
        };

        // Cache-first startup; the network is only touched on Reload.
        match store::cached_store() {
            Ok(cached) => {
                logf!("Cache: loaded {} approved records", cached.len());
                app.install_store(cached);
                app.status = s!("Loaded cached sheet");
            }
            Err(e) => {
                logd!("Cache: {e}");
                app.status = s!("No local data yet — press Reload");
            }
        }

        app
    }

    /// Swap in a freshly loaded store. RecordIds from the old store are
    /// void, so the open card is dropped and the page rewinds.
    pub fn install_store(&mut self, new: RecordStore) {
        self.languages = new.languages();
        self.store = Some(new);
        self.state.gui.open_card = None;
        self.state.gui.session.set_page(1);
        self.recompute();
    }

    /// Rebuild the derived view from the immutable store. Cheap enough
    /// to run on every keystroke.
    pub fn recompute(&mut self) {
        self.view = match &self.store {
            Some(store) => view::compute_view(store, self.state.gui.session.query()),
            None => View::default(),
        };
    }

    pub fn reload(&mut self) {
        self.status = s!("Loading recipes…");
        let url = self.state.options.source.url.clone();

        match store::fetch_store(&url) {
            Ok(fetched) => {
                logf!("Fetch: {} approved records", fetched.len());
                self.install_store(fetched);
                self.status = s!();
            }
            Err(e) => {
                loge!("Fetch: {e}");
                // A failed load leaves the store absent; the list renders
                // empty under the error status. No automatic retry.
                self.store = None;
                self.languages.clear();
                self.state.gui.open_card = None;
                self.view = View::default();
                self.status = format!("Error loading recipes: {e}");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.gui.open_card.is_some() {
                crate::gui::components::detail_panel::draw(ui, self);
            } else {
                crate::gui::components::card_grid::draw(ui, self);
                ui.separator();
                crate::gui::components::pager_bar::draw(ui, self);
            }
        });
    }
}
