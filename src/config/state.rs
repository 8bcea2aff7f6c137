// src/config/state.rs
use super::options::AppOptions;
use crate::store::RecordId;
use crate::view::Session;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Search/sort/language + current page. Owned here so the view
    /// pipeline itself stays pure.
    pub session: Session,

    /// Card opened in the detail screen, by permanent store index.
    pub open_card: Option<RecordId>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
