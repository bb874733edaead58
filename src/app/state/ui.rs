use crate::core::{Axis, HandlingField};
use std::collections::HashMap;

/// Schlüssel eines Formularfeldes: Record-Index, Feld und ggf. Achse.
pub type DraftKey = (usize, HandlingField, Option<Axis>);

/// UI-bezogener Zustand (Dialoge, Suchtext, ungültige Eingaben).
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
    /// Suchtext der Fahrzeugliste
    pub search_query: String,
    /// Abgelehnte Zahleneingaben, die das Formular weiter anzeigt
    pub drafts: HashMap<DraftKey, String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzeigetext eines Feldes: Draft falls vorhanden, sonst gespeicherter Wert.
    pub fn display_value<'a>(&'a self, key: &DraftKey, stored: &'a str) -> (&'a str, bool) {
        match self.drafts.get(key) {
            Some(draft) => (draft.as_str(), true),
            None => (stored, false),
        }
    }
}
