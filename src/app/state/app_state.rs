use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::{HandlingCollection, HandlingRecord};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::UiState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladene Records (None = keine Datei geladen)
    pub collection: Option<Arc<HandlingCollection>>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            collection: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl geladener Records (für UI-Anzeige)
    pub fn record_count(&self) -> usize {
        self.collection.as_ref().map_or(0, |c| c.len())
    }

    /// Aktuell selektierter Record
    pub fn selected_record(&self) -> Option<&HandlingRecord> {
        self.collection.as_deref().and_then(HandlingCollection::selected)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
