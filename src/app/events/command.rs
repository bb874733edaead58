use crate::core::{Axis, HandlingField};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Anwendung beenden
    RequestExit,
    /// handling.meta von Pfad laden
    LoadFile { path: String },
    /// handling.meta aus Speicher-Puffer laden (Rohbytes, UTF-8 erwartet)
    LoadContent { name: String, bytes: Vec<u8> },
    /// Datei speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveFile { path: Option<String> },

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Record selektieren
    SelectRecord { index: usize },
    /// Kopie des ersten Records unter neuem Namen vorne einfügen
    AddRecord { name: String },
    /// Record entfernen
    DeleteRecord { index: usize },
    /// Suchtext setzen
    SetSearchQuery { query: String },
    /// Feldwert setzen (Achse nur für Vektorfelder)
    SetField {
        index: usize,
        field: HandlingField,
        axis: Option<Axis>,
        value: String,
    },

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
