use crate::core::{Axis, HandlingField};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Dateiinhalt liegt bereits im Speicher vor (z.B. per Drag & Drop)
    ContentUploaded { name: String, bytes: Vec<u8> },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Record in der Liste angeklickt
    RecordSelected { index: usize },
    /// Neuen Record als Kopie des ersten anlegen
    AddRecordRequested,
    /// Record löschen
    DeleteRecordRequested { index: usize },
    /// Suchtext der Fahrzeugliste geändert
    SearchQueryChanged { query: String },
    /// Formularfeld geändert
    FieldEdited {
        index: usize,
        field: HandlingField,
        axis: Option<Axis>,
        value: String,
    },

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
