//! Handler für Datei-Operationen (Öffnen, Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt eine handling.meta aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}

/// Lädt eine handling.meta aus einem bereits gelesenen Puffer.
pub fn load_content(state: &mut AppState, name: &str, bytes: Vec<u8>) -> anyhow::Result<()> {
    use_cases::file_io::load_from_bytes(state, name, bytes)
}

/// Speichert die Sammlung.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save(state, path)
}
