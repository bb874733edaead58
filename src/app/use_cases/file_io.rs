//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::history::EditHistory;
use crate::app::AppState;
use crate::core::HandlingCollection;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt die ausgewählte Datei in den AppState und merkt sich den Pfad.
pub fn load_selected_file(state: &mut AppState, path: String) -> Result<()> {
    let xml_content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path))?;

    load_from_content(state, &path, &xml_content)?;
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Lädt eine handling.meta aus Rohbytes (z.B. per Drag & Drop).
///
/// Wie beim Laden vom Pfad wird ungültiges UTF-8 abgelehnt, nicht ersetzt.
pub fn load_from_bytes(state: &mut AppState, source_name: &str, bytes: Vec<u8>) -> Result<()> {
    let xml_content = String::from_utf8(bytes)
        .with_context(|| format!("Datei ist kein gueltiges UTF-8: {}", source_name))?;

    load_from_content(state, source_name, &xml_content)
}

/// Lädt eine handling.meta aus einem Text-Puffer.
///
/// Bei Fehlern bleibt die bisherige Sammlung unverändert. Nach Erfolg ist kein
/// Speicherpfad bekannt, Speichern öffnet also den Save-As-Dialog.
pub fn load_from_content(state: &mut AppState, source_name: &str, xml_content: &str) -> Result<()> {
    let records = crate::xml::parse_handling_meta_with(xml_content, &state.options.parse_options())
        .with_context(|| format!("handling.meta ungueltig: {}", source_name))?;

    log::info!("Loaded {}: {} records", source_name, records.len());

    state.ui.status_message = Some(format!(
        "{} Fahrzeuge geladen aus {}",
        records.len(),
        source_name
    ));
    state.collection = Some(Arc::new(HandlingCollection::new(records)));
    state.ui.current_file_path = None;
    state.ui.drafts.clear();
    state.history = EditHistory::new_with_capacity(state.options.history_depth);
    Ok(())
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_collection_to_file(state, &path)?;
        log::info!("File saved successfully");
        state.ui.status_message = Some(format!("Gespeichert: {}", path));
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
    }
    Ok(())
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> Result<()> {
    write_collection_to_file(state, &path)?;
    log::info!("File saved as: {}", path);
    state.ui.status_message = Some(format!("Gespeichert: {}", path));
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert unter `path` oder, bei `None`, unter dem bekannten Pfad.
pub fn save(state: &mut AppState, path: Option<String>) -> Result<()> {
    match path {
        Some(path) => save_file_as(state, path),
        None => save_current_file(state),
    }
}

/// Baut den Export-Text der geladenen Sammlung.
pub fn export_to_string(state: &AppState) -> Result<String> {
    let collection = state
        .collection
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Keine Datei geladen"))?;

    Ok(crate::xml::write_handling_meta_with(
        collection.records(),
        &state.options.write_options(),
    ))
}

/// Schreibt die Sammlung als XML in eine Datei.
fn write_collection_to_file(state: &AppState, path: &str) -> Result<()> {
    let xml_content = export_to_string(state)?;
    std::fs::write(path, xml_content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path))?;
    Ok(())
}
