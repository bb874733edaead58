//! Use-Case-Funktionen für Record-Editing (Felder, Anlegen, Löschen).

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{is_valid_number, Axis, EditError, HandlingCollection, HandlingField};
use anyhow::{Context, Result};
use std::sync::Arc;

fn loaded_collection(state: &mut AppState) -> Result<&mut HandlingCollection> {
    let collection = state
        .collection
        .as_mut()
        .ok_or_else(|| anyhow::anyhow!("Keine Datei geladen"))?;
    Ok(Arc::make_mut(collection))
}

/// Setzt ein Formularfeld.
///
/// Ungültige Zahlen werden nicht übernommen, sondern als Draft im UI-State
/// abgelegt, damit das Formular die Eingabe weiter anzeigt.
pub fn set_field(
    state: &mut AppState,
    index: usize,
    field: HandlingField,
    axis: Option<Axis>,
    value: String,
) -> Result<()> {
    let key = (index, field, axis);

    let collection = state
        .collection
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Keine Datei geladen"))?;
    if collection.get(index).is_none() {
        let err = EditError::OutOfRange {
            index,
            len: collection.len(),
        };
        return Err(anyhow::Error::new(err)
            .context(format!("Feld {} konnte nicht gesetzt werden", field)));
    }

    if state.options.validate_numbers && !is_valid_number(field.kind(), &value) {
        state.ui.status_message = Some(format!("'{}' ist keine gueltige Zahl fuer {}", value, field));
        state.ui.drafts.insert(key, value);
        return Ok(());
    }

    let snap = Snapshot::from_state(state);
    let validate = state.options.validate_numbers;
    loaded_collection(state)?
        .set_field(index, field, axis, value, validate)
        .with_context(|| format!("Feld {} konnte nicht gesetzt werden", field))?;

    state.history.record_edit_snapshot(snap, key);
    if state.ui.drafts.remove(&key).is_some() {
        state.ui.status_message = None;
    }
    Ok(())
}

/// Legt eine Kopie des ersten Records unter `name` an und selektiert sie.
pub fn add_record(state: &mut AppState, name: &str) -> Result<()> {
    let snap = Snapshot::from_state(state);
    let index = loaded_collection(state)?
        .duplicate_as_new(name)
        .context("Neuer Record konnte nicht angelegt werden")?;

    state.history.record_snapshot(snap);
    state.ui.drafts.clear();
    log::info!("Record '{}' an Position {} angelegt", name, index);
    Ok(())
}

/// Entfernt einen Record.
pub fn delete_record(state: &mut AppState, index: usize) -> Result<()> {
    let snap = Snapshot::from_state(state);
    let removed = loaded_collection(state)?
        .remove(index)
        .with_context(|| format!("Record {} konnte nicht geloescht werden", index))?;

    state.history.record_snapshot(snap);
    state.ui.drafts.clear();
    log::info!("Record '{}' geloescht", removed.display_name());
    Ok(())
}
