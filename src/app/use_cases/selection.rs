//! Use-Case-Funktionen für Record-Selektion und Suche.

use crate::app::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Selektiert einen Record. Kein Undo-Schritt.
pub fn select_record(state: &mut AppState, index: usize) -> Result<()> {
    let Some(collection) = state.collection.as_mut() else {
        log::debug!("Selektion ohne geladene Datei ignoriert");
        return Ok(());
    };

    if collection.selected_index() == index {
        return Ok(());
    }

    Arc::make_mut(collection)
        .select(index)
        .with_context(|| format!("Record {} kann nicht selektiert werden", index))
}

/// Setzt den Suchtext der Fahrzeugliste.
pub fn set_search_query(state: &mut AppState, query: String) {
    state.ui.search_query = query;
}
