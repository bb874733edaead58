//! Handler für Selektion und Suche.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Record.
pub fn select(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::selection::select_record(state, index)
}

/// Setzt den Suchtext.
pub fn set_search_query(state: &mut AppState, query: String) {
    use_cases::selection::set_search_query(state, query);
}
