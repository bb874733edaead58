//! Handler für Record-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, HandlingField};

/// Setzt einen Feldwert im Record `index`.
pub fn set_field(
    state: &mut AppState,
    index: usize,
    field: HandlingField,
    axis: Option<Axis>,
    value: String,
) -> anyhow::Result<()> {
    use_cases::editing::set_field(state, index, field, axis, value)
}

/// Legt einen neuen Record als Kopie des ersten an.
pub fn add_record(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    use_cases::editing::add_record(state, name)
}

/// Löscht einen Record.
pub fn delete_record(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::editing::delete_record(state, index)
}
