//! Fehlertypen des handling.meta-Mappers.

use crate::core::{Axis, HandlingField};

/// Fehler beim Parsen einer handling.meta-Datei.
///
/// Jeder Fehler beendet den Vorgang; es gibt kein Teilergebnis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlingXmlError {
    /// Text ist kein wohlgeformtes XML
    #[error("XML nicht wohlgeformt (Byte {position}): {message}")]
    Format { position: u64, message: String },

    /// Wurzel- oder Container-Element fehlt bzw. heißt anders
    #[error("Unerwartete Struktur: <{expected}> erwartet, {found} gefunden")]
    UnexpectedStructure {
        expected: &'static str,
        found: String,
    },

    /// Ein Feld der Feldtabelle fehlt im Item
    #[error("Item {item} ('{handling_name}'): Pflichtfeld {field} fehlt")]
    MissingField {
        item: usize,
        handling_name: String,
        field: HandlingField,
    },

    /// Ein Vektorfeld hat nicht alle drei Achsen
    #[error("Item {item} ('{handling_name}'): Achse {axis} von {field} fehlt")]
    MissingAxis {
        item: usize,
        handling_name: String,
        field: HandlingField,
        axis: Axis,
    },
}

impl HandlingXmlError {
    /// Baut einen `Format`-Fehler aus einer beliebigen Fehlermeldung.
    pub(crate) fn malformed(position: u64, message: impl std::fmt::Display) -> Self {
        HandlingXmlError::Format {
            position,
            message: message.to_string(),
        }
    }
}
