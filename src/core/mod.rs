//! Core-Domänentypen: Feldtabelle, Records und die Record-Sammlung.

pub mod collection;
pub mod element;
/// Core-Datenmodelle für handling.meta-Dateien
///
/// - HandlingRecord: ein Fahrzeug-Profil mit allen Feldern der Tabelle
/// - HandlingCollection: geordnete Records plus Selektion
/// - HandlingField: geschlossene Feldtabelle mit festem Typ je Feld
pub mod record;
pub mod schema;

pub use collection::{HandlingCollection, RecordFilter, NEW_RECORD_NAME};
pub use element::XmlElement;
pub use record::{is_valid_number, EditError, FieldValue, HandlingRecord, VectorValue};
pub use schema::{Axis, FieldKind, FieldSection, HandlingField};
