//! XML Import/Export für handling.meta-Dateien.
//!
//! Das Format schachtelt `CHandlingDataMgr` → `HandlingData` → `Item`; jedes Item
//! wird auf einen flachen `HandlingRecord` abgebildet und zurück.

pub mod error;
pub mod parser;
mod tree;
pub mod writer;

pub use error::HandlingXmlError;
pub use parser::{
    normalize_items, parse_handling_meta, parse_handling_meta_with, ItemSet, MissingFieldPolicy,
    ParseOptions,
};
pub use writer::{write_handling_meta, write_handling_meta_with, WriteOptions, XML_DECLARATION};

/// Wurzelelement
pub const ROOT_ELEMENT: &str = "CHandlingDataMgr";
/// Container aller Items
pub const CONTAINER_ELEMENT: &str = "HandlingData";
/// Ein Fahrzeug-Profil
pub const ITEM_ELEMENT: &str = "Item";
/// Attribut skalarer Zahlenfelder
pub const VALUE_ATTRIBUTE: &str = "value";
