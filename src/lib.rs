//! handling.meta Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;
pub mod xml;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    Axis, EditError, FieldKind, FieldSection, FieldValue, HandlingCollection, HandlingField,
    HandlingRecord, VectorValue, XmlElement,
};
pub use shared::EditorOptions;
pub use xml::{
    parse_handling_meta, parse_handling_meta_with, write_handling_meta, write_handling_meta_with,
    HandlingXmlError, MissingFieldPolicy, ParseOptions, WriteOptions,
};
