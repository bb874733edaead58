//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladene Records, Dialoge, Drafts).
pub mod state;
pub mod use_cases;

pub use crate::core::{HandlingCollection, HandlingRecord};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::EditHistory;
pub use state::{AppState, DraftKey, UiState};
