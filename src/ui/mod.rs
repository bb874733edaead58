//! UI-Layer mit egui.
//!
//! Jede Komponente liest den `AppState` nur und meldet Benutzeraktionen als
//! `AppIntent`s zurück.

pub mod dialogs;
pub mod drop;
pub mod form;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod record_list;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use drop::collect_dropped_files;
pub use form::render_record_form;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use record_list::render_record_list;
pub use status::render_status_bar;
