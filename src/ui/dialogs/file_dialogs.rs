use crate::app::{AppIntent, UiState};

const FILTER_NAME: &str = "Handling Meta";
const FILTER_EXTENSIONS: &[&str] = &["meta", "xml"];

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
///
/// `default_file_name` wird im Speichern-Dialog vorgeschlagen, solange noch
/// keine Datei geöffnet wurde.
pub fn handle_file_dialogs(ui_state: &mut UiState, default_file_name: &str) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(FILTER_NAME, FILTER_EXTENSIONS)
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let file_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(default_file_name);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(FILTER_NAME, FILTER_EXTENSIONS)
            .set_file_name(file_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
