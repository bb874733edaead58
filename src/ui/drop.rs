//! Per Drag & Drop abgelegte Dateien.
//!
//! Desktop-Plattformen liefern einen Pfad, Web-Plattformen nur den Inhalt.

use crate::app::AppIntent;

/// Wandelt abgelegte Dateien in Lade-Intents um.
///
/// Nur die erste Datei wird berücksichtigt, weil immer genau eine
/// Sammlung geöffnet ist.
pub fn collect_dropped_files(ctx: &egui::Context) -> Vec<AppIntent> {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    dropped
        .into_iter()
        .find_map(|file| intent_for_dropped_file(&file))
        .into_iter()
        .collect()
}

fn intent_for_dropped_file(file: &egui::DroppedFile) -> Option<AppIntent> {
    if let Some(path) = &file.path {
        return Some(AppIntent::FileSelected {
            path: path.to_string_lossy().into_owned(),
        });
    }

    let bytes = file.bytes.as_ref()?;
    Some(AppIntent::ContentUploaded {
        name: file.name.clone(),
        bytes: bytes.to_vec(),
    })
}
