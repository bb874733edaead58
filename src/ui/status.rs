//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match &state.collection {
                Some(collection) => {
                    ui.label(format!("Vehicles: {}", collection.len()));
                }
                None => {
                    ui.label("No file loaded");
                }
            }

            ui.separator();

            let file_name = state
                .ui
                .current_file_path
                .as_deref()
                .and_then(|p| std::path::Path::new(p).file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("-");
            ui.label(format!("Datei: {}", file_name));

            if !state.ui.drafts.is_empty() {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Ungueltige Eingaben: {}", state.ui.drafts.len()))
                        .color(egui::Color32::LIGHT_RED),
                );
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
