//! Linkes Panel: Fahrzeugliste mit Suche, Anlegen und Löschen.

use crate::app::{AppIntent, AppState};

/// Rendert die Fahrzeugliste und gibt erzeugte Events zurück.
pub fn render_record_list(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("vehicle_list")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Vehicles");

            let Some(collection) = state.collection.as_deref() else {
                ui.label("Keine Datei geladen");
                return;
            };

            if ui.button("➕ Add new vehicle").clicked() {
                events.push(AppIntent::AddRecordRequested);
            }

            let mut query = state.ui.search_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search...")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                events.push(AppIntent::SearchQueryChanged { query });
            }

            ui.separator();

            let can_delete = collection.len() > 1;
            let selected = collection.selected_index();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (index, record) in collection.filter(&state.ui.search_query).iter() {
                        ui.horizontal(|ui| {
                            let name = if record.display_name().is_empty() {
                                "(ohne Namen)"
                            } else {
                                record.display_name()
                            };
                            if ui.selectable_label(index == selected, name).clicked() {
                                events.push(AppIntent::RecordSelected { index });
                            }

                            if can_delete {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .small_button("🗑")
                                            .on_hover_text("Fahrzeug loeschen")
                                            .clicked()
                                        {
                                            events.push(AppIntent::DeleteRecordRequested {
                                                index,
                                            });
                                        }
                                    },
                                );
                            }
                        });
                    }
                });
        });

    events
}
