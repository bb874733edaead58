//! Optionen-Dialog für Import, Bearbeitung und Export.

use crate::app::{AppIntent, AppState};
use crate::shared::options::INDENT_WIDTH_MAX;
use crate::xml::MissingFieldPolicy;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Import ──────────────────────────────────────
            ui.collapsing("Import", |ui| {
                ui.label("Fehlende Felder:");
                ui.horizontal(|ui| {
                    changed |= ui
                        .radio_value(
                            &mut opts.missing_field_policy,
                            MissingFieldPolicy::Reject,
                            "Datei ablehnen",
                        )
                        .changed();
                    changed |= ui
                        .radio_value(
                            &mut opts.missing_field_policy,
                            MissingFieldPolicy::FillEmpty,
                            "Leer anlegen",
                        )
                        .changed();
                });
                changed |= ui
                    .checkbox(
                        &mut opts.preserve_unknown_elements,
                        "Unbekannte Elemente behalten",
                    )
                    .changed();
            });

            // ── Bearbeitung ─────────────────────────────────
            ui.collapsing("Bearbeitung", |ui| {
                changed |= ui
                    .checkbox(&mut opts.validate_numbers, "Zahlenfelder pruefen")
                    .changed();
                ui.horizontal(|ui| {
                    ui.label("Name neuer Fahrzeuge:");
                    changed |= ui
                        .text_edit_singleline(&mut opts.new_record_name)
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Undo-Schritte:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.history_depth).range(1..=1000))
                        .changed();
                });
            });

            // ── Export ──────────────────────────────────────
            ui.collapsing("Export", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Einrueckung (Leerzeichen):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.indent_width)
                                .range(0..=INDENT_WIDTH_MAX),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Dateiname-Vorschlag:");
                    changed |= ui
                        .text_edit_singleline(&mut opts.default_file_name)
                        .changed();
                });
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}
