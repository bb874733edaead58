//! Zentrales Formular: ein Eingabefeld pro Feld der Feldtabelle.
//!
//! Die Abschnitte und ihre Reihenfolge kommen aus `FieldSection`, die Felder
//! pro Abschnitt aus `HandlingField::ALL`. Ungültige Zahlen (Drafts) werden rot
//! angezeigt, bis sie korrigiert sind.

use crate::app::{AppIntent, AppState, DraftKey, UiState};
use crate::core::{Axis, FieldKind, FieldSection, FieldValue, HandlingField, HandlingRecord};

const DRAFT_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 80, 80);
const AXIS_INPUT_WIDTH: f32 = 80.0;

/// Rendert das Formular des selektierten Records.
pub fn render_record_form(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(collection) = state.collection.as_deref() else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No file loaded. Use File → Open").size(20.0),
                );
            });
            return;
        };

        let index = collection.selected_index();
        let Some(record) = state.selected_record() else {
            ui.label("Keine Fahrzeuge in der Datei");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(format!("Editing: {}", record.display_name()));
            if let Some(item_type) = record.item_type() {
                ui.weak(item_type);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Save").clicked() {
                    events.push(AppIntent::SaveRequested);
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for section in FieldSection::ALL {
                    render_section(ui, &state.ui, index, record, section, &mut events);
                }
            });
    });

    events
}

fn render_section(
    ui: &mut egui::Ui,
    ui_state: &UiState,
    index: usize,
    record: &HandlingRecord,
    section: FieldSection,
    events: &mut Vec<AppIntent>,
) {
    egui::CollapsingHeader::new(section.title())
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new(section.title())
                .num_columns(2)
                .spacing([12.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for field in section.fields() {
                        ui.label(field.label()).on_hover_text(field.name());
                        match record.get(field) {
                            Some(FieldValue::Vector(vector)) => {
                                ui.horizontal(|ui| {
                                    for axis in Axis::ALL {
                                        ui.label(axis.attribute());
                                        let key = (index, field, Some(axis));
                                        if let Some(value) = input(
                                            ui,
                                            ui_state,
                                            &key,
                                            vector.get(axis),
                                            AXIS_INPUT_WIDTH,
                                        ) {
                                            events.push(edited(key, value));
                                        }
                                    }
                                });
                            }
                            Some(value) => {
                                let key = (index, field, None);
                                let stored = value.as_str().unwrap_or("");
                                let width = if field.kind().is_text() { 240.0 } else { 160.0 };
                                if let Some(value) = input(ui, ui_state, &key, stored, width) {
                                    events.push(edited(key, value));
                                }
                            }
                            None => {
                                ui.weak("fehlt");
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Einzelnes Textfeld; liefert den neuen Text, falls geändert.
fn input(
    ui: &mut egui::Ui,
    ui_state: &UiState,
    key: &DraftKey,
    stored: &str,
    width: f32,
) -> Option<String> {
    let (shown, is_draft) = ui_state.display_value(key, stored);
    let mut text = shown.to_string();

    let mut edit = egui::TextEdit::singleline(&mut text).desired_width(width);
    if is_draft {
        edit = edit.text_color(DRAFT_COLOR);
    } else if key.1.kind() == FieldKind::Integer {
        edit = edit.hint_text("0");
    }

    let response = ui.add(edit);
    let response = if is_draft {
        response.on_hover_text("Keine gueltige Zahl, Wert wurde nicht uebernommen")
    } else {
        response
    };

    response.changed().then_some(text)
}

fn edited(key: DraftKey, value: String) -> AppIntent {
    let (index, field, axis): (usize, HandlingField, Option<Axis>) = key;
    AppIntent::FieldEdited {
        index,
        field,
        axis,
        value,
    }
}
