//! Globale Tastenkombinationen.
//!
//! Verarbeitet Shortcuts und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Fokussierte Textfelder haben ihr eigenes Undo
    let text_focused = ctx.wants_keyboard_input();

    let (modifiers, key_z_pressed, key_y_pressed) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if !modifiers.command {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    if !text_focused {
        if key_z_pressed && !modifiers.shift {
            events.push(AppIntent::UndoRequested);
        }

        if key_y_pressed || (modifiers.shift && key_z_pressed) {
            events.push(AppIntent::RedoRequested);
        }
    }

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter), Ctrl+N (Neu)
    let (key_o_pressed, key_s_pressed, key_n_pressed) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::N),
        )
    });

    if key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    if key_n_pressed {
        events.push(AppIntent::AddRecordRequested);
    }

    events
}
