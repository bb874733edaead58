//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::ContentUploaded { name, bytes } => {
            vec![AppCommand::LoadContent { name, bytes }]
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::RecordSelected { index } => vec![AppCommand::SelectRecord { index }],
        AppIntent::AddRecordRequested => {
            if state.record_count() == 0 {
                return Vec::new();
            }
            vec![AppCommand::AddRecord {
                name: state.options.effective_new_record_name().to_string(),
            }]
        }
        AppIntent::DeleteRecordRequested { index } => {
            // Löschen nur, solange danach noch ein Record übrig bleibt
            if state.record_count() <= 1 {
                return Vec::new();
            }
            vec![AppCommand::DeleteRecord { index }]
        }
        AppIntent::SearchQueryChanged { query } => vec![AppCommand::SetSearchQuery { query }],
        AppIntent::FieldEdited {
            index,
            field,
            axis,
            value,
        } => vec![AppCommand::SetField {
            index,
            field,
            axis,
            value,
        }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
