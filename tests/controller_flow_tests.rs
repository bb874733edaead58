use handling_meta_editor::{AppCommand, AppController, AppIntent, AppState};
use handling_meta_editor::{Axis, HandlingField};

const MULTI_ITEM: &str = include_str!("fixtures/multi_item.meta");

fn write_fixture(dir: &tempfile::TempDir) -> String {
    let path = dir.path().join("handling.meta");
    std::fs::write(&path, MULTI_ITEM).expect("Fixture schreiben");
    path.to_string_lossy().into_owned()
}

fn loaded_state(controller: &mut AppController, path: String) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::FileSelected { path })
        .expect("Laden sollte klappen");
    state
}

fn names(state: &AppState) -> Vec<String> {
    state
        .collection
        .as_deref()
        .map(|c| {
            c.records()
                .iter()
                .map(|r| r.display_name().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn mass(state: &AppState, index: usize) -> Option<String> {
    state
        .collection
        .as_deref()
        .and_then(|c| c.get(index))
        .and_then(|r| r.scalar(HandlingField::Mass))
        .map(str::to_string)
}

fn edit_mass(index: usize, value: &str) -> AppIntent {
    AppIntent::FieldEdited {
        index,
        field: HandlingField::Mass,
        axis: None,
        value: value.to_string(),
    }
}

#[test]
fn test_save_requested_without_file_opens_save_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::SaveFile { path } => assert!(path.is_none()),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
    assert!(state.ui.show_save_file_dialog);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RequestExit)
    ));
}

#[test]
fn test_open_requested_sets_file_dialog_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenFileRequested)
        .expect("OpenFileRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_file_dialog);
}

#[test]
fn test_file_selected_loads_records_and_remembers_path() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = write_fixture(&dir);
    let mut controller = AppController::new();

    let state = loaded_state(&mut controller, path.clone());

    assert_eq!(names(&state), vec!["ADDER", "BANSHEE", "COMET2"]);
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path.as_str()));
    assert_eq!(
        state.selected_record().map(|r| r.display_name()),
        Some("ADDER")
    );
    assert!(!state.can_undo());
}

#[test]
fn test_failed_load_keeps_previous_collection() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = write_fixture(&dir);
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, path.clone());

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ContentUploaded {
            name: "kaputt.meta".to_string(),
            bytes: b"<CHandlingDataMgr><HandlingData>".to_vec(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.record_count(), 3);
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path.as_str()));

    let missing = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: dir.path().join("fehlt.meta").to_string_lossy().into_owned(),
        },
    );
    assert!(missing.is_err());
    assert_eq!(state.record_count(), 3);
}

#[test]
fn test_content_upload_loads_without_path_and_save_opens_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ContentUploaded {
                name: "upload.meta".to_string(),
                bytes: MULTI_ITEM.as_bytes().to_vec(),
            },
        )
        .expect("Upload sollte laden");

    assert_eq!(state.record_count(), 3);
    assert!(state.ui.current_file_path.is_none());

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern ohne Pfad oeffnet Dialog");
    assert!(state.ui.show_save_file_dialog);
}

#[test]
fn test_field_edit_then_save_writes_new_value() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let path = write_fixture(&dir);
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, path.clone());

    controller
        .handle_intent(&mut state, edit_mass(1, "1850.5"))
        .expect("Feld setzen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::FieldEdited {
                index: 1,
                field: HandlingField::InertiaMultiplier,
                axis: Some(Axis::X),
                value: "1.2".to_string(),
            },
        )
        .expect("Achse setzen");
    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("Speichern");

    let saved = std::fs::read_to_string(&path).expect("Datei lesbar");
    let reparsed = handling_meta_editor::parse_handling_meta(&saved).expect("Re-Parsing");
    assert_eq!(reparsed[1].scalar(HandlingField::Mass), Some("1850.5"));
    assert_eq!(
        reparsed[1]
            .vector(HandlingField::InertiaMultiplier)
            .map(|v| v.get(Axis::X)),
        Some("1.2")
    );
    assert_eq!(reparsed[0].scalar(HandlingField::Mass), Some("0.250000"));
}

#[test]
fn test_invalid_number_becomes_draft_and_is_not_stored() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));

    controller
        .handle_intent(&mut state, edit_mass(0, "12a"))
        .expect("Ungueltige Zahl ist kein Fehler");

    assert_eq!(mass(&state, 0).as_deref(), Some("0.250000"));
    let key = (0, HandlingField::Mass, None);
    assert_eq!(state.ui.drafts.get(&key).map(String::as_str), Some("12a"));
    assert!(state.ui.status_message.is_some());
    assert!(!state.can_undo());

    controller
        .handle_intent(&mut state, edit_mass(0, "12"))
        .expect("Gueltige Zahl");

    assert_eq!(mass(&state, 0).as_deref(), Some("12"));
    assert!(state.ui.drafts.is_empty());
}

#[test]
fn test_consecutive_edits_of_one_field_undo_in_one_step() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));

    for value in ["1", "15", "150", "1500"] {
        controller
            .handle_intent(&mut state, edit_mass(0, value))
            .expect("Feld setzen");
    }
    assert_eq!(state.history.undo_len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    assert_eq!(mass(&state, 0).as_deref(), Some("0.250000"));
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo");
    assert_eq!(mass(&state, 0).as_deref(), Some("1500"));
}

#[test]
fn test_add_record_duplicates_first_and_undo_restores() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));
    controller
        .handle_intent(&mut state, AppIntent::RecordSelected { index: 2 })
        .expect("Selektion");

    controller
        .handle_intent(&mut state, AppIntent::AddRecordRequested)
        .expect("Anlegen");

    assert_eq!(
        names(&state),
        vec!["new_vehicle", "ADDER", "BANSHEE", "COMET2"]
    );
    assert_eq!(
        state.selected_record().map(|r| r.display_name()),
        Some("new_vehicle")
    );

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    assert_eq!(names(&state), vec!["ADDER", "BANSHEE", "COMET2"]);
    assert_eq!(
        state.selected_record().map(|r| r.display_name()),
        Some("COMET2")
    );
}

#[test]
fn test_add_record_without_file_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddRecordRequested)
        .expect("Ohne Datei passiert nichts");

    assert!(state.collection.is_none());
    assert!(state.command_log.is_empty());
}

#[test]
fn test_delete_record_stops_at_last_record() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::DeleteRecordRequested { index: 0 })
            .expect("Loeschen");
    }

    assert_eq!(names(&state), vec!["COMET2"]);
    assert_eq!(state.history.undo_len(), 2);
}

#[test]
fn test_search_query_does_not_change_selection() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: "comet".to_string(),
            },
        )
        .expect("Suche");

    assert_eq!(state.ui.search_query, "comet");
    let collection = state.collection.as_deref().expect("geladen");
    assert_eq!(collection.filter(&state.ui.search_query).indices(), vec![2]);
    assert_eq!(collection.selected_index(), 0);
}

#[test]
fn test_save_as_writes_file_and_switches_path() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));
    let target = dir
        .path()
        .join("kopie.meta")
        .to_string_lossy()
        .into_owned();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: target.clone(),
            },
        )
        .expect("Speichern unter");

    assert_eq!(state.ui.current_file_path.as_deref(), Some(target.as_str()));
    let saved = std::fs::read_to_string(&target).expect("Datei lesbar");
    assert_eq!(saved, MULTI_ITEM);
}

#[test]
fn test_invalid_number_without_file_fails_and_stores_no_draft() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let err = controller
        .handle_intent(&mut state, edit_mass(0, "12a"))
        .expect_err("Ohne Datei muss Bearbeiten scheitern");

    assert!(format!("{err:#}").contains("Keine Datei geladen"));
    assert!(state.ui.drafts.is_empty());
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_invalid_number_for_missing_record_fails_and_stores_no_draft() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));
    state.ui.status_message = None;

    let result = controller.handle_intent(&mut state, edit_mass(7, "12a"));

    assert!(result.is_err());
    assert!(state.ui.drafts.is_empty());
    assert!(state.ui.status_message.is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_upload_with_invalid_utf8_is_rejected_like_file_load() {
    let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller, write_fixture(&dir));

    let mut bytes = MULTI_ITEM.as_bytes().to_vec();
    let pos = MULTI_ITEM.find("BANSHEE").expect("Name im Fixture");
    bytes[pos] = 0xFF;

    let err = controller
        .handle_intent(
            &mut state,
            AppIntent::ContentUploaded {
                name: "kaputt.meta".to_string(),
                bytes: bytes.clone(),
            },
        )
        .expect_err("Ungueltiges UTF-8 muss abgelehnt werden");
    assert!(format!("{err:#}").contains("UTF-8"));
    assert_eq!(names(&state), vec!["ADDER", "BANSHEE", "COMET2"]);

    let path = dir.path().join("kaputt.meta");
    std::fs::write(&path, &bytes).expect("Datei schreiben");
    let from_path = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    assert!(from_path.is_err());
}
