use std::path::PathBuf;

use tagger_core::{update, AppState, Effect, Msg, SelectionSnapshot};
use tagger_engine::StopWordSet;

fn init_logging() {
    tagger_logging::initialize_for_tests();
}

#[test]
fn snapshot_reflects_successful_selections_only() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::DocumentSelected("doc.txt".into()));
    let (state, _) = update(state, Msg::StopWordsSelected("pending.txt".into()));

    // Selecting a list is not enough; it has to load.
    assert_eq!(
        state.selections_snapshot(),
        SelectionSnapshot {
            document: Some(PathBuf::from("doc.txt")),
            stop_words: None,
        }
    );

    let (state, _) = update(
        state,
        Msg::StopWordsLoaded {
            path: "stop.txt".into(),
            result: Ok(StopWordSet::from_text("the\n")),
        },
    );
    assert_eq!(
        state.selections_snapshot().stop_words,
        Some(PathBuf::from("stop.txt"))
    );
}

#[test]
fn restore_reselects_document_and_reloads_stop_words() {
    init_logging();
    let snapshot = SelectionSnapshot {
        document: Some(PathBuf::from("doc.txt")),
        stop_words: Some(PathBuf::from("stop.txt")),
    };

    let (mut state, effects) = update(AppState::new(), Msg::RestoreSelections(snapshot));

    assert_eq!(state.document(), Some(PathBuf::from("doc.txt").as_path()));
    assert!(state.stop_words().is_none());
    assert_eq!(
        effects,
        vec![Effect::LoadStopWords {
            path: PathBuf::from("stop.txt")
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn restoring_empty_snapshot_changes_nothing() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::RestoreSelections(SelectionSnapshot::default()),
    );

    assert_eq!(state, AppState::new());
    assert!(effects.is_empty());
}
