use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tagger_core::SelectionSnapshot;
use tagger_engine::AtomicFileWriter;
use tagger_logging::{tagger_error, tagger_info, tagger_warn};

use super::constants::STATE_FILENAME;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSelections {
    document: Option<PathBuf>,
    stop_words: Option<PathBuf>,
}

/// Missing or unreadable state yields an empty snapshot.
pub(crate) fn load_selections(state_dir: &Path) -> SelectionSnapshot {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SelectionSnapshot::default();
        }
        Err(err) => {
            tagger_warn!("Failed to read persisted state from {:?}: {}", path, err);
            return SelectionSnapshot::default();
        }
    };

    let persisted: PersistedSelections = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            tagger_warn!("Failed to parse persisted state from {:?}: {}", path, err);
            return SelectionSnapshot::default();
        }
    };

    tagger_info!("Loaded persisted selections from {:?}", path);
    SelectionSnapshot {
        document: persisted.document,
        stop_words: persisted.stop_words,
    }
}

pub(crate) fn save_selections(state_dir: &Path, snapshot: &SelectionSnapshot) {
    let persisted = PersistedSelections {
        document: snapshot.document.clone(),
        stop_words: snapshot.stop_words.clone(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            tagger_error!("Failed to serialize persisted state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.join(STATE_FILENAME));
    if let Err(err) = writer.write(&content) {
        tagger_error!("Failed to write persisted state to {:?}: {}", state_dir, err);
    }
}
