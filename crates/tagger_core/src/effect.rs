use std::path::PathBuf;

use tagger_engine::{FrequencyMapping, StopWordSet};

/// IO requested by [`crate::update`]; the app runs it and reports back with a `Msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadStopWords {
        path: PathBuf,
    },
    ExtractTags {
        document: PathBuf,
        stop_words: StopWordSet,
    },
    SaveTags {
        path: PathBuf,
        tags: FrequencyMapping,
    },
}
