use std::path::PathBuf;

use tagger_engine::{FrequencyMapping, StopWordSet};

use crate::SelectionSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked the document to analyze.
    DocumentSelected(PathBuf),
    /// User picked a stop-word list; loading happens in an effect.
    StopWordsSelected(PathBuf),
    /// Result of loading a stop-word list.
    StopWordsLoaded {
        path: PathBuf,
        result: Result<StopWordSet, String>,
    },
    /// User asked for extraction.
    ExtractClicked,
    /// Result of an extraction run.
    TagsExtracted(Result<FrequencyMapping, String>),
    /// User picked a save destination.
    SaveClicked(PathBuf),
    /// Result of saving tags.
    TagsSaved(Result<PathBuf, String>),
    /// Re-apply selections remembered from a previous run.
    RestoreSelections(SelectionSnapshot),
}
