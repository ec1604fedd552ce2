use std::path::Path;

use tagger_engine::{format_tags, FrequencyMapping, StopWordSet};

use crate::Notice;

pub const NO_FILE_LABEL: &str = "No file selected.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub file_label: String,
    pub stop_words_label: Option<String>,
    pub stop_word_count: Option<usize>,
    /// `word: count` lines, identical to what a save writes.
    pub tags_text: String,
    pub tag_count: usize,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn from_parts(
        document: Option<&Path>,
        stop_words: Option<(&Path, &StopWordSet)>,
        tags: Option<&FrequencyMapping>,
        notice: Option<Notice>,
        dirty: bool,
    ) -> Self {
        let file_label = match document {
            Some(path) => format!("Selected File: {}", display_name(path)),
            None => NO_FILE_LABEL.to_string(),
        };
        Self {
            file_label,
            stop_words_label: stop_words.map(|(path, _)| display_name(path)),
            stop_word_count: stop_words.map(|(_, set)| set.len()),
            tags_text: tags.map(format_tags).unwrap_or_default(),
            tag_count: tags.map_or(0, FrequencyMapping::len),
            notice,
            dirty,
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
