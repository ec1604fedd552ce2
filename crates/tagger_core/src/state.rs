use std::path::{Path, PathBuf};

use tagger_engine::{FrequencyMapping, StopWordSet};

use crate::view_model::AppViewModel;
use crate::Notice;

/// Selections worth remembering between runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    pub document: Option<PathBuf>,
    pub stop_words: Option<PathBuf>,
}

/// One user session. Each slot is replaced wholesale, and only when the
/// operation producing it succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    document: Option<PathBuf>,
    stop_words: Option<(PathBuf, StopWordSet)>,
    tags: Option<FrequencyMapping>,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_parts(
            self.document.as_deref(),
            self.stop_words.as_ref().map(|(path, set)| (path.as_path(), set)),
            self.tags.as_ref(),
            self.notice.clone(),
            self.dirty,
        )
    }

    pub fn document(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref().map(|(_, set)| set)
    }

    pub fn stop_words_path(&self) -> Option<&Path> {
        self.stop_words.as_ref().map(|(path, _)| path.as_path())
    }

    pub fn tags(&self) -> Option<&FrequencyMapping> {
        self.tags.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn selections_snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            document: self.document.clone(),
            stop_words: self.stop_words_path().map(Path::to_path_buf),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_document(&mut self, path: PathBuf) {
        self.document = Some(path);
        self.dirty = true;
    }

    pub(crate) fn set_stop_words(&mut self, path: PathBuf, stop_words: StopWordSet) {
        self.stop_words = Some((path, stop_words));
        self.dirty = true;
    }

    pub(crate) fn set_tags(&mut self, tags: FrequencyMapping) {
        self.tags = Some(tags);
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}
