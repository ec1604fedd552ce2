use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use tagger_logging::tagger_info;

use crate::decode::{read_from, read_text, ReadError};

/// Words excluded from tagging.
///
/// Entries are lower-cased and otherwise stored verbatim: surrounding
/// whitespace and punctuation in the source line are kept. Because tokens are
/// stripped down to ASCII letters before lookup, an entry containing anything
/// else can never suppress a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One stop word per line; `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_text(text: &str) -> Self {
        split_lines(text).collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Line splitting that also honours classic-Mac `\r` endings. A terminator at
/// the very end does not produce a trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        let current = rest;
        if current.is_empty() {
            return None;
        }
        match current.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let skip = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &current[end + skip..];
                Some(&current[..end])
            }
            None => {
                rest = "";
                Some(current)
            }
        }
    })
}

/// Load a stop-word list file.
pub fn load_stop_words(path: &Path) -> Result<StopWordSet, ReadError> {
    let decoded = read_text(path)?;
    let stop_words = StopWordSet::from_text(&decoded.text);
    tagger_info!(
        "Loaded {} stop words from {:?} ({})",
        stop_words.len(),
        path,
        decoded.encoding_label
    );
    Ok(stop_words)
}

/// Load a stop-word list from any reader.
pub fn load_stop_words_from<R: Read>(reader: R, source_name: &str) -> Result<StopWordSet, ReadError> {
    let decoded = read_from(reader, source_name)?;
    Ok(StopWordSet::from_text(&decoded.text))
}
