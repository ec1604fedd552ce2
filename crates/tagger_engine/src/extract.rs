use std::path::Path;

use tagger_logging::{tagger_debug, tagger_info};

use crate::decode::{read_text, ReadError};
use crate::mapping::FrequencyMapping;
use crate::stopwords::StopWordSet;

/// Lower-case a token, then drop every character that is not an ASCII letter.
///
/// Lower-casing is full Unicode, so a few non-ASCII letters (e.g. the Kelvin
/// sign) survive as their ASCII counterparts.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}

/// Count tags in `text`, skipping stop words and tokens that normalize to nothing.
pub fn count_tags(text: &str, stop_words: &StopWordSet) -> FrequencyMapping {
    let mut tags = FrequencyMapping::new();
    let mut dropped_empty = 0usize;
    let mut dropped_stop = 0usize;

    for token in text.split_ascii_whitespace() {
        let word = normalize_token(token);
        if word.is_empty() {
            dropped_empty += 1;
            continue;
        }
        if stop_words.contains(&word) {
            dropped_stop += 1;
            continue;
        }
        tags.increment(word);
    }

    tagger_debug!(
        "Counted {} tags ({} distinct); dropped {} empty, {} stop words",
        tags.total(),
        tags.len(),
        dropped_empty,
        dropped_stop
    );
    tags
}

/// Read a document and count its tags.
pub fn extract_tags(path: &Path, stop_words: &StopWordSet) -> Result<FrequencyMapping, ReadError> {
    let decoded = read_text(path)?;
    let tags = count_tags(&decoded.text, stop_words);
    tagger_info!(
        "Extracted {} distinct tags from {:?} ({})",
        tags.len(),
        path,
        decoded.encoding_label
    );
    Ok(tags)
}
