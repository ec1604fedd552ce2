use crate::mapping::FrequencyMapping;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

/// Render tags as `word: count` lines, each newline-terminated.
///
/// The same text is shown on screen and written by [`crate::save_tags`].
pub fn format_tags(tags: &FrequencyMapping) -> String {
    let mut buffer = String::new();
    for (word, count) in tags.iter() {
        buffer.push_str(&format!("{word}: {count}\n"));
    }
    buffer
}

/// Read back text produced by [`format_tags`]. Blank lines are skipped.
pub fn parse_tags(text: &str) -> Result<FrequencyMapping, ParseError> {
    let mut tags = FrequencyMapping::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let (word, count) = line.rsplit_once(": ").ok_or_else(|| ParseError {
            line: line_no,
            reason: "expected `word: count`".into(),
        })?;
        if word.is_empty() {
            return Err(ParseError {
                line: line_no,
                reason: "empty word".into(),
            });
        }
        let count: u64 = count.trim().parse().map_err(|_| ParseError {
            line: line_no,
            reason: format!("invalid count {count:?}"),
        })?;
        if count == 0 {
            return Err(ParseError {
                line: line_no,
                reason: "count must be positive".into(),
            });
        }
        if tags.contains(word) {
            return Err(ParseError {
                line: line_no,
                reason: format!("duplicate word {word:?}"),
            });
        }
        tags.insert(word.to_string(), count);
    }
    Ok(tags)
}
