use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tagger_logging::{tagger_debug, tagger_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

/// A document or stop-word source could not be opened or read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read {source_name}: {source}")]
pub struct ReadError {
    pub source_name: String,
    #[source]
    pub source: io::Error,
}

impl ReadError {
    pub(crate) fn new(source_name: impl Into<String>, source: io::Error) -> Self {
        Self {
            source_name: source_name.into(),
            source,
        }
    }
}

/// Read a whole file and decode it to text.
pub fn read_text(path: &Path) -> Result<DecodedText, ReadError> {
    let bytes = fs::read(path).map_err(|e| ReadError::new(path.display().to_string(), e))?;
    tagger_debug!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(decode_text(&bytes))
}

/// Drain a reader and decode its bytes to text. `source_name` only labels errors.
pub fn read_from<R: Read>(mut reader: R, source_name: &str) -> Result<DecodedText, ReadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ReadError::new(source_name, e))?;
    Ok(decode_text(&bytes))
}

/// Decode raw bytes leniently using: BOM -> strict UTF-8 -> chardetng guess.
///
/// Malformed sequences are replaced rather than rejected, so any readable
/// file yields some text.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    // 1) BOM wins over everything else.
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // 2) Plain UTF-8 (includes pure ASCII).
    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_owned(),
            encoding_label: UTF_8.name().to_string(),
        };
    }

    // 3) Legacy single/multi-byte encodings.
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedText {
    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        tagger_warn!(
            "Malformed {} input; replaced invalid sequences",
            used.name()
        );
    }
    DecodedText {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
    }
}
