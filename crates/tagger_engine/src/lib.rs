//! Tagger engine: source decoding, stop-word loading, tag counting and result persistence.
mod decode;
mod extract;
mod format;
mod mapping;
mod persist;
mod stopwords;

pub use decode::{decode_text, read_from, read_text, DecodedText, ReadError};
pub use extract::{count_tags, extract_tags, normalize_token};
pub use format::{format_tags, parse_tags, ParseError};
pub use mapping::FrequencyMapping;
pub use persist::{ensure_output_dir, save_tags, AtomicFileWriter, WriteError};
pub use stopwords::{load_stop_words, load_stop_words_from, StopWordSet};
