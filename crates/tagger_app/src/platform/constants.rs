/// Remembered selections, relative to the working directory.
pub const STATE_FILENAME: &str = ".tagger_state.ron";
/// Log output, relative to the working directory.
pub const LOG_FILENAME: &str = "tagger.log";

pub const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
Commands:
  file <path>        select the document to analyze
  stopwords <path>   load a stop-word list (one word per line)
  extract            count tags in the selected document
  save <path>        write the tags to a file
  show               print the current state
  help               print this list
  quit               leave
";
