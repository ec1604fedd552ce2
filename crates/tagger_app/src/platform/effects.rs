use tagger_core::{Effect, Msg};
use tagger_engine::{extract_tags, load_stop_words, save_tags};
use tagger_logging::{tagger_info, tagger_warn};

/// Runs core effects against the engine, synchronously.
#[derive(Debug, Default)]
pub struct EffectRunner;

impl EffectRunner {
    pub fn new() -> Self {
        Self
    }

    /// Execute one effect and return the message reporting its outcome.
    pub fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::LoadStopWords { path } => {
                tagger_info!("LoadStopWords path={:?}", path);
                let result = load_stop_words(&path).map_err(|err| {
                    tagger_warn!("Stop word load failed: {}", err);
                    err.to_string()
                });
                Msg::StopWordsLoaded { path, result }
            }
            Effect::ExtractTags {
                document,
                stop_words,
            } => {
                tagger_info!(
                    "ExtractTags document={:?} stop_words={}",
                    document,
                    stop_words.len()
                );
                let result = extract_tags(&document, &stop_words).map_err(|err| {
                    tagger_warn!("Extraction failed: {}", err);
                    err.to_string()
                });
                Msg::TagsExtracted(result)
            }
            Effect::SaveTags { path, tags } => {
                tagger_info!("SaveTags path={:?} tags={}", path, tags.len());
                let result = save_tags(&path, &tags).map_err(|err| {
                    tagger_warn!("Save to {:?} failed: {}", path, err);
                    err.to_string()
                });
                Msg::TagsSaved(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tagger_engine::{FrequencyMapping, StopWordSet};
    use tempfile::TempDir;

    #[test]
    fn load_reports_set_or_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stop.txt");
        fs::write(&path, "The\non\n").unwrap();

        let msg = EffectRunner::new().run(Effect::LoadStopWords { path: path.clone() });
        assert_eq!(
            msg,
            Msg::StopWordsLoaded {
                path,
                result: Ok(StopWordSet::from_text("the\non\n")),
            }
        );

        let missing = temp.path().join("missing.txt");
        match EffectRunner::new().run(Effect::LoadStopWords { path: missing }) {
            Msg::StopWordsLoaded { result: Err(err), .. } => assert!(err.contains("missing.txt")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn extract_and_save_round_trip_through_disk() {
        let temp = TempDir::new().unwrap();
        let document = temp.path().join("doc.txt");
        fs::write(&document, "The Cat sat on the MAT. cat123!").unwrap();
        let runner = EffectRunner::new();

        let tags = match runner.run(Effect::ExtractTags {
            document,
            stop_words: StopWordSet::from_text("the\non"),
        }) {
            Msg::TagsExtracted(Ok(tags)) => tags,
            other => panic!("unexpected {other:?}"),
        };
        let expected: FrequencyMapping =
            [("cat", 2), ("mat", 1), ("sat", 1)].into_iter().collect();
        assert_eq!(tags, expected);

        let out = temp.path().join("tags.txt");
        let msg = runner.run(Effect::SaveTags {
            path: out.clone(),
            tags,
        });
        assert_eq!(msg, Msg::TagsSaved(Ok(out.clone())));
        assert_eq!(fs::read_to_string(out).unwrap(), "cat: 2\nmat: 1\nsat: 1\n");
    }
}
