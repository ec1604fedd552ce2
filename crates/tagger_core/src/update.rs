use tagger_logging::{tagger_debug, tagger_trace};

use crate::{AppState, Effect, Msg, Notice, NoticeKind};

const NEED_INPUTS: &str = "Please select a file and stop words first.";
const NEED_TAGS: &str = "No tags to save. Please extract tags first.";
const SAVED: &str = "Tags saved successfully.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    tagger_trace!("update: {}", msg_name(&msg));
    let effects = match msg {
        Msg::DocumentSelected(path) => {
            state.select_document(path);
            state.clear_notice();
            Vec::new()
        }
        Msg::StopWordsSelected(path) => vec![Effect::LoadStopWords { path }],
        Msg::StopWordsLoaded { path, result } => {
            match result {
                Ok(stop_words) => {
                    let message = format!("Loaded {} stop words.", stop_words.len());
                    state.set_stop_words(path, stop_words);
                    state.set_notice(Notice::new(NoticeKind::Info, message));
                }
                Err(err) => {
                    // The previous list, if any, stays in effect.
                    state.set_notice(Notice::new(
                        NoticeKind::ReadError,
                        format!("Could not load stop words from {}: {err}", path.display()),
                    ));
                }
            }
            Vec::new()
        }
        Msg::ExtractClicked => {
            let request = match (state.document(), state.stop_words()) {
                (Some(document), Some(stop_words)) => Some(Effect::ExtractTags {
                    document: document.to_path_buf(),
                    stop_words: stop_words.clone(),
                }),
                _ => None,
            };
            match request {
                Some(effect) => vec![effect],
                None => {
                    tagger_debug!("Extraction rejected: missing document or stop words");
                    state.set_notice(Notice::new(NoticeKind::PreconditionUnmet, NEED_INPUTS));
                    Vec::new()
                }
            }
        }
        Msg::TagsExtracted(result) => {
            match result {
                Ok(tags) => {
                    let message = format!(
                        "Extracted {} tags ({} occurrences).",
                        tags.len(),
                        tags.total()
                    );
                    state.set_tags(tags);
                    state.set_notice(Notice::new(NoticeKind::Info, message));
                }
                Err(err) => {
                    state.set_notice(Notice::new(
                        NoticeKind::ReadError,
                        format!("Could not read document: {err}"),
                    ));
                }
            }
            Vec::new()
        }
        Msg::SaveClicked(path) => match state.tags() {
            Some(tags) => vec![Effect::SaveTags {
                path,
                tags: tags.clone(),
            }],
            None => {
                tagger_debug!("Save rejected: nothing extracted yet");
                state.set_notice(Notice::new(NoticeKind::PreconditionUnmet, NEED_TAGS));
                Vec::new()
            }
        },
        Msg::TagsSaved(result) => {
            let notice = match result {
                Ok(_) => Notice::new(NoticeKind::Info, SAVED),
                Err(err) => Notice::new(
                    NoticeKind::WriteError,
                    format!("Could not save tags: {err}"),
                ),
            };
            state.set_notice(notice);
            Vec::new()
        }
        Msg::RestoreSelections(snapshot) => {
            if let Some(document) = snapshot.document {
                state.select_document(document);
            }
            snapshot
                .stop_words
                .into_iter()
                .map(|path| Effect::LoadStopWords { path })
                .collect()
        }
    };

    (state, effects)
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::DocumentSelected(_) => "DocumentSelected",
        Msg::StopWordsSelected(_) => "StopWordsSelected",
        Msg::StopWordsLoaded { .. } => "StopWordsLoaded",
        Msg::ExtractClicked => "ExtractClicked",
        Msg::TagsExtracted(_) => "TagsExtracted",
        Msg::SaveClicked(_) => "SaveClicked",
        Msg::TagsSaved(_) => "TagsSaved",
        Msg::RestoreSelections(_) => "RestoreSelections",
    }
}
