use tagger_core::{AppViewModel, NoticeKind};

/// Render the view model as console text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push_str(&view.file_label);
    out.push('\n');

    match (&view.stop_words_label, view.stop_word_count) {
        (Some(label), Some(count)) => {
            out.push_str(&format!("Stop words: {label} ({count} entries)\n"));
        }
        _ => out.push_str("Stop words: none loaded\n"),
    }

    if view.tag_count > 0 {
        out.push('\n');
        out.push_str(&view.tags_text);
    }

    if let Some(notice) = &view.notice {
        let tag = match notice.kind {
            NoticeKind::Info => "info",
            NoticeKind::ReadError => "read error",
            NoticeKind::WriteError => "write error",
            NoticeKind::PreconditionUnmet => "not ready",
        };
        out.push_str(&format!("\n[{tag}] {}\n", notice.message));
    }
    out
}
