use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tagger_core::{update, AppState, Msg, SelectionSnapshot};
use tagger_logging::{tagger_debug, tagger_info};

use super::commands::{parse_command, Command};
use super::constants::{HELP_TEXT, LOG_FILENAME, PROMPT};
use super::effects::EffectRunner;
use super::{logging, persistence, render};

pub fn run_app() -> anyhow::Result<()> {
    let state_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    logging::initialize(&state_dir.join(LOG_FILENAME));
    tagger_info!("tagger_app starting in {:?}", state_dir);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(state_dir);
    shell.run(stdin.lock(), stdout.lock())
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    state_dir: PathBuf,
    remembered: SelectionSnapshot,
}

impl Shell {
    fn new(state_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(),
            state_dir,
            remembered: SelectionSnapshot::default(),
        }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        self.restore();
        output.write_all(HELP_TEXT.as_bytes())?;
        self.render_if_dirty(&mut output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Help)) => output.write_all(HELP_TEXT.as_bytes())?,
                Ok(Some(Command::Show)) => {
                    self.state.consume_dirty();
                    output.write_all(render::render(&self.state.view()).as_bytes())?;
                }
                Ok(Some(Command::Dispatch(msg))) => {
                    self.dispatch(msg);
                    self.render_if_dirty(&mut output)?;
                }
                Err(usage) => writeln!(output, "{usage}")?,
            }
        }

        tagger_info!("tagger_app exiting");
        Ok(())
    }

    fn restore(&mut self) {
        let snapshot = persistence::load_selections(&self.state_dir);
        self.remembered = snapshot.clone();
        if snapshot != SelectionSnapshot::default() {
            self.dispatch(Msg::RestoreSelections(snapshot));
        }
    }

    /// Apply `msg` and every message produced by the effects it triggers.
    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                inbox.push_back(self.runner.run(effect));
            }
        }
        self.remember_selections();
    }

    fn remember_selections(&mut self) {
        let snapshot = self.state.selections_snapshot();
        if snapshot != self.remembered {
            tagger_debug!("Selections changed; persisting");
            persistence::save_selections(&self.state_dir, &snapshot);
            self.remembered = snapshot;
        }
    }

    fn render_if_dirty<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        if self.state.consume_dirty() {
            output.write_all(render::render(&self.state.view()).as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn run_script(dir: &Path, script: &str) -> String {
        let mut shell = Shell::new(dir.to_path_buf());
        let mut output = Vec::new();
        shell.run(Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn fixture(dir: &Path) -> (PathBuf, PathBuf) {
        let document = dir.join("doc.txt");
        let stop = dir.join("stop.txt");
        fs::write(&document, "The Cat sat on the MAT. cat123!\n").unwrap();
        fs::write(&stop, "the\non\n").unwrap();
        (document, stop)
    }

    #[test]
    fn full_session_extracts_and_saves() {
        let temp = TempDir::new().unwrap();
        let (document, stop) = fixture(temp.path());
        let out = temp.path().join("tags.txt");

        let script = format!(
            "file {}\nstopwords {}\nextract\nsave {}\nquit\n",
            document.display(),
            stop.display(),
            out.display()
        );
        let output = run_script(temp.path(), &script);

        assert!(output.contains("Selected File: doc.txt"));
        assert!(output.contains("cat: 2\nmat: 1\nsat: 1\n"));
        assert!(output.contains("[info] Tags saved successfully."));
        assert_eq!(fs::read_to_string(out).unwrap(), "cat: 2\nmat: 1\nsat: 1\n");
    }

    #[test]
    fn extract_before_selection_is_refused() {
        let temp = TempDir::new().unwrap();
        let output = run_script(temp.path(), "extract\nsave out.txt\n");

        assert!(output.contains("[not ready] Please select a file and stop words first."));
        assert!(output.contains("[not ready] No tags to save. Please extract tags first."));
        assert!(!temp.path().join("out.txt").exists());
    }

    #[test]
    fn unreadable_document_reports_read_error() {
        let temp = TempDir::new().unwrap();
        let (_, stop) = fixture(temp.path());
        let script = format!(
            "file {}\nstopwords {}\nextract\n",
            temp.path().join("gone.txt").display(),
            stop.display()
        );

        let output = run_script(temp.path(), &script);
        assert!(output.contains("[read error] Could not read document"));
    }

    #[test]
    fn bad_input_prints_usage() {
        let temp = TempDir::new().unwrap();
        let output = run_script(temp.path(), "file\nbogus\n");

        assert!(output.contains("usage: file <path>"));
        assert!(output.contains("unknown command `bogus`"));
    }

    #[test]
    fn selections_are_restored_on_next_run() {
        let temp = TempDir::new().unwrap();
        let (document, stop) = fixture(temp.path());
        let script = format!("file {}\nstopwords {}\n", document.display(), stop.display());
        run_script(temp.path(), &script);

        // Second run: extraction works without re-selecting anything.
        let output = run_script(temp.path(), "extract\n");
        assert!(output.contains("Selected File: doc.txt"));
        assert!(output.contains("cat: 2"));
    }
}
