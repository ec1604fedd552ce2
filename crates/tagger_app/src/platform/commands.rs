use std::path::PathBuf;

use tagger_core::Msg;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
}

/// Parse a prompt line. Blank input yields `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "file" => Command::Dispatch(Msg::DocumentSelected(path_arg(verb, rest)?)),
        "stopwords" => Command::Dispatch(Msg::StopWordsSelected(path_arg(verb, rest)?)),
        "save" => Command::Dispatch(Msg::SaveClicked(path_arg(verb, rest)?)),
        "extract" => no_arg(verb, rest, Command::Dispatch(Msg::ExtractClicked))?,
        "show" => no_arg(verb, rest, Command::Show)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

fn path_arg(verb: &str, rest: &str) -> Result<PathBuf, String> {
    let path = unquote(rest);
    if path.is_empty() {
        return Err(format!("usage: {verb} <path>"));
    }
    Ok(PathBuf::from(path))
}

fn no_arg(verb: &str, rest: &str, command: Command) -> Result<Command, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("`{verb}` takes no arguments"))
    }
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}
