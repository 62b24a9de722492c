use thiserror::Error;

/// A user request, carrying raw text exactly as typed.
///
/// Arguments are validated by [`super::Session::handle`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Available,
    Park(String),
    Release(String),
    Find(String),
    Details(String),
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),
}

pub const HELP: &str = "\
Commands:
  available         list vacant spots
  park <plate>      park a vehicle in the first free spot
  release <id>      free a spot
  find <plate>      locate a vehicle by license plate
  details <id>      show what is parked in a spot
  dump              print the whole lot as JSON
  help              show this message
  quit              exit";

/// Parse one line of batch input.
///
/// Returns `Ok(None)` for blank lines and `#` comments. The keyword is
/// case-insensitive; everything after it is the argument, so plates may
/// contain spaces.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let arg = rest.to_string();
    let command = match keyword.to_ascii_lowercase().as_str() {
        "available" | "list" => Command::Available,
        "park" => Command::Park(arg),
        "release" => Command::Release(arg),
        "find" | "search" => Command::Find(arg),
        "details" => Command::Details(arg),
        "dump" => Command::Dump,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
    };

    Ok(Some(command))
}
