//! Shell command language
//!
//! One command per line: `<verb> [target] [rest of line]`.
//! Blank lines and `#` comments are skipped.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::application::{ApplicationError, ApplicationResult};

static COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)(?:\s+(\S+))?(?:\s+(.*))?$").expect("valid regex"));

pub const HELP: &str = "\
Commands (targets: `root`, a position like `2.1`, or a node id; positions win over ids):
  add <target>            append an empty child to <target>
  delete <target>         remove <target> and its subtree (alias: rm)
  title <target> <text>   set the title of <target>
  text <target> <text>    set the body text of <target> (`\\n` for line breaks)
  show                    print the outline
  doc                     print the Markdown document
  export [dir]            write the document to <dir> (default: configured export_dir)
  reset                   discard the map and start over
  help                    show this help
  quit                    leave the shell (alias: exit)";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { target: String },
    Delete { target: String },
    Title { target: String, value: String },
    Text { target: String, value: String },
    Show,
    Doc,
    Export { dir: Option<PathBuf> },
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> ApplicationResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let caps = COMMAND_LINE
            .captures(line)
            .ok_or_else(|| ApplicationError::InvalidCommand(line.to_string()))?;
        let verb = caps.get(1).map_or("", |m| m.as_str());
        let target = caps.get(2).map(|m| m.as_str().to_string());
        let rest = caps.get(3).map(|m| m.as_str().to_string());

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Self::Add {
                target: required(verb, target)?,
            },
            "delete" | "rm" => Self::Delete {
                target: required(verb, target)?,
            },
            "title" => Self::Title {
                target: required(verb, target)?,
                value: rest.unwrap_or_default(),
            },
            "text" => Self::Text {
                target: required(verb, target)?,
                value: unescape(&rest.unwrap_or_default()),
            },
            "show" => Self::Show,
            "doc" => Self::Doc,
            "export" => {
                // a directory may contain spaces: take everything after the verb
                let dir = match (target, rest) {
                    (Some(t), Some(r)) => Some(PathBuf::from(format!("{} {}", t, r))),
                    (Some(t), None) => Some(PathBuf::from(t)),
                    _ => None,
                };
                Self::Export { dir }
            }
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(ApplicationError::InvalidCommand(format!(
                    "unknown command '{}' (try 'help')",
                    other
                )))
            }
        };
        Ok(Some(command))
    }
}

fn required(verb: &str, target: Option<String>) -> ApplicationResult<String> {
    target.ok_or_else(|| ApplicationError::InvalidCommand(format!("{} requires a target", verb)))
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}
