//! Shell service
//!
//! Executes parsed shell commands against an edit session and the export service.
//! Reading input and printing results is left to the CLI layer.

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::application::command::{Command, HELP};
use crate::application::services::{EditSession, ExportService};
use crate::application::ApplicationResult;
use crate::domain::{position_of, render_outline, to_document, Node, NodeId};

/// Result of one executed command, for the CLI to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report (blank line or comment)
    Skipped,
    /// Child added: its id and dotted position
    Added { id: NodeId, position: String },
    /// Tree changed; short description
    Changed(String),
    /// Rendered outline
    Outline(String),
    /// Rendered Markdown document
    Document(String),
    /// Document written to this path
    Exported(PathBuf),
    Help(&'static str),
    Quit,
}

pub struct ShellService {
    session: EditSession,
    export: ExportService,
    export_dir: PathBuf,
    unexported: bool,
}

impl ShellService {
    pub fn new(session: EditSession, export: ExportService, export_dir: PathBuf) -> Self {
        Self {
            session,
            export,
            export_dir,
            unexported: false,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// True when the tree changed since the last export.
    pub fn has_unexported_changes(&self) -> bool {
        self.unexported
    }

    /// Parse and execute one input line.
    pub fn execute_line(&mut self, line: &str) -> ApplicationResult<Outcome> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Outcome::Skipped),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: Command) -> ApplicationResult<Outcome> {
        let outcome = match command {
            Command::Add { target } => {
                let parent = self.session.resolve(&target)?;
                let id = self.session.add_child(&parent)?;
                let position = position_of(self.session.tree(), &id).unwrap_or_default();
                Outcome::Added { id, position }
            }
            Command::Delete { target } => {
                let id = self.session.resolve(&target)?;
                let removed = self
                    .session
                    .tree()
                    .iter()
                    .find(|node| node.id == id)
                    .map_or(0, Node::node_count);
                self.session.delete(&id)?;
                Outcome::Changed(format!("deleted {} ({} nodes)", id, removed))
            }
            Command::Title { target, value } => {
                let id = self.session.resolve(&target)?;
                self.session.set_title(&id, &value)?;
                Outcome::Changed(format!("title of {} updated", id))
            }
            Command::Text { target, value } => {
                let id = self.session.resolve(&target)?;
                self.session.set_text(&id, &value)?;
                Outcome::Changed(format!("text of {} updated", id))
            }
            Command::Show => Outcome::Outline(render_outline(self.session.tree()).to_string()),
            Command::Doc => Outcome::Document(to_document(self.session.tree())),
            Command::Export { dir } => {
                let dir = dir.unwrap_or_else(|| self.export_dir.clone());
                Outcome::Exported(self.export.export(self.session.tree(), &dir)?)
            }
            Command::Reset => {
                self.session.reset();
                Outcome::Changed("mind map reset".to_string())
            }
            Command::Help => Outcome::Help(HELP),
            Command::Quit => Outcome::Quit,
        };
        match &outcome {
            Outcome::Added { .. } | Outcome::Changed(_) => self.unexported = true,
            Outcome::Exported(_) => self.unexported = false,
            _ => {}
        }
        debug!("outcome: {:?}", outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{DomainError, Node, SequentialIdGenerator};
    use crate::infrastructure::traits::{FixedClock, RealFileSystem};

    fn shell(export_dir: PathBuf) -> ShellService {
        let now = NaiveDate::from_ymd_opt(2026, 1, 10)
            .and_then(|d| d.and_hms_opt(12, 34, 0))
            .unwrap();
        ShellService::new(
            EditSession::new(Arc::new(SequentialIdGenerator::new("n"))),
            ExportService::new(Arc::new(RealFileSystem), Arc::new(FixedClock(now)), "無題"),
            export_dir,
        )
    }

    #[test]
    fn given_script_when_executing_then_document_matches() {
        let mut sh = shell(PathBuf::from("."));
        for line in ["add root", "title 1 A", "text 1 B"] {
            sh.execute_line(line).unwrap();
        }
        assert_eq!(
            sh.execute_line("doc").unwrap(),
            Outcome::Document("## A\n\nB\n\n".to_string())
        );
    }

    #[test]
    fn given_add_when_executing_then_reports_id_and_position() {
        let mut sh = shell(PathBuf::from("."));
        sh.execute_line("add root").unwrap();
        assert_eq!(
            sh.execute_line("add 1").unwrap(),
            Outcome::Added {
                id: NodeId::from("n-2"),
                position: "1.1".to_string()
            }
        );
    }

    #[test]
    fn given_delete_root_when_executing_then_domain_error() {
        let mut sh = shell(PathBuf::from("."));
        let err = sh.execute_line("delete root").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::RootNotDeletable)
        ));
    }

    #[test]
    fn given_reset_when_executing_then_tree_is_fresh() {
        let mut sh = shell(PathBuf::from("."));
        sh.execute_line("add root").unwrap();
        sh.execute_line("reset").unwrap();
        assert_eq!(sh.session().tree(), &Node::root());
    }

    #[test]
    fn given_export_without_dir_when_executing_then_uses_configured_dir() {
        let temp = TempDir::new().unwrap();
        let mut sh = shell(temp.path().to_path_buf());

        let outcome = sh.execute_line("export").unwrap();

        assert_eq!(
            outcome,
            Outcome::Exported(temp.path().join("無題_202601101234.md"))
        );
    }

    #[test]
    fn given_edit_then_export_when_tracking_then_unexported_flag_follows() {
        let temp = TempDir::new().unwrap();
        let mut sh = shell(temp.path().to_path_buf());
        assert!(!sh.has_unexported_changes());

        sh.execute_line("add root").unwrap();
        assert!(sh.has_unexported_changes());

        sh.execute_line("export").unwrap();
        assert!(!sh.has_unexported_changes());
    }

    #[test]
    fn given_comment_when_executing_then_skipped() {
        let mut sh = shell(PathBuf::from("."));
        assert_eq!(sh.execute_line("# note").unwrap(), Outcome::Skipped);
    }
}
