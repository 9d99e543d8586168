//! Command dispatch: wires CLI arguments to services and prints results

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{Outcome, ShellService};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::derive_file_name_with;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

const PROMPT: &str = "mindmap>";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    let mut settings = Settings::load(Some(cwd.as_path()))?;
    if let Some(dir) = &cli.output_dir {
        settings.export_dir = dir.clone();
    }
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Shell { script: Some(path) }) => run_script(&container, path),
        Some(Commands::Shell { script: None }) | None => run_interactive(&container),
        Some(Commands::Filename { title }) => print_filename(&container, title.as_deref()),
        Some(Commands::Config { command }) => config_command(&container, command, &cwd),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Read commands from stdin until `quit` or end of input.
/// Command errors are reported and the session continues.
#[instrument(skip(container))]
fn run_interactive(container: &ServiceContainer) -> CliResult<()> {
    let mut shell = container.shell_service();
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        output::header("mindmap shell (type 'help' for commands)");
        output::prompt(PROMPT);
    }

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| InfraError::io("read stdin", e))?;
        match shell.execute_line(&line) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => present(&outcome),
            Err(e) => output::warning(&e),
        }
        if interactive {
            output::prompt(PROMPT);
        }
    }
    report_unsaved(&shell);
    Ok(())
}

/// Execute a command file; the first failing line aborts.
#[instrument(skip(container))]
fn run_script(container: &ServiceContainer, path: &Path) -> CliResult<()> {
    let content = container
        .fs
        .read_to_string(path)
        .map_err(|e| InfraError::io(format!("read script {}", path.display()), e))?;
    let mut shell = container.shell_service();

    for (idx, line) in content.lines().enumerate() {
        let outcome = shell
            .execute_line(line)
            .map_err(|e| ApplicationError::Script {
                location: format!("{}:{}", path.display(), idx + 1),
                source: Box::new(e),
            })?;
        if outcome == Outcome::Quit {
            break;
        }
        present(&outcome);
    }
    Ok(())
}

fn present(outcome: &Outcome) {
    match outcome {
        Outcome::Skipped | Outcome::Quit => {}
        Outcome::Added { id, position } => {
            output::success(&format!("added [{}] ({})", position, id))
        }
        Outcome::Changed(msg) => output::success(msg),
        Outcome::Outline(outline) => print!("{}", outline),
        Outcome::Document(document) => print!("{}", document),
        Outcome::Exported(path) => output::action("Exported", &path.display()),
        Outcome::Help(help) => output::info(help),
    }
}

fn report_unsaved(shell: &ShellService) {
    if shell.has_unexported_changes() {
        output::warning("leaving with changes that were not exported");
    }
}

fn print_filename(container: &ServiceContainer, title: Option<&str>) -> CliResult<()> {
    let name = derive_file_name_with(
        title.unwrap_or_default(),
        &container.settings.untitled_title,
        container.clock.now(),
    );
    output::info(&name);
    Ok(())
}

fn config_command(
    container: &ServiceContainer,
    command: &ConfigCommands,
    cwd: &Path,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let local = local_config_path(cwd);
            match global_config_path() {
                Some(global) => print_config_path(container, "global", &global),
                None => output::warning("no config directory available for global config"),
            }
            print_config_path(container, "local", &local);
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("no config directory available for global config".into())
                })?
            } else {
                local_config_path(cwd)
            };
            init_config(container, &path)
        }
    }
}

fn print_config_path(container: &ServiceContainer, label: &str, path: &Path) {
    let state = if container.fs.exists(path) {
        "exists"
    } else {
        "not found"
    };
    output::action(label, &path.display());
    output::detail(state);
}

fn init_config(container: &ServiceContainer, path: &Path) -> CliResult<()> {
    if container.fs.exists(path) {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    container
        .fs
        .ensure_parent(path)
        .map_err(|e| InfraError::io(format!("create {}", path.display()), e))?;
    container
        .fs
        .write(path, &Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}
