//! Workspace maintenance commands (`cargo xtask`).
//!
//! Each command family parses its own arguments into typed options and then runs against the
//! workspace root.

pub mod cli;
pub mod commands;
pub mod error;
pub mod workflow;

use crate::cli::TopLevelCommand;
use crate::commands::class_table::ClassTableCommand;
use crate::commands::verify::VerifyCommand;
use crate::error::{XtaskError, XtaskResult};
use std::path::{Path, PathBuf};

/// Shared contract for top-level xtask command families.
///
/// [`XtaskCommand::parse`] is a pure translation from raw arguments into typed options; side
/// effects belong in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing.
    type Options;

    /// Parse command-line arguments into typed options.
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command from the workspace `root`.
    fn run(root: &Path, options: Self::Options) -> XtaskResult<()>;
}

/// Executes `xtask` using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    let parsed = cli::parse(std::env::args().skip(1).collect())?;
    let root = workspace_root()?;

    match parsed {
        TopLevelCommand::Verify(args) => VerifyCommand::run(&root, VerifyCommand::parse(&args)?),
        TopLevelCommand::ClassTable(args) => {
            ClassTableCommand::run(&root, ClassTableCommand::parse(&args)?)
        }
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a process exit code, printing the error to stderr.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}

pub(crate) fn workspace_root() -> XtaskResult<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::config(manifest_dir, "xtask must live under the workspace root"))
}
