//! Top-level CLI parsing and help output.

use crate::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    /// `verify [profile]`
    Verify(Vec<String>),
    /// `class-table [--output <path>]`
    ClassTable(Vec<String>),
    /// Usage text.
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = rest.to_vec();
    match cmd.as_str() {
        "verify" => Ok(TopLevelCommand::Verify(rest)),
        "class-table" => Ok(TopLevelCommand::ClassTable(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::usage(format!(
            "unknown xtask command: {other} (run `cargo xtask help`)"
        ))),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           verify [fast|full]          Run fmt/clippy/test/doc checks from xtask/verify.toml (default: full)\n\
           class-table [--output <p>]  Print resolved component class strings as JSON\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn commands_forward_their_arguments() {
        assert_eq!(
            parse(args(&["verify", "fast"])).expect("parse"),
            TopLevelCommand::Verify(args(&["fast"]))
        );
        assert_eq!(
            parse(args(&["class-table"])).expect("parse"),
            TopLevelCommand::ClassTable(Vec::new())
        );
        assert_eq!(parse(Vec::new()).expect("parse"), TopLevelCommand::Help);
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        let err = parse(args(&["deploy"])).expect_err("unknown");
        assert!(matches!(err, XtaskError::Usage(_)));
        assert!(err.to_string().contains("unknown xtask command: deploy"));
    }
}
