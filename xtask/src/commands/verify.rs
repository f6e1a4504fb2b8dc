//! `cargo xtask verify [fast|full]`: profile-driven fmt/clippy/test/doc checks.

use crate::error::{XtaskError, XtaskResult};
use crate::workflow::Run;
use crate::XtaskCommand;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub(crate) const VERIFY_CONFIG_FILE: &str = "xtask/verify.toml";
const DEFAULT_PROFILE: &str = "full";

/// Contents of `xtask/verify.toml`: named profiles listing named steps.
#[derive(Clone, Debug, Deserialize)]
struct VerifyFile {
    #[serde(skip)]
    path: PathBuf,
    profile: BTreeMap<String, ProfileSpec>,
    step: BTreeMap<String, StepSpec>,
}

#[derive(Clone, Debug, Deserialize)]
struct ProfileSpec {
    steps: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct StepSpec {
    label: String,
    #[serde(default = "default_program")]
    program: String,
    args: Vec<String>,
}

fn default_program() -> String {
    "cargo".to_string()
}

impl VerifyFile {
    fn load(path: &Path) -> XtaskResult<Self> {
        let body = fs::read_to_string(path).map_err(|err| XtaskError::io(path, err))?;
        let mut file: Self = toml::from_str(&body)
            .map_err(|err| XtaskError::config(path, format!("failed to parse: {err}")))?;
        file.path = path.to_path_buf();
        Ok(file)
    }

    /// Steps of `profile_name` in the order the profile lists them.
    fn plan(&self, profile_name: &str) -> XtaskResult<Vec<VerifyStep>> {
        let Some(profile) = self.profile.get(profile_name) else {
            let known = self.profile.keys().cloned().collect::<Vec<_>>().join(", ");
            return Err(XtaskError::config(
                &self.path,
                format!("unknown verify profile `{profile_name}` (known profiles: {known})"),
            ));
        };
        if profile.steps.is_empty() {
            return Err(XtaskError::config(
                &self.path,
                format!("verify profile `{profile_name}` has no steps"),
            ));
        }

        profile
            .steps
            .iter()
            .map(|name| {
                let step = self.step.get(name).ok_or_else(|| {
                    let message = format!("profile `{profile_name}` has undefined step `{name}`");
                    XtaskError::config(&self.path, message)
                })?;
                Ok(VerifyStep {
                    label: step.label.clone(),
                    program: step.program.clone(),
                    args: step.args.clone(),
                })
            })
            .collect()
    }
}

/// Parsed `verify` arguments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerifyOptions {
    profile: Option<String>,
    show_help: bool,
}

/// One resolved command in a verify plan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyStep {
    /// Stage banner.
    pub label: String,
    /// Program to run from the workspace root.
    pub program: String,
    /// Program arguments.
    pub args: Vec<String>,
}

/// `cargo xtask verify`
pub struct VerifyCommand;

impl XtaskCommand for VerifyCommand {
    type Options = VerifyOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_verify_options(args)
    }

    fn run(root: &Path, options: Self::Options) -> XtaskResult<()> {
        if options.show_help {
            print_verify_usage();
            return Ok(());
        }

        let file = VerifyFile::load(&root.join(VERIFY_CONFIG_FILE))?;
        let profile = options.profile.as_deref().unwrap_or(DEFAULT_PROFILE);
        let plan = file.plan(profile)?;
        println!("\n==> Verify profile `{profile}` ({} steps)", plan.len());

        let run = Run::start("verify", profile);
        let result = plan
            .iter()
            .try_for_each(|step| run.stage(&step.label, || run_step(root, step)));
        match run.finish(root) {
            Ok(manifest) => println!("    run manifest: {}", manifest.display()),
            Err(err) => eprintln!("warning: run manifest not written: {err}"),
        }
        result
    }
}

/// Runs one step from `root` with inherited stdio, echoing it as `+ program args`.
fn run_step(root: &Path, step: &VerifyStep) -> XtaskResult<()> {
    println!("+ {} {}", step.program, step.args.join(" "));
    let failed = |detail: String| XtaskError::Step {
        program: step.program.clone(),
        detail,
    };
    let status = Command::new(&step.program)
        .current_dir(root)
        .args(&step.args)
        .status()
        .map_err(|err| failed(format!("failed to start: {err}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(failed(format!("exited with {status}")))
    }
}

fn parse_verify_options(args: &[String]) -> XtaskResult<VerifyOptions> {
    let mut options = VerifyOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "help" | "--help" | "-h" => options.show_help = true,
            "--profile" => {
                let Some(name) = iter.next() else {
                    return Err(XtaskError::usage("`--profile` requires a profile name"));
                };
                set_profile(&mut options, name)?;
            }
            flag if flag.starts_with('-') => {
                return Err(XtaskError::usage(format!(
                    "unknown verify flag `{flag}` (run `cargo xtask verify --help`)"
                )));
            }
            name => set_profile(&mut options, name)?,
        }
    }
    Ok(options)
}

fn set_profile(options: &mut VerifyOptions, name: &str) -> XtaskResult<()> {
    if options.profile.is_some() {
        return Err(XtaskError::usage("verify accepts a single profile"));
    }
    options.profile = Some(name.to_string());
    Ok(())
}

fn print_verify_usage() {
    eprintln!(
        "Usage: cargo xtask verify [fast|full|<profile>] [--profile <name>]\n\
         \n\
         Runs the steps listed for the profile in {VERIFY_CONFIG_FILE} (default: {DEFAULT_PROFILE})."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        [profile.fast]
        steps = ["fmt", "test"]

        [profile.broken]
        steps = ["fmt", "bench"]

        [step.fmt]
        label = "Rust format check"
        args = ["fmt", "--all", "--", "--check"]

        [step.test]
        label = "Unit tests"
        args = ["test", "--workspace"]
    "#;

    fn sample() -> VerifyFile {
        toml::from_str(SAMPLE).expect("sample config")
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn positional_and_flag_profiles_parse() {
        assert_eq!(
            parse_verify_options(&args(&["fast"])).expect("parse").profile.as_deref(),
            Some("fast")
        );
        assert_eq!(
            parse_verify_options(&args(&["--profile", "full"]))
                .expect("parse")
                .profile
                .as_deref(),
            Some("full")
        );
        for bad in [args(&["fast", "full"]), args(&["--profile"]), args(&["--verbose"])] {
            let err = parse_verify_options(&bad).expect_err("rejected");
            assert!(matches!(err, XtaskError::Usage(_)));
        }
    }

    #[test]
    fn plan_preserves_profile_step_order() {
        let plan = sample().plan("fast").expect("plan");
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].label, "Rust format check");
        assert_eq!(plan[0].program, "cargo");
        assert_eq!(plan[1].args, args(&["test", "--workspace"]));
    }

    #[test]
    fn unknown_profiles_and_steps_are_config_errors() {
        let err = sample().plan("nightly").expect_err("unknown profile");
        assert!(matches!(err, XtaskError::Config { .. }));
        assert!(err.to_string().contains("known profiles: broken, fast"));

        let err = sample().plan("broken").expect_err("undefined step");
        assert!(err.to_string().contains("undefined step `bench`"));
    }

    #[test]
    fn missing_program_fails_the_step() {
        let step = VerifyStep {
            label: "missing".into(),
            program: "definitely-not-a-real-command-binary".into(),
            args: Vec::new(),
        };
        let err = run_step(Path::new("."), &step).expect_err("missing binary");
        assert!(matches!(err, XtaskError::Step { .. }));
        assert!(err.to_string().contains("failed to start"));
    }

    #[test]
    fn checked_in_config_resolves_every_profile() {
        let root = crate::workspace_root().expect("workspace root");
        let path = root.join(VERIFY_CONFIG_FILE);
        let file = VerifyFile::load(&path).expect("verify.toml");

        for profile in ["fast", "full"] {
            assert!(!file.plan(profile).expect("plan").is_empty());
        }
        let full = file.plan("full").expect("full plan");
        assert!(full
            .iter()
            .any(|step| step.args.iter().any(|arg| arg == "ssr")));
    }

    #[test]
    fn unreadable_config_names_the_file() {
        let err = VerifyFile::load(Path::new("no/such/verify.toml")).expect_err("missing");
        assert!(matches!(err, XtaskError::Io { .. }));
        assert!(err.to_string().starts_with("no/such/verify.toml"));
    }
}
