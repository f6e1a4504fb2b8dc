//! Timed verify stages and the JSON run manifest written after each run.

use crate::error::{XtaskError, XtaskResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const RUNS_DIR: &str = ".artifacts/xtask/runs";

#[derive(Debug, Serialize)]
struct Stage {
    label: String,
    duration_ms: u128,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    command: &'a str,
    profile: &'a str,
    started_at: String,
    duration_ms: u128,
    ok: bool,
    stages: Vec<Stage>,
}

/// One verify run: prints a banner per stage and remembers how each one went.
#[derive(Debug)]
pub struct Run<'a> {
    command: &'a str,
    profile: &'a str,
    started_at: DateTime<Utc>,
    started: Instant,
    stages: RefCell<Vec<Stage>>,
}

impl<'a> Run<'a> {
    /// Start timing `command` for `profile`.
    pub fn start(command: &'a str, profile: &'a str) -> Self {
        Self {
            command,
            profile,
            started_at: Utc::now(),
            started: Instant::now(),
            stages: RefCell::new(Vec::new()),
        }
    }

    /// Run one stage under a `==> label` banner. The stage's result is returned unchanged.
    pub fn stage<F>(&self, label: &str, action: F) -> XtaskResult<()>
    where
        F: FnOnce() -> XtaskResult<()>,
    {
        println!("\n==> {label}");
        let started = Instant::now();
        let result = action();
        let elapsed = started.elapsed();

        let verb = if result.is_ok() { "done" } else { "failed" };
        println!("    {verb} in {}", format_duration(elapsed));
        self.stages.borrow_mut().push(Stage {
            label: label.to_string(),
            duration_ms: elapsed.as_millis(),
            ok: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
        });
        result
    }

    /// Write `<root>/.artifacts/xtask/runs/<stamp>-<command>.json` and return its path.
    pub fn finish(self, root: &Path) -> XtaskResult<PathBuf> {
        let stages = self.stages.into_inner();
        let manifest = Manifest {
            command: self.command,
            profile: self.profile,
            started_at: self.started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            duration_ms: self.started.elapsed().as_millis(),
            ok: stages.iter().all(|stage| stage.ok),
            stages,
        };

        let dir = root.join(RUNS_DIR);
        fs::create_dir_all(&dir).map_err(|err| XtaskError::io(&dir, err))?;
        let stamp = self.started_at.format("%Y%m%dT%H%M%S%.3fZ");
        let path = dir.join(format!("{stamp}-{}.json", self.command));
        fs::write(&path, serde_json::to_string_pretty(&manifest)?)
            .map_err(|err| XtaskError::io(&path, err))?;
        Ok(path)
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    if secs >= 60 {
        format!("{}m {}.{millis:03}s", secs / 60, secs % 60)
    } else {
        format!("{secs}.{millis:03}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_root() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!("photon-xtask-run-{nanos}"))
    }

    fn read_manifest(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).expect("read manifest")).expect("json")
    }

    #[test]
    fn manifest_lists_stages_in_order() {
        let root = temp_root();
        let run = Run::start("verify", "fast");
        run.stage("format", || Ok(())).expect("format");
        run.stage("test", || Ok(())).expect("test");

        let path = run.finish(&root).expect("manifest");
        assert!(path.starts_with(root.join(RUNS_DIR)));
        let manifest = read_manifest(&path);
        assert_eq!(manifest["profile"], "fast");
        assert_eq!(manifest["ok"], true);
        assert_eq!(manifest["stages"][0]["label"], "format");
        assert_eq!(manifest["stages"][1]["label"], "test");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn failed_stage_is_returned_and_recorded() {
        let root = temp_root();
        let run = Run::start("verify", "full");
        let err = run
            .stage("clippy", || Err(XtaskError::usage("boom")))
            .expect_err("stage failure");
        assert_eq!(err.to_string(), "boom");

        let manifest = read_manifest(&run.finish(&root).expect("manifest"));
        assert_eq!(manifest["ok"], false);
        assert_eq!(manifest["stages"][0]["error"], "boom");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn durations_switch_to_minutes_past_sixty_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1_250)), "1.250s");
        assert_eq!(format_duration(Duration::from_millis(61_005)), "1m 1.005s");
    }
}
