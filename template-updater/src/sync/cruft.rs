//! [`TemplateSyncEngine`] implementation on top of the `cruft` CLI.

use super::{SyncError, TemplateSyncEngine};
use async_trait::async_trait;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Exit code `cruft check` uses for an outdated project. Crashes exit with
/// it too, so the output is checked for [`OUTDATED_MESSAGE`] as well.
const OUTDATED_EXIT_CODE: i32 = 1;

/// Part of the message `cruft check` prints for an outdated project.
const OUTDATED_MESSAGE: &str = "out of date";

/// Marker of an uncaught Python exception.
const TRACEBACK_MARKER: &str = "Traceback";

/// Template sync backed by the `cruft` executable.
#[derive(Debug, Clone)]
pub struct CruftCli {
    program: String,
}

impl Default for CruftCli {
    fn default() -> Self {
        Self::new("cruft")
    }
}

impl CruftCli {
    /// Creates an engine invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run(&self, working_dir: &Path, args: &[&str]) -> Result<Output, SyncError> {
        debug!(dir = %working_dir.display(), args = %args.join(" "), "Running cruft");

        Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SyncError::NotInstalled {
                        program: self.program.clone(),
                    }
                } else {
                    SyncError::Io {
                        program: self.program.clone(),
                        source: e,
                    }
                }
            })
    }

    fn failure(&self, args: &[&str], output: &Output) -> SyncError {
        SyncError::CommandFailed {
            command: format!("{} {}", self.program, args.join(" ")),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Returns true if a failed `cruft check` says the project is outdated rather
/// than having crashed.
fn reports_outdated(output: &Output) -> bool {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    !stderr.contains(TRACEBACK_MARKER)
        && (stdout.contains(OUTDATED_MESSAGE) || stderr.contains(OUTDATED_MESSAGE))
}

#[async_trait]
impl TemplateSyncEngine for CruftCli {
    async fn check(&self, working_dir: &Path, template_ref: &str) -> Result<bool, SyncError> {
        let args = ["check", "--checkout", template_ref];
        let output = self.run(working_dir, &args).await?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(OUTDATED_EXIT_CODE) if reports_outdated(&output) => Ok(false),
            _ => Err(self.failure(&args, &output)),
        }
    }

    async fn apply(&self, working_dir: &Path, template_ref: &str) -> Result<(), SyncError> {
        let args = ["update", "--skip-apply-ask", "--checkout", template_ref];
        let output = self.run(working_dir, &args).await?;

        if output.status.success() {
            Ok(())
        } else {
            Err(self.failure(&args, &output))
        }
    }
}
