use std::ffi::OsString;
use std::io::{self, Write};
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Status used for "could not run it at all": not found, exec failure.
pub const EXIT_FAILURE: i32 = 1;

/// Runs one external program to completion.
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `path` with the given argument vector and environment snapshot
    /// and blocks until that child exits. Returns its exit status, or
    /// `128 + signal` if it was killed.
    ///
    /// `argv[0]` is passed through as typed, not replaced by `path`.
    pub fn launch(
        &self,
        path: &Path,
        argv: &[String],
        env: &[(OsString, OsString)],
    ) -> Result<i32, ProcessError> {
        if argv.iter().any(|arg| arg.contains('\0')) {
            return Err(ProcessError::InvalidArgument(argv.join(" ")));
        }
        let name = argv.first().map(String::as_str).unwrap_or_default();

        let mut command = Command::new(path);
        command
            .arg0(name)
            .args(argv.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter().map(|(k, v)| (k, v)));

        // Anything the shell printed must reach the terminal before the child does.
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();

        let mut child = command.spawn().map_err(|e| spawn_error(name, e))?;
        let status = child.wait().map_err(ProcessError::Wait)?;
        Ok(exit_code(status))
    }
}

// Out of processes or memory is a failure of the shell; anything else is the
// program refusing to run.
fn spawn_error(name: &str, err: io::Error) -> ProcessError {
    match err.raw_os_error() {
        Some(libc::EAGAIN) | Some(libc::ENOMEM) => ProcessError::Fork(err),
        _ => ProcessError::Exec(name.to_string(), err),
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => EXIT_FAILURE,
    }
}
