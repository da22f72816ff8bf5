use std::fmt;

pub mod launcher;

pub use launcher::{ProcessLauncher, EXIT_FAILURE};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    InvalidArgument(String),
    /// The file was found but could not be executed.
    Exec(String, std::io::Error),
    Fork(std::io::Error),
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "{}: command not found", cmd),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "{}: argument contains a NUL byte", arg)
            }
            ProcessError::Exec(name, e) => write!(f, "{}: {}", name, e),
            ProcessError::Fork(e) => write!(f, "fork: {}", e),
            ProcessError::Wait(e) => write!(f, "wait: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

impl ProcessError {
    /// Failures that stop the attempted command but leave the shell usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProcessError::CommandNotFound(_)
                | ProcessError::InvalidArgument(_)
                | ProcessError::Exec(_, _)
        )
    }
}
