use crate::core::config::ConfigError;
use crate::process::ProcessError;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    FlagError(String),
    ConfigError(ConfigError),
    ProcessError(ProcessError),
    ScriptOpen(PathBuf, std::io::Error),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::ProcessError(e) => write!(f, "{}", e),
            ShellError::ScriptOpen(path, e) => write!(f, "{}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ShellError {}
