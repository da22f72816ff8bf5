mod vars;

pub use vars::{MemoryEnv, ProcessEnv};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum EnvError {
    InvalidName(String),
    InvalidValue(String),
    DirChange(PathBuf, std::io::Error),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {:?}", name),
            EnvError::InvalidValue(name) => write!(f, "invalid value for {}", name),
            EnvError::DirChange(path, e) => write!(f, "{}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for EnvError {}

/// The variable set and working directory a shell runs against.
///
/// The shell never touches `std::env` directly; everything goes through this
/// trait so that tests can run against [`MemoryEnv`]. Values are raw OS
/// strings: children must see the bytes they were given.
pub trait Environment {
    fn get(&self, name: &str) -> Option<OsString>;

    /// Creates or overwrites `name`.
    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError>;

    /// Removes `name`. Removing an absent variable is not an error.
    fn unset(&mut self, name: &str) -> Result<(), EnvError>;

    /// Every `(name, value)` pair, in the environment's own order.
    fn vars(&self) -> Vec<(OsString, OsString)>;

    fn change_dir(&mut self, path: &Path) -> Result<(), EnvError>;
}

// Same rules setenv(3) enforces with EINVAL, plus NUL which cannot cross execve.
pub(crate) fn validate_name(name: &str) -> Result<(), EnvError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(EnvError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub(crate) fn validate_value(name: &str, value: &str) -> Result<(), EnvError> {
    if value.contains('\0') {
        return Err(EnvError::InvalidValue(name.to_string()));
    }
    Ok(())
}
