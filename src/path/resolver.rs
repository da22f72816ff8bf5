use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Maps a command name to an existing file using a colon-separated search list.
#[derive(Debug, Clone, Default)]
pub struct CommandResolver;

impl CommandResolver {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first `<dir>/<command>` that exists, searching the entries of
    /// `search_path` in order. Empty entries are skipped. Existence is checked,
    /// executability is not; exec reports that later.
    ///
    /// A command containing `/` is taken as a path and returned if it exists.
    pub fn resolve(&self, command: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
        if command.is_empty() {
            return None;
        }

        if command.contains('/') {
            let literal = Path::new(command);
            return literal.exists().then(|| literal.to_path_buf());
        }

        env::split_paths(search_path?)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(command))
            .find(|candidate| candidate.exists())
    }
}
