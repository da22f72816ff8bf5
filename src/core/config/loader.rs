use std::fs;
use std::path::Path;

use super::{ConfigError, ConfigPaths};
use crate::core::commands::Flow;
use crate::core::env::Environment;
use crate::error::ShellError;
use crate::shell::Executor;

/// Feeds the rc file through an executor before the first prompt.
pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Returns [`Flow::Exit`] when the rc file ran `exit`; the shell then
    /// ends without prompting.
    pub fn load_into<E: Environment>(&self, executor: &mut Executor<E>) -> Result<Flow, ShellError> {
        let Some(path) = self.paths.rc_path() else {
            return Ok(Flow::Continue);
        };

        if !path.exists() {
            if self.paths.is_explicit() {
                return Err(ConfigError::ConfigFileNotFound(path.to_path_buf()).into());
            }
            return Ok(Flow::Continue);
        }

        self.source(path, executor)
    }

    /// Each line goes through the interactive dispatcher; `exit` stops here.
    fn source<E: Environment>(
        &self,
        path: &Path,
        executor: &mut Executor<E>,
    ) -> Result<Flow, ShellError> {
        let content = fs::read(path).map_err(ConfigError::from)?;
        for line in String::from_utf8_lossy(&content).lines() {
            if executor.run_line(line)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}
