use super::{Command, CommandError, Flow};
use crate::core::env::Environment;
use crate::core::state::ShellState;
use crate::path::PathExpander;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }

    pub fn with_expander(path_expander: PathExpander) -> Self {
        Self { path_expander }
    }
}

impl Command for CdCommand {
    fn execute<E: Environment>(
        &self,
        args: &[String],
        state: &mut ShellState<E>,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let path_str = match args {
            [] => "~",
            [path] => path.as_str(),
            _ => return Err(CommandError::InvalidArguments("too many arguments".into())),
        };

        let target = self
            .path_expander
            .expand(path_str)
            .ok_or(CommandError::HomeDirNotFound)?;

        state.env.change_dir(&target)?;
        Ok(Flow::Continue)
    }
}
