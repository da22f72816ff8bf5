use super::{Command, CommandError, Flow};
use crate::core::env::Environment;
use crate::core::state::ShellState;
use std::io::Write;

pub const FAREWELL: &str = "Exit";

#[derive(Debug, Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute<E: Environment>(
        &self,
        _args: &[String],
        _state: &mut ShellState<E>,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        writeln!(out, "{}", FAREWELL)?;
        out.flush()?;
        Ok(Flow::Exit)
    }
}
