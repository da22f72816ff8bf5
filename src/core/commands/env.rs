use super::{Command, CommandError, Flow};
use crate::core::env::Environment;
use crate::core::state::ShellState;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

/// `env`: every `NAME=VALUE`, one per line, bytes as stored.
#[derive(Debug, Clone, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute<E: Environment>(
        &self,
        _args: &[String],
        state: &mut ShellState<E>,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        for (name, value) in state.env.vars() {
            out.write_all(name.as_bytes())?;
            out.write_all(b"=")?;
            out.write_all(value.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(Flow::Continue)
    }
}

/// `setenv NAME VALUE`: always overwrites.
#[derive(Debug, Clone, Default)]
pub struct SetEnvCommand;

impl SetEnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetEnvCommand {
    fn execute<E: Environment>(
        &self,
        args: &[String],
        state: &mut ShellState<E>,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::InvalidArguments(
                "usage: setenv NAME VALUE".into(),
            ));
        };

        state.env.set(name, value)?;
        Ok(Flow::Continue)
    }
}

/// `unsetenv NAME`
#[derive(Debug, Clone, Default)]
pub struct UnsetEnvCommand;

impl UnsetEnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetEnvCommand {
    fn execute<E: Environment>(
        &self,
        args: &[String],
        state: &mut ShellState<E>,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let [name] = args else {
            return Err(CommandError::InvalidArguments("usage: unsetenv NAME".into()));
        };

        state.env.unset(name)?;
        Ok(Flow::Continue)
    }
}
