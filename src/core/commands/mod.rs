use std::io::Write;

mod alias;
mod cd;
mod env;
mod exit;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetEnvCommand, UnsetEnvCommand};
pub use exit::{ExitCommand, FAREWELL};

use crate::core::env::{EnvError, Environment};
use crate::core::state::ShellState;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    Env(EnvError),
    IoError(std::io::Error),
    HomeDirNotFound,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::Env(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "{}", err),
            CommandError::HomeDirNotFound => write!(f, "home directory not found"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::Env(err)
    }
}

/// What the shell should do after a built-in returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A command that runs inside the shell process.
///
/// `args` excludes the command name. Output goes to `out`.
pub trait Command {
    fn execute<E: Environment>(
        &self,
        args: &[String],
        state: &mut ShellState<E>,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

#[derive(Debug, Clone)]
pub enum Builtin {
    Exit(ExitCommand),
    Env(EnvCommand),
    SetEnv(SetEnvCommand),
    UnsetEnv(UnsetEnvCommand),
    Cd(CdCommand),
    Alias(AliasCommand),
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Self> {
        let builtin = match name {
            "exit" => Builtin::Exit(ExitCommand::new()),
            "env" => Builtin::Env(EnvCommand::new()),
            "setenv" => Builtin::SetEnv(SetEnvCommand::new()),
            "unsetenv" => Builtin::UnsetEnv(UnsetEnvCommand::new()),
            "cd" => Builtin::Cd(CdCommand::new()),
            "alias" => Builtin::Alias(AliasCommand::new()),
            _ => return None,
        };
        Some(builtin)
    }
}

impl Command for Builtin {
    fn execute<E: Environment>(
        &self,
        args: &[String],
        state: &mut ShellState<E>,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self {
            Builtin::Exit(cmd) => cmd.execute(args, state, out),
            Builtin::Env(cmd) => cmd.execute(args, state, out),
            Builtin::SetEnv(cmd) => cmd.execute(args, state, out),
            Builtin::UnsetEnv(cmd) => cmd.execute(args, state, out),
            Builtin::Cd(cmd) => cmd.execute(args, state, out),
            Builtin::Alias(cmd) => cmd.execute(args, state, out),
        }
    }
}
