use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::expand::{expand, strip_comments};
use super::parse::{
    contains_any, split_fragments, tokenize, LOGICAL_SEPARATORS, SEQUENCE_SEPARATORS,
};
use crate::core::commands::{Builtin, Command, Flow};
use crate::core::env::Environment;
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::highlight::Painter;
use crate::path::CommandResolver;
use crate::process::{ProcessError, ProcessLauncher, EXIT_FAILURE};

/// How a failed process primitive (fork, wait) is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Reported; the command fails and the shell carries on.
    Plain,
    /// Propagated to the caller as fatal.
    Logical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    RunAll,
    StopOnFailure,
}

/// Runs lines of input against a [`ShellState`].
pub struct Executor<E: Environment> {
    state: ShellState<E>,
    resolver: CommandResolver,
    launcher: ProcessLauncher,
    painter: Painter,
    quiet: bool,
    debug: bool,
}

impl<E: Environment> Executor<E> {
    pub fn new(env: E) -> Self {
        Self {
            state: ShellState::new(env),
            resolver: CommandResolver::new(),
            launcher: ProcessLauncher::new(),
            painter: Painter::plain(),
            quiet: false,
            debug: false,
        }
    }

    pub fn with_painter(mut self, painter: Painter) -> Self {
        self.painter = painter;
        self
    }

    /// Suppress recoverable diagnostics.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Trace fragments, resolutions and statuses on stderr.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn state(&self) -> &ShellState<E> {
        &self.state
    }

    pub fn last_status(&self) -> i32 {
        self.state.last_status()
    }

    /// Interactive entry point: strip comments and expand, then split on `&`/`|`
    /// with stop-on-failure if the line has either, otherwise on `;`.
    pub fn run_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let expanded = expand(&strip_comments(line), self.state.last_status());

        if contains_any(&expanded, LOGICAL_SEPARATORS) {
            self.run_fragments(&expanded, LOGICAL_SEPARATORS, Policy::StopOnFailure, Mode::Logical)
        } else {
            self.run_fragments(&expanded, SEQUENCE_SEPARATORS, Policy::RunAll, Mode::Plain)
        }
    }

    /// Strips comments, expands `$$`/`$?`, splits on every `&` and `|`, and
    /// stops at the first fragment that exits nonzero, whichever separator
    /// preceded it. A fork or wait failure is returned as an error.
    pub fn run_logical(&mut self, line: &str) -> Result<Flow, ShellError> {
        let expanded = expand(&strip_comments(line), self.state.last_status());
        self.run_fragments(&expanded, LOGICAL_SEPARATORS, Policy::StopOnFailure, Mode::Logical)
    }

    /// Splits on `;` and runs every fragment regardless of status. No comment
    /// stripping and no expansion.
    pub fn run_sequence(&mut self, line: &str) -> Result<Flow, ShellError> {
        self.run_fragments(line, SEQUENCE_SEPARATORS, Policy::RunAll, Mode::Plain)
    }

    /// The plain single-command path: tokenize and dispatch, nothing else.
    pub fn run_simple(&mut self, line: &str) -> Result<Flow, ShellError> {
        self.run_command(tokenize(line), Mode::Plain)
    }

    /// Runs each line of `path` through [`Executor::run_simple`], ignoring
    /// individual failures. Not being able to open the file is an error.
    /// Lines that are not UTF-8 are run with the bad bytes replaced.
    pub fn run_file(&mut self, path: &Path) -> Result<Flow, ShellError> {
        let file = File::open(path).map_err(|e| ShellError::ScriptOpen(path.to_path_buf(), e))?;

        for line in BufReader::new(file).split(b'\n') {
            let line = line?;
            if self.run_simple(&String::from_utf8_lossy(&line))? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn run_fragments(
        &mut self,
        text: &str,
        separators: &[char],
        policy: Policy,
        mode: Mode,
    ) -> Result<Flow, ShellError> {
        for fragment in split_fragments(text, separators) {
            let tokens = tokenize(fragment);
            if tokens.is_empty() {
                continue;
            }

            self.trace(format_args!("fragment {:?}", fragment));
            if self.run_command(tokens, mode)? == Flow::Exit {
                return Ok(Flow::Exit);
            }

            let status = self.state.last_status();
            if policy == Policy::StopOnFailure && status != 0 {
                self.trace(format_args!("stopping after status {}", status));
                break;
            }
        }
        Ok(Flow::Continue)
    }

    fn run_command(&mut self, tokens: Vec<String>, mode: Mode) -> Result<Flow, ShellError> {
        let tokens = self.state.aliases.expand_tokens(tokens);
        let Some(name) = tokens.first() else {
            return Ok(Flow::Continue);
        };

        if let Some(builtin) = Builtin::lookup(name) {
            let mut out = io::stdout().lock();
            return match builtin.execute(&tokens[1..], &mut self.state, &mut out) {
                Ok(flow) => {
                    self.state.record_status(0);
                    Ok(flow)
                }
                Err(e) => {
                    self.report(&format!("{}: {}", name, e));
                    self.state.record_status(EXIT_FAILURE);
                    Ok(Flow::Continue)
                }
            };
        }

        let status = match self.spawn(&tokens) {
            Ok(status) => status,
            Err(e) if e.is_recoverable() || mode == Mode::Plain => {
                self.report(&e.to_string());
                EXIT_FAILURE
            }
            Err(e) => return Err(e.into()),
        };

        self.trace(format_args!("{} exited with {}", name, status));
        self.state.record_status(status);
        Ok(Flow::Continue)
    }

    fn spawn(&self, argv: &[String]) -> Result<i32, ProcessError> {
        let name = argv.first().map(String::as_str).unwrap_or_default();
        let search_path = self.state.env.get("PATH");
        let path = self
            .resolver
            .resolve(name, search_path.as_deref())
            .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))?;

        self.trace(format_args!("{} -> {}", name, path.display()));
        self.launcher.launch(&path, argv, &self.state.env.vars())
    }

    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.painter.error(message));
        }
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.debug {
            eprintln!("{}", self.painter.trace(&format!("[debug] {}", args)));
        }
    }
}
