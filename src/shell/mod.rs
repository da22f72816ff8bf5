use std::io::{self, Write};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

mod executor;
mod expand;
mod parse;

pub use executor::Executor;
pub use expand::{expand, strip_comments};
pub use parse::{split_fragments, tokenize, LOGICAL_SEPARATORS, SEQUENCE_SEPARATORS};

use crate::{
    core::{commands::Flow, config::Config, env::Environment, env::ProcessEnv},
    error::ShellError,
    flags::Flags,
    highlight::Painter,
};

pub const PROMPT: &str = "$ ";

/// Where interactive lines come from.
pub trait LineSource {
    /// Next line without its newline. `Interrupted` and `Eof` are reported as
    /// the matching [`ReadlineError`] variants.
    fn next_line(&mut self, prompt: &str) -> rustyline::Result<String>;
}

impl LineSource for DefaultEditor {
    fn next_line(&mut self, prompt: &str) -> rustyline::Result<String> {
        let line = self.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}

/// Reads and runs lines until `exit` or end of input. End of input writes a
/// single newline to `out`; Ctrl-C at the prompt is ignored.
pub fn interact<E: Environment, S: LineSource>(
    executor: &mut Executor<E>,
    source: &mut S,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    loop {
        match source.next_line(PROMPT) {
            Ok(line) => {
                if executor.run_line(&line)? == Flow::Exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                writeln!(out)?;
                out.flush()?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// The interactive shell: a line editor in front of an [`Executor`] bound to
/// the real process environment.
pub struct Shell {
    executor: Executor<ProcessEnv>,
    config: Config,
}

impl Shell {
    pub fn new(flags: &Flags) -> Self {
        let executor = Executor::new(ProcessEnv::new())
            .with_painter(Painter::new())
            .quiet(flags.is_set("quiet"))
            .debug(flags.is_set("debug"));
        let config = Config::new(flags.get_value("config").map(String::as_str));

        Shell { executor, config }
    }

    /// Loads the rc file, then prompts until `exit` or end of input. An
    /// `exit` in the rc file ends the shell before the first prompt.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.config.loader().load_into(&mut self.executor)? == Flow::Exit {
            return Ok(());
        }

        let mut editor = DefaultEditor::new()?;
        interact(&mut self.executor, &mut editor, &mut io::stdout())
    }

    /// Runs a script file line by line through the plain command path.
    pub fn run_file(&mut self, path: &Path) -> Result<(), ShellError> {
        self.executor.run_file(path)?;
        Ok(())
    }
}
