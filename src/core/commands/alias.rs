use super::{Command, CommandError, Flow};
use crate::core::aliases::{parse_alias_argument, AliasRequest};
use crate::core::env::Environment;
use crate::core::state::ShellState;
use std::io::Write;

/// `alias` lists, `alias name=value` defines or updates.
///
/// A full table and a malformed definition are both dropped without a
/// message.
#[derive(Debug, Clone, Default)]
pub struct AliasCommand;

impl AliasCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AliasCommand {
    fn execute<E: Environment>(
        &self,
        args: &[String],
        state: &mut ShellState<E>,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let text = args.join(" ");

        match parse_alias_argument(&text) {
            AliasRequest::List => {
                for line in state.aliases.list() {
                    writeln!(out, "{}", line)?;
                }
            }
            AliasRequest::Set { name, value } => {
                let _ = state.aliases.set(name, value);
            }
            AliasRequest::Malformed => {}
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aliases::MAX_ALIASES;
    use crate::core::env::MemoryEnv;

    fn run(state: &mut ShellState<MemoryEnv>, args: &[&str]) -> Result<String, CommandError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        AliasCommand::new().execute(&args, state, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_alias_add_and_list() -> Result<(), CommandError> {
        let mut state = ShellState::new(MemoryEnv::new());
        assert_eq!(run(&mut state, &["ll='ls", "-l'"])?, "");
        assert_eq!(run(&mut state, &["gs=git", "status"])?, "");
        assert_eq!(run(&mut state, &[])?, "ll='ls -l'\ngs='git status'\n");
        Ok(())
    }

    #[test]
    fn test_alias_without_equals_lists() -> Result<(), CommandError> {
        let mut state = ShellState::new(MemoryEnv::new());
        run(&mut state, &["ll=ls"])?;
        assert_eq!(run(&mut state, &["ll"])?, "ll='ls'\n");
        Ok(())
    }

    #[test]
    fn test_alias_malformed_is_ignored() -> Result<(), CommandError> {
        let mut state = ShellState::new(MemoryEnv::new());
        run(&mut state, &["ll="])?;
        assert!(state.aliases.is_empty());
        Ok(())
    }

    #[test]
    fn test_alias_full_table_is_silent() -> Result<(), CommandError> {
        let mut state = ShellState::new(MemoryEnv::new());
        for i in 0..MAX_ALIASES {
            run(&mut state, &[&format!("a{}=true", i)])?;
        }
        assert_eq!(run(&mut state, &["extra=false"])?, "");
        assert_eq!(state.aliases.get("extra"), None);
        assert_eq!(state.aliases.len(), MAX_ALIASES);
        Ok(())
    }
}
