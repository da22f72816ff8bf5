use super::aliases::AliasTable;
use super::env::Environment;

/// Everything a shell remembers between commands.
pub struct ShellState<E: Environment> {
    pub aliases: AliasTable,
    pub env: E,
    last_status: i32,
}

impl<E: Environment> ShellState<E> {
    /// Empty alias table, the given environment, last status 0.
    pub fn new(env: E) -> Self {
        Self {
            aliases: AliasTable::new(),
            env,
            last_status: 0,
        }
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn record_status(&mut self, status: i32) {
        self.last_status = status;
    }
}
