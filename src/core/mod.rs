pub mod aliases;
pub mod commands;
pub mod config;
pub mod env;
pub mod state;

pub use aliases::{AliasTable, MAX_ALIASES};
pub use env::{Environment, MemoryEnv, ProcessEnv};
pub use state::ShellState;
