use std::fmt;
use std::path::PathBuf;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// Startup configuration: where the rc file is and whether it must exist.
#[derive(Debug, Clone)]
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    /// `~/.atriumrc`, or `override_path` (from `--config`) when given.
    pub fn new(override_path: Option<&str>) -> Self {
        let paths = match override_path {
            Some(path) => ConfigPaths::explicit(PathBuf::from(path)),
            None => ConfigPaths::from_home(dirs::home_dir()),
        };
        Self { paths }
    }

    pub fn loader(&self) -> ConfigLoader<'_> {
        ConfigLoader::new(&self.paths)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(PathBuf),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
