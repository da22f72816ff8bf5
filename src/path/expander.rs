use std::path::{Path, PathBuf};

/// Tilde expansion for `cd` arguments.
#[derive(Debug, Clone, Default)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// `~` and `~/rest` map into the home directory; `~user` is left alone.
    /// Returns `None` only when a tilde path needs a home that is unknown.
    pub fn expand(&self, path: &str) -> Option<PathBuf> {
        if path == "~" {
            return self.home.clone();
        }

        match path.strip_prefix("~/") {
            Some(rest) => {
                let mut home_path = self.home.clone()?;
                for part in rest.split('/').filter(|p| !p.is_empty()) {
                    home_path.push(part);
                }
                Some(home_path)
            }
            None => Some(Path::new(path).to_path_buf()),
        }
    }
}
