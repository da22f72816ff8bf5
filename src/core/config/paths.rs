use std::path::{Path, PathBuf};

pub const RC_FILE_NAME: &str = ".atriumrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    rc_path: Option<PathBuf>,
    explicit: bool,
}

impl ConfigPaths {
    /// The default rc file under `home`. Without a home there is nothing to load.
    pub fn from_home(home: Option<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: home.map(|h| h.join(RC_FILE_NAME)),
            explicit: false,
        }
    }

    /// A file the user asked for; it has to exist.
    pub fn explicit(rc_path: PathBuf) -> Self {
        ConfigPaths {
            rc_path: Some(rc_path),
            explicit: true,
        }
    }

    pub fn rc_path(&self) -> Option<&Path> {
        self.rc_path.as_deref()
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}
