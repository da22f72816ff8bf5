use super::{validate_name, validate_value, EnvError, Environment};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The real process environment and working directory.
///
/// Children spawned by the shell receive a snapshot of these variables.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        validate_value(name, value)?;
        env::set_var(name, value);
        Ok(())
    }

    fn unset(&mut self, name: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        env::remove_var(name);
        Ok(())
    }

    fn vars(&self) -> Vec<(OsString, OsString)> {
        env::vars_os().collect()
    }

    fn change_dir(&mut self, path: &Path) -> Result<(), EnvError> {
        env::set_current_dir(path).map_err(|e| EnvError::DirChange(path.to_path_buf(), e))
    }
}

/// An isolated variable set for tests and embedding.
///
/// Insertion order is kept so that `env` output is stable. `change_dir` only
/// checks that the target is a directory and records it.
#[derive(Debug, Clone)]
pub struct MemoryEnv {
    vars: Vec<(OsString, OsString)>,
    current_dir: PathBuf,
}

impl Default for MemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: Vec::new(),
            current_dir: PathBuf::from("/"),
        }
    }

    pub fn with_vars<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut memory = Self::new();
        for (name, value) in pairs {
            memory.vars.push((name.into(), value.into()));
        }
        memory
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }
}

impl Environment for MemoryEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        self.vars
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        validate_value(name, value)?;
        match self.vars.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.into(),
            None => self.vars.push((name.into(), value.into())),
        }
        Ok(())
    }

    fn unset(&mut self, name: &str) -> Result<(), EnvError> {
        validate_name(name)?;
        self.vars.retain(|(k, _)| k != name);
        Ok(())
    }

    fn vars(&self) -> Vec<(OsString, OsString)> {
        self.vars.clone()
    }

    fn change_dir(&mut self, path: &Path) -> Result<(), EnvError> {
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        };
        if !target.is_dir() {
            return Err(EnvError::DirChange(
                path.to_path_buf(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            ));
        }
        self.current_dir = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_set_and_get() -> Result<(), EnvError> {
        let mut memory = MemoryEnv::new();
        assert_eq!(memory.get("GREETING"), None);
        memory.set("GREETING", "hello")?;
        assert_eq!(memory.get("GREETING"), Some("hello".into()));
        Ok(())
    }

    #[test]
    fn test_memory_set_overwrites_in_place() -> Result<(), EnvError> {
        let mut memory = MemoryEnv::with_vars([("A", "1"), ("B", "2")]);
        memory.set("A", "3")?;
        assert_eq!(
            memory.vars(),
            vec![
                (OsString::from("A"), OsString::from("3")),
                (OsString::from("B"), OsString::from("2"))
            ]
        );
        Ok(())
    }

    #[test]
    fn test_memory_unset() -> Result<(), EnvError> {
        let mut memory = MemoryEnv::with_vars([("A", "1")]);
        memory.unset("A")?;
        assert_eq!(memory.get("A"), None);
        // absent is fine
        memory.unset("A")?;
        Ok(())
    }

    #[test]
    fn test_memory_rejects_bad_names() {
        let mut memory = MemoryEnv::new();
        assert!(memory.set("", "x").is_err());
        assert!(memory.set("A=B", "x").is_err());
        assert!(memory.unset("").is_err());
    }

    #[test]
    fn test_memory_change_dir() -> Result<(), EnvError> {
        let mut memory = MemoryEnv::new();
        let temp = env::temp_dir();
        memory.change_dir(&temp)?;
        assert_eq!(memory.current_dir(), temp.as_path());
        assert!(memory
            .change_dir(Path::new("/path/that/does/not/exist"))
            .is_err());
        assert_eq!(memory.current_dir(), temp.as_path());
        Ok(())
    }

    #[test]
    fn test_process_env_round_trip() -> Result<(), EnvError> {
        let mut process = ProcessEnv::new();
        process.set("ATRIUM_PROCESS_ENV_TEST", "value with spaces")?;
        assert_eq!(
            process.get("ATRIUM_PROCESS_ENV_TEST"),
            Some("value with spaces".into())
        );
        assert!(process
            .vars()
            .iter()
            .any(|(k, v)| k == "ATRIUM_PROCESS_ENV_TEST" && v == "value with spaces"));

        process.unset("ATRIUM_PROCESS_ENV_TEST")?;
        assert_eq!(process.get("ATRIUM_PROCESS_ENV_TEST"), None);
        Ok(())
    }

    #[test]
    fn test_process_env_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"a\xffb".to_vec());
        env::set_var("ATRIUM_RAW_BYTES_TEST", &raw);

        let process = ProcessEnv::new();
        assert_eq!(process.get("ATRIUM_RAW_BYTES_TEST"), Some(raw.clone()));
        assert!(process
            .vars()
            .iter()
            .any(|(k, v)| k == "ATRIUM_RAW_BYTES_TEST" && *v == raw));

        env::remove_var("ATRIUM_RAW_BYTES_TEST");
    }

    #[test]
    fn test_process_env_rejects_invalid_name() {
        let mut process = ProcessEnv::new();
        assert!(matches!(
            process.set("BAD=NAME", "x"),
            Err(EnvError::InvalidName(_))
        ));
    }
}
