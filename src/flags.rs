use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    script: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        let table = [
            ("help", "-h", "--help", "Print this help message", false),
            ("version", "-v", "--version", "Show version information", false),
            ("config", "-c", "--config", "Read startup commands from FILE", true),
            ("quiet", "-q", "--quiet", "Suppress diagnostics", false),
            ("debug", "-d", "--debug", "Trace command execution on stderr", false),
        ];

        for (name, short, long, description, takes_value) in table {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        }

        Flags {
            flags,
            script: None,
        }
    }

    /// Parses `args` (without the program name). The first argument that is
    /// not a flag names a script file; anything after it is ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if !arg.starts_with('-') {
                self.script = Some(arg.clone());
                break;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = args.get(i + 1).ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn print_help(&self) {
        println!("Usage: atrium [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
