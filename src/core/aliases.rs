use std::fmt;

/// Number of slots in a default [`AliasTable`].
pub const MAX_ALIASES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: Box<str>,
    pub value: Box<str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    TableFull { capacity: usize },
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::TableFull { capacity } => {
                write!(f, "alias table full ({} entries)", capacity)
            }
        }
    }
}

impl std::error::Error for AliasError {}

/// What an `alias` argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasRequest<'a> {
    List,
    Set { name: &'a str, value: &'a str },
    /// `name=` with nothing after it, or `=value`.
    Malformed,
}

/// Fixed-capacity name/value store. Names are unique; an empty slot means the
/// name is absent. Entries are never removed.
#[derive(Debug, Clone)]
pub struct AliasTable {
    slots: Box<[Option<AliasEntry>]>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasTable {
    pub fn new() -> Self {
        Self::with_capacity(MAX_ALIASES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Updates `name` in place if present, otherwise fills the first empty slot.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), AliasError> {
        if let Some(entry) = self.slots.iter_mut().flatten().find(|e| &*e.name == name) {
            entry.value = value.into();
            return Ok(());
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(AliasEntry {
                    name: name.into(),
                    value: value.into(),
                });
                Ok(())
            }
            None => Err(AliasError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .flatten()
            .find(|e| &*e.name == name)
            .map(|e| &*e.value)
    }

    /// `name='value'` for every populated slot, in slot order.
    pub fn list(&self) -> Vec<String> {
        self.slots
            .iter()
            .flatten()
            .map(|e| format!("{}='{}'", e.name, e.value))
            .collect()
    }

    /// Replaces a leading alias name in `tokens` with the alias value's own
    /// tokens. Only one level is expanded.
    pub fn expand_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        let Some(value) = tokens.first().and_then(|first| self.get(first)) else {
            return tokens;
        };

        let mut expanded: Vec<String> = value.split_whitespace().map(String::from).collect();
        expanded.extend(tokens.into_iter().skip(1));
        expanded
    }
}

/// Classifies the text following the `alias` built-in.
pub fn parse_alias_argument(text: &str) -> AliasRequest<'_> {
    let Some((name, value)) = text.split_once('=') else {
        return AliasRequest::List;
    };

    let name = name.trim();
    let value = strip_matching_quotes(value.trim());
    if name.is_empty() || value.is_empty() {
        return AliasRequest::Malformed;
    }
    AliasRequest::Set { name, value }
}

fn strip_matching_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_list() -> Result<(), AliasError> {
        let mut table = AliasTable::new();
        table.set("ll", "ls -l")?;
        assert!(table.list().contains(&"ll='ls -l'".to_string()));
        Ok(())
    }

    #[test]
    fn test_set_updates_in_place() -> Result<(), AliasError> {
        let mut table = AliasTable::new();
        table.set("ll", "ls -l")?;
        table.set("gs", "git status")?;
        table.set("ll", "ls -la")?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.list(), vec!["ll='ls -la'", "gs='git status'"]);
        Ok(())
    }

    #[test]
    fn test_full_table_rejects_new_names() -> Result<(), AliasError> {
        let mut table = AliasTable::new();
        for i in 0..MAX_ALIASES {
            table.set(&format!("a{}", i), "true")?;
        }
        let before = table.list();

        assert_eq!(
            table.set("one_more", "false"),
            Err(AliasError::TableFull {
                capacity: MAX_ALIASES
            })
        );
        assert_eq!(table.list(), before);
        assert_eq!(table.len(), MAX_ALIASES);

        // existing names can still be updated
        table.set("a3", "echo")?;
        assert_eq!(table.get("a3"), Some("echo"));
        Ok(())
    }

    #[test]
    fn test_list_skips_empty_slots() {
        let table = AliasTable::with_capacity(3);
        assert!(table.list().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_expand_tokens() -> Result<(), AliasError> {
        let mut table = AliasTable::new();
        table.set("ll", "ls -la")?;

        let tokens = vec!["ll".to_string(), "/home".to_string()];
        assert_eq!(table.expand_tokens(tokens), vec!["ls", "-la", "/home"]);

        let untouched = vec!["ls".to_string()];
        assert_eq!(table.expand_tokens(untouched), vec!["ls"]);
        assert!(table.expand_tokens(Vec::new()).is_empty());
        Ok(())
    }

    #[test]
    fn test_expand_is_single_level() -> Result<(), AliasError> {
        let mut table = AliasTable::new();
        table.set("a", "b")?;
        table.set("b", "c")?;
        assert_eq!(table.expand_tokens(vec!["a".to_string()]), vec!["b"]);
        Ok(())
    }

    #[test]
    fn test_parse_alias_argument() {
        assert_eq!(parse_alias_argument(""), AliasRequest::List);
        assert_eq!(parse_alias_argument("ll"), AliasRequest::List);
        assert_eq!(
            parse_alias_argument("ll=ls -l"),
            AliasRequest::Set {
                name: "ll",
                value: "ls -l"
            }
        );
        assert_eq!(
            parse_alias_argument("ll='ls -l'"),
            AliasRequest::Set {
                name: "ll",
                value: "ls -l"
            }
        );
        assert_eq!(
            parse_alias_argument("eq=a=b"),
            AliasRequest::Set {
                name: "eq",
                value: "a=b"
            }
        );
        assert_eq!(parse_alias_argument("ll="), AliasRequest::Malformed);
        assert_eq!(parse_alias_argument("=ls"), AliasRequest::Malformed);
    }

    #[test]
    fn test_unbalanced_quotes_are_kept() {
        assert_eq!(
            parse_alias_argument("q='ls"),
            AliasRequest::Set {
                name: "q",
                value: "'ls"
            }
        );
    }
}
