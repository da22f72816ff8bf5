/// Separators for the logical executor. Each is a single character, so `&&`
/// and `||` behave like two separators in a row.
pub const LOGICAL_SEPARATORS: &[char] = &['&', '|'];

/// Separator for the sequential executor.
pub const SEQUENCE_SEPARATORS: &[char] = &[';'];

/// Whitespace-delimited, non-empty tokens. Quotes are ordinary characters.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Pieces of `line` between separator characters. Runs of separators yield no
/// empty pieces, like `strtok`; whitespace-only pieces are kept.
pub fn split_fragments<'a>(line: &'a str, separators: &[char]) -> Vec<&'a str> {
    line.split(|c: char| separators.contains(&c))
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

pub fn contains_any(line: &str, separators: &[char]) -> bool {
    line.contains(|c: char| separators.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("ls  -l\t/tmp "), vec!["ls", "-l", "/tmp"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_has_no_quoting() {
        assert_eq!(tokenize("echo \"a b\" 'c'"), vec!["echo", "\"a", "b\"", "'c'"]);
    }

    #[test]
    fn test_logical_split_treats_double_operators_as_single() {
        assert_eq!(
            split_fragments("a && b", LOGICAL_SEPARATORS),
            split_fragments("a & b", LOGICAL_SEPARATORS)
        );
        assert_eq!(
            split_fragments("false || echo x|y", LOGICAL_SEPARATORS),
            vec!["false ", " echo x", "y"]
        );
    }

    #[test]
    fn test_split_keeps_blank_fragments() {
        assert_eq!(
            split_fragments("a & & b", LOGICAL_SEPARATORS),
            vec!["a ", " ", " b"]
        );
    }

    #[test]
    fn test_sequence_split() {
        assert_eq!(
            split_fragments("false;echo never", SEQUENCE_SEPARATORS),
            vec!["false", "echo never"]
        );
        assert_eq!(split_fragments(";;", SEQUENCE_SEPARATORS), Vec::<&str>::new());
        assert_eq!(split_fragments("a & b", SEQUENCE_SEPARATORS), vec!["a & b"]);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("a|b", LOGICAL_SEPARATORS));
        assert!(!contains_any("a;b", LOGICAL_SEPARATORS));
    }
}
