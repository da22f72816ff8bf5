/// Everything before the first `#`, unchanged. Lines without `#` come back as is.
pub fn strip_comments(line: &str) -> String {
    match line.find('#') {
        Some(pos) => line[..pos].to_string(),
        None => line.to_string(),
    }
}

/// Replaces `$$` with the current process id and `$?` with `last_status`.
///
/// The pid is read on every call. Any other `$` is copied through and the
/// character after it is scanned on its own.
pub fn expand(line: &str, last_status: i32) -> String {
    expand_with(line, std::process::id(), last_status)
}

pub(crate) fn expand_with(line: &str, pid: u32, last_status: i32) -> String {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                result.push_str(&pid.to_string());
            }
            Some('?') => {
                chars.next();
                result.push_str(&last_status.to_string());
            }
            _ => result.push('$'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("echo hi # note"), "echo hi ");
        assert_eq!(strip_comments("# whole line"), "");
        assert_eq!(strip_comments("a#b#c"), "a");
    }

    #[test]
    fn test_strip_comments_without_hash() {
        let line = "  ls -l \t";
        assert_eq!(strip_comments(line), line);
        assert_eq!(strip_comments(""), "");
    }

    #[test]
    fn test_expand_pid() {
        let expanded = expand("echo $$", 0);
        assert_eq!(expanded, format!("echo {}", std::process::id()));
    }

    #[test]
    fn test_expand_status() {
        assert_eq!(expand("echo $?", 0), "echo 0");
        assert_eq!(expand("echo $?", 127), "echo 127");
    }

    #[test]
    fn test_expand_mixed() {
        assert_eq!(expand_with("$$-$?-$$", 42, 3), "42-3-42");
        assert_eq!(expand_with("$$$", 42, 0), "42$");
        assert_eq!(expand_with("$$$?", 42, 5), "425");
    }

    #[test]
    fn test_lone_dollar_is_literal() {
        assert_eq!(expand_with("cost $5 $HOME $", 1, 0), "cost $5 $HOME $");
        assert_eq!(expand_with("$ $", 1, 0), "$ $");
    }

    #[test]
    fn test_dollar_before_special_is_rescanned() {
        // "$a" is emitted as is, then "$?" still expands
        assert_eq!(expand_with("$a$?", 9, 2), "$a2");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(expand_with("échø $? 🦀", 1, 4), "échø 4 🦀");
    }
}
