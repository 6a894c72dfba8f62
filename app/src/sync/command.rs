use std::borrow::Cow;
use std::fmt;

use super::options::SyncOptions;

pub const BASE_FLAGS: [&str; 6] = [
    "--recursive",
    "--verbose",
    "--compress",
    "--links",
    "--no-g",
    "--no-o",
];

pub const DELETE_FLAGS: [&str; 2] = ["--delete", "--force"];

pub const EXCLUDE_FLAG: &str = "--exclude";

/// 同步命令 - 程序名加参数向量。
///
/// Execution passes `args()` straight to the process API, so nothing is
/// interpreted by a shell. `Display` renders the equivalent shell command,
/// for logs and for `folder-sync command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCommand {
    program: String,
    args: Vec<String>,
}

impl SyncCommand {
    pub fn build(tool: &str, source: &str, dest: &str, options: &SyncOptions) -> Self {
        let mut args: Vec<String> = BASE_FLAGS.iter().map(|s| s.to_string()).collect();

        if options.should_delete() {
            args.extend(DELETE_FLAGS.iter().map(|s| s.to_string()));
        }

        for pattern in options.exclude() {
            args.push(EXCLUDE_FLAG.to_string());
            args.push(pattern.clone());
        }

        args.push(source.to_string());
        args.push(dest.to_string());

        Self {
            program: tool.to_string(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for SyncCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote_if_needed(&self.program))?;

        let mut pattern_next = false;
        for arg in &self.args {
            if pattern_next {
                // exclude patterns are always quoted
                write!(f, " {}", shell_quote(arg))?;
                pattern_next = false;
            } else {
                pattern_next = arg == EXCLUDE_FLAG;
                write!(f, " {}", quote_if_needed(arg))?;
            }
        }

        Ok(())
    }
}

/// 单引号转义：内部的 `'` 变为 `'\''`，其余字符在单引号内都按字面处理
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn quote_if_needed(value: &str) -> Cow<'_, str> {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-:@,+=%".contains(c));

    if safe {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(shell_quote(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(delete: bool, exclude: &[&str]) -> SyncOptions {
        SyncOptions::new(delete, exclude.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn default_options_add_delete_flags() {
        let command = SyncCommand::build("rsync", "src/", "dst/", &SyncOptions::default());
        assert_eq!(
            command.to_string(),
            "rsync --recursive --verbose --compress --links --no-g --no-o --delete --force src/ dst/"
        );
        assert_eq!(command.program(), "rsync");
        assert_eq!(command.args().len(), BASE_FLAGS.len() + DELETE_FLAGS.len() + 2);
    }

    #[test]
    fn no_delete_omits_flags() {
        let command = SyncCommand::build("rsync", "src/", "user@host:www/", &options(false, &[]));
        assert_eq!(
            command.to_string(),
            "rsync --recursive --verbose --compress --links --no-g --no-o src/ user@host:www/"
        );
        assert!(!command.args().iter().any(|a| a == "--delete"));
    }

    #[test]
    fn excludes_follow_delete_flags_in_order() {
        let command = SyncCommand::build("rsync", "/a/", "/b/", &options(true, &["*.log", "cache/"]));
        assert_eq!(
            command.to_string(),
            "rsync --recursive --verbose --compress --links --no-g --no-o --delete --force \
             --exclude '*.log' --exclude 'cache/' /a/ /b/"
        );

        let args = command.args();
        let tail = &args[BASE_FLAGS.len() + DELETE_FLAGS.len()..];
        assert_eq!(tail, ["--exclude", "*.log", "--exclude", "cache/", "/a/", "/b/"]);
    }

    #[test]
    fn patterns_stay_literal_in_argv() {
        let hostile = "x'; rm -rf / #$(whoami)`id`";
        let command = SyncCommand::build("rsync", "/a/", "/b/", &options(false, &[hostile]));
        assert!(command.args().iter().any(|a| a == hostile));
    }

    #[test]
    fn rendered_patterns_are_single_quoted() {
        let command = SyncCommand::build("rsync", "/a/", "/b/", &options(false, &["it's; $(id)"]));
        assert!(command
            .to_string()
            .contains(r"--exclude 'it'\''s; $(id)'"));
    }

    #[test]
    fn paths_with_spaces_are_quoted() {
        let command = SyncCommand::build("rsync", "/my docs/", "/b/", &options(false, &[]));
        assert!(command.to_string().ends_with(" '/my docs/' /b/"));
    }

    #[test]
    fn build_is_deterministic() {
        let opts = options(true, &["a", "$(b)"]);
        let first = SyncCommand::build("rsync", "/a/", "/b/", &opts);
        let second = SyncCommand::build("rsync", "/a/", "/b/", &opts);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn shell_quote_handles_empty_and_quotes() {
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a'b"), r"'a'\''b'");
    }
}
