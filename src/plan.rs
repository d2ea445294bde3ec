use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of leading tokens tried when reassembling an executable
/// path that was stored without quoting. Tunable via
/// [`Settings::join_limit`](crate::settings::Settings).
pub const DEFAULT_JOIN_LIMIT: usize = 6;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?:"[^"]+"|\S)+"#).unwrap());

/// How a resolved command line should be launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Spawn the executable directly with the remaining tokens as arguments.
    DirectSpawn {
        executable: String,
        args: Vec<String>,
    },
    /// Reveal a directory in the shell file manager.
    OpenDirectory { path: String },
    /// Hand the target to the OS shell and let it pick the handler.
    ShellOpen { target: String },
}

/// Tokens are either a double-quote-delimited run (quotes kept) or a maximal
/// run of non-whitespace characters, so an unquoted path with spaces arrives
/// split across several tokens.
fn tokenize(line: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// Remove at most one double quote from each end of a token.
fn strip_quotes(token: &str) -> &str {
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}

fn path_exists(path: &str) -> bool {
    // Probe failures (permission denied etc.) read as absent.
    std::fs::metadata(path).is_ok()
}

fn is_directory(path: &str) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Plan how to launch `resolved` using the default join bound.
pub fn plan(resolved: &str) -> Option<LaunchPlan> {
    plan_with_limit(resolved, DEFAULT_JOIN_LIMIT)
}

/// Plan how to launch a resolved command line.
///
/// Token 1 is tentatively the executable. When it does not exist on disk,
/// prefixes of increasing token count (up to `join_limit`) are joined and
/// probed; the shortest existing join wins and the rest become arguments.
/// Command lines whose executable spans more tokens than the bound are not
/// resolved and fall through to the shell-open plan.
///
/// Returns `None` only when the command line contains no tokens at all. The
/// result is a pure function of the input and current filesystem state.
pub fn plan_with_limit(resolved: &str, join_limit: usize) -> Option<LaunchPlan> {
    let tokens = tokenize(resolved);
    if tokens.is_empty() {
        return None;
    }

    let mut executable = strip_quotes(tokens[0]).to_string();
    let mut args: Vec<String> = tokens[1..]
        .iter()
        .map(|t| strip_quotes(t).to_string())
        .collect();

    if !path_exists(&executable) {
        // Installer-created shortcuts often store space-containing paths
        // without quoting; retry with progressively longer prefixes.
        for i in 2..=tokens.len().min(join_limit) {
            let joined = tokens[..i].join(" ");
            let candidate = strip_quotes(&joined);
            if path_exists(candidate) {
                executable = candidate.to_string();
                args = tokens[i..]
                    .iter()
                    .map(|t| strip_quotes(t).to_string())
                    .collect();
                break;
            }
        }
    }

    if path_exists(&executable) && !args.is_empty() {
        return Some(LaunchPlan::DirectSpawn { executable, args });
    }

    let open_target = if path_exists(&executable) {
        executable
    } else {
        resolved.to_string()
    };

    if is_directory(&open_target) {
        return Some(LaunchPlan::OpenDirectory { path: open_target });
    }

    Some(LaunchPlan::ShellOpen {
        target: open_target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_runs_stay_single_tokens() {
        let tokens = tokenize(r#""C:\Program Files\App\app.exe" --flag"#);
        assert_eq!(tokens, [r#""C:\Program Files\App\app.exe""#, "--flag"]);
    }

    #[test]
    fn unquoted_spaces_split() {
        let tokens = tokenize(r"C:\Program Files\App\app.exe --flag");
        assert_eq!(
            tokens,
            [r"C:\Program", r"Files\App\app.exe", "--flag"]
        );
    }

    #[test]
    fn strip_removes_only_enclosing_quotes() {
        assert_eq!(strip_quotes(r#""a b""#), "a b");
        assert_eq!(strip_quotes(r#""a b"#), "a b");
        assert_eq!(strip_quotes(r#"a"b"#), r#"a"b"#);
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn empty_line_yields_no_plan() {
        assert_eq!(plan(""), None);
        assert_eq!(plan("   \t "), None);
    }
}
