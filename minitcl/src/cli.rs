//! Command-line argument parsing.
//!
//! Usage:
//!   minitcl [-d] [-q] [-n] [-c <cmd>] [script]

use std::path::PathBuf;

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Trace tokens and dispatched statements (`-d`).
    pub debug: bool,
    /// Suppress the startup banner (`-q`).
    pub quiet: bool,
    /// Skip the user rc file (`-n`).
    pub no_rc: bool,
    /// Command to evaluate after startup (`-c <cmd>`).
    pub command: Option<String>,
    /// Script file to run in batch mode instead of the REPL.
    pub script: Option<PathBuf>,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(&raw[1..])
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut positional: Vec<String> = Vec::new();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        // `--` ends flag processing.
        if arg == "--" {
            i += 1;
            positional.extend(argv[i..].iter().cloned());
            break;
        }

        // Non-flag argument.
        if !arg.starts_with('-') || arg == "-" {
            positional.push(arg.to_owned());
            i += 1;
            continue;
        }

        // Flag argument: iterate over characters after the leading `-`.
        let chars: Vec<char> = arg[1..].chars().collect();
        let mut j = 0;
        while j < chars.len() {
            match chars[j] {
                'd' => args.debug = true,
                'q' => args.quiet = true,
                'n' => args.no_rc = true,

                // -c<cmd> or -c <cmd>
                'c' => {
                    let cmd = if j + 1 < chars.len() {
                        let s: String = chars[j + 1..].iter().collect();
                        j = chars.len();
                        s
                    } else if i + 1 < argv.len() {
                        i += 1;
                        argv[i].clone()
                    } else {
                        return Err("-c requires a command argument".to_owned());
                    };
                    args.command = Some(cmd);
                }

                c => return Err(format!("unknown option: -{c}")),
            }
            j += 1;
        }
        i += 1;
    }

    match positional.len() {
        0 => {}
        1 => args.script = Some(PathBuf::from(positional.remove(0))),
        n => return Err(format!("too many arguments ({n})")),
    }

    Ok(args)
}

// ── Path helpers ──────────────────────────────────────────────────────────────

/// Search for the user rc file in the standard locations.
/// Returns the first path that exists, or `None`.
pub fn find_rc_file() -> Option<PathBuf> {
    let home = std::env::var("HOME").unwrap_or_default();
    [format!("{home}/.minitclrc"), "./.minitclrc".to_owned()]
        .into_iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<CliArgs, String> {
        let owned: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
        parse_argv(&owned)
    }

    #[test]
    fn empty() {
        let args = parse(&[]).unwrap();
        assert!(!args.debug);
        assert!(args.command.is_none());
        assert!(args.script.is_none());
    }

    #[test]
    fn grouped_flags() {
        let args = parse(&["-dqn"]).unwrap();
        assert!(args.debug);
        assert!(args.quiet);
        assert!(args.no_rc);
    }

    #[test]
    fn command_embedded() {
        let args = parse(&["-cputs hi"]).unwrap();
        assert_eq!(args.command.as_deref(), Some("puts hi"));
    }

    #[test]
    fn command_separate() {
        let args = parse(&["-c", "puts hi"]).unwrap();
        assert_eq!(args.command.as_deref(), Some("puts hi"));
    }

    #[test]
    fn command_missing_argument() {
        assert!(parse(&["-c"]).is_err());
    }

    #[test]
    fn script_positional() {
        let args = parse(&["demo.tcl"]).unwrap();
        assert_eq!(args.script.as_deref(), Some(std::path::Path::new("demo.tcl")));
    }

    #[test]
    fn double_dash_ends_flags() {
        let args = parse(&["--", "-weird-name"]).unwrap();
        assert_eq!(
            args.script.as_deref(),
            Some(std::path::Path::new("-weird-name"))
        );
    }

    #[test]
    fn too_many_positionals() {
        assert!(parse(&["a.tcl", "b.tcl"]).is_err());
    }

    #[test]
    fn unknown_flag() {
        assert!(parse(&["-z"]).is_err());
    }
}
