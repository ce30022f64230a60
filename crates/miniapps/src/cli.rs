#![forbid(unsafe_code)]

//! Command-line options, parsed by hand.
//!
//! Flags take `--name=value` or `--name value`. Every option also reads a
//! `MINIAPPS_*` environment variable; the flag wins when both are given.

use std::fmt;
use std::path::PathBuf;

use crate::app::ScreenId;

/// Parsed startup options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Start on this screen instead of the calculator.
    pub screen: Option<ScreenId>,
    /// Explicit state file path.
    pub state_file: Option<PathBuf>,
    /// Auto-quit after this many milliseconds.
    pub exit_after_ms: Option<u64>,
    /// Log file path; logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// Print the help text and exit.
    pub help: bool,
    /// Print the version and exit.
    pub version: bool,
}

/// A bad flag or value.
#[derive(Debug)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Help text for `--help`.
pub const HELP: &str = "\
miniapps - a hub of small terminal apps

Usage: miniapps [OPTIONS]

Options:
  --screen <N>         start on screen N (1-6)
  --state-file <PATH>  where to persist state (default: config dir)
  --exit-after-ms <N>  quit automatically after N milliseconds
  --log-file <PATH>    append logs to PATH (level via MINIAPPS_LOG)
  -h, --help           print this help
  -V, --version        print the version

Environment:
  MINIAPPS_SCREEN, MINIAPPS_STATE_FILE, MINIAPPS_EXIT_AFTER_MS,
  MINIAPPS_LOG_FILE mirror the flags; MINIAPPS_LOG sets the log filter.
";

/// Parse process arguments (after the binary name) plus the environment.
pub fn parse<I>(args: I) -> Result<Options, ParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    apply_env(&mut opts)?;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (name, inline) = match arg.split_once('=') {
            Some((n, v)) => (n.to_string(), Some(v.to_string())),
            None => (arg, None),
        };
        match name.as_str() {
            "-h" | "--help" => opts.help = true,
            "-V" | "--version" => opts.version = true,
            "--screen" => {
                let value = take_value(&name, inline, &mut args)?;
                opts.screen = Some(parse_screen(&value)?);
            }
            "--state-file" => {
                let value = take_value(&name, inline, &mut args)?;
                opts.state_file = Some(PathBuf::from(value));
            }
            "--exit-after-ms" => {
                let value = take_value(&name, inline, &mut args)?;
                opts.exit_after_ms = Some(parse_millis(&value)?);
            }
            "--log-file" => {
                let value = take_value(&name, inline, &mut args)?;
                opts.log_file = Some(PathBuf::from(value));
            }
            other => return Err(ParseError(format!("unknown option: {other}"))),
        }
    }
    Ok(opts)
}

fn apply_env(opts: &mut Options) -> Result<(), ParseError> {
    if let Ok(value) = std::env::var("MINIAPPS_SCREEN") {
        opts.screen = Some(parse_screen(&value)?);
    }
    if let Ok(value) = std::env::var("MINIAPPS_STATE_FILE") {
        opts.state_file = Some(PathBuf::from(value));
    }
    if let Ok(value) = std::env::var("MINIAPPS_EXIT_AFTER_MS") {
        opts.exit_after_ms = Some(parse_millis(&value)?);
    }
    if let Ok(value) = std::env::var("MINIAPPS_LOG_FILE") {
        opts.log_file = Some(PathBuf::from(value));
    }
    Ok(())
}

fn take_value(
    name: &str,
    inline: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, ParseError> {
    inline
        .or_else(|| args.next())
        .ok_or_else(|| ParseError(format!("{name} requires a value")))
}

fn parse_screen(value: &str) -> Result<ScreenId, ParseError> {
    let n: usize = value
        .parse()
        .map_err(|_| ParseError(format!("invalid screen number: {value}")))?;
    if (1..=ScreenId::ALL.len()).contains(&n) {
        Ok(ScreenId::from_index(n - 1))
    } else {
        Err(ParseError(format!(
            "screen number out of range (1-{}): {n}",
            ScreenId::ALL.len()
        )))
    }
}

fn parse_millis(value: &str) -> Result<u64, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError(format!("invalid millisecond count: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_give_defaults() {
        let opts = parse(args(&[])).expect("parse");
        assert!(opts.screen.is_none());
        assert!(opts.state_file.is_none());
        assert!(!opts.help && !opts.version);
    }

    #[test]
    fn equals_and_space_forms_both_work() {
        let a = parse(args(&["--screen=3"])).expect("parse");
        let b = parse(args(&["--screen", "3"])).expect("parse");
        assert_eq!(a.screen, Some(ScreenId::WordCount));
        assert_eq!(b.screen, Some(ScreenId::WordCount));
    }

    #[test]
    fn screen_numbers_are_one_based_and_bounded() {
        assert_eq!(
            parse(args(&["--screen", "1"])).expect("parse").screen,
            Some(ScreenId::Calculator)
        );
        assert_eq!(
            parse(args(&["--screen", "6"])).expect("parse").screen,
            Some(ScreenId::Clock)
        );
        assert!(parse(args(&["--screen", "0"])).is_err());
        assert!(parse(args(&["--screen", "7"])).is_err());
        assert!(parse(args(&["--screen", "two"])).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(parse(args(&["--bogus"])).is_err());
    }

    #[test]
    fn missing_values_are_rejected() {
        assert!(parse(args(&["--exit-after-ms"])).is_err());
    }

    #[test]
    fn paths_and_durations_parse() {
        let opts = parse(args(&[
            "--state-file",
            "/tmp/state.json",
            "--exit-after-ms=1500",
            "--log-file=/tmp/mini.log",
        ]))
        .expect("parse");
        assert_eq!(opts.state_file, Some(PathBuf::from("/tmp/state.json")));
        assert_eq!(opts.exit_after_ms, Some(1500));
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/mini.log")));
    }

    #[test]
    fn help_and_version_short_forms() {
        assert!(parse(args(&["-h"])).expect("parse").help);
        assert!(parse(args(&["-V"])).expect("parse").version);
        assert!(parse(args(&["--help"])).expect("parse").help);
        assert!(parse(args(&["--version"])).expect("parse").version);
    }
}
