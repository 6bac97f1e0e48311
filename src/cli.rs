//! Command line surface
//!
//! Hotkey strings are validated here, before any listener starts; a
//! bad combo is a usage error with nonzero exit.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::coordinator::ClickPolicy;
use crate::hotkey::Hotkey;

#[derive(Debug, Parser)]
#[command(name = "hotclick", version, about = "Auto clicker with configurable hotkeys")]
pub struct Args {
    /// Hotkey used to start or stop auto-clicking
    #[arg(long, default_value = "ctrl+alt+p")]
    pub toggle: String,

    /// Hotkey used to exit the program. Use 'none' to disable
    #[arg(long, default_value = "ctrl+alt+q")]
    pub exit: String,

    /// How key presses stop an active clicking episode
    #[arg(long, value_enum, default_value_t = ClickPolicy::Latch)]
    pub policy: ClickPolicy,
}

/// Validated runtime configuration.
#[derive(Debug)]
pub struct Config {
    pub toggle: Hotkey,
    pub exit: Option<Hotkey>,
    pub policy: ClickPolicy,
}

impl Config {
    /// Resolve parsed arguments into hotkeys, exiting with a usage
    /// error when a combo string is invalid.
    pub fn from_args(args: &Args) -> Self {
        Self {
            toggle: parse_required(&args.toggle),
            exit: parse_optional(&args.exit),
            policy: args.policy,
        }
    }
}

fn parse_required(value: &str) -> Hotkey {
    Hotkey::parse(value).unwrap_or_else(|err| {
        Args::command()
            .error(ErrorKind::ValueValidation, err.to_string())
            .exit()
    })
}

fn parse_optional(value: &str) -> Option<Hotkey> {
    if value.eq_ignore_ascii_case("none") {
        return None;
    }
    Some(parse_required(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["hotclick"]);
        assert_eq!(args.toggle, "ctrl+alt+p");
        assert_eq!(args.exit, "ctrl+alt+q");
        assert_eq!(args.policy, ClickPolicy::Latch);

        let config = Config::from_args(&args);
        assert_eq!(config.toggle.describe(), "CTRL + ALT + P");
        assert_eq!(config.exit.unwrap().describe(), "CTRL + ALT + Q");
    }

    #[test]
    fn test_exit_none_disables_exit_hotkey() {
        let args = Args::parse_from(["hotclick", "--exit", "none"]);
        let config = Config::from_args(&args);
        assert!(config.exit.is_none());

        let args = Args::parse_from(["hotclick", "--exit", "NONE"]);
        let config = Config::from_args(&args);
        assert!(config.exit.is_none());
    }

    #[test]
    fn test_policy_flag() {
        let args = Args::parse_from(["hotclick", "--policy", "any-key-stops"]);
        assert_eq!(args.policy, ClickPolicy::AnyKeyStops);
    }

    #[test]
    fn test_invalid_hotkey_is_rejected_by_parser() {
        // Validation happens in Config::from_args, which exits the
        // process; here we only check the underlying parse error.
        assert!(Hotkey::parse("ctrl+bogus").is_err());
    }
}
