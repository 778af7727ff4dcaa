// SPDX-License-Identifier: GPL-3.0-only
use std::path::PathBuf;

use clap::ValueHint;
use clap::{ArgAction, Command, arg, command, value_parser};

use crate::output::Format;

#[must_use]
pub fn build() -> Command {
    command!()
    .about("Dictation indicator for status bars")
    .long_about(
        "Asks the dictate daemon over its Unix socket whether dictation is running and prints a status-bar friendly indicator. One invocation is one poll; scheduling belongs to the bar."
    )
    .subcommand_required(false)
    .arg_required_else_help(false)
    .subcommand(
        Command::new("status")
            .about("Print the current recording indicator (default)")
            .long_about("Poll the daemon once and print the indicator. Always exits 0: when the daemon is unreachable the idle (empty) indicator is the answer, not an error.")
    )
    .subcommand(
        Command::new("toggle")
            .about("Start or stop dictation")
            .long_about("Send a toggle command and print the daemon's reply (started or stopped). Unlike status, failures are reported and exit nonzero. Suitable as a bar click handler.")
    )
    .arg(
        arg!(-s --socket <socket> "The daemon socket path (overrides the config file)")
        .required(false)
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::AnyPath)
    )
    .arg(
        arg!(-f --format <format> "Output format")
        .default_value("plain")
        .required(false)
        .value_parser(value_parser!(Format))
    )
    .arg(
        arg!(-v --verbose "Enable verbose logging")
        .action(ArgAction::SetTrue)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_plain_format_and_no_socket_override() {
        let matches = build().get_matches_from(["dictate-status-bar"]);
        assert_eq!(
            matches.get_one::<Format>("format").copied(),
            Some(Format::Plain)
        );
        assert!(matches.get_one::<PathBuf>("socket").is_none());
        assert!(matches.subcommand_name().is_none());
    }

    #[test]
    fn test_parses_waybar_format_and_socket_override() {
        let matches = build().get_matches_from([
            "dictate-status-bar",
            "-f",
            "waybar",
            "-s",
            "/run/dictate.sock",
        ]);
        assert_eq!(
            matches.get_one::<Format>("format").copied(),
            Some(Format::Waybar)
        );
        assert_eq!(
            matches.get_one::<PathBuf>("socket"),
            Some(&PathBuf::from("/run/dictate.sock"))
        );
    }

    #[test]
    fn test_parses_toggle_subcommand() {
        let matches = build().get_matches_from(["dictate-status-bar", "toggle"]);
        assert_eq!(matches.subcommand_name(), Some("toggle"));
    }
}
