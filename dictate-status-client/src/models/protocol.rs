// SPDX-License-Identifier: GPL-3.0-only
//! Line protocol spoken over the daemon's Unix socket.
//!
//! Requests are one lowercase word terminated by a newline and replies are
//! one short token the same way. A connection carries exactly one
//! request/response pair; the client closes it after reading.

use std::str::FromStr;
use std::time::Duration;
use strum_macros::{AsRefStr, EnumIter};

/// Socket the daemon listens on unless configured otherwise.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/dictate.sock";

/// Reply token meaning dictation is currently capturing audio. Matched
/// exactly after whitespace stripping; every other token reads as idle.
pub const ACTIVE_REPLY: &str = "active";

/// Upper bound on a reply. A single read of this many bytes is the whole
/// response; the daemon never sends more for the commands we speak.
pub const MAX_REPLY_BYTES: usize = 64;

/// Deadline for a complete exchange (connect, send, read).
pub const EXCHANGE_TIMEOUT: Duration = Duration::from_millis(500);

/// Cadence status-bar hosts are expected to poll at. Informational only;
/// scheduling lives in the bar, never here.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Status,
    Toggle,
}

impl Command {
    /// Wire form of the command: the token plus the newline terminator.
    #[must_use]
    pub fn wire_line(&self) -> String {
        format!("{self}\n")
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Toggle => write!(f, "toggle"),
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "toggle" => Ok(Self::Toggle),
            _ => Err(format!("Unknown command: {s}")),
        }
    }
}
