// SPDX-License-Identifier: GPL-3.0-only
use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;
use std::time::Duration;

/// Everything that can go wrong while talking to the daemon.
///
/// Status polling treats all of these the same way (the idle display);
/// they stay distinct so toggle callers and debug logs can say what
/// actually happened.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to connect to daemon socket {}: {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Socket I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Daemon did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Daemon reply was not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),
}
