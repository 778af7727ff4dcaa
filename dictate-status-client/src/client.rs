// SPDX-License-Identifier: GPL-3.0-only
//! Client side of the daemon's status socket.
//!
//! One call is one connection: connect, send a command line, read one short
//! reply, done. A failed poll shows the idle indicator and the bar asks
//! again a second later, so no retry lives here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::timeout;

use crate::error::ClientError;
use crate::models::protocol::{Command, EXCHANGE_TIMEOUT, MAX_REPLY_BYTES};
use crate::models::state::{DictationState, DisplayState};

/// Handle on the daemon's status socket. Holds configuration only; every
/// exchange opens and closes its own connection, so polls share no state.
#[derive(Debug, Clone)]
pub struct DictationStatusClient {
    socket_path: PathBuf,
    exchange_timeout: Duration,
}

impl DictationStatusClient {
    #[must_use]
    pub fn new(socket_path: PathBuf) -> Self {
        Self {
            socket_path,
            exchange_timeout: EXCHANGE_TIMEOUT,
        }
    }

    /// Override the exchange deadline. Keep it below the host's poll
    /// cadence so one poll cannot overlap the next.
    #[must_use]
    pub fn with_timeout(mut self, exchange_timeout: Duration) -> Self {
        self.exchange_timeout = exchange_timeout;
        self
    }

    #[must_use]
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// One status poll. Never fails: any failure to reach or read the
    /// daemon yields the idle display, and the host's next tick is the
    /// retry.
    pub async fn poll(&self) -> DisplayState {
        match self.query_status().await {
            Ok(reply) => DictationState::from_reply(&reply).into(),
            Err(e) => {
                debug!("Status poll degraded to idle: {e}");
                DisplayState::idle()
            }
        }
    }

    /// Send `status` and return the stripped reply token.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, writing, or reading fails, when the
    /// exchange exceeds the configured deadline, or when the reply is not
    /// valid UTF-8.
    pub async fn query_status(&self) -> Result<String, ClientError> {
        self.exchange(Command::Status).await
    }

    /// Send `toggle` and return the daemon's reply (`started` or `stopped`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::query_status`]. Unlike polling, callers
    /// are expected to surface these to whoever clicked.
    pub async fn toggle(&self) -> Result<String, ClientError> {
        self.exchange(Command::Toggle).await
    }

    /// One bounded request/response round trip. The stream only lives inside
    /// this call, so the connection is closed by the time it returns, on the
    /// success, error, and deadline paths alike.
    async fn exchange(&self, command: Command) -> Result<String, ClientError> {
        timeout(self.exchange_timeout, self.exchange_inner(command))
            .await
            .map_err(|_| ClientError::Timeout(self.exchange_timeout))?
    }

    async fn exchange_inner(&self, command: Command) -> Result<String, ClientError> {
        let mut stream = UnixStream::connect(&self.socket_path).await.map_err(|source| {
            ClientError::Connect {
                path: self.socket_path.clone(),
                source,
            }
        })?;

        stream.write_all(command.wire_line().as_bytes()).await?;

        // The daemon answers with one short token, so a single read is the
        // whole protocol. Anything past the cap is not a reply we know.
        let mut buf = [0u8; MAX_REPLY_BYTES];
        let n = stream.read(&mut buf).await?;
        let reply = std::str::from_utf8(&buf[..n])?;
        Ok(reply.trim().to_string())
    }
}
