// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line-framed transport between the responder and the agent.
//!
//! The agent writes the command as one JSON line on stdin. For lock
//! requests the responder writes a `check_keys` line on stdout and reads the
//! verdict as the next stdin line, so both reads must share one buffered
//! reader.

use crate::engine_core::constants::{limits, protocol};
use crate::engine_core::errors::{LockoutError, RequestError};
use crate::engine_core::models::ConfirmationResult;
use crate::engine_core::traits::ConfirmationChannel;
use crate::protocol::message::{command_of, ArMessage, Command};
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, Stdin, Stdout};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, warn};

pub struct ArTransport<R, W> {
    reader: FramedRead<R, LinesCodec>,
    writer: FramedWrite<W, LinesCodec>,
    program: String,
}

impl ArTransport<Stdin, Stdout> {
    pub fn stdio(program: impl Into<String>) -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout(), program)
    }
}

impl<R, W> ArTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, program: impl Into<String>) -> Self {
        Self {
            reader: FramedRead::new(
                reader,
                LinesCodec::new_with_max_length(limits::MAX_MESSAGE_SIZE_BYTES),
            ),
            writer: FramedWrite::new(writer, LinesCodec::new()),
            program: program.into(),
        }
    }

    pub fn writer(&self) -> &W {
        self.writer.get_ref()
    }

    /// Next line from the agent. EOF is an error: the agent always sends
    /// something when it expects us to act.
    pub async fn read_line(&mut self) -> Result<String, LockoutError> {
        match self.reader.next().await {
            Some(Ok(line)) => {
                debug!("Received: {}", line);
                Ok(line)
            }
            Some(Err(e)) => Err(LockoutError::ProtocolError(e.to_string())),
            None => Err(LockoutError::ProtocolError(
                "unexpected end of input".to_string(),
            )),
        }
    }

    /// Reads and classifies the inbound command.
    pub async fn read_command(&mut self) -> Command {
        match self.read_line().await {
            Ok(line) => Command::parse(&line),
            Err(e) => {
                warn!("Cannot read command: {}", e);
                Command::rejected(RequestError::Unreadable(e.to_string()))
            }
        }
    }

    pub async fn send(&mut self, message: &ArMessage) -> Result<(), LockoutError> {
        let line = serde_json::to_string(message)
            .map_err(|e| LockoutError::ProtocolError(e.to_string()))?;
        debug!("Sending: {}", line);
        self.writer
            .send(line)
            .await
            .map_err(|e| LockoutError::ProtocolError(e.to_string()))
    }
}

/// Maps a reply line to a confirmation verdict.
pub fn parse_confirmation(line: &str) -> ConfirmationResult {
    let reply: serde_json::Value = match serde_json::from_str(line.trim()) {
        Ok(v) => v,
        Err(_) => return ConfirmationResult::Error(RequestError::Malformed.to_string()),
    };

    match command_of(&reply) {
        Ok(protocol::COMMAND_CONTINUE) => ConfirmationResult::Continue,
        Ok(protocol::COMMAND_ABORT) => ConfirmationResult::Abort,
        Ok(other) => {
            ConfirmationResult::Error(RequestError::UnknownCommand(other.to_string()).to_string())
        }
        Err(e) => ConfirmationResult::Error(e.to_string()),
    }
}

#[async_trait]
impl<R, W> ConfirmationChannel for ArTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&mut self, keys: &[String]) -> ConfirmationResult {
        let request = ArMessage::check_keys(&self.program, keys);
        if let Err(e) = self.send(&request).await {
            return ConfirmationResult::Error(format!("Cannot send keys: {}", e));
        }

        match self.read_line().await {
            Ok(line) => parse_confirmation(&line),
            Err(e) => ConfirmationResult::Error(
                RequestError::Unreadable(e.to_string()).to_string(),
            ),
        }
    }
}
