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

//! Active-response messages.
//!
//! Classifies the inbound command sent by the agent and builds the
//! `check_keys` confirmation request. Parsing is pure; nothing here performs
//! I/O.

use crate::engine_core::constants::protocol;
use crate::engine_core::errors::RequestError;
use crate::engine_core::models::TargetUser;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON pointer of the target username inside an inbound command
pub const DSTUSER_POINTER: &str = "/parameters/alert/data/dstuser";

/// Requested account mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `add`: lock the account
    Enable,
    /// `delete`: unlock the account
    Disable,
    Unrecognized(RequestError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
    pub module: String,
}

/// Envelope shared by every active-response message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArMessage {
    pub version: u64,
    pub origin: Origin,
    pub command: String,
    pub parameters: Value,
}

impl ArMessage {
    /// Confirmation request asking the agent whether `keys` may be acted on.
    pub fn check_keys(program: &str, keys: &[String]) -> Self {
        Self {
            version: protocol::VERSION,
            origin: Origin {
                name: program.to_string(),
                module: protocol::ORIGIN_MODULE.to_string(),
            },
            command: protocol::COMMAND_CHECK_KEYS.to_string(),
            parameters: serde_json::json!({ "keys": keys }),
        }
    }
}

/// Returns the `command` of a message after checking the envelope.
///
/// Both inbound commands and confirmation replies must carry a numeric
/// `version` and a string `command`.
pub fn command_of(value: &Value) -> Result<&str, RequestError> {
    if !value.get("version").is_some_and(Value::is_number) {
        return Err(RequestError::MissingCommand);
    }
    value
        .get("command")
        .and_then(Value::as_str)
        .ok_or(RequestError::MissingCommand)
}

/// Parsed inbound command. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    action: Action,
    payload: Option<Value>,
}

impl Command {
    pub fn parse(raw: &str) -> Self {
        let payload: Value = match serde_json::from_str(raw.trim()) {
            Ok(v) => v,
            Err(_) => return Self::rejected(RequestError::Malformed),
        };

        let action = match command_of(&payload) {
            Ok(protocol::COMMAND_ADD) => Action::Enable,
            Ok(protocol::COMMAND_DELETE) => Action::Disable,
            Ok(other) => Action::Unrecognized(RequestError::UnknownCommand(other.to_string())),
            Err(e) => Action::Unrecognized(e),
        };

        Self {
            action,
            payload: Some(payload),
        }
    }

    /// Command for an input that never reached the parser.
    pub fn rejected(reason: RequestError) -> Self {
        Self {
            action: Action::Unrecognized(reason),
            payload: None,
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// The `dstuser` of the alert, if present and a non-blank string.
    pub fn target_user(&self) -> Option<TargetUser> {
        self.payload
            .as_ref()?
            .pointer(DSTUSER_POINTER)
            .and_then(Value::as_str)
            .and_then(TargetUser::new)
    }
}
