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

//! Domain models for the lockout pipeline.
//!
//! Pure data: the validated target identity, the confirmation verdict and
//! the terminal outcome. Free of I/O side effects.

use crate::engine_core::constants::exit;
use std::process::ExitCode;

/// Username taken from the inbound alert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetUser(String);

impl TargetUser {
    /// Empty or whitespace-only names count as absent.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verdict of the peer-confirmation exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationResult {
    Continue,
    /// Another responder already owns these keys; nothing to do
    Abort,
    /// The exchange failed; the reason is audited
    Error(String),
}

/// Final status handed back to the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    Success,
    Invalid,
}

impl TerminalStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            TerminalStatus::Success => exit::SUCCESS,
            TerminalStatus::Invalid => exit::INVALID,
        }
    }
}

impl From<TerminalStatus> for ExitCode {
    fn from(status: TerminalStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Terminal artifact of one invocation.
///
/// Pipeline stages return `Result<T, ExecutionOutcome>` so every early exit
/// carries the record the reporter writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub status: TerminalStatus,
    pub audit_message: String,
}

impl ExecutionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: TerminalStatus::Success,
            audit_message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: TerminalStatus::Invalid,
            audit_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TerminalStatus::Success
    }
}
