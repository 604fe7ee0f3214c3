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

// Domain error types

use thiserror::Error;

/// Main error type for collaborators of the lockout pipeline
#[derive(Error, Debug)]
pub enum LockoutError {
    /// Wire protocol error (framing, JSON shape, unexpected EOF)
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Host identity could not be determined
    #[error("Platform error: {0}")]
    PlatformError(String),
}

/// Reasons an inbound command is classified as unrecognized.
///
/// The `Display` text is written verbatim to the audit log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Stdin could not deliver a message line
    #[error("Cannot read input from stdin: {0}")]
    Unreadable(String),

    /// Payload is not JSON
    #[error("Cannot parse input to json")]
    Malformed,

    /// `version` or `command` missing or mistyped
    #[error("Cannot read 'command' from json")]
    MissingCommand,

    /// `command` is neither `add` nor `delete`
    #[error("Invalid value of 'command'")]
    UnknownCommand(String),
}
