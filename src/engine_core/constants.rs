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

//! ar-lockout Constants - Single source of truth for all configuration values.
//!
//! This module centralizes wire values, audit texts, default paths and
//! limits so the pipeline and its tests agree on them.

/// Active-response wire protocol values
pub mod protocol {
    /// Protocol version written in outgoing messages
    pub const VERSION: u64 = 1;
    /// Module name placed in the `origin` of outgoing messages
    pub const ORIGIN_MODULE: &str = "active-response";
    /// Inbound command: apply the response (lock the account)
    pub const COMMAND_ADD: &str = "add";
    /// Inbound command: withdraw the response (unlock the account)
    pub const COMMAND_DELETE: &str = "delete";
    /// Outbound confirmation request
    pub const COMMAND_CHECK_KEYS: &str = "check_keys";
    /// Confirmation reply: go ahead
    pub const COMMAND_CONTINUE: &str = "continue";
    /// Confirmation reply: another instance already handles these keys
    pub const COMMAND_ABORT: &str = "abort";
}

/// Account policy
pub mod account {
    /// Reserved superuser that must never be locked or unlocked
    pub const SUPERUSER: &str = "root";
}

/// Audit record texts
pub mod audit {
    pub const MISSING_USER: &str = "Cannot read 'dstuser' from data";
    pub const ABORTED: &str = "Aborted";
    pub const INVALID_USERNAME: &str = "Invalid username";
    pub const NO_SYSTEM_NAME: &str = "Cannot get system name";
    pub const INVALID_SYSTEM: &str = "Invalid system";
    pub const ENDED: &str = "Ended";
}

/// Platform utilities
pub mod utilities {
    /// Password database utility on Linux and SunOS
    pub const PASSWD_PATH: &str = "/usr/bin/passwd";
    /// User attribute utility on AIX
    pub const CHUSER_PATH: &str = "/usr/bin/chuser";
}

/// Configuration Environment Variables
pub mod config {
    pub const ENV_AUDIT_LOG: &str = "AR_LOCKOUT_AUDIT_LOG";
    pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
    pub const ENV_PASSWD_PATH: &str = "AR_LOCKOUT_PASSWD_PATH";
    pub const ENV_CHUSER_PATH: &str = "AR_LOCKOUT_CHUSER_PATH";

    /// Active-response log of the host agent
    pub const DEFAULT_AUDIT_LOG: &str = "/var/ossec/logs/active-responses.log";
    /// Name used when argv[0] is unavailable
    pub const DEFAULT_PROGRAM_NAME: &str = "disable-account";
}

/// Transport Limits
pub mod limits {
    /// Maximum accepted message line, in bytes
    pub const MAX_MESSAGE_SIZE_BYTES: usize = 65_536;
}

/// Process exit codes reported to the orchestrator
pub mod exit {
    pub const SUCCESS: u8 = 0;
    /// `-1` returned from `main` as seen by the parent
    pub const INVALID: u8 = 255;
}
