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

//! Collaborator seams of the lockout pipeline.
//!
//! Each side effect the pipeline needs (talking to the agent, asking the
//! host who it is, touching the filesystem, spawning the utility, writing
//! the audit log) sits behind one of these traits so the decision logic can
//! run against doubles.

use crate::engine_core::errors::LockoutError;
use crate::engine_core::models::ConfirmationResult;
use async_trait::async_trait;
use std::path::Path;

/// Peer confirmation: approve, reject or fail a proposed action.
#[async_trait]
pub trait ConfirmationChannel: Send {
    /// Ask the agent whether the action keyed by `keys` may proceed.
    /// `keys` is never empty.
    async fn confirm(&mut self, keys: &[String]) -> ConfirmationResult;
}

/// Host operating system identity.
pub trait HostIdentity: Send + Sync {
    /// Kernel system name, as reported by `uname -s`.
    fn system_name(&self) -> Result<String, LockoutError>;
}

/// Filesystem existence check.
pub trait FileProbe: Send + Sync {
    fn probe(&self, path: &Path) -> std::io::Result<()>;
}

/// Subprocess execution.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Launch `program` with `args` and wait for it to finish.
    ///
    /// `Err` means the program could not be launched. `Ok` carries the exit
    /// code when the platform reports one.
    async fn run(&self, program: &Path, args: &[String]) -> std::io::Result<Option<i32>>;
}

/// Append-only audit sink keyed by the invoking program.
pub trait AuditSink: Send + Sync {
    fn record(&self, message: &str);
}
