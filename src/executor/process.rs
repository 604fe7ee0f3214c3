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

//! Account utility execution.
//!
//! The utility runs with stdin closed, stdout discarded (stdout is the
//! confirmation channel to the agent) and stderr bound to ours. There is no
//! timeout: a hung utility hangs the invocation until the orchestrator kills
//! it.

use crate::engine_core::traits::ProcessRunner;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> std::io::Result<Option<i32>> {
        debug!("Spawning '{}' with args {:?}", program.display(), args);

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        // ------------------------------------------------------------------
        // LINUX: PR_SET_PDEATHSIG
        // ------------------------------------------------------------------
        #[cfg(target_os = "linux")]
        // SAFETY: prctl is async-signal-safe and touches no memory shared
        // with the parent; the constants come from libc for this platform.
        unsafe {
            command.pre_exec(|| {
                // Kill the utility if the responder is killed while waiting
                let ret = libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGKILL);
                if ret != 0 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }

        let mut child = command.spawn()?;

        match child.wait().await {
            Ok(status) => {
                debug!("'{}' exited with {}", program.display(), status);
                Ok(status.code())
            }
            Err(e) => {
                // Launched; the outcome is not interpreted either way.
                warn!("Waiting for '{}' failed: {}", program.display(), e);
                Ok(None)
            }
        }
    }
}
