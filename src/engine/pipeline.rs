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

//! The lockout pipeline.
//!
//! Interpret, guard, dispatch, execute. Each stage either hands a value to
//! the next one or ends the run with an [`ExecutionOutcome`]; [`LockoutExecutor::execute`]
//! is the single place that reports, so every run writes exactly one audit
//! record.
//!
//! The utility's exit status is deliberately not interpreted: once it has
//! been launched the run is `Success`, whatever the utility returned.

use crate::config::Config;
use crate::engine::{dispatch, guard};
use crate::engine_core::audit::FileAuditLog;
use crate::engine_core::constants::audit;
use crate::engine_core::models::ExecutionOutcome;
use crate::engine_core::traits::{
    AuditSink, ConfirmationChannel, FileProbe, HostIdentity, ProcessRunner,
};
use crate::executor::probe::FsProbe;
use crate::executor::process::SystemProcessRunner;
use crate::platform::host::UnameHost;
use crate::platform::profile::Mutation;
use crate::protocol::message::{Action, Command};
use crate::utils::os_error;
use std::sync::Arc;
use tracing::{debug, info};

pub struct LockoutExecutor {
    config: Arc<Config>,
    host: Box<dyn HostIdentity>,
    probe: Box<dyn FileProbe>,
    runner: Box<dyn ProcessRunner>,
    audit: Box<dyn AuditSink>,
}

impl LockoutExecutor {
    pub fn new(
        config: Arc<Config>,
        host: Box<dyn HostIdentity>,
        probe: Box<dyn FileProbe>,
        runner: Box<dyn ProcessRunner>,
        audit: Box<dyn AuditSink>,
    ) -> Self {
        Self {
            config,
            host,
            probe,
            runner,
            audit,
        }
    }

    /// Executor wired to the running host.
    pub fn system(config: Arc<Config>) -> Self {
        let audit = FileAuditLog::new(config.audit_log_path.clone(), config.program_name.clone());
        Self::new(
            config,
            Box::new(UnameHost),
            Box::new(FsProbe),
            Box::new(SystemProcessRunner),
            Box::new(audit),
        )
    }

    /// Runs one invocation and reports its outcome.
    pub async fn execute(
        &self,
        command: &Command,
        confirmation: &mut dyn ConfirmationChannel,
    ) -> ExecutionOutcome {
        let outcome = match self.run(command, confirmation).await {
            Ok(outcome) | Err(outcome) => outcome,
        };
        self.report(&outcome);
        outcome
    }

    async fn run(
        &self,
        command: &Command,
        confirmation: &mut dyn ConfirmationChannel,
    ) -> Result<ExecutionOutcome, ExecutionOutcome> {
        // Request interpreter
        let mutation = match command.action() {
            Action::Enable => Mutation::Lock,
            Action::Disable => Mutation::Unlock,
            Action::Unrecognized(reason) => {
                return Err(ExecutionOutcome::invalid(reason.to_string()))
            }
        };

        // Precondition guard
        let user = guard::admit(command, confirmation).await?;

        // Platform dispatcher
        let profile = dispatch::select_profile(
            self.host.as_ref(),
            self.probe.as_ref(),
            &self.config,
        )?;

        // Executor
        let args = profile.command_args(mutation, user.as_str());

        info!(
            "{:?} '{}': running {} {:?}",
            mutation,
            user,
            profile.utility_path.display(),
            args
        );

        match self.runner.run(&profile.utility_path, &args).await {
            Ok(code) => {
                debug!("Utility finished with exit code {:?}", code);
                Ok(ExecutionOutcome::success(audit::ENDED))
            }
            Err(e) => Err(ExecutionOutcome::invalid(format!(
                "Error executing '{}': {}",
                profile.utility_path.display(),
                os_error::describe(&e)
            ))),
        }
    }

    fn report(&self, outcome: &ExecutionOutcome) {
        debug!("Terminal status {:?}", outcome.status);
        self.audit.record(&outcome.audit_message);
    }
}
