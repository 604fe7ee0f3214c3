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

//! Precondition guard.
//!
//! Order matters: the target must be readable, then a lock request is
//! confirmed with the agent, then the name is checked locally. An abort from
//! the agent therefore wins over local validation.

use crate::engine_core::constants::{account, audit};
use crate::engine_core::models::{ConfirmationResult, ExecutionOutcome, TargetUser};
use crate::engine_core::traits::ConfirmationChannel;
use crate::protocol::message::{Action, Command};
use tracing::{debug, warn};

pub async fn admit(
    command: &Command,
    confirmation: &mut dyn ConfirmationChannel,
) -> Result<TargetUser, ExecutionOutcome> {
    let user = command
        .target_user()
        .ok_or_else(|| ExecutionOutcome::invalid(audit::MISSING_USER))?;

    if *command.action() == Action::Enable {
        let keys = vec![user.as_str().to_string()];
        match confirmation.confirm(&keys).await {
            ConfirmationResult::Continue => debug!("Agent confirmed keys {:?}", keys),
            ConfirmationResult::Abort => return Err(ExecutionOutcome::success(audit::ABORTED)),
            ConfirmationResult::Error(reason) => {
                warn!("Confirmation failed: {}", reason);
                return Err(ExecutionOutcome::invalid(reason));
            }
        }
    }

    check_username(&user)?;
    Ok(user)
}

/// Rejects the superuser and names the utilities would read as options.
pub fn check_username(user: &TargetUser) -> Result<(), ExecutionOutcome> {
    let name = user.as_str();
    if name == account::SUPERUSER || name.starts_with('-') {
        return Err(ExecutionOutcome::invalid(audit::INVALID_USERNAME));
    }
    Ok(())
}
