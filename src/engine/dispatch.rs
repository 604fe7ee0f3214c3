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

//! Platform dispatcher.
//!
//! Unsupported hosts and missing utilities end the invocation with
//! `Success`: nothing can be done here, and the request itself is fine.
//! Only an unknowable host identity is `Invalid`.

use crate::config::Config;
use crate::engine_core::constants::audit;
use crate::engine_core::models::ExecutionOutcome;
use crate::engine_core::traits::{FileProbe, HostIdentity};
use crate::platform::profile::{HostFamily, PlatformProfile};
use crate::utils::os_error;
use tracing::{debug, warn};

pub fn select_profile(
    host: &dyn HostIdentity,
    probe: &dyn FileProbe,
    config: &Config,
) -> Result<PlatformProfile, ExecutionOutcome> {
    let system_name = host.system_name().map_err(|e| {
        warn!("{}", e);
        ExecutionOutcome::invalid(audit::NO_SYSTEM_NAME)
    })?;

    let family = match HostFamily::from_system_name(&system_name) {
        HostFamily::Supported(family) => family,
        HostFamily::Unsupported(name) => {
            debug!("No account utility known for system '{}'", name);
            return Err(ExecutionOutcome::success(audit::INVALID_SYSTEM));
        }
    };

    let profile = PlatformProfile::for_family(family, config);
    if let Err(e) = probe.probe(&profile.utility_path) {
        return Err(ExecutionOutcome::success(not_accessible(&profile, &e)));
    }

    debug!(
        "Selected {} at '{}' for {:?}",
        profile.utility.name(),
        profile.utility_path.display(),
        family
    );
    Ok(profile)
}

fn not_accessible(profile: &PlatformProfile, err: &std::io::Error) -> String {
    let errno = err.raw_os_error().unwrap_or(0);
    format!(
        "The {} file '{}' is not accessible: {} ({})",
        profile.utility.name(),
        profile.utility_path.display(),
        os_error::describe(err),
        errno
    )
}
