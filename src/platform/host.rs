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

//! Host identity via `uname(2)`.

use crate::engine_core::errors::LockoutError;
use crate::engine_core::traits::HostIdentity;

/// Reads the kernel system name of the running host.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnameHost;

impl HostIdentity for UnameHost {
    #[cfg(unix)]
    fn system_name(&self) -> Result<String, LockoutError> {
        let uts = nix::sys::utsname::uname()
            .map_err(|e| LockoutError::PlatformError(format!("uname failed: {}", e)))?;
        Ok(uts.sysname().to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn system_name(&self) -> Result<String, LockoutError> {
        Err(LockoutError::PlatformError(
            "uname is not available on this platform".to_string(),
        ))
    }
}
