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

//! Platform profiles.
//!
//! Which account utility locks or unlocks a user on each supported OS
//! family, and how it is called. The mapping lives in [`PROFILE_TABLE`];
//! supporting another family means adding a row there.

use crate::config::Config;
use std::path::PathBuf;

/// Supported operating system families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Linux,
    SunOs,
    Aix,
}

/// Result of resolving a kernel system name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostFamily {
    Supported(OsFamily),
    Unsupported(String),
}

impl HostFamily {
    /// Exact, case-sensitive match on the `uname -s` value.
    pub fn from_system_name(name: &str) -> Self {
        PROFILE_TABLE
            .iter()
            .find(|row| row.system_name == name)
            .map(|row| HostFamily::Supported(row.family))
            .unwrap_or_else(|| HostFamily::Unsupported(name.to_string()))
    }
}

/// Lock state change requested of the utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Lock,
    Unlock,
}

/// Account utilities the profiles dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    /// Password database utility
    Passwd,
    /// User attribute utility
    Chuser,
}

impl Utility {
    pub fn name(self) -> &'static str {
        match self {
            Utility::Passwd => "passwd",
            Utility::Chuser => "chuser",
        }
    }

    /// Install path, honouring configuration overrides.
    pub fn path(self, config: &Config) -> PathBuf {
        match self {
            Utility::Passwd => config.passwd_path.clone(),
            Utility::Chuser => config.chuser_path.clone(),
        }
    }
}

struct ProfileRow {
    system_name: &'static str,
    family: OsFamily,
    utility: Utility,
    enable_args: &'static [&'static str],
    disable_args: &'static [&'static str],
}

const PROFILE_TABLE: &[ProfileRow] = &[
    ProfileRow {
        system_name: "Linux",
        family: OsFamily::Linux,
        utility: Utility::Passwd,
        enable_args: &["-l"],
        disable_args: &["-u"],
    },
    ProfileRow {
        system_name: "SunOS",
        family: OsFamily::SunOs,
        utility: Utility::Passwd,
        enable_args: &["-l"],
        disable_args: &["-u"],
    },
    ProfileRow {
        system_name: "AIX",
        family: OsFamily::Aix,
        utility: Utility::Chuser,
        enable_args: &["account_locked=true"],
        disable_args: &["account_locked=false"],
    },
];

/// Utility and argument convention selected for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub family: OsFamily,
    pub utility: Utility,
    pub utility_path: PathBuf,
    pub enable_args: Vec<String>,
    pub disable_args: Vec<String>,
}

impl PlatformProfile {
    pub fn for_family(family: OsFamily, config: &Config) -> Self {
        // Every OsFamily variant has a row.
        let row = PROFILE_TABLE
            .iter()
            .find(|row| row.family == family)
            .unwrap_or(&PROFILE_TABLE[0]);

        Self {
            family,
            utility: row.utility,
            utility_path: row.utility.path(config),
            enable_args: row.enable_args.iter().map(|s| s.to_string()).collect(),
            disable_args: row.disable_args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Argument vector: the mutation flag followed by the username.
    pub fn command_args(&self, mutation: Mutation, username: &str) -> Vec<String> {
        let flags = match mutation {
            Mutation::Lock => &self.enable_args,
            Mutation::Unlock => &self.disable_args,
        };
        let mut args = flags.clone();
        args.push(username.to_string());
        args
    }
}
