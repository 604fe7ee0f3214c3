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

use crate::engine_core::constants::{config as keys, utilities};
use crate::engine_core::errors::LockoutError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

impl LogFormat {
    pub fn parse(s: &str) -> Result<Self, LockoutError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(LockoutError::ConfigurationError(format!(
                "{} must be 'json' or 'text', got '{}'",
                keys::ENV_LOG_FORMAT,
                s
            ))),
        }
    }

    /// Unknown values fall back to `Text`; no other setting is affected.
    pub fn parse_safe(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            eprintln!("Warning: {}, using text", e);
            LogFormat::Text
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub audit_log_path: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Tag of audit records and `origin.name` of confirmation requests
    pub program_name: String,
    pub passwd_path: PathBuf,
    pub chuser_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            audit_log_path: env::var_os(keys::ENV_AUDIT_LOG)
                .map(PathBuf::from)
                .unwrap_or(defaults.audit_log_path),
            log_level: env::var(keys::ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_format: env::var(keys::ENV_LOG_FORMAT)
                .map(|v| LogFormat::parse_safe(&v))
                .unwrap_or(defaults.log_format),
            program_name: program_name_from(env::args_os().next().as_deref().map(Path::new)),
            passwd_path: env::var_os(keys::ENV_PASSWD_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.passwd_path),
            chuser_path: env::var_os(keys::ENV_CHUSER_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.chuser_path),
        }
    }
}

/// Basename of the invoked program, as the agent names responders.
pub fn program_name_from(argv0: Option<&Path>) -> String {
    argv0
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| keys::DEFAULT_PROGRAM_NAME.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log_path: PathBuf::from(keys::DEFAULT_AUDIT_LOG),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            program_name: keys::DEFAULT_PROGRAM_NAME.to_string(),
            passwd_path: PathBuf::from(utilities::PASSWD_PATH),
            chuser_path: PathBuf::from(utilities::CHUSER_PATH),
        }
    }
}
