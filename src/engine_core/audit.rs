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

//! Active-response audit log.
//!
//! One line per record, `YYYY/MM/DD HH:MM:SS <program>: <message>`, appended
//! under an exclusive advisory lock. Records are mirrored to `tracing` with
//! `target: "audit"`.

use crate::engine_core::traits::AuditSink;
use crate::utils::time;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

pub struct FileAuditLog {
    path: PathBuf,
    program: String,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            program: program.into(),
        }
    }

    fn format_line(&self, message: &str) -> String {
        format!("{} {}: {}\n", time::log_stamp(), self.program, message)
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        let result = write_all_and_flush(&file, line);
        // Unlock even if the write failed; dropping the handle would too.
        let _ = FileExt::unlock(&file);
        result
    }
}

fn write_all_and_flush(mut file: &File, line: &str) -> std::io::Result<()> {
    file.write_all(line.as_bytes())?;
    file.flush()
}

impl AuditSink for FileAuditLog {
    fn record(&self, message: &str) {
        info!(
            target: "audit",
            program = %self.program,
            "{}",
            message
        );

        let line = self.format_line(message);
        if let Err(e) = self.append(&line) {
            warn!(
                "Cannot write audit log '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}
