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

//! Time utilities.
//!
//! Timestamps in the format the agent's active-response log uses.

use chrono::Local;

/// Local wall-clock time as `YYYY/MM/DD HH:MM:SS`.
pub fn log_stamp() -> String {
    Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}
