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

//! ar-lockout: active-response account lockout executor.
//!
//! This library implements the decision pipeline behind the `disable-account`
//! active response: it interprets the command sent by the host agent, guards
//! the target identity, confirms lock requests with the agent, selects the
//! platform account utility and runs it, and writes one audit record per
//! invocation.

pub mod config;
pub mod engine;
pub mod engine_core;
pub mod executor;
pub mod platform;
pub mod protocol;
pub mod utils;
