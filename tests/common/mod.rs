// Test doubles for the lockout pipeline collaborators.
#![allow(dead_code)]

use ar_lockout::config::Config;
use ar_lockout::engine::pipeline::LockoutExecutor;
use ar_lockout::engine_core::errors::LockoutError;
use ar_lockout::engine_core::models::ConfirmationResult;
use ar_lockout::engine_core::traits::{
    AuditSink, ConfirmationChannel, FileProbe, HostIdentity, ProcessRunner,
};
use async_trait::async_trait;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub fn command_json(action: &str, user: &str) -> String {
    json!({
        "version": 1,
        "origin": {"name": "node01", "module": "wazuh-execd"},
        "command": action,
        "parameters": {
            "extra_args": [],
            "alert": {
                "rule": {"id": "5712", "level": 10},
                "data": {"srcip": "10.0.0.5", "dstuser": user}
            },
            "program": "disable-account"
        }
    })
    .to_string()
}

pub struct StaticHost(pub Option<String>);

impl StaticHost {
    pub fn named(name: &str) -> Self {
        Self(Some(name.to_string()))
    }
}

impl HostIdentity for StaticHost {
    fn system_name(&self) -> Result<String, LockoutError> {
        self.0
            .clone()
            .ok_or_else(|| LockoutError::PlatformError("uname failed".to_string()))
    }
}

/// Every path exists unless listed as missing.
#[derive(Default)]
pub struct StubProbe {
    pub missing: Vec<PathBuf>,
}

impl FileProbe for StubProbe {
    fn probe(&self, path: &Path) -> std::io::Result<()> {
        if self.missing.iter().any(|p| p == path) {
            Err(std::io::Error::from_raw_os_error(2))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Records invocations and replies with a fixed exit code, or a launch
/// failure when `exit_code` is `None`.
#[derive(Clone)]
pub struct RecordingRunner {
    pub exit_code: Option<i32>,
    pub calls: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingRunner {
    pub fn exiting(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unlaunchable() -> Self {
        Self {
            exit_code: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, program: &Path, args: &[String]) -> std::io::Result<Option<i32>> {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });
        match self.exit_code {
            Some(code) => Ok(Some(code)),
            None => Err(std::io::Error::from_raw_os_error(13)),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryAudit {
    pub records: Arc<Mutex<Vec<String>>>,
}

impl MemoryAudit {
    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, message: &str) {
        self.records.lock().unwrap().push(message.to_string());
    }
}

/// Confirmation double answering every request with the same verdict.
pub struct FixedConfirmation {
    pub verdict: ConfirmationResult,
    pub requests: Vec<Vec<String>>,
}

impl FixedConfirmation {
    pub fn new(verdict: ConfirmationResult) -> Self {
        Self {
            verdict,
            requests: Vec::new(),
        }
    }
}

#[async_trait]
impl ConfirmationChannel for FixedConfirmation {
    async fn confirm(&mut self, keys: &[String]) -> ConfirmationResult {
        self.requests.push(keys.to_vec());
        self.verdict.clone()
    }
}

pub struct Harness {
    pub executor: LockoutExecutor,
    pub runner: RecordingRunner,
    pub audit: MemoryAudit,
}

pub fn harness(host: StaticHost, probe: StubProbe, runner: RecordingRunner) -> Harness {
    let audit = MemoryAudit::default();
    let executor = LockoutExecutor::new(
        Arc::new(Config::default()),
        Box::new(host),
        Box::new(probe),
        Box::new(runner.clone()),
        Box::new(audit.clone()),
    );
    Harness {
        executor,
        runner,
        audit,
    }
}

pub fn linux_harness() -> Harness {
    harness(
        StaticHost::named("Linux"),
        StubProbe::default(),
        RecordingRunner::exiting(0),
    )
}
