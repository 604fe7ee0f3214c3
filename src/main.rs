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

// Main entry point for the disable-account active response
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

use ar_lockout::config::{Config, LogFormat};
use ar_lockout::engine::pipeline::LockoutExecutor;
use ar_lockout::protocol::transport::ArTransport;

/// Locks (`add`) or unlocks (`delete`) the local account named in the
/// alert read from stdin.
#[derive(Parser, Debug)]
#[command(name = "disable-account", version, about, long_about = None)]
struct Cli {
    /// Active-response log to append the audit record to
    #[arg(long)]
    audit_log: Option<PathBuf>,

    /// Name tagging audit records and confirmation requests
    #[arg(long)]
    program_name: Option<String>,

    /// Tracing filter (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Install panic hook
    install_panic_hook();

    let mut config = Config::from_env();

    if let Some(path) = cli.audit_log {
        config.audit_log_path = path;
    }
    if let Some(name) = cli.program_name {
        config.program_name = name;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to init tracing: {}", e);
    }

    let config = Arc::new(config);
    let mut transport = ArTransport::stdio(config.program_name.clone());
    let executor = LockoutExecutor::system(config);

    let command = transport.read_command().await;
    let outcome = executor.execute(&command, &mut transport).await;

    debug!("{:?}", outcome);
    outcome.status.into()
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("PANIC: {} at {}", message, location);
    }));
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the confirmation exchange; logs go to stderr.
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let result = match config.log_format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Text => subscriber.try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("{}", e))
}
