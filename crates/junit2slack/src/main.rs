// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junit2slack: Slack digest of failing tests for CI pipelines
//!
//! This binary reads JUnit XML reports and prints a JSON array of Slack
//! attachments describing the failing tests, ready to be posted by a webhook
//! step.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, warn};

use junit2slack::config::Config;
use junit2slack::digest::Assembler;
use junit2slack::{input, output};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr, stdout carries only the JSON payload
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to write Slack message");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let loaded = input::load(&config.files);
    for e in &loaded.errors {
        warn!(path = %e.path().display(), "{e}");
    }
    debug!(
        loaded = loaded.collections.len(),
        skipped = loaded.errors.len(),
        "Loaded JUnit reports"
    );

    let assembler = Assembler::new(config.stop_policy());
    let digest = assembler.assemble(&loaded.collections);

    for skipped in &digest.skipped {
        warn!(title = %skipped.title, reason = %skipped.reason, "Failure has no attachment");
    }
    if digest.stopped_early {
        info!(
            attachments = digest.failure_count(),
            policy = ?assembler.stop_policy(),
            "Reached the failure attachment limit"
        );
    }
    if digest.is_empty() {
        warn!("No failing tests found, Slack message is empty");
    }

    let payload = digest.into_attachments();
    let json = output::render(&payload, config.pretty).unwrap_or_else(|e| {
        error!(error = %e, "Error while serializing Slack message to JSON");
        String::new()
    });

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;

    Ok(())
}
