// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Board terminal host
//!
//! Renders the activity page as text and reads one action per line.

use activity_board::{
    config::{Config, LogFormat},
    page::{Page, PageResponse},
};
use chrono::Utc;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PROMPT: &str = "> ";

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    init_logging(config.log_format)?;
    tracing::info!(
        notice_ttl_secs = config.notice_ttl_secs,
        "Starting Activity Board"
    );

    let mut page = Page::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}\n{}", page.render(Utc::now()), PROMPT)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match page.handle_line(&line, Utc::now()) {
            PageResponse::Render(text) => write!(stdout, "{text}")?,
            PageResponse::Text(text) => writeln!(stdout, "{text}")?,
            PageResponse::Quit => break,
        }
        write!(stdout, "\n{PROMPT}")?;
        stdout.flush()?;
    }

    tracing::info!(records = page.form().store().len(), "Session ended");
    Ok(())
}

/// Initialize logging to stderr so it never interleaves with the page.
fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("activity_board=info".parse()?);

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .with_current_span(true)
                .flatten_event(true)
                .with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
        }
    }

    Ok(())
}
