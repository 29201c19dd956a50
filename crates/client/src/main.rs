//! `busters` binary.
//!
//! Reads the referee protocol on stdin and answers on stdout. Logs never go
//! to stdout.
//!
//! ```bash
//! BUSTERS_LOG=buster_core=debug BUSTERS_SEED=7 busters < match.txt
//! ```

use std::io::{self, BufWriter};

use anyhow::Result;
use buster_client::{ClientConfig, logging, session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!(seed = ?config.seed, "Starting busters");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let summary = session::run(stdin, stdout, &config)?;

    tracing::info!(
        turns = summary.turns,
        captured = summary.captured,
        "Session finished"
    );
    Ok(())
}
