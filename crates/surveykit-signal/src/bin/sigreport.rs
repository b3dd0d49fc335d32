//! # sigreport
//!
//! One-shot snapshot runner: reads a `SignalSnapshot` JSON document on
//! stdin, runs the extraction engine, and writes the normalized
//! `SignalReport` JSON on stdout. Handy for exercising the engine against
//! captured host payloads without a device attached.
//!
//! ## Usage
//!
//! ```bash
//! # Run a captured snapshot through the engine
//! sigreport < snapshot.json
//!
//! # With engine debug logging
//! RUST_LOG=debug sigreport < snapshot.json
//! ```
//!
//! Exits non-zero only on malformed input JSON; degraded radio
//! conditions are in-band report values, never process failures.

use std::io::Read;

use anyhow::Context;
use surveykit_common::record::SignalSnapshot;
use surveykit_signal::extract_signal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .compact()
        .init();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading snapshot from stdin")?;

    let snapshot: SignalSnapshot =
        serde_json::from_str(&input).context("decoding snapshot JSON")?;

    let report = extract_signal(&snapshot);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
