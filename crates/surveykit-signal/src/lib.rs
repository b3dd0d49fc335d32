//! # surveykit-signal
//!
//! Cellular signal normalization and band-resolution engine. Takes one
//! snapshot of raw, vendor-shaped cell measurements plus the host's
//! permission state, and produces a single stable [`SignalReport`]. The
//! monitoring UI must always have *something* to render, so every
//! degraded input maps to an in-band default rather than an error.
//!
//! ## Crate structure
//!
//! - [`extractor`] — serving-cell selection and metric normalization
//! - [`band`] — EARFCN/NR-ARFCN → band label over static range tables
//! - [`quality`] — RSSI grading (bars, level, install acceptability)
//!
//! Everything here is synchronous, allocation-light, and free of shared
//! mutable state; calls may run concurrently from any number of threads.
//!
//! [`SignalReport`]: surveykit_common::report::SignalReport

pub mod band;
pub mod extractor;
pub mod quality;

pub use extractor::{extract_signal, extract_signal_at};
