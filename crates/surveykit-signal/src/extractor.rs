//! # Signal Extraction
//!
//! Selects the registered serving cell out of a raw measurement snapshot
//! and normalizes its metrics into one [`SignalReport`].
//!
//! This is a total function. Permission denial, an empty record list, or
//! a serving cell with half its metrics missing all degrade to an in-band
//! default report. The caller distinguishes the degradation classes by
//! `network_type`, not by metric magnitude:
//!
//! | Condition                  | `network_type`    | Metric family        |
//! |----------------------------|-------------------|----------------------|
//! | Permission not granted     | `"NO PERMISSION"` | floor (−140/−20/−10) |
//! | No registered cell         | `"Searching"`     | floor (−140/−20/−10) |
//! | Serving cell, metric absent| per generation    | −999 for that metric |

use surveykit_common::record::{CellRecord, Generation, LteCell, NrCell, SignalSnapshot};
use surveykit_common::report::{
    CELL_ID_NONE, FLOOR_RSRP, FLOOR_RSRQ, FLOOR_SINR, METRIC_ABSENT, NetworkType, SignalReport,
};

use crate::band::{BandLabel, resolve_band};

/// Extract a normalized report from one snapshot, stamped with the
/// current wall clock.
pub fn extract_signal(snapshot: &SignalSnapshot) -> SignalReport {
    extract_signal_at(snapshot, chrono::Utc::now().timestamp_millis())
}

/// Extract a normalized report with a caller-supplied capture time.
///
/// With a fixed `now_ms`, identical snapshots produce identical reports.
pub fn extract_signal_at(snapshot: &SignalSnapshot, now_ms: i64) -> SignalReport {
    let carrier_name = normalize_carrier(&snapshot.carrier_hint);
    let location = snapshot.location.unwrap_or_default();

    let serving = if !snapshot.permission_granted {
        ServingMetrics::floor(NetworkType::NoPermission)
    } else if let Some(record) = select_serving(&snapshot.records) {
        let m = normalize(record);
        tracing::debug!(
            network = %m.network_type,
            rsrp = m.rsrp,
            band = %m.band,
            cell_id = %m.cell_id,
            "serving cell selected"
        );
        m
    } else {
        tracing::warn!(
            records = snapshot.records.len(),
            "no registered cell in snapshot"
        );
        ServingMetrics::floor(NetworkType::Searching)
    };

    SignalReport {
        carrier_name,
        network_type: serving.network_type,
        rsrp: serving.rsrp,
        rsrq: serving.rsrq,
        rssi: serving.rssi,
        sinr: serving.sinr,
        cell_id: serving.cell_id,
        band: serving.band.to_string(),
        channel_number: serving.channel_number,
        location,
        timestamp_ms: now_ms,
    }
}

// ── Serving-Cell Selection ──────────────────────────────────────────

/// First record flagged as registered, in input order.
///
/// The radio stack reports at most one truly registered cell; scanning
/// in input order keeps the tie-break deterministic if it ever reports
/// more. Unregistered records are never candidates.
fn select_serving(records: &[CellRecord]) -> Option<&CellRecord> {
    records.iter().find(|r| r.registered())
}

// ── Normalization ───────────────────────────────────────────────────

/// The report fields a serving cell contributes, before the snapshot-wide
/// context (carrier, location, timestamp) is attached.
struct ServingMetrics {
    network_type: NetworkType,
    rsrp: i32,
    rsrq: i32,
    rssi: i32,
    sinr: i32,
    cell_id: String,
    band: BandLabel,
    channel_number: u32,
}

impl ServingMetrics {
    /// Whole-report defaults for the no-serving-cell conditions.
    fn floor(network_type: NetworkType) -> Self {
        ServingMetrics {
            network_type,
            rsrp: FLOOR_RSRP,
            rsrq: FLOOR_RSRQ,
            rssi: METRIC_ABSENT,
            sinr: FLOOR_SINR,
            cell_id: CELL_ID_NONE.to_string(),
            band: BandLabel::Unavailable,
            channel_number: 0,
        }
    }
}

fn normalize(record: &CellRecord) -> ServingMetrics {
    match record {
        CellRecord::Nr(cell) => normalize_nr(cell),
        CellRecord::Lte(cell) => normalize_lte(cell),
        CellRecord::Umts(cell) => {
            normalize_legacy(NetworkType::ThreeG, cell.cid, cell.rssi)
        }
        CellRecord::Gsm(cell) => {
            normalize_legacy(NetworkType::TwoG, cell.cid, cell.rssi)
        }
        CellRecord::Other(_) => ServingMetrics {
            network_type: NetworkType::Unknown,
            rsrp: METRIC_ABSENT,
            rsrq: METRIC_ABSENT,
            rssi: METRIC_ABSENT,
            sinr: METRIC_ABSENT,
            cell_id: CELL_ID_NONE.to_string(),
            band: BandLabel::Unavailable,
            channel_number: 0,
        },
    }
}

fn normalize_nr(cell: &NrCell) -> ServingMetrics {
    let rsrp = cell.ss_rsrp.unwrap_or(METRIC_ABSENT);
    ServingMetrics {
        network_type: NetworkType::FiveG,
        rsrp,
        rsrq: cell.ss_rsrq.unwrap_or(METRIC_ABSENT),
        // NR hardware exposes no independent RSSI; mirror SS-RSRP.
        rssi: rsrp,
        sinr: cell.ss_sinr.unwrap_or(METRIC_ABSENT),
        cell_id: cell_id_string(cell.nci),
        band: resolve_band(Generation::Nr, cell.nrarfcn),
        channel_number: cell.nrarfcn.unwrap_or(0),
    }
}

fn normalize_lte(cell: &LteCell) -> ServingMetrics {
    ServingMetrics {
        network_type: NetworkType::Lte,
        rsrp: cell.rsrp.unwrap_or(METRIC_ABSENT),
        rsrq: cell.rsrq.unwrap_or(METRIC_ABSENT),
        rssi: cell.rssi.unwrap_or(METRIC_ABSENT),
        sinr: cell.rssnr.unwrap_or(METRIC_ABSENT),
        cell_id: cell_id_string(cell.ci),
        band: resolve_band(Generation::Lte, cell.earfcn),
        channel_number: cell.earfcn.unwrap_or(0),
    }
}

/// UMTS/GSM cells expose little beyond an RSSI-class reading and a cell
/// id; everything else takes the per-metric placeholder.
fn normalize_legacy(
    network_type: NetworkType,
    cid: Option<u64>,
    rssi: Option<i32>,
) -> ServingMetrics {
    ServingMetrics {
        network_type,
        rsrp: METRIC_ABSENT,
        rsrq: METRIC_ABSENT,
        rssi: rssi.unwrap_or(METRIC_ABSENT),
        sinr: METRIC_ABSENT,
        cell_id: cell_id_string(cid),
        band: BandLabel::Unavailable,
        channel_number: 0,
    }
}

fn cell_id_string(id: Option<u64>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => CELL_ID_NONE.to_string(),
    }
}

/// Carrier name from the host's hint: trimmed, `"Unknown"` when empty.
/// Applied on every path, including permission denial.
fn normalize_carrier(hint: &str) -> String {
    let trimmed = hint.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
