//! The canonical, application-facing signal report.
//!
//! One report per engine call, fully immutable once returned. Every
//! degraded input condition maps to in-band values here; there is no
//! error channel across this seam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::LocationFix;

// ── Sentinel Defaults ───────────────────────────────────────────────
//
// Two historical default families, keyed to the *reason* a value is
// missing. Callers must branch on `network_type`/`cell_id` to tell a
// default from a real reading, never on magnitude alone.

/// "Obviously invalid" placeholder for a single metric the radio stack
/// did not report on an otherwise-selected serving cell.
pub const METRIC_ABSENT: i32 = -999;

/// RSRP floor reported when no serving cell is available at all
/// (still searching, or permission denied).
pub const FLOOR_RSRP: i32 = -140;
/// RSRQ floor for the no-serving-cell report.
pub const FLOOR_RSRQ: i32 = -20;
/// SINR floor for the no-serving-cell report.
pub const FLOOR_SINR: i32 = -10;

/// Cell identifier placeholder when no serving cell was selected or the
/// stack withheld the identity.
pub const CELL_ID_NONE: &str = "N/A";

// ── Network Type ────────────────────────────────────────────────────

/// Network generation label, as rendered to the application layer.
///
/// `NoPermission` and `Searching` are deliberate out-of-band members:
/// they tell the caller *why* the metrics are defaults (a permission
/// problem vs. a radio problem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    #[serde(rename = "5G")]
    FiveG,
    #[serde(rename = "LTE")]
    Lte,
    #[serde(rename = "3G")]
    ThreeG,
    #[serde(rename = "2G")]
    TwoG,
    Unknown,
    #[serde(rename = "NO PERMISSION")]
    NoPermission,
    Searching,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::FiveG => write!(f, "5G"),
            NetworkType::Lte => write!(f, "LTE"),
            NetworkType::ThreeG => write!(f, "3G"),
            NetworkType::TwoG => write!(f, "2G"),
            NetworkType::Unknown => write!(f, "Unknown"),
            NetworkType::NoPermission => write!(f, "NO PERMISSION"),
            NetworkType::Searching => write!(f, "Searching"),
        }
    }
}

/// A network-type label outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network type: {0}")]
pub struct UnknownNetworkType(pub String);

impl FromStr for NetworkType {
    type Err = UnknownNetworkType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5G" => Ok(NetworkType::FiveG),
            "LTE" => Ok(NetworkType::Lte),
            "3G" => Ok(NetworkType::ThreeG),
            "2G" => Ok(NetworkType::TwoG),
            "Unknown" => Ok(NetworkType::Unknown),
            "NO PERMISSION" => Ok(NetworkType::NoPermission),
            "Searching" => Ok(NetworkType::Searching),
            other => Err(UnknownNetworkType(other.to_string())),
        }
    }
}

// ── Signal Report ───────────────────────────────────────────────────

/// Normalized signal-quality report for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Operator name. Never empty — `"Unknown"` when the host had none.
    pub carrier_name: String,
    pub network_type: NetworkType,
    /// dBm. Sentinel families per the module constants.
    pub rsrp: i32,
    /// dB.
    pub rsrq: i32,
    /// dBm. On NR cells this mirrors RSRP; the hardware exposes no
    /// independent RSSI.
    pub rssi: i32,
    /// dB.
    pub sinr: i32,
    /// Decimal CI/NCI, or `"N/A"`.
    pub cell_id: String,
    /// Resolved band label: `"B7"`, `"n41"`, `"Unknown"` (channel known,
    /// no range matched) or `"N/A"` (no channel number to resolve).
    pub band: String,
    /// EARFCN/NR-ARFCN of the serving cell, `0` when unavailable.
    pub channel_number: u32,
    /// Location fix, zero-filled when the host had none.
    pub location: LocationFix,
    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}
