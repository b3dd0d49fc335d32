//! Raw cell measurement records, as reported by the host's radio stack.
//!
//! Record shapes differ per generation (LTE reports RSSNR, NR reports the
//! SS-prefixed metric family, legacy cells expose little beyond RSSI), so
//! each generation gets its own payload struct behind a tagged enum. Any
//! metric the stack could not read is `None`; a valid negative reading and
//! "not present" are never conflated.

use serde::{Deserialize, Serialize};

// ── Generation Tag ──────────────────────────────────────────────────

/// Radio access generation of a measured cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    Lte,
    Nr,
    Umts,
    Gsm,
    /// Reported by the stack but not classifiable (vendor extensions,
    /// future generations).
    Other,
}

impl Generation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::Lte => "lte",
            Generation::Nr => "nr",
            Generation::Umts => "umts",
            Generation::Gsm => "gsm",
            Generation::Other => "other",
        }
    }
}

// ── Per-Generation Payloads ─────────────────────────────────────────

/// One LTE cell measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LteCell {
    /// Whether this cell is currently serving the device.
    pub registered: bool,
    /// Cell Identity (CI).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<u64>,
    /// E-UTRA absolute radio frequency channel number. Absent on stacks
    /// below the capability level that reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earfcn: Option<u32>,
    /// Reference Signal Received Power in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsrp: Option<i32>,
    /// Reference Signal Received Quality in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsrq: Option<i32>,
    /// Received Signal Strength Indicator in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    /// Reference Signal SNR in dB. Maps to the report's `sinr`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssnr: Option<i32>,
}

/// One 5G NR cell measurement. NR hardware exposes no independent RSSI;
/// the SS-prefixed metrics are all there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NrCell {
    /// Whether this cell is currently serving the device.
    pub registered: bool,
    /// NR Cell Identity (NCI).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nci: Option<u64>,
    /// NR absolute radio frequency channel number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nrarfcn: Option<u32>,
    /// SS Reference Signal Received Power in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss_rsrp: Option<i32>,
    /// SS Reference Signal Received Quality in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss_rsrq: Option<i32>,
    /// SS Signal-to-Interference-plus-Noise Ratio in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss_sinr: Option<i32>,
}

/// One UMTS (3G) cell measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UmtsCell {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
}

/// One GSM (2G) cell measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GsmCell {
    pub registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
}

/// A cell the stack reported but the engine cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherCell {
    pub registered: bool,
}

// ── Tagged Record ───────────────────────────────────────────────────

/// One cell measurement, tagged by generation.
///
/// The engine switches on this tag exactly once per record; there is no
/// runtime type inspection downstream of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "generation", rename_all = "snake_case")]
pub enum CellRecord {
    Lte(LteCell),
    Nr(NrCell),
    Umts(UmtsCell),
    Gsm(GsmCell),
    Other(OtherCell),
}

impl CellRecord {
    pub fn generation(&self) -> Generation {
        match self {
            CellRecord::Lte(_) => Generation::Lte,
            CellRecord::Nr(_) => Generation::Nr,
            CellRecord::Umts(_) => Generation::Umts,
            CellRecord::Gsm(_) => Generation::Gsm,
            CellRecord::Other(_) => Generation::Other,
        }
    }

    /// Whether this cell is currently serving the device. Unregistered
    /// records are never selected for the report.
    pub fn registered(&self) -> bool {
        match self {
            CellRecord::Lte(c) => c.registered,
            CellRecord::Nr(c) => c.registered,
            CellRecord::Umts(c) => c.registered,
            CellRecord::Gsm(c) => c.registered,
            CellRecord::Other(c) => c.registered,
        }
    }
}

// ── Location Fix ────────────────────────────────────────────────────

/// Best-effort geolocation context accompanying a snapshot. Not validated
/// against the cell data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in metres.
    pub accuracy: f64,
    /// Altitude above the WGS 84 ellipsoid in metres.
    pub altitude: f64,
}

// ── Snapshot Envelope ───────────────────────────────────────────────

/// Everything the host supplies for one engine invocation.
///
/// One snapshot, not a stream; retry cadence is the host's business.
/// Every field defaults to its absent form so a host can ship a partial
/// envelope; an empty snapshot degrades to a permission-denied report
/// (permission is never assumed).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalSnapshot {
    /// Whether the host's permission flow granted radio/location access.
    #[serde(default)]
    pub permission_granted: bool,
    /// Raw measurement list as currently available from the radio stack.
    #[serde(default)]
    pub records: Vec<CellRecord>,
    /// Operator name from the host's network-identity source. May be
    /// empty or padded; the engine normalizes it.
    #[serde(default)]
    pub carrier_hint: String,
    /// Last known location fix, if the host has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFix>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lte_record_roundtrips_with_generation_tag() {
        let record = CellRecord::Lte(LteCell {
            registered: true,
            ci: Some(456),
            earfcn: Some(300),
            rsrp: Some(-95),
            rsrq: Some(-9),
            rssi: Some(-63),
            rssnr: Some(8),
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["generation"], "lte");
        assert_eq!(json["rsrp"], -95);

        let back: CellRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn absent_metrics_deserialize_as_none() {
        let record: CellRecord = serde_json::from_str(
            r#"{"generation": "nr", "registered": true, "nrarfcn": 431000}"#,
        )
        .unwrap();

        let CellRecord::Nr(cell) = record else {
            panic!("expected an NR record, got {record:?}");
        };
        assert_eq!(cell.nrarfcn, Some(431000));
        assert_eq!(cell.ss_rsrp, None);
        assert_eq!(cell.ss_sinr, None);
    }

    #[test]
    fn absent_metrics_are_not_serialized() {
        let record = CellRecord::Umts(UmtsCell {
            registered: false,
            cid: None,
            rssi: Some(-80),
        });
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("cid"), "None fields should be omitted: {json}");
        assert!(json.contains("\"rssi\":-80"));
    }

    #[test]
    fn unrecognized_generation_tag_is_rejected() {
        let result = serde_json::from_str::<CellRecord>(
            r#"{"generation": "cdma", "registered": true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_snapshot_never_assumes_permission() {
        let snapshot: SignalSnapshot = serde_json::from_str("{}").unwrap();
        assert!(!snapshot.permission_granted);
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.carrier_hint, "");
        assert_eq!(snapshot.location, None);
    }

    #[test]
    fn location_fix_defaults_to_zeroed() {
        let fix = LocationFix::default();
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        assert_eq!(fix.accuracy, 0.0);
        assert_eq!(fix.altitude, 0.0);
    }
}
