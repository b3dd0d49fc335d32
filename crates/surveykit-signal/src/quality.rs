//! # Signal Quality Grading
//!
//! RSSI → bars / level mappings for the application layer, using the
//! standard indoor-survey thresholds. Sentinel placeholders from the
//! report (−999, −140) fall below every threshold and grade to
//! zero bars / no-signal without special-casing.

use serde::{Deserialize, Serialize};

/// Signal bars (0–5) from an RSSI reading in dBm. A missing reading is
/// zero bars.
pub fn signal_bars(rssi: Option<i32>) -> u8 {
    let Some(rssi) = rssi else { return 0 };
    match rssi {
        r if r >= -50 => 5,
        r if r >= -60 => 4,
        r if r >= -70 => 3,
        r if r >= -80 => 2,
        r if r >= -90 => 1,
        _ => 0,
    }
}

/// Coarse quality classification for UI copy and report summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    NoSignal,
}

impl SignalLevel {
    /// Classify an RSSI reading. The level thresholds are coarser than
    /// the bar thresholds; they drive wording, not meters.
    pub fn from_rssi(rssi: Option<i32>) -> Self {
        let Some(rssi) = rssi else {
            return SignalLevel::NoSignal;
        };
        match rssi {
            r if r >= -50 => SignalLevel::Excellent,
            r if r >= -70 => SignalLevel::Good,
            r if r >= -85 => SignalLevel::Fair,
            r if r >= -100 => SignalLevel::Poor,
            _ => SignalLevel::NoSignal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalLevel::Excellent => "excellent",
            SignalLevel::Good => "good",
            SignalLevel::Fair => "fair",
            SignalLevel::Poor => "poor",
            SignalLevel::NoSignal => "no-signal",
        }
    }
}

/// Whether the signal clears the bar for a distributed-antenna install:
/// "Good" or better, i.e. 3+ bars.
pub fn is_acceptable(rssi: Option<i32>) -> bool {
    signal_bars(rssi) >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_thresholds() {
        assert_eq!(signal_bars(Some(-45)), 5);
        assert_eq!(signal_bars(Some(-50)), 5);
        assert_eq!(signal_bars(Some(-55)), 4);
        assert_eq!(signal_bars(Some(-65)), 3);
        assert_eq!(signal_bars(Some(-75)), 2);
        assert_eq!(signal_bars(Some(-85)), 1);
        assert_eq!(signal_bars(Some(-95)), 0);
        assert_eq!(signal_bars(None), 0);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(SignalLevel::from_rssi(Some(-45)), SignalLevel::Excellent);
        assert_eq!(SignalLevel::from_rssi(Some(-60)), SignalLevel::Good);
        assert_eq!(SignalLevel::from_rssi(Some(-80)), SignalLevel::Fair);
        assert_eq!(SignalLevel::from_rssi(Some(-95)), SignalLevel::Poor);
        assert_eq!(SignalLevel::from_rssi(Some(-105)), SignalLevel::NoSignal);
        assert_eq!(SignalLevel::from_rssi(None), SignalLevel::NoSignal);
    }

    #[test]
    fn sentinel_placeholders_grade_as_no_signal() {
        use surveykit_common::report::{FLOOR_RSRP, METRIC_ABSENT};

        assert_eq!(signal_bars(Some(METRIC_ABSENT)), 0);
        assert_eq!(signal_bars(Some(FLOOR_RSRP)), 0);
        assert_eq!(
            SignalLevel::from_rssi(Some(METRIC_ABSENT)),
            SignalLevel::NoSignal
        );
    }

    #[test]
    fn install_acceptance_needs_three_bars() {
        assert!(is_acceptable(Some(-65)), "3 bars passes");
        assert!(!is_acceptable(Some(-75)), "2 bars fails");
        assert!(!is_acceptable(None));
    }

    #[test]
    fn level_labels_render_kebab_case() {
        assert_eq!(SignalLevel::NoSignal.as_str(), "no-signal");
        assert_eq!(
            serde_json::to_string(&SignalLevel::NoSignal).unwrap(),
            "\"no-signal\""
        );
        assert_eq!(SignalLevel::Excellent.as_str(), "excellent");
    }
}
