//! End-to-end snapshot → report pipeline over the JSON seam.
//!
//! Exercises the same path a host takes: a raw snapshot document is
//! decoded, run through the extractor, and the report is re-encoded for
//! the application layer. Assertions are against the serialized form;
//! the wire labels are the contract.

use surveykit_common::record::SignalSnapshot;
use surveykit_common::report::SignalReport;
use surveykit_signal::extract_signal_at;

const NOW_MS: i64 = 1_700_000_000_000;

fn run(snapshot_json: &str) -> serde_json::Value {
    let snapshot: SignalSnapshot =
        serde_json::from_str(snapshot_json).expect("snapshot JSON should decode");
    let report = extract_signal_at(&snapshot, NOW_MS);
    serde_json::to_value(&report).expect("report should encode")
}

#[test]
fn nr_snapshot_round_trips_to_a_5g_report() {
    let json = run(r#"{
        "permission_granted": true,
        "carrier_hint": "  Vertigo Wireless ",
        "records": [
            {"generation": "nr", "registered": false, "nci": 9, "nrarfcn": 630000,
             "ss_rsrp": -70, "ss_rsrq": -8, "ss_sinr": 20},
            {"generation": "nr", "registered": true, "nci": 123, "nrarfcn": 431000,
             "ss_rsrp": -85, "ss_rsrq": -10, "ss_sinr": 15}
        ],
        "location": {"latitude": 40.7589, "longitude": -73.9851,
                     "accuracy": 12.5, "altitude": 31.0}
    }"#);

    assert_eq!(json["network_type"], "5G");
    assert_eq!(json["carrier_name"], "Vertigo Wireless");
    assert_eq!(json["rsrp"], -85);
    assert_eq!(json["rssi"], -85);
    assert_eq!(json["sinr"], 15);
    assert_eq!(json["cell_id"], "123");
    assert_eq!(json["band"], "n1");
    assert_eq!(json["channel_number"], 431000);
    assert_eq!(json["location"]["latitude"], 40.7589);
    assert_eq!(json["timestamp_ms"], NOW_MS);
}

#[test]
fn lte_snapshot_round_trips_to_an_lte_report() {
    let json = run(r#"{
        "permission_granted": true,
        "carrier_hint": "FieldNet",
        "records": [
            {"generation": "lte", "registered": true, "ci": 456, "earfcn": 300,
             "rsrp": -95, "rsrq": -9, "rssi": -63, "rssnr": 8}
        ]
    }"#);

    assert_eq!(json["network_type"], "LTE");
    assert_eq!(json["band"], "B1");
    assert_eq!(json["sinr"], 8);
    assert_eq!(json["cell_id"], "456");
    // No fix in the snapshot: all four location fields zero-fill.
    assert_eq!(json["location"]["latitude"], 0.0);
    assert_eq!(json["location"]["longitude"], 0.0);
    assert_eq!(json["location"]["accuracy"], 0.0);
    assert_eq!(json["location"]["altitude"], 0.0);
}

#[test]
fn permission_denied_renders_the_no_permission_label() {
    let json = run(r#"{
        "permission_granted": false,
        "records": [
            {"generation": "lte", "registered": true, "ci": 456, "earfcn": 300,
             "rsrp": -95, "rsrq": -9, "rssi": -63, "rssnr": 8}
        ]
    }"#);

    assert_eq!(json["network_type"], "NO PERMISSION");
    assert_eq!(json["rsrp"], -140);
    assert_eq!(json["rsrq"], -20);
    assert_eq!(json["sinr"], -10);
    assert_eq!(json["carrier_name"], "Unknown");
    assert_eq!(json["band"], "N/A");
}

#[test]
fn empty_document_degrades_without_permission() {
    // A host that ships an empty envelope gets the permission-denied
    // report; access is never assumed.
    let json = run("{}");
    assert_eq!(json["network_type"], "NO PERMISSION");
}

#[test]
fn granted_but_quiet_radio_reports_searching() {
    let json = run(r#"{"permission_granted": true, "carrier_hint": "FieldNet"}"#);

    assert_eq!(json["network_type"], "Searching");
    assert_eq!(json["rsrp"], -140);
    assert_eq!(json["cell_id"], "N/A");
    assert_eq!(json["band"], "N/A");
    assert_eq!(json["carrier_name"], "FieldNet");
}

#[test]
fn report_json_parses_back_into_the_report_type() {
    let json = run(r#"{
        "permission_granted": true,
        "records": [
            {"generation": "nr", "registered": true, "nci": 123, "nrarfcn": 392000,
             "ss_rsrp": -85, "ss_rsrq": -10, "ss_sinr": 15}
        ]
    }"#);

    // 392000 sits in overlapping NR spectrum; declaration order picks n2.
    assert_eq!(json["band"], "n2");

    let report: SignalReport =
        serde_json::from_value(json).expect("report JSON should decode back");
    assert_eq!(report.band, "n2");
    assert_eq!(report.carrier_name, "Unknown");
}
