// Radiorank - Integration Tests
//
// This file contains integration tests for the radiorank library.
// The tests are organized into categories:
// 1. Estimation model properties
// 2. Ranking
// 3. CSV export
// 4. Presets and notes

use radiorank::{
    builtin_spec, read_csv, write_csv, Comparison, NoteStore, Protocol, ProtocolSpec, Scenario,
};
use tempfile::{tempdir, NamedTempFile};

// ============================================================================
// Estimation Model Properties
// ============================================================================

#[test]
fn test_consumption_non_negative_across_parameter_grid() {
    for messages in [1, 100, 500] {
        for payload in [1, 512] {
            for battery in [100, 10_000] {
                for overhead in [1, 50] {
                    let scenario = Scenario::new(1, messages, payload, battery, overhead).unwrap();
                    let comparison = Comparison::run(&scenario);

                    assert_eq!(comparison.rows().len(), 4);
                    for row in comparison.rows() {
                        assert!(
                            row.daily_mah >= 0.0,
                            "{} went negative at msgs={} payload={}",
                            row.protocol,
                            messages,
                            payload
                        );
                        assert!(row.battery_days > 0.0);
                        assert!(row.latency_ms > 0.0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_determinism_bit_identical() {
    let scenario = Scenario::new(42, 96, 48, 3400, 20).unwrap();

    let first = Comparison::run(&scenario);
    let second = Comparison::run(&scenario);

    for (a, b) in first.rows().iter().zip(second.rows()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_doubling_traffic_never_helps() {
    let base = Scenario::new(10, 100, 64, 2000, 10).unwrap();
    let doubled = Scenario::new(10, 200, 64, 2000, 10).unwrap();

    let before = Comparison::run(&base);
    let after = Comparison::run(&doubled);

    for protocol in Protocol::ALL {
        let a = before.get(protocol).unwrap();
        let b = after.get(protocol).unwrap();

        assert!(
            b.daily_mah >= a.daily_mah,
            "{}: consumption dropped when traffic doubled",
            protocol
        );
        assert!(
            b.battery_days <= a.battery_days,
            "{}: battery life grew when traffic doubled",
            protocol
        );
    }
}

#[test]
fn test_boundary_scenario() {
    // Smallest allowed everything: 1 sensor, 1 msg/day, 1 byte, 100 mAh, 1%.
    let scenario = Scenario::new(1, 1, 1, 100, 1).unwrap();
    let comparison = Comparison::run(&scenario);

    for row in comparison.rows() {
        assert!(row.daily_mah.is_finite());
        assert!(row.daily_mah > 0.0);
    }

    // Coverage is protocol-fixed, not traffic-dependent.
    let lora = comparison.get(Protocol::LoRaWan).unwrap();
    assert_eq!(lora.range_m, 15000.0);
}

#[test]
fn test_zero_consumption_sentinel() {
    let dead_radio = ProtocolSpec {
        tx_current_ma: 0.0,
        rx_current_ma: 0.0,
        idle_current_ma: 0.0,
        ..builtin_spec(Protocol::Zigbee).clone()
    };

    let comparison = Comparison::over(&[dead_radio], &Scenario::default());
    let row = &comparison.rows()[0];

    assert_eq!(row.daily_mah, 0.0);
    assert!(row.battery_days.is_infinite());
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_rows_sorted_ascending_by_consumption() {
    for messages in [1, 50, 500] {
        let scenario = Scenario::new(10, messages, 24, 2000, 10).unwrap();
        let comparison = Comparison::run(&scenario);

        for pair in comparison.rows().windows(2) {
            assert!(pair[0].daily_mah <= pair[1].daily_mah);
        }
    }
}

#[test]
fn test_low_traffic_favors_low_idle_current() {
    // One tiny message per day: airtime is negligible, idle current
    // dominates, so LoRaWAN (10 uA idle) must win and WiFi (5 mA) lose.
    let scenario = Scenario::new(1, 1, 1, 2000, 1).unwrap();
    let comparison = Comparison::run(&scenario);

    assert_eq!(comparison.best().unwrap().protocol, Protocol::LoRaWan);
    assert_eq!(comparison.rows()[3].protocol, Protocol::WiFi);
}

// ============================================================================
// CSV Export
// ============================================================================

#[test]
fn test_csv_roundtrip_preserves_rows() {
    let scenario = Scenario::new(25, 144, 100, 5000, 30).unwrap();
    let comparison = Comparison::run(&scenario);

    let temp = NamedTempFile::new().unwrap();
    write_csv(&comparison, temp.path()).unwrap();
    let rows = read_csv(temp.path()).unwrap();

    assert_eq!(rows.len(), comparison.rows().len());
    for (row, original) in rows.iter().zip(comparison.rows()) {
        assert_eq!(row.protocol(), Some(original.protocol));
        assert_eq!(row.daily_mah, original.daily_mah);
        assert_eq!(row.latency_ms, original.latency_ms);
        assert_eq!(row.range_m, original.range_m);
        assert_eq!(row.battery_days, original.battery_days);
    }
}

#[test]
fn test_csv_rows_in_ranked_order() {
    let comparison = Comparison::run(&Scenario::default());

    let temp = NamedTempFile::new().unwrap();
    write_csv(&comparison, temp.path()).unwrap();
    let rows = read_csv(temp.path()).unwrap();

    for pair in rows.windows(2) {
        assert!(pair[0].daily_mah <= pair[1].daily_mah);
    }
}

// ============================================================================
// Presets and Notes
// ============================================================================

#[test]
fn test_scenario_preset_roundtrip_drives_same_comparison() {
    let scenario = Scenario::new(7, 12, 200, 1500, 5).unwrap();

    let temp = NamedTempFile::new().unwrap();
    scenario.to_json_file(temp.path()).unwrap();
    let loaded = Scenario::from_json_file(temp.path()).unwrap();

    let original = Comparison::run(&scenario);
    let reloaded = Comparison::run(&loaded);
    for (a, b) in original.rows().iter().zip(reloaded.rows()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_note_saved_next_to_exported_table() {
    let dir = tempdir().unwrap();
    let comparison = Comparison::run(&Scenario::default());

    write_csv(&comparison, dir.path().join("protocol_comparison.csv")).unwrap();

    let store = NoteStore::new(dir.path());
    store
        .save("Chose Zigbee: indoor deployment, 80 m max hop, mains-powered routers")
        .unwrap();

    let note = store.load().unwrap().unwrap();
    assert!(note.contains("Zigbee"));
    assert!(dir.path().join("justification.txt").exists());
}
