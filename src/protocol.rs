//! Protocol definitions for Radiorank
//!
//! This module defines the four built-in wireless protocols and their
//! fixed electrical/radio parameters:
//! - Bit rate and currents (tx / rx / idle)
//! - Nominal range
//! - Per-message framing overhead
//! - Base latency and regulatory duty-cycle limit
//!
//! The built-in table is immutable, defined once, and shared process-wide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The wireless protocols covered by the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// IEEE 802.11 station, always-on access point association
    #[serde(rename = "WiFi")]
    WiFi,
    /// IEEE 802.15.4 mesh
    Zigbee,
    /// LoRa with LoRaWAN MAC, EU868-style duty-cycle restriction
    #[serde(rename = "LoRaWAN")]
    LoRaWan,
    /// LTE Cat-NB1 cellular
    #[serde(rename = "NB-IoT")]
    NbIot,
}

impl Protocol {
    /// All protocols in declaration order (also the ranking tie-break order).
    pub const ALL: [Protocol; 4] = [
        Protocol::WiFi,
        Protocol::Zigbee,
        Protocol::LoRaWan,
        Protocol::NbIot,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::WiFi => "WiFi",
            Protocol::Zigbee => "Zigbee",
            Protocol::LoRaWan => "LoRaWAN",
            Protocol::NbIot => "NB-IoT",
        }
    }

    /// Parse from a canonical display name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "WiFi" => Some(Protocol::WiFi),
            "Zigbee" => Some(Protocol::Zigbee),
            "LoRaWAN" => Some(Protocol::LoRaWan),
            "NB-IoT" => Some(Protocol::NbIot),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed electrical/radio parameters for one protocol.
///
/// Values are datasheet-level figures for a typical end node, good enough
/// for order-of-magnitude comparison, not link budgeting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolSpec {
    /// Which protocol this record describes
    pub protocol: Protocol,
    /// Physical bit rate in bits/second
    pub bitrate_bps: f64,
    /// Transmit current in mA
    pub tx_current_ma: f64,
    /// Receive current in mA
    pub rx_current_ma: f64,
    /// Idle/sleep current in mA
    pub idle_current_ma: f64,
    /// Nominal range in meters
    pub range_m: f64,
    /// Per-message framing overhead in bytes
    pub overhead_bytes: u32,
    /// Fixed processing/propagation delay in ms, independent of payload
    pub base_latency_ms: f64,
    /// Regulatory airtime cap as a fraction in (0, 1]; 1.0 = unrestricted
    pub duty_cycle_limit: f64,
    /// Free-text remarks
    pub notes: &'static str,
}

/// The built-in protocol table. Declaration order is the ranking tie-break.
static BUILTIN: [ProtocolSpec; 4] = [
    ProtocolSpec {
        protocol: Protocol::WiFi,
        bitrate_bps: 10e6,
        tx_current_ma: 180.0,
        rx_current_ma: 50.0,
        idle_current_ma: 5.0,
        range_m: 30.0,
        overhead_bytes: 80,
        base_latency_ms: 50.0,
        duty_cycle_limit: 1.0,
        notes: "high throughput",
    },
    ProtocolSpec {
        protocol: Protocol::Zigbee,
        bitrate_bps: 250e3,
        tx_current_ma: 35.0,
        rx_current_ma: 19.0,
        idle_current_ma: 0.3,
        range_m: 100.0,
        overhead_bytes: 25,
        base_latency_ms: 100.0,
        duty_cycle_limit: 1.0,
        notes: "mesh, low power",
    },
    ProtocolSpec {
        protocol: Protocol::LoRaWan,
        bitrate_bps: 5e3,
        tx_current_ma: 45.0,
        rx_current_ma: 12.0,
        idle_current_ma: 0.01,
        range_m: 15000.0,
        overhead_bytes: 20,
        base_latency_ms: 800.0,
        duty_cycle_limit: 0.01,
        notes: "long range, low bitrate",
    },
    ProtocolSpec {
        protocol: Protocol::NbIot,
        bitrate_bps: 26e3,
        tx_current_ma: 220.0,
        rx_current_ma: 30.0,
        idle_current_ma: 0.05,
        range_m: 10000.0,
        overhead_bytes: 30,
        base_latency_ms: 200.0,
        duty_cycle_limit: 1.0,
        notes: "cellular coverage",
    },
];

/// Built-in protocol table, in declaration order.
pub fn builtin_protocols() -> &'static [ProtocolSpec] {
    &BUILTIN
}

/// Look up the built-in spec for one protocol.
pub fn builtin_spec(protocol: Protocol) -> &'static ProtocolSpec {
    // BUILTIN covers every Protocol variant exactly once.
    BUILTIN
        .iter()
        .find(|spec| spec.protocol == protocol)
        .unwrap()
}
