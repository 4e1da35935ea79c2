//! Closed-form energy/latency estimation.
//!
//! One pure function: given a protocol's fixed parameters and a usage
//! scenario, compute daily energy, latency, coverage and battery life for
//! a single sensor. Deterministic, no side effects, safe to memoize on
//! the input pair.
//!
//! The model is deliberately first-order: airtime from bit counts, energy
//! from per-state currents, a duty-cycle inflation for regulated bands.
//! It does not model packet loss, retries, collisions or interference.

use crate::protocol::{Protocol, ProtocolSpec};
use crate::scenario::Scenario;
use serde::Serialize;

/// Hours in one accounting period.
const HOURS_PER_DAY: f64 = 24.0;

/// Estimated metrics for one protocol under one scenario.
///
/// All figures are per sensor. Recomputed fresh on every call, never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Protocol this row describes
    pub protocol: Protocol,
    /// Daily energy consumption in mAh
    pub daily_mah: f64,
    /// Time for one message to clear the radio, in ms
    pub latency_ms: f64,
    /// Nominal coverage in meters (protocol-fixed, not traffic-dependent)
    pub range_m: f64,
    /// Battery lifetime in days; `f64::INFINITY` when consumption is zero
    pub battery_days: f64,
    /// Free-text remarks carried over from the protocol spec
    pub notes: &'static str,
}

/// Estimate one protocol against one scenario.
///
/// Inputs are assumed validated (see [`Scenario::validate`]); this function
/// never fails on well-formed numbers. Zero daily consumption yields an
/// infinite battery lifetime, never a division error.
pub fn estimate(spec: &ProtocolSpec, scenario: &Scenario) -> Estimate {
    let msgs = scenario.messages_per_day as f64;

    // Effective message size: payload plus framing, with the framing
    // inflated by the header factor and truncated to whole bytes.
    let overhead_bytes = (spec.overhead_bytes as f64 * scenario.header_factor()).trunc();
    let total_bits = (scenario.payload_bytes as f64 + overhead_bytes) * 8.0;

    let mut tx_time_s = total_bits / spec.bitrate_bps;
    let rx_time_s = tx_time_s * scenario.rx_ratio;

    // Regulated bands cap the transmit fraction of wall-clock time, so
    // each message occupies a longer effective transmit window.
    if spec.duty_cycle_limit < 1.0 {
        tx_time_s /= spec.duty_cycle_limit;
    }

    let tx_hours = tx_time_s * msgs / 3600.0;
    let rx_hours = rx_time_s * msgs / 3600.0;
    // Clamp: traffic beyond a full day saturates the radio instead of
    // producing negative idle time.
    let idle_hours = (HOURS_PER_DAY - (tx_hours + rx_hours)).max(0.0);

    let daily_mah = spec.tx_current_ma * tx_hours
        + spec.rx_current_ma * rx_hours
        + spec.idle_current_ma * idle_hours;

    let latency_ms = spec.base_latency_ms + tx_time_s * 1000.0;

    let battery_days = if daily_mah > 0.0 {
        scenario.battery_mah as f64 / daily_mah
    } else {
        f64::INFINITY
    };

    Estimate {
        protocol: spec.protocol,
        daily_mah,
        latency_ms,
        range_m: spec.range_m,
        battery_days,
        notes: spec.notes,
    }
}
