//! Usage scenario definitions.
//!
//! A scenario is the set of user-chosen parameters (traffic pattern,
//! battery size, framing overhead) against which every protocol is
//! evaluated. Parameters are bounded integers; range checks happen here,
//! at the input boundary, so the estimator can assume validated inputs.

use crate::error::ScenarioError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Allowed sensor count.
pub const SENSORS_RANGE: RangeInclusive<u32> = 1..=500;
/// Allowed messages per sensor per day.
pub const MESSAGES_RANGE: RangeInclusive<u32> = 1..=500;
/// Allowed payload size in bytes.
pub const PAYLOAD_RANGE: RangeInclusive<u32> = 1..=512;
/// Allowed battery capacity in mAh.
pub const BATTERY_RANGE: RangeInclusive<u32> = 100..=10_000;
/// Allowed framing overhead in percent.
pub const OVERHEAD_RANGE: RangeInclusive<u32> = 1..=50;

/// Default receive/transmit time ratio (one downlink window per uplink).
pub const DEFAULT_RX_RATIO: f64 = 1.0;

/// A usage scenario: the inputs shared by all four protocol estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of sensors in the deployment
    pub sensors: u32,
    /// Messages per sensor per day
    pub messages_per_day: u32,
    /// Application payload per message, in bytes
    pub payload_bytes: u32,
    /// Battery capacity per sensor, in mAh
    pub battery_mah: u32,
    /// Framing overhead inflation, in percent of the protocol overhead
    pub overhead_percent: u32,
    /// Receive time per message as a fraction of transmit time
    #[serde(default = "default_rx_ratio")]
    pub rx_ratio: f64,
}

fn default_rx_ratio() -> f64 {
    DEFAULT_RX_RATIO
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            sensors: 10,
            messages_per_day: 24, // hourly reporting
            payload_bytes: 24,
            battery_mah: 2000,
            overhead_percent: 10,
            rx_ratio: DEFAULT_RX_RATIO,
        }
    }
}

impl Scenario {
    /// Create a validated scenario from the five bounded controls.
    pub fn new(
        sensors: u32,
        messages_per_day: u32,
        payload_bytes: u32,
        battery_mah: u32,
        overhead_percent: u32,
    ) -> Result<Self, ScenarioError> {
        let scenario = Self {
            sensors,
            messages_per_day,
            payload_bytes,
            battery_mah,
            overhead_percent,
            rx_ratio: DEFAULT_RX_RATIO,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Set the receive/transmit time ratio.
    pub fn with_rx_ratio(mut self, rx_ratio: f64) -> Result<Self, ScenarioError> {
        self.rx_ratio = rx_ratio;
        self.validate()?;
        Ok(self)
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        check_range("sensors", self.sensors, SENSORS_RANGE)?;
        check_range("messages_per_day", self.messages_per_day, MESSAGES_RANGE)?;
        check_range("payload_bytes", self.payload_bytes, PAYLOAD_RANGE)?;
        check_range("battery_mah", self.battery_mah, BATTERY_RANGE)?;
        check_range("overhead_percent", self.overhead_percent, OVERHEAD_RANGE)?;

        if !self.rx_ratio.is_finite() || self.rx_ratio < 0.0 {
            return Err(ScenarioError::InvalidRxRatio(self.rx_ratio));
        }
        Ok(())
    }

    /// Header factor applied to the protocol overhead bytes.
    ///
    /// `overhead_percent` inflates the protocol framing by 1-50 %,
    /// so the factor is always in [1.01, 1.50].
    pub fn header_factor(&self) -> f64 {
        1.0 + self.overhead_percent as f64 / 100.0
    }

    /// Load a scenario preset from a JSON file, validating after parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Save this scenario as a JSON preset.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ScenarioError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<(), ScenarioError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ScenarioError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
