//! Comparison of all protocols under one scenario.
//!
//! Runs the estimator over the built-in protocol table, ranks the results
//! ascending by daily energy consumption, and renders a human-readable
//! report with a consumption bar panel.

use crate::estimator::{estimate, Estimate};
use crate::protocol::{builtin_protocols, Protocol, ProtocolSpec};
use crate::scenario::Scenario;

/// Width of the consumption bars in the text report.
const BAR_WIDTH: usize = 40;

/// Ranked estimation results for one scenario.
///
/// Rows are sorted ascending by daily consumption; ties keep the protocol
/// declaration order (stable sort).
#[derive(Debug, Clone)]
pub struct Comparison {
    scenario: Scenario,
    rows: Vec<Estimate>,
}

impl Comparison {
    /// Evaluate the built-in protocol table against a scenario.
    pub fn run(scenario: &Scenario) -> Self {
        Self::over(builtin_protocols(), scenario)
    }

    /// Evaluate an arbitrary protocol table against a scenario.
    pub fn over(specs: &[ProtocolSpec], scenario: &Scenario) -> Self {
        let mut rows: Vec<Estimate> = specs.iter().map(|spec| estimate(spec, scenario)).collect();
        // sort_by is stable, so equal-energy rows keep declaration order
        rows.sort_by(|a, b| a.daily_mah.total_cmp(&b.daily_mah));
        Self {
            scenario: scenario.clone(),
            rows,
        }
    }

    /// Ranked rows, lowest consumption first.
    pub fn rows(&self) -> &[Estimate] {
        &self.rows
    }

    /// Scenario these results were computed from.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Lowest-consumption row, if any protocols were evaluated.
    pub fn best(&self) -> Option<&Estimate> {
        self.rows.first()
    }

    /// Row for a specific protocol.
    pub fn get(&self, protocol: Protocol) -> Option<&Estimate> {
        self.rows.iter().find(|row| row.protocol == protocol)
    }

    /// Daily consumption for the whole fleet (per-sensor mAh x sensor count).
    pub fn fleet_daily_mah(&self, protocol: Protocol) -> Option<f64> {
        self.get(protocol)
            .map(|row| row.daily_mah * self.scenario.sensors as f64)
    }

    /// Generate a human-readable report.
    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== IoT Protocol Comparison ===\n\n");
        report.push_str(&format!(
            "Scenario: {} sensors, {} msgs/day, {} B payload, {} mAh battery, {}% overhead, rx/tx {:.2}\n\n",
            self.scenario.sensors,
            self.scenario.messages_per_day,
            self.scenario.payload_bytes,
            self.scenario.battery_mah,
            self.scenario.overhead_percent,
            self.scenario.rx_ratio,
        ));

        report.push_str(&format!(
            "{:<10} {:>14} {:>13} {:>13} {:>16}\n",
            "Protocol", "Daily (mAh)", "Latency (ms)", "Coverage (m)", "Battery (days)"
        ));
        for row in &self.rows {
            report.push_str(&format!(
                "{:<10} {:>14.4} {:>13.1} {:>13.0} {:>16}\n",
                row.protocol.name(),
                row.daily_mah,
                row.latency_ms,
                row.range_m,
                format_days(row.battery_days),
            ));
        }

        report.push_str("\nDaily consumption per sensor:\n");
        let max_mah = self
            .rows
            .iter()
            .map(|row| row.daily_mah)
            .fold(0.0_f64, f64::max);
        for row in &self.rows {
            let filled = if max_mah > 0.0 {
                ((row.daily_mah / max_mah) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            report.push_str(&format!(
                "  {:<10} |{:<width$}| {:.4}\n",
                row.protocol.name(),
                "#".repeat(filled),
                row.daily_mah,
                width = BAR_WIDTH,
            ));
        }

        if let Some(best) = self.best() {
            report.push_str(&format!(
                "\nBest: {} ({}) at {:.4} mAh/day per sensor, {:.4} mAh/day for the fleet\n",
                best.protocol.name(),
                best.notes,
                best.daily_mah,
                best.daily_mah * self.scenario.sensors as f64,
            ));
        }

        report
    }
}

fn format_days(days: f64) -> String {
    if days.is_infinite() {
        "unbounded".to_string()
    } else {
        format!("{:.1}", days)
    }
}
