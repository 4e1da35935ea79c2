//! Protocol comparison walkthrough
//!
//! Evaluates three scenarios (a park of soil sensors, an indoor building,
//! a high-rate telemetry feed) and prints the ranked table for each.
//!
//! Run with: `cargo run --example compare_protocols`

use radiorank::{Comparison, Scenario};

fn main() {
    let scenarios = vec![
        (
            "Rural soil sensors: 1 msg/hour, long distances",
            Scenario::new(50, 24, 16, 3400, 10).unwrap(),
        ),
        (
            "Indoor building: 1 msg/10 min, short hops",
            Scenario::new(120, 144, 32, 2000, 15).unwrap(),
        ),
        (
            "Telemetry feed: 1 msg/3 min, large payloads",
            Scenario::new(10, 480, 256, 10_000, 25).unwrap(),
        ),
    ];

    for (label, scenario) in scenarios {
        println!(">>> {}\n", label);
        let comparison = Comparison::run(&scenario);
        println!("{}", comparison.report());

        let best = comparison.best().unwrap();
        println!(
            "Battery check: {} lasts {:.0} days on {} mAh\n",
            best.protocol,
            best.battery_days,
            scenario.battery_mah
        );
    }
}
