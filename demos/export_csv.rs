//! CSV export and justification note example
//!
//! Runs the default scenario, writes the ranked table to
//! `protocol_comparison.csv`, saves a justification note, and re-reads
//! both artifacts to show the round trip.
//!
//! Run with: `cargo run --example export_csv`

use radiorank::{
    read_csv, write_csv, Comparison, NoteStore, Scenario, DEFAULT_CSV_FILENAME,
};

fn main() {
    let scenario = Scenario::default();
    let comparison = Comparison::run(&scenario);

    // Export the ranked table
    write_csv(&comparison, DEFAULT_CSV_FILENAME).expect("CSV export failed");
    println!("Wrote {}", DEFAULT_CSV_FILENAME);

    // Save the justification next to it
    let store = NoteStore::new(".");
    store
        .save("LoRaWAN: sensors report hourly and the site spans 8 km, nothing else reaches")
        .expect("note save failed");
    println!("Wrote {}", store.path().display());

    // Round trip
    let rows = read_csv(DEFAULT_CSV_FILENAME).expect("CSV re-read failed");
    println!("\nRe-read {} rows:", rows.len());
    for row in rows {
        println!(
            "  {:<10} {:>12.4} mAh/day  {:>10.1} ms",
            row.protocol, row.daily_mah, row.latency_ms
        );
    }

    let note = store.load().expect("note read failed").unwrap();
    println!("\nJustification: {}", note);
}
