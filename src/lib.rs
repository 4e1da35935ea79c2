//! # Radiorank - IoT Protocol Trade-off Estimator
//!
//! A closed-form comparison of four IoT wireless protocols (WiFi, Zigbee,
//! LoRaWAN, NB-IoT) across daily energy consumption, latency, coverage and
//! battery life, under a user-chosen usage scenario.
//!
//! ## Key Properties
//!
//! - **Pure core**: one deterministic estimation function, no side effects
//! - **Validated boundary**: scenario parameters are range-checked up front
//! - **Ranked output**: results sorted ascending by daily consumption
//! - **Defined edges**: zero consumption means unbounded lifetime, never
//!   a division error
//!
//! ## Quick Start
//!
//! ```rust
//! use radiorank::{Comparison, Scenario};
//!
//! // 10 sensors, hourly 24-byte messages, 2000 mAh battery, 10% overhead
//! let scenario = Scenario::new(10, 24, 24, 2000, 10).unwrap();
//! let comparison = Comparison::run(&scenario);
//!
//! // Rows are ranked by daily consumption, lowest first
//! let best = comparison.best().unwrap();
//! assert!(best.daily_mah <= comparison.rows()[1].daily_mah);
//!
//! println!("{}", comparison.report());
//! ```
//!
//! ## Modules
//!
//! - [`protocol`]: Built-in protocol table and fixed radio parameters
//! - [`scenario`]: Bounded scenario parameters and JSON presets
//! - [`estimator`]: The closed-form energy/latency model
//! - [`comparison`]: Ranking and text report
//! - [`export`]: CSV export of the result table
//! - [`notes`]: Justification note persistence

// Modules
pub mod comparison;
pub mod error;
pub mod estimator;
pub mod export;
pub mod notes;
pub mod protocol;
pub mod scenario;

// Re-exports for convenient access
pub use comparison::Comparison;
pub use error::{ExportError, NoteError, RadiorankError, Result, ScenarioError};
pub use estimator::{estimate, Estimate};
pub use export::{read_csv, write_csv, TableRow, DEFAULT_CSV_FILENAME};
pub use notes::{NoteStore, DEFAULT_NOTE_FILENAME};
pub use protocol::{builtin_protocols, builtin_spec, Protocol, ProtocolSpec};
pub use scenario::{Scenario, DEFAULT_RX_RATIO};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
