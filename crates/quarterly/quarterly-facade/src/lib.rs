//! Quarterly Analysis Facade
//!
//! High-level API for quarterly performance analysis. Re-exports all public
//! types from the quarterly stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use quarterly_facade::{compute_statistics, load_dataset, model_scenarios, project_trend};
//!
//! let dataset = load_dataset();
//! let stats = compute_statistics(&dataset).unwrap();
//! assert!((stats.mean - 73.35).abs() < 0.01);
//!
//! let projection = project_trend(&dataset, 4).unwrap();
//! assert_eq!(projection.len(), 4);
//!
//! let scenarios = model_scenarios(74.9, 4).unwrap();
//! assert!(scenarios.optimistic.iter().all(|&v| v <= 90.0));
//! ```

// Re-export everything from API (which includes SPI and core)
pub use quarterly_api::*;

// Explicit re-exports for documentation
pub use quarterly_api::prelude;

// Re-export core modules for direct access
pub use quarterly_core::{dataset, report, scenario, statistics, trend};

// Re-export SPI traits
pub use quarterly_spi::{DatasetProvider, ScenarioModeler, TrendProjector};
