//! Theoretical cost models for single-source shortest path (SSSP)
//! algorithms.
//!
//! The library evaluates closed-form operation-count estimates of four SSSP
//! algorithm families over a sweep of graph sizes. No graph is built or
//! traversed; every number is the value of a formula.
//!
//! | Algorithm                       | Estimate              |
//! |---------------------------------|-----------------------|
//! | Dijkstra (Fibonacci heap)       | `m + n log n`         |
//! | Duan et al. (new classical)     | `m (log n)^(2/3)`     |
//! | Grover based quantum SSSP       | `sqrt(n) m`           |
//! | Wesolowski et al. (D&C quantum) | `l sqrt(m)`           |
//!
//! # Scenarios
//!
//! A [`Scenario`](crate::scenario::Scenario) fixes a range of graph sizes,
//! the number of points in the sweep and the strategies that derive the
//! edge count `m` and, optionally, the shortest path length `l` from the
//! node count `n`. Running it produces one cost series per algorithm,
//! aligned index for index with the sweep, plus a handful of sample points
//! for tabular display.
//!
//! ```
//! use sssp_cost::prelude::*;
//!
//! let scenario = Scenario::new(
//!     "Dense Graphs",
//!     SizeRange::new(3.0, 5.0).unwrap(),
//!     100,
//!     EdgeDensity::Dense { divisor: 100.0 },
//! );
//!
//! let report = run_scenario(&scenario).unwrap();
//!
//! assert_eq!(report.labels(), vec!["Dijkstra", "Duan et al.", "Grover SSSP"]);
//!
//! assert_eq!(report.samples.len(), 3);
//! assert_eq!(report.samples[0].size, 1e3);
//! assert_eq!(report.samples[2].size, 1e5);
//! ```
//!
//! The two groups of scenarios the analysis binary runs are available as
//! [`ScenarioSet`](crate::scenarios::ScenarioSet).

pub mod cost;
pub mod prelude;
pub mod report;
pub mod scenario;
pub mod scenarios;
pub mod sweep;

pub use crate::scenario::run_scenario;
pub use crate::scenario::Scenario;
pub use crate::scenarios::ScenarioSet;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid size range, expected finite exponents with 0 <= lower <= upper, got {lower} and {upper}")]
    InvalidSizeRange { lower: f64, upper: f64 },
    #[error("a sweep needs at least one sample")]
    EmptySweep,
    #[error("input sequences must all have length {expected}")]
    MisalignedInput { expected: usize },
}
