//! Closed-form operation-count estimates for SSSP algorithm families.
//!
//! Every estimator exists in two shapes: a scalar function evaluated for a
//! single `(n, m[, l])` tuple and a series function evaluated element-wise
//! over index-aligned slices. Series functions preserve input order.

use std::fmt::{self, Display};

/// The exponent applied to `log2(n)` by the new classical bound.
const LOG_EXPONENT: f64 = 2.0 / 3.0;

/// The SSSP algorithm families a cost can be estimated for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Dijkstra with a Fibonacci heap: `O(m + n log n)`.
    Dijkstra,
    /// Duan et al., deterministic classical: `O(m (log n)^(2/3))`.
    NewClassical,
    /// Grover-search based quantum SSSP: `O(sqrt(n) m)`.
    GroverQuantum,
    /// Wesolowski et al., divide & conquer quantum: `Õ(l sqrt(m))`.
    DivideAndConquerQuantum,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::NewClassical,
        Algorithm::GroverQuantum,
        Algorithm::DivideAndConquerQuantum,
    ];

    /// The algorithms that only need `n` and `m`.
    pub const CLASSIC_INPUTS: [Algorithm; 3] = [
        Algorithm::Dijkstra,
        Algorithm::NewClassical,
        Algorithm::GroverQuantum,
    ];

    /// Short name used as table column header.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::NewClassical => "Duan et al.",
            Algorithm::GroverQuantum => "Grover SSSP",
            Algorithm::DivideAndConquerQuantum => "Wesolowski et al.",
        }
    }

    /// Longer name used in chart legends.
    pub fn legend(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra (Classical Baseline)",
            Algorithm::NewClassical => "Duan et al. (New Classical)",
            Algorithm::GroverQuantum => "Grover SSSP (Quantum)",
            Algorithm::DivideAndConquerQuantum => "Wesolowski et al. (Quantum)",
        }
    }

    /// Returns `true` if the estimate depends on a path length.
    pub fn needs_path_length(&self) -> bool {
        matches!(self, Algorithm::DivideAndConquerQuantum)
    }

    /// Evaluates the estimate for a single tuple.
    ///
    /// Returns `None` if the algorithm needs a path length and `l` is not
    /// given.
    pub fn evaluate(&self, n: f64, m: f64, l: Option<f64>) -> Option<f64> {
        match self {
            Algorithm::Dijkstra => Some(dijkstra(n, m)),
            Algorithm::NewClassical => Some(new_classical(n, m)),
            Algorithm::GroverQuantum => Some(grover_quantum(n, m)),
            Algorithm::DivideAndConquerQuantum => l.map(|l| divide_and_conquer_quantum(m, l)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `log2(n)` with a negative-infinity result replaced by `0.0`.
///
/// `log2(0)` is the only input in the non-negative domain that yields
/// negative infinity. The substitution keeps it from leaking into
/// exponentiation and multiplication as `NaN` or `inf`.
#[inline]
pub fn guarded_log2(n: f64) -> f64 {
    let log = n.log2();
    if log == f64::NEG_INFINITY {
        0.0
    } else {
        log
    }
}

/// `m + n log2(n)`
#[inline]
pub fn dijkstra(n: f64, m: f64) -> f64 {
    m + n * n.log2()
}

/// `m (log2 n)^(2/3)`
#[inline]
pub fn new_classical(n: f64, m: f64) -> f64 {
    m * guarded_log2(n).powf(LOG_EXPONENT)
}

/// `sqrt(n) m`
#[inline]
pub fn grover_quantum(n: f64, m: f64) -> f64 {
    n.sqrt() * m
}

/// `l sqrt(m)`, the polylog factors hidden by `Õ` are ignored.
#[inline]
pub fn divide_and_conquer_quantum(m: f64, l: f64) -> f64 {
    l * m.sqrt()
}

pub fn dijkstra_cost(n: &[f64], m: &[f64]) -> Vec<f64> {
    zip_with(n, m, dijkstra)
}

pub fn new_classical_cost(n: &[f64], m: &[f64]) -> Vec<f64> {
    zip_with(n, m, new_classical)
}

pub fn grover_quantum_cost(n: &[f64], m: &[f64]) -> Vec<f64> {
    zip_with(n, m, grover_quantum)
}

/// `n` only fixes the alignment; the estimate itself ignores it.
pub fn divide_and_conquer_quantum_cost(n: &[f64], m: &[f64], l: &[f64]) -> Vec<f64> {
    debug_assert_eq!(n.len(), l.len());
    zip_with(m, l, divide_and_conquer_quantum)
}

fn zip_with(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(&a, &b)| f(a, b)).collect()
}
