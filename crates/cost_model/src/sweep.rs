use std::fmt::{self, Display};

use crate::Error;

/// A closed range of decimal exponents, `10^lower ..= 10^upper`.
///
/// Exponents are non-negative, so every size in a sweep is at least `1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeRange {
    lower: f64,
    upper: f64,
}

impl SizeRange {
    pub fn new(lower: f64, upper: f64) -> Result<Self, Error> {
        if !lower.is_finite() || !upper.is_finite() || lower < 0.0 || lower > upper {
            return Err(Error::InvalidSizeRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Lower, middle and upper decade of the range.
    pub fn decades(&self) -> [f64; 3] {
        let middle = (self.lower + self.upper) / 2.0;
        [
            10_f64.powf(self.lower),
            10_f64.powf(middle),
            10_f64.powf(self.upper),
        ]
    }
}

/// Returns `sample_count` values spaced evenly on a log scale between
/// `10^range.lower()` and `10^range.upper()`, both inclusive.
///
/// The last exponent is pinned to the upper bound, so the final element is
/// exactly `10^upper` rather than an accumulation of rounding errors.
pub fn log_space(range: SizeRange, sample_count: usize) -> Result<Vec<f64>, Error> {
    if sample_count == 0 {
        return Err(Error::EmptySweep);
    }

    let SizeRange { lower, upper } = range;

    if sample_count == 1 {
        return Ok(vec![10_f64.powf(lower)]);
    }

    let step = (upper - lower) / (sample_count - 1) as f64;
    let last = sample_count - 1;

    let sizes = (0..sample_count)
        .map(|i| if i == last { upper } else { lower + i as f64 * step })
        .map(|exponent| 10_f64.powf(exponent))
        .collect();

    Ok(sizes)
}

/// Derives the edge count `m` from the node count `n`.
#[derive(Copy, Clone, Debug)]
pub enum EdgeDensity {
    /// `m = factor * n`
    Sparse { factor: f64 },
    /// `m = n² / divisor`
    Dense { divisor: f64 },
    Custom(fn(f64) -> f64),
}

impl EdgeDensity {
    pub fn edge_count(&self, n: f64) -> f64 {
        match self {
            EdgeDensity::Sparse { factor } => factor * n,
            EdgeDensity::Dense { divisor } => n * n / divisor,
            EdgeDensity::Custom(f) => f(n),
        }
    }

    pub fn derive(&self, sizes: &[f64]) -> Vec<f64> {
        sizes.iter().map(|&n| self.edge_count(n)).collect()
    }
}

impl Display for EdgeDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDensity::Sparse { factor } => write!(f, "m={factor}n"),
            EdgeDensity::Dense { divisor } => write!(f, "m=n²/{divisor}"),
            EdgeDensity::Custom(_) => f.write_str("m=f(n)"),
        }
    }
}

/// Derives the shortest path length `l` from the node count `n`.
#[derive(Copy, Clone, Debug)]
pub enum PathLength {
    /// `l = (log2 n)²`
    LogSquared,
    /// `l = n / divisor`
    Linear { divisor: f64 },
    Custom(fn(f64) -> f64),
}

impl PathLength {
    pub fn path_length(&self, n: f64) -> f64 {
        match self {
            PathLength::LogSquared => n.log2().powi(2),
            PathLength::Linear { divisor } => n / divisor,
            PathLength::Custom(f) => f(n),
        }
    }

    pub fn derive(&self, sizes: &[f64]) -> Vec<f64> {
        sizes.iter().map(|&n| self.path_length(n)).collect()
    }
}

impl Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathLength::LogSquared => f.write_str("l=(log n)²"),
            PathLength::Linear { divisor } => write!(f, "l=n/{divisor}"),
            PathLength::Custom(_) => f.write_str("l=f(n)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_ranges() {
        assert!(SizeRange::new(3.0, 9.0).is_ok());
        assert!(SizeRange::new(5.0, 5.0).is_ok());
        assert!(matches!(
            SizeRange::new(9.0, 3.0),
            Err(Error::InvalidSizeRange { .. })
        ));
        assert!(SizeRange::new(f64::NAN, 3.0).is_err());
        assert!(SizeRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn sizes_below_one_are_rejected() {
        assert!(matches!(
            SizeRange::new(-1.0, 1.0),
            Err(Error::InvalidSizeRange { lower, upper }) if lower == -1.0 && upper == 1.0
        ));
        assert!(SizeRange::new(-0.5, -0.1).is_err());

        let sizes = log_space(SizeRange::new(0.0, 1.0).unwrap(), 5).unwrap();
        assert!(sizes.iter().all(|&n| n >= 1.0));
    }

    #[test]
    fn log_space_endpoints() {
        let range = SizeRange::new(3.0, 9.0).unwrap();
        let sizes = log_space(range, 100).unwrap();

        assert_eq!(sizes.len(), 100);
        assert_eq!(sizes[0], 1e3);
        assert_eq!(sizes[99], 1e9);
    }

    #[test]
    fn log_space_is_positive_and_non_decreasing() {
        for (lower, upper, count) in [(3.0, 9.0, 100), (3.0, 5.0, 100), (0.0, 3.0, 7), (2.0, 2.0, 4)] {
            let range = SizeRange::new(lower, upper).unwrap();
            let sizes = log_space(range, count).unwrap();

            assert_eq!(sizes.len(), count);
            assert!(sizes.iter().all(|&n| n > 0.0));
            assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn log_space_decades() {
        let range = SizeRange::new(0.0, 3.0).unwrap();
        let sizes = log_space(range, 4).unwrap();

        assert_eq!(sizes[0], 1.0);
        assert_eq!(sizes[3], 1000.0);
        assert!((sizes[1] - 10.0).abs() < 1e-9);
        assert!((sizes[2] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn log_space_single_and_empty() {
        let range = SizeRange::new(3.0, 5.0).unwrap();
        assert_eq!(log_space(range, 1).unwrap(), vec![1e3]);
        assert!(matches!(log_space(range, 0), Err(Error::EmptySweep)));
    }

    #[test]
    fn decades_follow_range() {
        assert_eq!(SizeRange::new(3.0, 9.0).unwrap().decades(), [1e3, 1e6, 1e9]);
        assert_eq!(SizeRange::new(3.0, 5.0).unwrap().decades(), [1e3, 1e4, 1e5]);
    }

    #[test]
    fn edge_densities() {
        let sizes = [1e3, 1e4];

        assert_eq!(EdgeDensity::Sparse { factor: 10.0 }.derive(&sizes), vec![1e4, 1e5]);
        assert_eq!(EdgeDensity::Dense { divisor: 100.0 }.derive(&sizes), vec![1e4, 1e6]);
        assert_eq!(EdgeDensity::Custom(|n| n - 1.0).derive(&sizes), vec![999.0, 9999.0]);
    }

    #[test]
    fn path_lengths() {
        let sizes = [1024.0, 1e3];

        let short = PathLength::LogSquared.derive(&sizes);
        assert_eq!(short[0], 100.0);
        assert!((short[1] - 1e3_f64.log2().powi(2)).abs() < 1e-12);

        assert_eq!(PathLength::Linear { divisor: 10.0 }.derive(&sizes), vec![102.4, 100.0]);
    }

    #[test]
    fn describe_strategies() {
        assert_eq!(EdgeDensity::Sparse { factor: 10.0 }.to_string(), "m=10n");
        assert_eq!(EdgeDensity::Dense { divisor: 100.0 }.to_string(), "m=n²/100");
        assert_eq!(PathLength::Linear { divisor: 10.0 }.to_string(), "l=n/10");
        assert_eq!(PathLength::LogSquared.to_string(), "l=(log n)²");
    }
}
