use crate::scenario::{Scenario, DEFAULT_SAMPLE_COUNT};
use crate::sweep::{EdgeDensity, PathLength, SizeRange};
use crate::Error;

const SPARSE: EdgeDensity = EdgeDensity::Sparse { factor: 10.0 };
const DENSE: EdgeDensity = EdgeDensity::Dense { divisor: 100.0 };
const SHORT_PATH: PathLength = PathLength::LogSquared;
const LONG_PATH: PathLength = PathLength::Linear { divisor: 10.0 };

/// Representative sizes for sweeps spanning `10^3 ..= 10^9`.
pub const WIDE_SAMPLES: [f64; 3] = [1e3, 1e6, 1e9];
/// Representative sizes for sweeps spanning `10^3 ..= 10^5`.
pub const NARROW_SAMPLES: [f64; 3] = [1e3, 1e4, 1e5];

/// The predefined groups of scenarios.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ScenarioSet {
    /// Sparse and dense graphs, classical and Grover estimates.
    Basic,
    /// Sparse and dense graphs with short and long paths, all estimates.
    Comprehensive,
}

impl ScenarioSet {
    /// Directory the charts of this set are written to by default.
    pub fn output_dir(&self) -> &'static str {
        match self {
            ScenarioSet::Basic => "figures",
            ScenarioSet::Comprehensive => "figures_v2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScenarioSet::Basic => "ANALYSIS",
            ScenarioSet::Comprehensive => "COMPREHENSIVE ANALYSIS",
        }
    }

    pub fn scenarios(&self) -> Result<Vec<Scenario>, Error> {
        match self {
            ScenarioSet::Basic => basic(),
            ScenarioSet::Comprehensive => comprehensive(),
        }
    }
}

fn wide() -> Result<SizeRange, Error> {
    SizeRange::new(3.0, 9.0)
}

fn narrow() -> Result<SizeRange, Error> {
    SizeRange::new(3.0, 5.0)
}

pub fn basic() -> Result<Vec<Scenario>, Error> {
    Ok(vec![
        Scenario::new("Sparse Graphs, m=10n", wide()?, DEFAULT_SAMPLE_COUNT, SPARSE)
            .representative(&WIDE_SAMPLES)
            .file_name("sssp_comparison_sparse"),
        Scenario::new("Dense Graphs, m=n²/100", narrow()?, DEFAULT_SAMPLE_COUNT, DENSE)
            .representative(&NARROW_SAMPLES)
            .file_name("sssp_comparison_dense"),
    ])
}

pub fn comprehensive() -> Result<Vec<Scenario>, Error> {
    let scenarios = [
        ("Sparse Graph, Short Path", "sparse_short_path", SPARSE, SHORT_PATH),
        ("Sparse Graph, Long Path", "sparse_long_path", SPARSE, LONG_PATH),
        ("Dense Graph, Short Path", "dense_short_path", DENSE, SHORT_PATH),
        ("Dense Graph, Long Path", "dense_long_path", DENSE, LONG_PATH),
    ];

    scenarios
        .into_iter()
        .map(|(name, file_name, edges, path)| -> Result<Scenario, Error> {
            let (range, samples) = match edges {
                EdgeDensity::Dense { .. } => (narrow()?, NARROW_SAMPLES),
                _ => (wide()?, WIDE_SAMPLES),
            };
            Ok(Scenario::new(name, range, DEFAULT_SAMPLE_COUNT, edges)
                .path_length(path)
                .representative(&samples)
                .file_name(file_name))
        })
        .collect()
}
