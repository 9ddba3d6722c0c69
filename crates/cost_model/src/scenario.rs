use std::time::Instant;

use log::{debug, info};
use num_format::{Locale, ToFormattedString};

use crate::cost::{self, Algorithm};
use crate::report::SampleTable;
use crate::sweep::{log_space, EdgeDensity, PathLength, SizeRange};
use crate::Error;

/// Number of points in the sweeps of the predefined scenarios.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// A named parameter sweep over graph sizes together with the strategies
/// that derive edge counts and, optionally, path lengths from it.
///
/// ```
/// use sssp_cost::prelude::*;
///
/// let scenario = Scenario::new(
///     "Sparse Graph, Short Path",
///     SizeRange::new(3.0, 9.0).unwrap(),
///     100,
///     EdgeDensity::Sparse { factor: 10.0 },
/// )
/// .path_length(PathLength::LogSquared);
///
/// let report = run_scenario(&scenario).unwrap();
///
/// assert_eq!(report.sizes.len(), 100);
/// assert_eq!(report.series.len(), 4);
/// assert_eq!(report.samples.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Scenario {
    name: String,
    file_name: Option<String>,
    range: SizeRange,
    sample_count: usize,
    edge_density: EdgeDensity,
    path_length: Option<PathLength>,
    representative: Option<Vec<f64>>,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        range: SizeRange,
        sample_count: usize,
        edge_density: EdgeDensity,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            range,
            sample_count,
            edge_density,
            path_length: None,
            representative: None,
        }
    }

    /// Includes the divide & conquer quantum estimate, which needs a path
    /// length for every size in the sweep.
    pub fn path_length(mut self, path_length: PathLength) -> Self {
        self.path_length = Some(path_length);
        self
    }

    /// Overrides the sizes that are picked for the sample table.
    pub fn representative(mut self, sizes: &[f64]) -> Self {
        self.representative = Some(sizes.to_vec());
        self
    }

    /// Chart file name without extension.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> SizeRange {
        self.range
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn edge_density(&self) -> EdgeDensity {
        self.edge_density
    }

    pub fn path_length_fn(&self) -> Option<PathLength> {
        self.path_length
    }

    /// The configured chart file name, or one derived from the scenario name.
    pub fn chart_name(&self) -> String {
        match &self.file_name {
            Some(file_name) => file_name.clone(),
            None => slug(&self.name),
        }
    }

    /// The configured representative sizes, defaulting to the lower, middle
    /// and upper decade of the size range.
    pub fn representative_sizes(&self) -> Vec<f64> {
        match &self.representative {
            Some(sizes) => sizes.clone(),
            None => self.range.decades().to_vec(),
        }
    }

    /// The algorithms evaluated by this scenario, in reporting order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.path_length.is_some() {
            Algorithm::ALL.to_vec()
        } else {
            Algorithm::CLASSIC_INPUTS.to_vec()
        }
    }
}

/// The cost estimates of one algorithm, index-aligned with the size sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct CostSeries {
    pub algorithm: Algorithm,
    pub costs: Vec<f64>,
}

/// One representative point of a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePoint {
    /// Position in the sweep.
    pub index: usize,
    /// The requested representative size.
    pub target: f64,
    pub size: f64,
    pub edges: f64,
    pub path_length: Option<f64>,
    pub costs: Vec<(Algorithm, f64)>,
}

impl SamplePoint {
    pub fn cost(&self, algorithm: Algorithm) -> Option<f64> {
        self.costs
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, cost)| *cost)
    }
}

/// The full, aligned result of a scenario run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioReport {
    pub name: String,
    pub chart_name: String,
    pub sizes: Vec<f64>,
    pub edges: Vec<f64>,
    pub path_lengths: Option<Vec<f64>>,
    pub series: Vec<CostSeries>,
    pub samples: Vec<SamplePoint>,
}

impl ScenarioReport {
    pub fn labels(&self) -> Vec<&'static str> {
        self.series.iter().map(|s| s.algorithm.name()).collect()
    }

    pub fn series(&self, algorithm: Algorithm) -> Option<&CostSeries> {
        self.series.iter().find(|s| s.algorithm == algorithm)
    }

    pub fn table(&self) -> SampleTable {
        SampleTable::new(
            self.series.iter().map(|s| s.algorithm).collect(),
            &self.samples,
        )
    }
}

/// Evaluates every applicable cost estimate over the scenario's sweep and
/// picks the sample points for the representative sizes.
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioReport, Error> {
    let start = Instant::now();

    let sizes = log_space(scenario.range, scenario.sample_count)?;
    let edges = scenario.edge_density.derive(&sizes);
    let path_lengths = scenario.path_length.map(|p| p.derive(&sizes));

    let series = scenario
        .algorithms()
        .into_iter()
        .filter_map(|algorithm| {
            let costs = evaluate(algorithm, &sizes, &edges, path_lengths.as_deref())?;
            debug!("Evaluated {} over {} sizes", algorithm, costs.len());
            Some(CostSeries { algorithm, costs })
        })
        .collect::<Vec<_>>();

    let samples = sample_points(
        &sizes,
        &edges,
        path_lengths.as_deref(),
        &series,
        &scenario.representative_sizes(),
    )?;

    info!(
        "Evaluated scenario '{}' ({} sizes, {} series) in {:?}",
        scenario.name,
        sizes.len().to_formatted_string(&Locale::en),
        series.len(),
        start.elapsed()
    );

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        chart_name: scenario.chart_name(),
        sizes,
        edges,
        path_lengths,
        series,
        samples,
    })
}

fn evaluate(
    algorithm: Algorithm,
    sizes: &[f64],
    edges: &[f64],
    path_lengths: Option<&[f64]>,
) -> Option<Vec<f64>> {
    let costs = match algorithm {
        Algorithm::Dijkstra => cost::dijkstra_cost(sizes, edges),
        Algorithm::NewClassical => cost::new_classical_cost(sizes, edges),
        Algorithm::GroverQuantum => cost::grover_quantum_cost(sizes, edges),
        Algorithm::DivideAndConquerQuantum => {
            cost::divide_and_conquer_quantum_cost(sizes, edges, path_lengths?)
        }
    };
    Some(costs)
}

/// Returns the index of the value closest to `target`.
///
/// Ties resolve to the first occurrence. Returns `None` for an empty slice.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;

    for (index, value) in values.iter().enumerate() {
        let distance = (value - target).abs();
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((index, distance)),
        }
    }

    nearest.map(|(index, _)| index)
}

/// Picks one sample per representative size that lies within the sweep's
/// bounds; sizes outside `[min, max]` are skipped.
pub fn sample_points(
    sizes: &[f64],
    edges: &[f64],
    path_lengths: Option<&[f64]>,
    series: &[CostSeries],
    representative: &[f64],
) -> Result<Vec<SamplePoint>, Error> {
    let aligned = edges.len() == sizes.len()
        && path_lengths.map_or(true, |l| l.len() == sizes.len())
        && series.iter().all(|s| s.costs.len() == sizes.len());

    if !aligned {
        return Err(Error::MisalignedInput {
            expected: sizes.len(),
        });
    }

    let (min, max) = match (
        sizes.iter().copied().reduce(f64::min),
        sizes.iter().copied().reduce(f64::max),
    ) {
        (Some(min), Some(max)) => (min, max),
        _ => return Ok(Vec::new()),
    };

    let samples = representative
        .iter()
        .filter(|&&target| target >= min && target <= max)
        .filter_map(|&target| {
            let index = nearest_index(sizes, target)?;
            Some(SamplePoint {
                index,
                target,
                size: sizes[index],
                edges: edges[index],
                path_length: path_lengths.map(|l| l[index]),
                costs: series
                    .iter()
                    .map(|s| (s.algorithm, s.costs[index]))
                    .collect(),
            })
        })
        .collect();

    Ok(samples)
}

fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse() -> Scenario {
        Scenario::new(
            "Sparse Graphs, m=10n",
            SizeRange::new(3.0, 9.0).unwrap(),
            100,
            EdgeDensity::Sparse { factor: 10.0 },
        )
    }

    #[test]
    fn nearest_index_picks_minimum_distance() {
        let values = [1.0, 10.0, 100.0, 1000.0];

        assert_eq!(nearest_index(&values, 90.0), Some(2));
        assert_eq!(nearest_index(&values, 0.0), Some(0));
        assert_eq!(nearest_index(&values, 1e6), Some(3));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn nearest_index_ties_resolve_to_first() {
        assert_eq!(nearest_index(&[1.0, 3.0, 5.0], 2.0), Some(0));
        assert_eq!(nearest_index(&[4.0, 4.0, 4.0], 4.0), Some(0));
    }

    #[test]
    fn samples_outside_bounds_are_skipped() {
        let sizes = [1e3, 1e4, 1e5];
        let edges = [1.0, 2.0, 3.0];
        let series = vec![CostSeries {
            algorithm: Algorithm::Dijkstra,
            costs: vec![4.0, 5.0, 6.0],
        }];

        let samples = sample_points(&sizes, &edges, None, &series, &[1e2, 1.2e4, 1e12]).unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].index, 1);
        assert_eq!(samples[0].target, 1.2e4);
        assert_eq!(samples[0].size, 1e4);
        assert_eq!(samples[0].edges, 2.0);
        assert_eq!(samples[0].path_length, None);
        assert_eq!(samples[0].cost(Algorithm::Dijkstra), Some(5.0));
        assert_eq!(samples[0].cost(Algorithm::GroverQuantum), None);
    }

    #[test]
    fn misaligned_series_are_rejected() {
        let series = vec![CostSeries {
            algorithm: Algorithm::Dijkstra,
            costs: vec![4.0],
        }];

        let result = sample_points(&[1.0, 2.0], &[1.0, 2.0], None, &series, &[1.0]);

        assert!(matches!(result, Err(Error::MisalignedInput { expected: 2 })));
    }

    #[test]
    fn three_series_without_path_length() {
        let report = run_scenario(&sparse()).unwrap();

        assert_eq!(report.labels(), vec!["Dijkstra", "Duan et al.", "Grover SSSP"]);
        assert!(report.path_lengths.is_none());
        assert!(report.series(Algorithm::DivideAndConquerQuantum).is_none());
        for sample in &report.samples {
            assert_eq!(sample.costs.len(), 3);
        }
    }

    #[test]
    fn four_series_with_path_length() {
        let report = run_scenario(&sparse().path_length(PathLength::Linear { divisor: 10.0 })).unwrap();

        assert_eq!(report.series.len(), 4);
        assert_eq!(
            report.path_lengths.as_ref().map(Vec::len),
            Some(report.sizes.len())
        );
        assert_eq!(report.labels()[3], "Wesolowski et al.");
    }

    #[test]
    fn default_representative_sizes() {
        let report = run_scenario(&sparse()).unwrap();
        let sampled = report.samples.iter().map(|s| s.target).collect::<Vec<_>>();

        assert_eq!(sampled, vec![1e3, 1e6, 1e9]);
        assert_eq!(report.samples[0].size, 1e3);
        assert_eq!(report.samples[2].size, 1e9);
    }

    #[test]
    fn sample_is_nearest_sweep_element() {
        let report = run_scenario(&sparse().representative(&[1e6])).unwrap();
        let sample = &report.samples[0];

        let best = report
            .sizes
            .iter()
            .map(|n| (n - 1e6).abs())
            .fold(f64::INFINITY, f64::min);

        assert_eq!((sample.size - 1e6).abs(), best);
        assert_eq!(report.sizes[sample.index], sample.size);
    }

    #[test]
    fn representative_beyond_sweep_is_skipped() {
        let report = run_scenario(&sparse().representative(&[1e12])).unwrap();

        assert!(report.samples.is_empty());
    }

    #[test]
    fn degenerate_sizes_stay_finite() {
        let scenario = Scenario::new(
            "Tiny Graphs",
            SizeRange::new(0.0, 2.0).unwrap(),
            5,
            EdgeDensity::Sparse { factor: 10.0 },
        )
        .path_length(PathLength::LogSquared);

        let report = run_scenario(&scenario).unwrap();

        assert_eq!(report.sizes[0], 1.0);
        for series in &report.series {
            assert_eq!(series.costs.len(), 5);
            assert!(series.costs.iter().all(|c| c.is_finite() && *c >= 0.0));
        }
        assert_eq!(report.series(Algorithm::NewClassical).unwrap().costs[0], 0.0);
    }

    #[test]
    fn empty_sweep_fails() {
        let scenario = Scenario::new(
            "Nothing",
            SizeRange::new(3.0, 5.0).unwrap(),
            0,
            EdgeDensity::Sparse { factor: 10.0 },
        );

        assert!(matches!(run_scenario(&scenario), Err(Error::EmptySweep)));
    }

    #[test]
    fn chart_names() {
        assert_eq!(sparse().chart_name(), "sparse_graphs_m_10n");
        assert_eq!(
            sparse().file_name("sssp_comparison_sparse").chart_name(),
            "sssp_comparison_sparse"
        );
    }

    #[test]
    fn table_from_report() {
        let report = run_scenario(&sparse()).unwrap();
        let table = report.table();

        assert_eq!(table.headers(), vec!["n", "Dijkstra", "Duan et al.", "Grover SSSP"]);
        assert_eq!(table.rows().len(), 3);
    }
}
