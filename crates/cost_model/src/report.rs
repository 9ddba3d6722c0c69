use crate::cost::Algorithm;
use crate::scenario::SamplePoint;

/// Sample points laid out for tabular display: the first column is the
/// graph size, followed by one column per algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleTable {
    algorithms: Vec<Algorithm>,
    rows: Vec<SampleRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampleRow {
    pub size: f64,
    pub costs: Vec<f64>,
}

impl SampleTable {
    pub fn new(algorithms: Vec<Algorithm>, samples: &[SamplePoint]) -> Self {
        let rows = samples
            .iter()
            .map(|sample| SampleRow {
                size: sample.size,
                costs: algorithms
                    .iter()
                    .map(|&a| sample.cost(a).unwrap_or(f64::NAN))
                    .collect(),
            })
            .collect();

        Self { algorithms, rows }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        std::iter::once("n")
            .chain(self.algorithms.iter().map(Algorithm::name))
            .collect()
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_algorithm_order() {
        let sample = SamplePoint {
            index: 0,
            target: 1e3,
            size: 1e3,
            edges: 1e4,
            path_length: None,
            costs: vec![(Algorithm::GroverQuantum, 3.0), (Algorithm::Dijkstra, 1.0)],
        };

        let table = SampleTable::new(
            vec![Algorithm::Dijkstra, Algorithm::GroverQuantum],
            &[sample],
        );

        assert_eq!(table.headers(), vec!["n", "Dijkstra", "Grover SSSP"]);
        assert_eq!(
            table.rows(),
            &[SampleRow {
                size: 1e3,
                costs: vec![1.0, 3.0]
            }]
        );
    }

    #[test]
    fn empty_table() {
        let table = SampleTable::new(Algorithm::ALL.to_vec(), &[]);

        assert!(table.is_empty());
        assert_eq!(table.headers().len(), 5);
    }
}
