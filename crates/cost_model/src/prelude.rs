pub use crate::cost::Algorithm;

pub use crate::report::SampleRow;
pub use crate::report::SampleTable;

pub use crate::scenario::nearest_index;
pub use crate::scenario::run_scenario;
pub use crate::scenario::sample_points;
pub use crate::scenario::CostSeries;
pub use crate::scenario::SamplePoint;
pub use crate::scenario::Scenario;
pub use crate::scenario::ScenarioReport;

pub use crate::scenarios::ScenarioSet;

pub use crate::sweep::log_space;
pub use crate::sweep::EdgeDensity;
pub use crate::sweep::PathLength;
pub use crate::sweep::SizeRange;

pub use crate::Error;
