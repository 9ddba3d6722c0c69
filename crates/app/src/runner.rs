use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use super::*;

const BANNER_WIDTH: usize = 60;

/// Runs every scenario of `set`: prints its sample table to `out` and
/// renders its chart into `output_dir`. Returns the written chart paths.
pub(crate) fn run<W: Write>(
    out: &mut W,
    set: ScenarioSet,
    output_dir: &Path,
    chart_config: &ChartConfig,
) -> Result<Vec<PathBuf>, AppError> {
    let start = Instant::now();

    output::ensure_output_dir(output_dir)?;

    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{banner}\n{} START\n{banner}", set.title())?;

    let mut charts = vec![];

    for scenario in set.scenarios()? {
        let report = run_scenario(&scenario)?;

        writeln!(out, "\n--- SCENARIO: {} ---\n", report.name)?;
        writeln!(out, "Theoretical Costs ({}):", report.name)?;
        writeln!(out, "{}\n\n", table::render(&report.table()))?;

        let path = output::chart_path(output_dir, &report.chart_name, chart_config.format);
        let chart_start = Instant::now();
        chart::render(&report, &path, chart_config)?;
        info!(
            "Rendered chart for '{}' in {:?}",
            report.name,
            chart_start.elapsed()
        );

        writeln!(out, "Figure saved to: {}\n", path.display())?;
        charts.push(path);
    }

    writeln!(out, "{banner}\n{} COMPLETE\n{banner}", set.title())?;

    info!(
        "Finished {} scenarios in {:?}",
        charts.len(),
        start.elapsed()
    );

    Ok(charts)
}
