use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use float_ord::FloatOrd;
use log::debug;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use sssp_cost::prelude::*;
use thiserror::Error;

const SANS: &[u8] = include_bytes!("../resources/DejaVuSans.ttf");
const SANS_BOLD: &[u8] = include_bytes!("../resources/DejaVuSans-Bold.ttf");

const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const DARK_ORANGE: RGBColor = RGBColor(255, 140, 0);
const SEA_GREEN: RGBColor = RGBColor(46, 139, 87);
const CRIMSON: RGBColor = RGBColor(220, 20, 60);
const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Typographic points per inch; sizes below are given in points.
const POINTS_PER_INCH: f64 = 72.0;

#[derive(Error, Debug)]
pub(crate) enum ChartError {
    #[error("error while drawing chart: {0}")]
    Drawing(String),
    #[error("bundled font could not be parsed")]
    InvalidFont,
    #[error("no positive values to plot on a log scale")]
    NothingToPlot,
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(error.to_string())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub(crate) fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct ChartConfig {
    /// Figure width in inches.
    #[arg(long, default_value_t = 12.0)]
    pub(crate) width: f64,

    /// Figure height in inches.
    #[arg(long, default_value_t = 8.0)]
    pub(crate) height: f64,

    /// Resolution in dots per inch.
    #[arg(long, default_value_t = 600)]
    pub(crate) dpi: u32,

    /// Image format of the charts.
    #[arg(short, long, value_enum, default_value_t = ChartFormat::Png)]
    pub(crate) format: ChartFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 8.0,
            dpi: 600,
            format: ChartFormat::Png,
        }
    }
}

impl ChartConfig {
    pub(crate) fn pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi.max(1));
        let to_pixels = |inches: f64| ((inches * dpi).round() as u32).max(1);
        (to_pixels(self.width), to_pixels(self.height))
    }

    /// Converts a size in points to pixels at the configured resolution.
    fn points(&self, points: f64) -> u32 {
        let pixels = points * f64::from(self.dpi.max(1)) / POINTS_PER_INCH;
        (pixels.round() as u32).max(1)
    }

    fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            f64::from(self.points(points)),
            FontStyle::Normal,
        )
    }
}

enum Stroke {
    Solid,
    Dashed { dash: f64, gap: f64 },
}

/// Color, width in points and stroke pattern of an algorithm's line.
fn line(algorithm: Algorithm) -> (RGBColor, f64, Stroke) {
    match algorithm {
        Algorithm::Dijkstra => (ROYAL_BLUE, 2.0, Stroke::Solid),
        Algorithm::NewClassical => (DARK_ORANGE, 3.5, Stroke::Solid),
        Algorithm::GroverQuantum => (SEA_GREEN, 2.0, Stroke::Dashed { dash: 7.0, gap: 3.0 }),
        Algorithm::DivideAndConquerQuantum => {
            (CRIMSON, 3.5, Stroke::Dashed { dash: 1.5, gap: 4.0 })
        }
    }
}

/// Registers the bundled fonts on first use; later calls reuse the outcome.
fn register_fonts() -> Result<(), ChartError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let registered = *REGISTERED.get_or_init(|| {
        let family = FontFamily::SansSerif.as_str();
        register_font(family, FontStyle::Normal, SANS).is_ok()
            && register_font(family, FontStyle::Bold, SANS_BOLD).is_ok()
    });

    if registered {
        Ok(())
    } else {
        Err(ChartError::InvalidFont)
    }
}

/// Plots every cost series of the report as a log-log line chart.
pub(crate) fn render(
    report: &ScenarioReport,
    path: &Path,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    register_fonts()?;

    let size = config.pixels();
    debug!(
        "Rendering '{}' at {}x{} px to {}",
        report.name,
        size.0,
        size.1,
        path.display()
    );

    match config.format {
        ChartFormat::Png => draw(
            BitMapBackend::new(path, size).into_drawing_area(),
            report,
            config,
        ),
        ChartFormat::Svg => draw(
            SVGBackend::new(path, size).into_drawing_area(),
            report,
            config,
        ),
    }
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    report: &ScenarioReport,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let (x_range, y_range) = bounds(report).ok_or(ChartError::NothingToPlot)?;

    root.fill(&WHITE)?;

    let title = FontDesc::new(
        FontFamily::SansSerif,
        f64::from(config.points(16.0)),
        FontStyle::Bold,
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Cost Comparison for SSSP ({})", report.name), title)
        .margin(config.points(12.0))
        .x_label_area_size(config.points(36.0))
        .y_label_area_size(config.points(54.0))
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    let grid = config.points(0.5);

    chart
        .configure_mesh()
        .x_desc("Number of Vertices (n)")
        .y_desc("Theoretical Computational Cost (log scale)")
        .x_label_formatter(&|x: &f64| format!("{x:.0e}"))
        .y_label_formatter(&|y: &f64| format!("{y:.0e}"))
        .label_style(config.font(10.0))
        .axis_desc_style(config.font(12.0))
        .bold_line_style(GRAY.mix(0.6).stroke_width(grid))
        .light_line_style(GRAY.mix(0.2).stroke_width(grid))
        .draw()?;

    let legend_length = config.points(24.0) as i32;

    for series in &report.series {
        let (color, width, stroke) = line(series.algorithm);
        let style = color.stroke_width(config.points(width));

        let points = report
            .sizes
            .iter()
            .copied()
            .zip(series.costs.iter().copied())
            .filter(|&(n, cost)| n > 0.0 && cost > 0.0 && cost.is_finite())
            .collect::<Vec<_>>();

        let annotation = match stroke {
            Stroke::Solid => chart.draw_series(LineSeries::new(points, style))?,
            Stroke::Dashed { dash, gap } => chart.draw_series(DashedLineSeries::new(
                points,
                config.points(dash),
                config.points(gap),
                style,
            ))?,
        };

        annotation
            .label(series.algorithm.legend())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_length, y)], style));
    }

    chart
        .configure_series_labels()
        .label_font(config.font(11.0))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;

    Ok(())
}

/// The positive extent of the sweep and of all cost series.
fn bounds(report: &ScenarioReport) -> Option<(Range<f64>, Range<f64>)> {
    let positive = |v: &f64| *v > 0.0 && v.is_finite();

    let x = extent(report.sizes.iter().copied().filter(positive))?;
    let y = extent(
        report
            .series
            .iter()
            .flat_map(|s| s.costs.iter().copied())
            .filter(positive),
    )?;

    Some((x, y))
}

fn extent(values: impl Iterator<Item = f64> + Clone) -> Option<Range<f64>> {
    let min = values.clone().map(FloatOrd).min()?.0;
    let max = values.map(FloatOrd).max()?.0;

    if min < max {
        Some(min..max)
    } else {
        Some(min / 10.0..max * 10.0)
    }
}
